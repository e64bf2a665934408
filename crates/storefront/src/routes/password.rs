//! Forgot password route handlers.
//!
//! The four-step reset flow (`email -> sent -> reset -> success`) is kept in
//! the visitor's session. Each step posts to its own endpoint; a submission
//! for a step the visitor is not on is rejected inline without moving.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use atelier_core::forms::{ForgotPassword, FormError, MIN_PASSWORD_LENGTH, RESET_CODE_LENGTH};

use crate::error::Result;
use crate::filters;
use crate::middleware::CspNonce;
use crate::shell::PageShell;
use crate::state::AppState;

/// Session key holding the reset flow.
pub const SESSION_KEY: &str = "forgot_password";

/// Forgot password page template.
#[derive(Template, WebTemplate)]
#[template(path = "forgot_password.html")]
pub struct ForgotPasswordTemplate {
    pub shell: PageShell,
    /// `email`, `sent`, `reset` or `success`
    pub step: &'static str,
    /// Masked address the code was sent to.
    pub sent_to: Option<String>,
    /// Last value typed into the email field.
    pub email_input: String,
    pub error: Option<String>,
    pub notice: Option<&'static str>,
    pub code_length: usize,
    pub min_password_length: usize,
}

impl ForgotPasswordTemplate {
    fn new(nonce: &CspNonce, flow: &ForgotPassword) -> Self {
        Self {
            shell: PageShell::new("Forgot Password", nonce)
                .describe("Reset your account password."),
            step: flow.step().as_str(),
            sent_to: flow.email().map(atelier_core::Email::masked),
            email_input: String::new(),
            error: None,
            notice: None,
            code_length: RESET_CODE_LENGTH,
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }

    fn with_error(mut self, error: &FormError) -> Response {
        self.error = Some(error.to_string());
        (StatusCode::UNPROCESSABLE_ENTITY, self).into_response()
    }
}

async fn load(session: &Session) -> Result<ForgotPassword> {
    Ok(session
        .get::<ForgotPassword>(SESSION_KEY)
        .await?
        .unwrap_or_default())
}

async fn save(session: &Session, flow: &ForgotPassword) -> Result<()> {
    session.insert(SESSION_KEY, flow).await?;
    Ok(())
}

/// Display the current step.
///
/// # Errors
///
/// Returns an error if the session store fails.
#[instrument(skip(session, nonce))]
pub async fn show(session: Session, nonce: CspNonce) -> Result<ForgotPasswordTemplate> {
    let flow = load(&session).await?;
    Ok(ForgotPasswordTemplate::new(&nonce, &flow))
}

#[derive(Debug, Deserialize)]
pub struct EmailForm {
    #[serde(default)]
    pub email: String,
}

/// Step 1: request a reset code.
///
/// # Errors
///
/// Returns an error if the session store fails.
#[instrument(skip(state, session, nonce, form))]
pub async fn submit_email(
    State(state): State<AppState>,
    session: Session,
    nonce: CspNonce,
    Form(form): Form<EmailForm>,
) -> Result<Response> {
    let mut flow = load(&session).await?;

    if let Err(e) = flow.submit_email(&form.email) {
        let mut page = ForgotPasswordTemplate::new(&nonce, &flow);
        page.email_input = form.email;
        return Ok(page.with_error(&e));
    }

    tokio::time::sleep(state.config().latency.password).await;
    save(&session, &flow).await?;
    tracing::info!("Password reset code requested");

    Ok(ForgotPasswordTemplate::new(&nonce, &flow).into_response())
}

/// What the code step's button asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeAction {
    #[default]
    Verify,
    Resend,
}

#[derive(Debug, Deserialize)]
pub struct CodeForm {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub action: CodeAction,
}

/// Step 2: verify the code, or ask for a new one.
///
/// # Errors
///
/// Returns an error if the session store fails.
#[instrument(skip(session, nonce, form), fields(action = ?form.action))]
pub async fn submit_code(
    session: Session,
    nonce: CspNonce,
    Form(form): Form<CodeForm>,
) -> Result<Response> {
    let mut flow = load(&session).await?;

    let result = match form.action {
        CodeAction::Verify => flow.verify_code(&form.code),
        CodeAction::Resend => flow.resend(),
    };
    if let Err(e) = result {
        return Ok(ForgotPasswordTemplate::new(&nonce, &flow).with_error(&e));
    }

    save(&session, &flow).await?;

    let mut page = ForgotPasswordTemplate::new(&nonce, &flow);
    if form.action == CodeAction::Resend {
        page.notice = Some("A new code is on its way.");
    }
    Ok(page.into_response())
}

#[derive(Debug, Deserialize)]
pub struct ResetForm {
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm: String,
}

/// Step 3: set the new password.
///
/// # Errors
///
/// Returns an error if the session store fails.
#[instrument(skip(state, session, nonce, form))]
pub async fn submit_reset(
    State(state): State<AppState>,
    session: Session,
    nonce: CspNonce,
    Form(form): Form<ResetForm>,
) -> Result<Response> {
    let mut flow = load(&session).await?;

    if let Err(e) = flow.reset_password(&form.password, &form.confirm) {
        return Ok(ForgotPasswordTemplate::new(&nonce, &flow).with_error(&e));
    }

    tokio::time::sleep(state.config().latency.password).await;
    save(&session, &flow).await?;
    tracing::info!("Password reset completed");

    Ok(ForgotPasswordTemplate::new(&nonce, &flow).into_response())
}

/// Start the flow over from the email step.
///
/// # Errors
///
/// Returns an error if the session store fails.
#[instrument(skip(session, nonce))]
pub async fn restart(session: Session, nonce: CspNonce) -> Result<ForgotPasswordTemplate> {
    let mut flow = load(&session).await?;
    flow.restart();
    save(&session, &flow).await?;
    Ok(ForgotPasswordTemplate::new(&nonce, &flow))
}
