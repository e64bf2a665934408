//! Contact form route handlers.
//!
//! A valid submission moves the form `Idle -> Sending`, waits the configured
//! send delay, then renders `Sent`. Nothing leaves the server.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use atelier_core::forms::{ContactFlow, ContactForm, ContactStatus, ContactSubject};

use crate::error::add_breadcrumb;
use crate::filters;
use crate::middleware::CspNonce;
use crate::shell::PageShell;
use crate::state::AppState;

/// Subject dropdown entry.
#[derive(Debug, Clone)]
pub struct SubjectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

fn subject_options(selected: ContactSubject) -> Vec<SubjectOption> {
    ContactSubject::ALL
        .iter()
        .map(|subject| SubjectOption {
            value: subject.as_str(),
            label: subject.label(),
            selected: *subject == selected,
        })
        .collect()
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub shell: PageShell,
    /// `idle` or `sent`
    pub status: &'static str,
    pub form: ContactForm,
    pub subjects: Vec<SubjectOption>,
    pub error: Option<String>,
    /// First name of the sender, shown in the confirmation.
    pub sender: String,
}

impl ContactTemplate {
    fn new(nonce: &CspNonce, status: ContactStatus, form: ContactForm) -> Self {
        let subject = ContactSubject::parse(&form.subject);
        Self {
            shell: PageShell::new("Contact Us", nonce)
                .describe("Questions about an order, wholesale or press? Get in touch."),
            status: status.as_str(),
            subjects: subject_options(subject),
            form,
            error: None,
            sender: String::new(),
        }
    }
}

/// Display a blank contact form.
#[instrument(skip(nonce))]
pub async fn show(nonce: CspNonce) -> ContactTemplate {
    ContactTemplate::new(&nonce, ContactStatus::Idle, ContactForm::default())
}

/// Submit the contact form.
///
/// Validation failures re-render the form with its values and an inline
/// message (422). A valid message is "sent" after the simulated delay.
#[instrument(skip(state, nonce, form), fields(subject = %form.subject))]
pub async fn submit(
    State(state): State<AppState>,
    nonce: CspNonce,
    Form(form): Form<ContactForm>,
) -> Response {
    let mut flow = ContactFlow::default();

    let message = match flow.submit(&form) {
        Ok(message) => message,
        Err(e) => {
            tracing::debug!(error = %e, "Contact form rejected");
            let mut page = ContactTemplate::new(&nonce, flow.status(), form);
            page.error = Some(e.to_string());
            return (StatusCode::UNPROCESSABLE_ENTITY, page).into_response();
        }
    };

    tokio::time::sleep(state.config().latency.contact).await;
    flow.complete();

    tracing::info!(
        subject = message.subject.as_str(),
        email = %message.email.masked(),
        "Contact message received"
    );
    add_breadcrumb(
        "contact",
        "Contact form sent",
        Some(&[("subject", message.subject.as_str())]),
    );

    let mut page = ContactTemplate::new(&nonce, flow.status(), ContactForm::default());
    page.sender = message
        .name
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();
    page.into_response()
}

/// "Send another message": back to a blank, idle form.
#[instrument]
pub async fn reset() -> Redirect {
    Redirect::to("/contact")
}
