//! Static content page route handlers.
//!
//! Serves the markdown-based policy pages and the not-found page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use tracing::instrument;

use atelier_core::company::{self, ShippingOption};

use crate::content::Page;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::CspNonce;
use crate::shell::PageShell;
use crate::state::AppState;

/// Content page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/content.html")]
pub struct ContentPageTemplate {
    pub shell: PageShell,
    pub updated_at: Option<String>,
    pub content_html: String,
}

/// Shipping option row for the rates table.
#[derive(Debug, Clone)]
pub struct ShippingRow {
    pub name: &'static str,
    pub delivery: &'static str,
    pub price: String,
    pub free_over: Option<String>,
}

impl From<&ShippingOption> for ShippingRow {
    fn from(option: &ShippingOption) -> Self {
        Self {
            name: option.name,
            delivery: option.delivery,
            price: option.price().display(),
            free_over: option.free_over().map(|p| p.display()),
        }
    }
}

/// Shipping page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/shipping.html")]
pub struct ShippingTemplate {
    pub shell: PageShell,
    pub options: Vec<ShippingRow>,
    pub updated_at: Option<String>,
    pub content_html: String,
}

/// Not found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub shell: PageShell,
    pub path: String,
}

fn find_page<'a>(state: &'a AppState, slug: &str) -> Result<&'a Page> {
    state
        .content()
        .get_page(slug)
        .ok_or_else(|| AppError::NotFound(format!("page {slug}")))
}

fn format_updated(page: &Page) -> Option<String> {
    page.meta
        .updated_at
        .map(|date| date.format("%B %-d, %Y").to_string())
}

/// Serve a content page by slug.
fn serve_content_page(state: &AppState, nonce: &CspNonce, slug: &str) -> Result<ContentPageTemplate> {
    let page = find_page(state, slug)?;

    Ok(ContentPageTemplate {
        shell: PageShell::new(page.meta.title.clone(), nonce)
            .describe(page.meta.description.clone().unwrap_or_default()),
        updated_at: format_updated(page),
        content_html: page.content_html.clone(),
    })
}

/// Display the Privacy Policy page.
///
/// # Errors
///
/// Returns 404 if the page doesn't exist.
#[instrument(skip(state, nonce))]
pub async fn privacy(
    State(state): State<AppState>,
    nonce: CspNonce,
) -> Result<ContentPageTemplate> {
    serve_content_page(&state, &nonce, "privacy")
}

/// Display the Terms of Service page.
///
/// # Errors
///
/// Returns 404 if the page doesn't exist.
#[instrument(skip(state, nonce))]
pub async fn terms(State(state): State<AppState>, nonce: CspNonce) -> Result<ContentPageTemplate> {
    serve_content_page(&state, &nonce, "terms")
}

/// Display the Shipping page: the rates table followed by the policy text.
///
/// The rates come from the static shipping table; the policy prose is
/// optional and omitted when `shipping.md` is absent.
#[instrument(skip(state, nonce))]
pub async fn shipping(State(state): State<AppState>, nonce: CspNonce) -> ShippingTemplate {
    let page = state.content().get_page("shipping");

    ShippingTemplate {
        shell: PageShell::new("Shipping", &nonce)
            .describe("Delivery options, rates and timelines."),
        options: company::SHIPPING_OPTIONS
            .iter()
            .map(ShippingRow::from)
            .collect(),
        updated_at: page.and_then(format_updated),
        content_html: page.map(|p| p.content_html.clone()).unwrap_or_default(),
    }
}

/// Fallback for unknown routes.
#[instrument(skip(nonce))]
pub async fn not_found(nonce: CspNonce, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            shell: PageShell::new("Page Not Found", &nonce),
            path: uri.path().to_string(),
        },
    )
}
