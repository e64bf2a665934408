//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Home page (hot deals carousel)
//! GET  /partials/hot-deals        - Carousel track fragment
//! GET  /about                     - Team, milestones, values
//! GET  /faq                       - FAQ with category/search filters
//! GET  /privacy                   - Privacy policy (markdown)
//! GET  /terms                     - Terms of service (markdown)
//! GET  /shipping                  - Shipping options + policy (markdown)
//!
//! # Forms (POST routes are rate limited)
//! GET  /contact                   - Contact form
//! POST /contact                   - Submit contact form
//! POST /contact/reset             - Back to a blank form
//! GET  /forgot-password           - Current reset step
//! POST /forgot-password/email     - Step 1: request a code
//! POST /forgot-password/code      - Step 2: verify or resend the code
//! POST /forgot-password/reset     - Step 3: choose a new password
//! POST /forgot-password/restart   - Start over
//! GET  /track-order               - Track order (lookup when ?orderId= given)
//! POST /track-order               - Lookup by form
//!
//! # Collections
//! GET  /collections               - Category index
//! GET  /collections/{category}    - Filtered, sorted, paginated products
//! ```

pub mod about;
pub mod collections;
pub mod contact;
pub mod faq;
pub mod home;
pub mod pages;
pub mod password;
pub mod query;
pub mod track_order;


use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::form_rate_limiter;
use crate::state::AppState;

/// Create the collection routes router.
pub fn collection_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(collections::index))
        .route("/{category}", get(collections::show))
}

/// Create the form submission routes, sharing one rate limiter.
pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact::submit))
        .route("/contact/reset", post(contact::reset))
        .route("/forgot-password/email", post(password::submit_email))
        .route("/forgot-password/code", post(password::submit_code))
        .route("/forgot-password/reset", post(password::submit_reset))
        .route("/forgot-password/restart", post(password::restart))
        .route("/track-order", post(track_order::submit))
        .layer(form_rate_limiter())
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/partials/hot-deals", get(home::hot_deals))
        .route("/about", get(about::about))
        .route("/faq", get(faq::faq))
        .route("/privacy", get(pages::privacy))
        .route("/terms", get(pages::terms))
        .route("/shipping", get(pages::shipping))
        .route("/contact", get(contact::show))
        .route("/forgot-password", get(password::show))
        .route("/track-order", get(track_order::show))
        .nest("/collections", collection_routes())
        .merge(form_routes())
}
