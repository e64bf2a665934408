//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`, capture errors)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (record unique ID on the span)
//! 4. CSP nonce (generate per-request nonce for inline styles)
//! 5. Security headers (nonce-bearing CSP, HSTS, etc.)
//! 6. Session layer (tower-sessions with in-memory store)
//! 7. Rate limiting (governor, form POST routes only)

pub mod csp;
pub mod rate_limit;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use csp::{CspNonce, csp_nonce_middleware};
pub use rate_limit::form_rate_limiter;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
