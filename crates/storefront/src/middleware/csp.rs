//! Per-request CSP nonce.
//!
//! Every page carries its section reveal delays in a `<style nonce="...">`
//! block (inline `style` attributes are refused by the policy), so each
//! request gets a fresh nonce that both the template and the
//! `Content-Security-Policy` header read from the request extensions.

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;

/// Random bytes per nonce.
const NONCE_BYTES: usize = 16;

/// A CSP nonce for the page's inline `<style>` block.
///
/// Encoded as unpadded URL-safe base64 so the value renders verbatim in an
/// HTML attribute without escaping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CspNonce(pub String);

impl CspNonce {
    /// Generate a new random nonce.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; NONCE_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// The nonce as a CSP source expression, or `None` when missing.
    #[must_use]
    pub fn source(&self) -> Option<String> {
        (!self.0.is_empty()).then(|| format!("'nonce-{}'", self.0))
    }
}

/// Store a fresh [`CspNonce`] in the request extensions.
///
/// Must wrap `security_headers_middleware` so the header and the rendered
/// page agree on the value.
pub async fn csp_nonce_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(CspNonce::generate());
    next.run(request).await
}

/// Page handlers take the nonce as an argument and hand it to `PageShell`.
///
/// A missing nonce yields an empty value; the page still renders but the
/// browser drops its reveal timings.
impl<S> FromRequestParts<S> for CspNonce
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Self>().cloned().unwrap_or_else(|| {
            tracing::warn!("no CSP nonce on request; is csp_nonce_middleware installed?");
            Self(String::new())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonces_are_unique() {
        assert_ne!(CspNonce::generate(), CspNonce::generate());
    }

    #[test]
    fn test_nonce_needs_no_html_escaping() {
        let nonce = CspNonce::generate();
        // 16 bytes -> 22 unpadded base64 chars
        assert_eq!(nonce.value().len(), 22);
        assert!(
            nonce
                .value()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
        assert!(URL_SAFE_NO_PAD.decode(nonce.value()).is_ok());
    }

    #[test]
    fn test_source_expression() {
        assert_eq!(
            CspNonce("abc".to_string()).source().as_deref(),
            Some("'nonce-abc'")
        );
        assert_eq!(CspNonce(String::new()).source(), None);
    }
}
