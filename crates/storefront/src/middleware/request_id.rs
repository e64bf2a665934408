//! Request ID middleware for log and error correlation.
//!
//! A well-formed `x-request-id` from an upstream proxy is kept; anything else
//! is replaced with a UUID v4. The ID is recorded on the request span, tagged
//! on the Sentry scope and echoed in the response.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream ID accepted as-is.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Use `incoming` when it is a short, printable ASCII token.
fn accept_or_generate(incoming: Option<&str>) -> String {
    incoming
        .map(str::trim)
        .filter(|id| {
            !id.is_empty()
                && id.len() <= MAX_REQUEST_ID_LEN
                && id.bytes().all(|b| b.is_ascii_graphic())
        })
        .map_or_else(|| Uuid::new_v4().to_string(), String::from)
}

pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = accept_or_generate(
        request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok()),
    );

    // Declared empty on the span built in `lib::app`
    Span::current().record("request_id", &request_id);
    sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_id_is_kept() {
        assert_eq!(accept_or_generate(Some("edge-7f3a")), "edge-7f3a");
    }

    #[test]
    fn test_malformed_ids_are_replaced() {
        let long = "a".repeat(MAX_REQUEST_ID_LEN + 1);
        for incoming in [None, Some(""), Some("has space"), Some(long.as_str())] {
            let id = accept_or_generate(incoming);
            assert!(Uuid::parse_str(&id).is_ok(), "{incoming:?}");
        }
    }
}
