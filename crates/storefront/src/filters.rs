//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Public URL of a file under `static/`.
///
/// `css/main.css` and `js/site.js` resolve to the content-hashed copies that
/// `build.rs` writes into `derived/`; other paths are served as-is.
///
/// Usage in templates: `{{ "css/main.css"|asset }}`
#[askama::filter_fn]
pub fn asset(path: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let path = path.to_string();
    let hash = match path.as_str() {
        "css/main.css" => env!("CSS_HASH"),
        "js/site.js" => env!("JS_HASH"),
        _ => "",
    };
    Ok(hashed_url(&path, hash))
}

/// An empty hash (asset missing at build time) falls back to the plain path.
fn hashed_url(path: &str, hash: &str) -> String {
    if hash.is_empty() {
        return format!("/static/{path}");
    }
    let (dir, file) = path.rsplit_once('/').unwrap_or(("", path));
    let (stem, ext) = file.rsplit_once('.').unwrap_or((file, ""));
    if dir.is_empty() {
        format!("/static/derived/{stem}.{hash}.{ext}")
    } else {
        format!("/static/{dir}/derived/{stem}.{hash}.{ext}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashed_url() {
        assert_eq!(
            hashed_url("css/main.css", "1a2b3c4d"),
            "/static/css/derived/main.1a2b3c4d.css"
        );
        assert_eq!(
            hashed_url("js/site.js", "deadbeef"),
            "/static/js/derived/site.deadbeef.js"
        );
    }

    #[test]
    fn test_unhashed_assets_keep_their_path() {
        assert_eq!(
            hashed_url("images/banners/default.jpg", ""),
            "/static/images/banners/default.jpg"
        );
    }
}
