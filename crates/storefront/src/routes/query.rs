//! Lenient query string fields.
//!
//! Page, product and carousel parameters end up in shared links, so a
//! mangled value (`?page=`, `?page=abc`, `?deal=-1`) falls back to the
//! field's default instead of rejecting the whole request with a 400.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Deserialize an optional number, treating empty or unparseable input as `None`.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.and_then(|s| s.trim().parse().ok()))
}

/// Deserialize a number, falling back to `T::default()`.
pub fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    lenient(deserializer).map(Option::unwrap_or_default)
}

/// Deserialize a checkbox-style flag: `true`, `1` and `on` are set.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.is_some_and(|s| {
        matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "on" | "yes"
        )
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{extract::Query, http::Uri};

    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "lenient")]
        page: Option<usize>,
        #[serde(default, deserialize_with = "lenient_or_default")]
        index: usize,
        #[serde(default, deserialize_with = "flag")]
        paused: bool,
    }

    fn parse(query: &str) -> Params {
        let uri: Uri = format!("/?{query}").parse().unwrap();
        Query::<Params>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn test_valid_values() {
        let params = parse("page=3&index=2&paused=true");
        assert_eq!(params.page, Some(3));
        assert_eq!(params.index, 2);
        assert!(params.paused);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let params = parse("page=abc&index=-1&paused=maybe");
        assert_eq!(params.page, None);
        assert_eq!(params.index, 0);
        assert!(!params.paused);

        let params = parse("page=&index=");
        assert_eq!(params.page, None);
        assert_eq!(params.index, 0);
    }

    #[test]
    fn test_missing_values_use_defaults() {
        let params = parse("");
        assert_eq!(params.page, None);
        assert_eq!(params.index, 0);
        assert!(!params.paused);
    }

    #[test]
    fn test_flag_spellings() {
        assert!(parse("paused=1").paused);
        assert!(parse("paused=on").paused);
        assert!(parse("paused=TRUE").paused);
        assert!(!parse("paused=0").paused);
        assert!(!parse("paused=false").paused);
    }
}
