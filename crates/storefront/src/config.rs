//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ATELIER_BASE_URL` - Public URL for the storefront
//!
//! ## Optional
//! - `ATELIER_HOST` - Bind address (default: 127.0.0.1)
//! - `ATELIER_PORT` - Listen port (default: 3000)
//! - `ATELIER_CONTENT_DIR` - Markdown pages (default: crates/storefront/content)
//! - `ATELIER_STATIC_DIR` - Static assets (default: crates/storefront/static)
//! - `ATELIER_CONTACT_DELAY_MS` - Simulated contact send time (default: 1500)
//! - `ATELIER_PASSWORD_DELAY_MS` - Simulated password reset time (default: 1500)
//! - `ATELIER_TRACK_ORDER_DELAY_MS` - Simulated order lookup time (default: 1000)
//! - `ATELIER_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Artificial latency applied to form submissions, standing in for the
/// network round trip of a real backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    pub contact: Duration,
    pub password: Duration,
    pub track_order: Duration,
}

impl SimulatedLatency {
    /// No delays at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            contact: Duration::ZERO,
            password: Duration::ZERO,
            track_order: Duration::ZERO,
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self {
            contact: Duration::from_millis(1500),
            password: Duration::from_millis(1500),
            track_order: Duration::from_millis(1000),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: Url,
    /// Directory holding markdown content pages
    pub content_dir: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Simulated network delays
    pub latency: SimulatedLatency,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Env(&lookup);

        let host = env.parsed::<IpAddr>("ATELIER_HOST", "127.0.0.1")?;
        let port = env.parsed::<u16>("ATELIER_PORT", "3000")?;
        let base_url = env.required("ATELIER_BASE_URL")?;
        let base_url = Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("ATELIER_BASE_URL".to_string(), e.to_string()))?;

        let latency = SimulatedLatency {
            contact: env.millis("ATELIER_CONTACT_DELAY_MS", 1500)?,
            password: env.millis("ATELIER_PASSWORD_DELAY_MS", 1500)?,
            track_order: env.millis("ATELIER_TRACK_ORDER_DELAY_MS", 1000)?,
        };

        let log_format = match env.or_default("ATELIER_LOG_FORMAT", "pretty").as_str() {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "ATELIER_LOG_FORMAT".to_string(),
                    format!("expected 'pretty' or 'json', got '{other}'"),
                ));
            }
        };

        Ok(Self {
            host,
            port,
            base_url,
            content_dir: PathBuf::from(
                env.or_default("ATELIER_CONTENT_DIR", "crates/storefront/content"),
            ),
            static_dir: PathBuf::from(
                env.or_default("ATELIER_STATIC_DIR", "crates/storefront/static"),
            ),
            latency,
            log_format,
            sentry_dsn: env.optional("SENTRY_DSN"),
            sentry_environment: env.optional("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: env.parsed("SENTRY_SAMPLE_RATE", "1.0")?,
            sentry_traces_sample_rate: env.parsed("SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the site is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.scheme() == "https"
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Typed accessors over a variable lookup function.
struct Env<'a, F: Fn(&str) -> Option<String>>(&'a F);

impl<F: Fn(&str) -> Option<String>> Env<'_, F> {
    /// Get a required variable.
    fn required(&self, key: &str) -> Result<String, ConfigError> {
        (self.0)(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
    }

    /// Get an optional variable; empty values count as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.is_empty())
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }

    /// Parse a variable (or its default) with `FromStr`.
    fn parsed<T>(&self, key: &str, default: &str) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.or_default(key, default)
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    }

    /// Parse a millisecond count into a `Duration`.
    fn millis(&self, key: &str, default: u64) -> Result<Duration, ConfigError> {
        self.parsed::<u64>(key, &default.to_string())
            .map(Duration::from_millis)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("ATELIER_BASE_URL", "http://localhost:3000")]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.latency, SimulatedLatency::default());
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.content_dir, PathBuf::from("crates/storefront/content"));
        assert!(config.sentry_dsn.is_none());
        assert!(!config.is_secure());
    }

    #[test]
    fn test_missing_base_url() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref k) if k == "ATELIER_BASE_URL"));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = load(&[("ATELIER_BASE_URL", "not a url")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref k, _) if k == "ATELIER_BASE_URL"));
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[
            ("ATELIER_BASE_URL", "http://localhost:3000"),
            ("ATELIER_PORT", "99999"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref k, _) if k == "ATELIER_PORT"));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("ATELIER_BASE_URL", "https://shop.example.com"),
            ("ATELIER_HOST", "0.0.0.0"),
            ("ATELIER_PORT", "8080"),
            ("ATELIER_CONTACT_DELAY_MS", "0"),
            ("ATELIER_TRACK_ORDER_DELAY_MS", "250"),
            ("ATELIER_LOG_FORMAT", "json"),
            ("SENTRY_DSN", "https://key@sentry.example.com/1"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().port(), 8080);
        assert_eq!(config.latency.contact, Duration::ZERO);
        assert_eq!(config.latency.track_order, Duration::from_millis(250));
        assert_eq!(config.latency.password, Duration::from_millis(1500));
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.sentry_dsn.is_some());
        assert!(config.is_secure());
    }

    #[test]
    fn test_bad_log_format() {
        let err = load(&[
            ("ATELIER_BASE_URL", "http://localhost:3000"),
            ("ATELIER_LOG_FORMAT", "xml"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("ATELIER_LOG_FORMAT"));
    }

    #[test]
    fn test_empty_optional_is_unset() {
        let config = load(&[
            ("ATELIER_BASE_URL", "http://localhost:3000"),
            ("SENTRY_DSN", ""),
        ])
        .unwrap();
        assert!(config.sentry_dsn.is_none());
    }
}
