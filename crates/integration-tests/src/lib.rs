//! End-to-end tests for the Atelier storefront.
//!
//! Each test starts its own server on an ephemeral port with the simulated
//! delays switched off, then talks to it over real HTTP with `reqwest`.
//!
//! ```bash
//! cargo test -p atelier-integration-tests
//! ```

use std::net::SocketAddr;

use atelier_storefront::config::{ConfigError, SimulatedLatency, StorefrontConfig};
use atelier_storefront::state::AppState;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A storefront running in the background for the duration of a test.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    /// Bind `127.0.0.1:0` and serve the full application.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be configured or bound.
    #[allow(clippy::expect_used)]
    pub async fn spawn() -> Self {
        let config = test_config().expect("test configuration is valid");
        let state = AppState::new(config).expect("bundled content loads");
        let app = atelier_storefront::app(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("listener has an address");

        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let shutdown = async {
                let _ = rx.await;
            };
            let _ = atelier_storefront::serve(listener, app, shutdown).await;
        });

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("build HTTP client");

        Self {
            addr,
            client,
            shutdown: Some(tx),
        }
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Configuration pointing at the storefront's bundled content with every
/// simulated delay set to zero.
///
/// # Errors
///
/// Returns an error if the built-in values fail to parse.
pub fn test_config() -> Result<StorefrontConfig, ConfigError> {
    let storefront_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront");
    StorefrontConfig::from_lookup(|key| {
        let value = match key {
            "ATELIER_BASE_URL" => "http://127.0.0.1".to_string(),
            "ATELIER_CONTENT_DIR" => format!("{storefront_dir}/content"),
            "ATELIER_STATIC_DIR" => format!("{storefront_dir}/static"),
            _ => return None,
        };
        Some(value)
    })
    .map(|mut config| {
        config.latency = SimulatedLatency::none();
        config
    })
}
