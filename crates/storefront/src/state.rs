//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::content::{ContentError, ContentStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    content: ContentStore,
}

impl AppState {
    /// Create a new application state, loading markdown pages from the
    /// configured content directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the content directory cannot be read.
    pub fn new(config: StorefrontConfig) -> Result<Self, ContentError> {
        let content = ContentStore::load(&config.content_dir)?;
        tracing::info!(pages = content.len(), "Content loaded");

        Ok(Self {
            inner: Arc::new(AppStateInner { config, content }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the loaded content pages.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }
}
