//! Session middleware configuration.
//!
//! Sessions only carry the forgot-password step, so they live in an
//! in-process moka cache; restarting the server simply sends visitors back
//! to step one. moka evicts each record at its expiry date and caps the
//! number of live sessions, so abandoned resets do not pile up.

use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_moka_store::MokaStore;

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "atelier_session";

/// Session expiry time in seconds (30 minutes of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 30 * 60;

/// Most sessions held at once; the least recently used go first.
const MAX_SESSIONS: u64 = 10_000;

/// Create the in-process session store.
#[must_use]
pub fn session_store() -> MokaStore {
    MokaStore::new(Some(MAX_SESSIONS))
}

/// Create the session layer backed by [`session_store`].
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MokaStore> {
    SessionManagerLayer::new(session_store())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
