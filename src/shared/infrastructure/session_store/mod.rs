// Session state (selected location, auth token).
//
// Lifecycle
// - Loaded once at startup, optionally seeded from configuration.
// - Cleared on logout.
//
// Boundaries
// - Inbound adapters and session use cases read and write the selected location.
// - Backend adapters only read the auth token for their outbound calls.
// - Slot generation and service-area resolution receive plain values instead.

pub mod in_memory;

use async_trait::async_trait;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    SelectedLocationId,
    AuthToken,
}

impl SessionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::SelectedLocationId => "selected_location_id",
            SessionKey::AuthToken => "auth_token",
        }
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: SessionKey) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: SessionKey, value: String) -> anyhow::Result<()>;
    async fn clear(&self) -> anyhow::Result<()>;
}

/// Token to present to the platform backend, if any. An unreadable store counts as logged out.
pub async fn current_auth_token(store: &dyn SessionStore) -> Option<String> {
    store
        .get(SessionKey::AuthToken)
        .await
        .unwrap_or_else(|error| {
            warn!(%error, "session unavailable, calling the backend without a token");
            None
        })
}
