use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::shared::infrastructure::session_store::{SessionKey, SessionStore};

#[derive(Default)]
pub struct InMemorySessionStore {
    values: RwLock<HashMap<SessionKey, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding `seed`, as done once at startup.
    pub fn load(seed: impl IntoIterator<Item = (SessionKey, String)>) -> Self {
        Self {
            values: RwLock::new(seed.into_iter().collect()),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: SessionKey) -> anyhow::Result<Option<String>> {
        Ok(self.values.read().await.get(&key).cloned())
    }

    async fn set(&self, key: SessionKey, value: String) -> anyhow::Result<()> {
        debug!(key = key.as_str(), "session value set");
        self.values.write().await.insert(key, value);
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        debug!("session cleared");
        self.values.write().await.clear();
        Ok(())
    }
}
