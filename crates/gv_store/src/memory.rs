//! In-memory reference store.
//!
//! Values are kept as JSON strings, the way the hosted KV namespace stores
//! them, so the serialisation path is exercised even in tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use gv_proto::StoredMessage;

use crate::error::StoreError;
use crate::kv::MessageStore;

/// Thread-safe in-memory store. Cheap to clone (Arc internally).
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<StoredMessage>, StoreError> {
        let guard = self.inner.read().await;
        match guard.get(key) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, value: StoredMessage) -> Result<(), StoreError> {
        let json = serde_json::to_string(&value)?;
        self.inner.write().await.insert(key.to_string(), json);
        Ok(())
    }

    async fn has_key(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.inner.read().await.contains_key(key))
    }

    async fn list_keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.inner.read().await.keys().cloned().collect())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.inner.write().await.remove(key);
        Ok(())
    }
}
