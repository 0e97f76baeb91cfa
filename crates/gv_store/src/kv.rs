//! The key-value contract the core needs from its storage collaborator.
//!
//! Keys are game hashes; values are [`StoredMessage`] records. The ingestion
//! gate uses only `has_key` and `put`; the remaining operations exist for the
//! export/stats collaborators and administrative bulk clears.

use async_trait::async_trait;

use gv_proto::StoredMessage;

use crate::error::StoreError;

#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<StoredMessage>, StoreError>;

    /// Unconditional overwrite. Write-once discipline is the gate's job, not
    /// the store's; a backend with a native insert-if-absent can expose it by
    /// overriding this contract in its own API.
    async fn put(&self, key: &str, value: StoredMessage) -> Result<(), StoreError>;

    /// Point-in-time existence check against the durable backend, not a cache.
    async fn has_key(&self, key: &str) -> Result<bool, StoreError>;

    async fn list_keys(&self) -> Result<Vec<String>, StoreError>;

    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    // ── Derived bulk helpers ─────────────────────────────────────────────────

    /// Every stored record, in `list_keys` order. Keys listed but deleted
    /// mid-iteration are skipped.
    async fn get_all(&self) -> Result<Vec<StoredMessage>, StoreError> {
        let mut messages = Vec::new();
        for key in self.list_keys().await? {
            if let Some(msg) = self.get(&key).await? {
                messages.push(msg);
            }
        }
        Ok(messages)
    }

    /// Administrative bulk clear. Returns the deleted keys.
    async fn clear(&self) -> Result<Vec<String>, StoreError> {
        let keys = self.list_keys().await?;
        for key in &keys {
            self.delete(key).await?;
        }
        Ok(keys)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.list_keys().await?.len())
    }
}
