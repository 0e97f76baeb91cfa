//! Durable stored record and submission provenance.

use serde::{Deserialize, Serialize};

/// Who submitted an envelope — chat-platform user and chat IDs, handed in by
/// the transport alongside the raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub user_id: i64,
    pub chat_id: i64,
}

/// The record stored under the game hash. Write-once: for a fixed `game_hash`
/// at most one `StoredMessage` ever exists, created on first ingestion and
/// never mutated afterwards.
///
/// Serialized with the deployed store's camelCase field names so existing
/// records read back unchanged.
///
/// `encrypted_message` keeps the original envelope token — never the
/// decrypted payload; the store is not a place for plaintext secrets. The
/// export collaborator decrypts on read with the ingestion-time passphrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMessage {
    pub user_id: i64,
    pub chat_id: i64,
    /// Seconds since epoch, from the report's `game_info.timestamp`.
    pub timestamp: i64,
    pub encrypted_message: String,
    pub game_hash: String,
    pub game_seed: String,
    pub winner: String,
}
