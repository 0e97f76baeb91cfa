//! Ingestion gate — at-most-once storage per game hash.
//!
//! Pipeline: envelope token → decrypt → parse/validate → existence check →
//! conditional store. A duplicate hash is an expected outcome, not an error.
//!
//! # Race window
//! `has_key` followed by `put` is NOT atomic. Two concurrent ingestions of
//! the same never-seen hash can both observe "absent" and both write; the
//! second write wins (the backend is an overwriting key-value put). Distinct
//! game sessions have distinct hashes, so the window only matters for a
//! duplicate submission racing itself, and both writers carry the same
//! record. A backend with a native insert-if-absent primitive can close the
//! window; this gate does not paper over it.

use tracing::{debug, info};

use gv_crypto::{CryptoError, Passphrase};
use gv_proto::{GameReport, Provenance, RecordError, StoredMessage};

use crate::error::StoreError;
use crate::kv::MessageStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// First sighting of this hash; the record is now durable.
    Stored(String),
    /// The hash was already present. Nothing written, nothing mutated.
    AlreadyExists(String),
}

impl IngestOutcome {
    pub fn game_hash(&self) -> &str {
        match self {
            Self::Stored(hash) | Self::AlreadyExists(hash) => hash,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error(transparent)]
    Decryption(#[from] CryptoError),

    #[error(transparent)]
    MalformedRecord(#[from] RecordError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Ingest an already-decrypted report.
///
/// Performs exactly one existence check and, for a new hash, exactly one
/// write. Never retries, never deletes. `raw_envelope` is stored verbatim so
/// the export collaborator can decrypt it later; the decrypted payload itself
/// is never written to the store.
pub async fn ingest<S>(
    store: &S,
    report: &GameReport,
    winner_hint: Option<&str>,
    provenance: Provenance,
    raw_envelope: &str,
) -> Result<IngestOutcome, IngestError>
where
    S: MessageStore + ?Sized,
{
    let game_hash = report.game_hash();
    if game_hash.is_empty() {
        // Reports built by hand can bypass GameReport::parse.
        return Err(RecordError::EmptyGameHash.into());
    }
    let winner = report.resolve_winner(winner_hint)?;

    if store.has_key(game_hash).await? {
        debug!(game_hash, "duplicate submission, nothing stored");
        return Ok(IngestOutcome::AlreadyExists(game_hash.to_string()));
    }

    let message = StoredMessage {
        user_id: provenance.user_id,
        chat_id: provenance.chat_id,
        timestamp: report.game_info.timestamp,
        encrypted_message: raw_envelope.to_string(),
        game_hash: game_hash.to_string(),
        game_seed: report.game_info.game_seed.clone(),
        winner,
    };
    store.put(game_hash, message).await?;

    info!(game_hash, user_id = provenance.user_id, "stored new game report");
    Ok(IngestOutcome::Stored(game_hash.to_string()))
}

/// Full pipeline: decrypt the token, parse the report, ingest it.
///
/// The passphrase is resolved by the transport once per request and used here
/// for the single decrypt call; nothing is cached.
pub async fn ingest_envelope<S>(
    store: &S,
    passphrase: &Passphrase,
    token: &str,
    winner_hint: Option<&str>,
    provenance: Provenance,
) -> Result<IngestOutcome, IngestError>
where
    S: MessageStore + ?Sized,
{
    let plaintext = gv_crypto::decrypt(token, passphrase)?;
    let report = GameReport::parse(&plaintext)?;
    ingest(store, &report, winner_hint, provenance, token).await
}
