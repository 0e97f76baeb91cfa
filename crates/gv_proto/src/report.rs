//! Decrypted game report — the JSON object recovered from an envelope.
//!
//! Shape checks happen here, at the parse boundary, so a missing field is a
//! typed [`RecordError`] instead of a failure deep inside ingestion.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Report is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Report has no game hash (game_info.final_hash_of_game)")]
    MissingGameHash,

    #[error("Report has an empty game hash")]
    EmptyGameHash,

    #[error("No winner in the report and none supplied by the caller")]
    MissingWinner,
}

/// The `game_info` object every report must carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameInfo {
    /// Content identifier; doubles as the storage key for deduplication.
    pub final_hash_of_game: String,
    /// Seconds since epoch, set by the game client.
    pub timestamp: i64,
    pub game_seed: String,
    /// Some producers embed the winner here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

/// A full decrypted report. The winner may sit inside `game_info`, beside it
/// at the top level, or be supplied in cleartext by the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameReport {
    pub game_info: GameInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

impl GameReport {
    /// Parse decrypted plaintext and validate the required fields.
    pub fn parse(plaintext: &str) -> Result<Self, RecordError> {
        // serde surfaces an absent game_info/final_hash_of_game as a JSON
        // error already; the explicit checks below catch the empty string
        // and JSON nulls that deserialize to defaults.
        let report: GameReport = serde_json::from_str(plaintext)?;
        if report.game_info.final_hash_of_game.is_empty() {
            return Err(RecordError::EmptyGameHash);
        }
        Ok(report)
    }

    pub fn game_hash(&self) -> &str {
        &self.game_info.final_hash_of_game
    }

    /// Winner precedence: embedded in `game_info`, then top-level, then the
    /// caller's cleartext hint. All three absent is a malformed record.
    pub fn resolve_winner(&self, hint: Option<&str>) -> Result<String, RecordError> {
        self.game_info
            .winner
            .as_deref()
            .or(self.winner.as_deref())
            .or(hint)
            .map(str::to_owned)
            .ok_or(RecordError::MissingWinner)
    }
}
