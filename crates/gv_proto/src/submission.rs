//! Inbound chat-line splitting.
//!
//! The bot accepts either a bare envelope token or
//! `"<token> , <winner>"` — the cleartext winner covers producers that do not
//! embed one in the encrypted report. Splitting happens in the transport
//! layer before decryption; the winner part is only a hint and loses to a
//! winner found inside the report.

/// An inbound chat line, split into the envelope token and an optional
/// cleartext winner hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub envelope: String,
    pub winner_hint: Option<String>,
}

impl Submission {
    /// Split on the first comma. Base64 tokens never contain commas, so a
    /// comma always separates token from winner.
    pub fn parse_text(line: &str) -> Self {
        match line.split_once(',') {
            Some((token, winner)) => {
                let winner = winner.trim();
                Self {
                    envelope: token.trim().to_string(),
                    winner_hint: (!winner.is_empty()).then(|| winner.to_string()),
                }
            }
            None => Self {
                envelope: line.trim().to_string(),
                winner_hint: None,
            },
        }
    }
}
