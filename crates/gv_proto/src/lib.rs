//! gv_proto — Record and wire types for Gamevault
//!
//! The two formats this crate owns are the only persisted/transmitted shapes
//! in the system: the decrypted JSON report and the stored message record.
//! Both are versionless JSON; field names match the deployed store.
//!
//! # Modules
//! - `report`     — decrypted game report, validated at the parse boundary
//! - `message`    — durable stored record + submission provenance
//! - `submission` — inbound chat-line splitting (token + cleartext winner)

pub mod message;
pub mod report;
pub mod submission;

pub use message::{Provenance, StoredMessage};
pub use report::{GameInfo, GameReport, RecordError};
pub use submission::Submission;
