//! gv_store — Message store contract and ingestion gate for Gamevault
//!
//! # Storage strategy
//! The durable backend is a collaborator behind the [`MessageStore`] trait
//! (a hosted key-value namespace in production). This crate owns only the
//! contract the core needs — point lookups, existence checks, and overwriting
//! puts — plus an in-memory reference store for tests and embedders without
//! a durable backend.
//!
//! Records are keyed by game hash and written at most once per key; the gate
//! in [`gate`] enforces that.
//!
//! # Modules
//! - `kv`     — the `MessageStore` trait and derived bulk helpers
//! - `memory` — in-memory reference implementation
//! - `gate`   — decrypt → parse → dedupe → store pipeline
//! - `error`  — store-side error type

pub mod error;
pub mod gate;
pub mod kv;
pub mod memory;

pub use error::StoreError;
pub use gate::{ingest, ingest_envelope, IngestError, IngestOutcome};
pub use kv::MessageStore;
pub use memory::MemoryStore;
