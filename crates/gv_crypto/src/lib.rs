//! gv_crypto — Gamevault envelope encryption primitives
//!
//! # Design principles
//! - NO custom crypto; all primitives come from RustCrypto crates.
//! - Zeroize the passphrase and derived key on drop.
//! - Decryption fails closed: a token that does not round-trip cleanly is an
//!   error, never a best-effort string.
//!
//! # Module layout
//! - `envelope` — encrypt/decrypt a UTF-8 payload to/from a Base64 token
//! - `kdf`      — PBKDF2-HMAC-SHA256 key derivation from a passphrase
//! - `error`    — unified error type

pub mod envelope;
pub mod error;
pub mod kdf;

pub use envelope::{decrypt, decrypt_or_placeholder, encrypt, DECRYPTION_PLACEHOLDER};
pub use error::CryptoError;
pub use kdf::Passphrase;
