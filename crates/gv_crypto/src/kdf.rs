//! Key derivation — PBKDF2-HMAC-SHA256 from a user passphrase.
//!
//! The envelope scheme derives a fresh 256-bit AES key from the passphrase on
//! every encrypt/decrypt call; nothing is cached between calls.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Application-fixed KDF salt, shared by every envelope ever produced.
///
/// KNOWN WEAKNESS: a fixed salt means equal passphrases derive equal keys
/// across all users and messages. The deployed wire format depends on this
/// exact value; changing it invalidates every stored envelope.
pub const KDF_SALT: &[u8] = b"some-random-salt";

/// PBKDF2 iteration count. Matches the deployed wire format.
pub const KDF_ITERATIONS: u32 = 100_000;

/// 32-byte AES key derived from a passphrase. Zeroized on drop.
#[derive(ZeroizeOnDrop)]
pub struct EnvelopeKey(pub(crate) [u8; 32]);

/// The shared secret the transport resolves once per request and threads
/// through codec and ingestion calls. Never stored by the core between calls.
///
/// `Debug` is redacted so the passphrase cannot leak through error context
/// or log formatting.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Passphrase(String);

impl Passphrase {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Derive the 256-bit envelope key for one encrypt/decrypt operation.
    pub fn derive_key(&self) -> EnvelopeKey {
        let mut key = [0u8; 32];
        pbkdf2_hmac::<Sha256>(self.0.as_bytes(), KDF_SALT, KDF_ITERATIONS, &mut key);
        EnvelopeKey(key)
    }
}

impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Passphrase(<redacted>)")
    }
}

impl From<&str> for Passphrase {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}
