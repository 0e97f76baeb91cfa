use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("Token too short: {len} bytes (need IV + at least one cipher block)")]
    TokenTruncated { len: usize },

    #[error("Ciphertext length {len} is not a multiple of the cipher block size")]
    BlockAlignment { len: usize },

    #[error("Decryption failed (wrong passphrase or corrupted ciphertext)")]
    Decrypt,

    #[error("Decrypted bytes are not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
