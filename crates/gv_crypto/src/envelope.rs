//! Envelope codec — AES-256-CBC under a passphrase-derived key.
//!
//! Token wire format (Base64, standard alphabet):
//!   [ IV (16 bytes) | ciphertext (PKCS#7-padded, n × 16 bytes) ]
//!
//! CBC with PKCS#7 carries no authentication tag, so tampering is detected
//! only through padding and UTF-8 validation. That matches the deployed wire
//! format and its threat model; an AEAD upgrade would change the format.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::RngCore;

use crate::error::CryptoError;
use crate::kdf::Passphrase;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

const IV_LEN: usize = 16;
const BLOCK_LEN: usize = 16;

/// Sentinel returned by [`decrypt_or_placeholder`] for undecryptable tokens.
pub const DECRYPTION_PLACEHOLDER: &str = "[DECRYPTION FAILED]";

/// Encrypt a UTF-8 payload into a self-contained Base64 token.
///
/// A fresh random IV is drawn per call, so encrypting the same payload twice
/// yields different tokens that decrypt to the same plaintext.
pub fn encrypt(plaintext: &str, passphrase: &Passphrase) -> String {
    let key = passphrase.derive_key();

    let mut iv = [0u8; IV_LEN];
    rand::rngs::OsRng.fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new(&key.0.into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    // Prepend IV
    let mut out = Vec::with_capacity(IV_LEN + ciphertext.len());
    out.extend_from_slice(&iv);
    out.extend_from_slice(&ciphertext);
    BASE64.encode(out)
}

/// Decrypt a token produced by [`encrypt`] with the same passphrase.
///
/// Fails closed: bad Base64, a truncated or misaligned token, an invalid pad
/// after decryption (wrong passphrase or corrupted ciphertext), and non-UTF-8
/// plaintext are all hard [`CryptoError`]s, never a garbage string.
pub fn decrypt(token: &str, passphrase: &Passphrase) -> Result<String, CryptoError> {
    let data = BASE64.decode(token.trim())?;

    if data.len() < IV_LEN + BLOCK_LEN {
        return Err(CryptoError::TokenTruncated { len: data.len() });
    }
    let (iv, ciphertext) = data.split_at(IV_LEN);
    if ciphertext.len() % BLOCK_LEN != 0 {
        return Err(CryptoError::BlockAlignment { len: ciphertext.len() });
    }

    let key = passphrase.derive_key();
    let iv: [u8; IV_LEN] = iv.try_into().expect("split_at yields exactly IV_LEN bytes");

    let plaintext = Aes256CbcDec::new(&key.0.into(), &iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::Decrypt)?;

    Ok(String::from_utf8(plaintext)?)
}

/// [`decrypt`], but any failure becomes [`DECRYPTION_PLACEHOLDER`].
///
/// For batch display sites (stats listings, export rows) where one bad record
/// must not abort the whole run. Not a separate algorithm.
pub fn decrypt_or_placeholder(token: &str, passphrase: &Passphrase) -> String {
    decrypt(token, passphrase).unwrap_or_else(|_| DECRYPTION_PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass(s: &str) -> Passphrase {
        Passphrase::new(s)
    }

    #[test]
    fn roundtrip_simple() {
        let token = encrypt("Hello secret world!", &pass("4tIsW53I0bmTWhGlvWtupPu8G2fx8Y2l"));
        let back = decrypt(&token, &pass("4tIsW53I0bmTWhGlvWtupPu8G2fx8Y2l")).unwrap();
        assert_eq!(back, "Hello secret world!");
    }

    #[test]
    fn roundtrip_empty_and_single_char() {
        for msg in ["", "x"] {
            let token = encrypt(msg, &pass("secret"));
            assert_eq!(decrypt(&token, &pass("secret")).unwrap(), msg);
        }
    }

    #[test]
    fn roundtrip_multibyte_unicode() {
        let msg = "καλημέρα 世界 🎲 — ñandú";
        let token = encrypt(msg, &pass("ключ"));
        assert_eq!(decrypt(&token, &pass("ключ")).unwrap(), msg);
    }

    #[test]
    fn roundtrip_multi_kilobyte() {
        let msg = "0123456789abcdef".repeat(1024); // 16 KiB
        let token = encrypt(&msg, &pass("secret"));
        assert_eq!(decrypt(&token, &pass("secret")).unwrap(), msg);
    }

    #[test]
    fn token_is_iv_plus_whole_blocks() {
        let token = encrypt("payload", &pass("secret"));
        let raw = BASE64.decode(token).unwrap();
        assert!(raw.len() >= IV_LEN + BLOCK_LEN);
        assert_eq!((raw.len() - IV_LEN) % BLOCK_LEN, 0);
    }

    #[test]
    fn fresh_iv_per_call_same_plaintext() {
        let a = encrypt("same message", &pass("secret"));
        let b = encrypt("same message", &pass("secret"));
        assert_ne!(a, b);
        assert_eq!(decrypt(&a, &pass("secret")).unwrap(), "same message");
        assert_eq!(decrypt(&b, &pass("secret")).unwrap(), "same message");
    }

    #[test]
    fn wrong_passphrase_fails_closed() {
        // Padding or UTF-8 validation must trip for a meaningful sample of
        // mismatched passphrases; a plausible-looking wrong string is a bug.
        let token = encrypt(r#"{"game_info":{"final_hash_of_game":"abc"}}"#, &pass("right"));
        for i in 0..32 {
            let wrong = pass(&format!("wrong-{i}"));
            assert!(decrypt(&token, &wrong).is_err(), "passphrase wrong-{i} decrypted");
        }
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        let p = pass("secret");
        assert!(matches!(
            decrypt("not/base64!!", &p),
            Err(CryptoError::Base64Decode(_))
        ));
        // Valid Base64 but shorter than IV + one block.
        assert!(matches!(
            decrypt(&BASE64.encode([0u8; 20]), &p),
            Err(CryptoError::TokenTruncated { len: 20 })
        ));
        // IV present but ciphertext not block-aligned.
        assert!(matches!(
            decrypt(&BASE64.encode([0u8; IV_LEN + 17]), &p),
            Err(CryptoError::BlockAlignment { len: 17 })
        ));
    }

    #[test]
    fn single_byte_flips_overwhelmingly_rejected() {
        use rand::Rng;

        // CBC+PKCS7 without a MAC cannot catch 100% of flips, but padding and
        // UTF-8 failures must dominate.
        let msg = r#"{"game_info":{"final_hash_of_game":"abc123","timestamp":1700000000,"game_seed":"seed42","winner":"red"}}"#
            .repeat(4);
        let p = pass("secret");
        let token = encrypt(&msg, &p);
        let raw = BASE64.decode(&token).unwrap();

        let mut rng = rand::thread_rng();
        let trials = 400;
        let mut rejected = 0;
        for _ in 0..trials {
            let mut flipped = raw.clone();
            // Flip within the ciphertext portion only; the IV just garbles
            // the first plaintext block.
            let pos = rng.gen_range(IV_LEN..flipped.len());
            let bit = 1u8 << rng.gen_range(0..8);
            flipped[pos] ^= bit;
            if decrypt(&BASE64.encode(&flipped), &p).is_err() {
                rejected += 1;
            }
        }
        assert!(
            rejected * 100 > trials * 99,
            "only {rejected}/{trials} flipped tokens rejected"
        );
    }

    #[test]
    fn placeholder_wrapper_swallows_failures() {
        let token = encrypt("visible", &pass("right"));
        assert_eq!(decrypt_or_placeholder(&token, &pass("right")), "visible");
        assert_eq!(
            decrypt_or_placeholder(&token, &pass("wrong")),
            DECRYPTION_PLACEHOLDER
        );
        assert_eq!(
            decrypt_or_placeholder("??not a token??", &pass("right")),
            DECRYPTION_PLACEHOLDER
        );
    }
}
