//! Per-message key derivation using HKDF-SHA256.
//!
//! Every encryption draws a fresh random salt; HKDF-SHA256 then expands
//! the shared key + salt into an AES-256 key and a CBC IV.  The same
//! shared key and salt always reproduce the same key/IV pair, which is
//! what lets `decrypt` work from the salt embedded in the ciphertext.

use hkdf::Hkdf;
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::errors::{PassVaultError, Result};

/// Length of the per-message salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived AES-256 key in bytes.
pub const KEY_LEN: usize = 32;

/// Length of the derived CBC initialization vector in bytes.
pub const IV_LEN: usize = 16;

/// HKDF context string binding derived material to this format.
const HKDF_INFO: &[u8] = b"passvault-cipher-v1";

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| PassVaultError::KeyDerivationFailed(format!("OS RNG failure: {e}")))?;
    Ok(salt)
}

/// Derive an AES-256 key and a CBC IV from the shared key and a salt.
///
/// The salt is used as the HKDF salt, so each message gets independent
/// key material even though the shared key never changes.
pub fn derive_message_key(
    shared_key: &[u8],
    salt: &[u8],
) -> Result<([u8; KEY_LEN], [u8; IV_LEN])> {
    let hk = Hkdf::<Sha256>::new(Some(salt), shared_key);

    let mut okm = [0u8; KEY_LEN + IV_LEN];
    hk.expand(HKDF_INFO, &mut okm)
        .map_err(|e| PassVaultError::KeyDerivationFailed(format!("HKDF expand failed: {e}")))?;

    let mut key = [0u8; KEY_LEN];
    let mut iv = [0u8; IV_LEN];
    key.copy_from_slice(&okm[..KEY_LEN]);
    iv.copy_from_slice(&okm[KEY_LEN..]);
    okm.zeroize();

    Ok((key, iv))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_inputs_same_key_and_iv() {
        let salt = [7u8; SALT_LEN];
        let (k1, iv1) = derive_message_key(b"shared-key", &salt).unwrap();
        let (k2, iv2) = derive_message_key(b"shared-key", &salt).unwrap();
        assert_eq!(k1, k2);
        assert_eq!(iv1, iv2);
    }

    #[test]
    fn different_salts_different_keys() {
        let (k1, _) = derive_message_key(b"shared-key", &[1u8; SALT_LEN]).unwrap();
        let (k2, _) = derive_message_key(b"shared-key", &[2u8; SALT_LEN]).unwrap();
        assert_ne!(k1, k2);
    }

    #[test]
    fn different_shared_keys_different_keys() {
        let salt = [9u8; SALT_LEN];
        let (k1, _) = derive_message_key(b"key-one", &salt).unwrap();
        let (k2, _) = derive_message_key(b"key-two", &salt).unwrap();
        assert_ne!(k1, k2);
    }

    #[test]
    fn generate_salt_produces_distinct_values() {
        let s1 = generate_salt().unwrap();
        let s2 = generate_salt().unwrap();
        assert_ne!(s1, s2);
    }
}
