//! AES-256-CBC secret encryption under a single shared key.
//!
//! Each call to `encrypt` generates a fresh random 16-byte salt, derives
//! a per-message key and IV from the shared key + salt, and prepends a
//! format-version byte and the salt to the ciphertext.  `decrypt` splits
//! them back out and re-derives the same key.
//!
//! Layout of the returned byte buffer:
//!   [ 1-byte version | 16-byte salt | CBC ciphertext (PKCS7 padded) ]
//!
//! There is no authentication tag: corruption or a wrong key is detected
//! only when unpadding fails or the recovered bytes are not valid UTF-8.
//! Callers depend on that throw-on-corruption behavior, so the format is
//! kept as-is; an authenticated format would take the next version byte.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use zeroize::{Zeroize, Zeroizing};

use crate::errors::{PassVaultError, Result};

use super::kdf::{derive_message_key, generate_salt, SALT_LEN};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Current ciphertext format version (acts as a key-version tag).
const FORMAT_VERSION: u8 = 1;

/// AES block size in bytes; every ciphertext is a multiple of this.
const BLOCK_LEN: usize = 16;

/// Symmetric engine encrypting and decrypting stored secrets.
///
/// The shared key is injected at construction and held in
/// zeroize-on-drop memory.  Encryption is non-deterministic (fresh salt
/// per call); decryption of any blob produced by the same key is
/// deterministic.
pub struct CipherEngine {
    shared_key: Zeroizing<Vec<u8>>,
}

impl CipherEngine {
    /// Create an engine from the externally supplied shared key.
    pub fn new(shared_key: &str) -> Self {
        Self {
            shared_key: Zeroizing::new(shared_key.as_bytes().to_vec()),
        }
    }

    /// Encrypt `plaintext`, returning the versioned salt-prefixed blob.
    pub fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>> {
        let salt = generate_salt()?;
        let (mut key, mut iv) = derive_message_key(&self.shared_key, &salt)?;

        let cipher = Aes256CbcEnc::new_from_slices(&key, &iv)
            .map_err(|e| PassVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;
        let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

        key.zeroize();
        iv.zeroize();

        let mut output = Vec::with_capacity(1 + SALT_LEN + ciphertext.len());
        output.push(FORMAT_VERSION);
        output.extend_from_slice(&salt);
        output.extend_from_slice(&ciphertext);
        Ok(output)
    }

    /// Decrypt a blob that was produced by `encrypt`.
    ///
    /// Fails with `DecryptionFailed` on a short or unversioned blob, on
    /// a padding error (wrong key or corruption), or when the recovered
    /// bytes are not valid UTF-8.
    pub fn decrypt(&self, blob: &[u8]) -> Result<String> {
        // Minimum: version byte + salt + one cipher block.
        if blob.len() < 1 + SALT_LEN + BLOCK_LEN {
            return Err(PassVaultError::DecryptionFailed);
        }
        if blob[0] != FORMAT_VERSION {
            return Err(PassVaultError::DecryptionFailed);
        }

        let (salt, ciphertext) = blob[1..].split_at(SALT_LEN);
        if ciphertext.len() % BLOCK_LEN != 0 {
            return Err(PassVaultError::DecryptionFailed);
        }

        let (mut key, mut iv) = derive_message_key(&self.shared_key, salt)?;

        let cipher = Aes256CbcDec::new_from_slices(&key, &iv)
            .map_err(|_| PassVaultError::DecryptionFailed)?;
        key.zeroize();
        iv.zeroize();

        let plaintext_bytes = cipher
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| PassVaultError::DecryptionFailed)?;

        // Convert via from_utf8 which takes ownership (no clone).
        // On error, zeroize the bytes inside the error before discarding.
        String::from_utf8(plaintext_bytes).map_err(|e| {
            let mut bad_bytes = e.into_bytes();
            bad_bytes.zeroize();
            PassVaultError::DecryptionFailed
        })
    }
}
