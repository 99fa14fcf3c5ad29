//! AES-256-GCM authenticated encryption.
//!
//! Unlike formats that prepend the nonce to the ciphertext, the vault
//! envelope stores nonce, salt, and associated data as separate fields,
//! so `seal` and `open` take them explicitly. The 16-byte GCM tag is
//! appended to the returned ciphertext.
//!
//! Nonce freshness is a caller invariant: a nonce must never be reused
//! under the same key. `generate_nonce` exists so callers get this
//! right with one call per seal.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::crypto::keys::SymmetricKey;
use crate::errors::{KeyForgeError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Size of the random associated data bound into each envelope.
pub const AAD_LEN: usize = 16;

/// Encrypt `plaintext` under `key` with the given nonce and associated
/// data. Returns ciphertext with the auth tag appended.
pub fn seal(key: &SymmetricKey, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    if nonce.len() != NONCE_LEN {
        return Err(KeyForgeError::InvalidInput(format!(
            "nonce must be exactly {NONCE_LEN} bytes (got {})",
            nonce.len()
        )));
    }

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| KeyForgeError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let ciphertext = cipher
        .encrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|e| KeyForgeError::EncryptionFailed(format!("encryption error: {e}")))?;

    Ok(ciphertext)
}

/// Decrypt data that was produced by `seal`.
///
/// Fails atomically and indistinguishably on a wrong key, corrupted
/// ciphertext, tampered associated data, or a tampered tag — callers
/// only ever see `AuthenticationFailed`.
pub fn open(key: &SymmetricKey, nonce: &[u8], ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
    if nonce.len() != NONCE_LEN || ciphertext.len() < TAG_LEN {
        return Err(KeyForgeError::AuthenticationFailed);
    }

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| KeyForgeError::AuthenticationFailed)?;

    cipher
        .decrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: ciphertext,
                aad,
            },
        )
        .map_err(|_| KeyForgeError::AuthenticationFailed)
}

/// Generate a random 12-byte nonce. Must be called freshly per seal.
pub fn generate_nonce() -> [u8; NONCE_LEN] {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

/// Generate the random associated data bound into an envelope.
pub fn generate_aad() -> [u8; AAD_LEN] {
    let mut aad = [0u8; AAD_LEN];
    OsRng.fill_bytes(&mut aad);
    aad
}
