//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! PBKDF2 is a salted, iterated KDF; the iteration count is the knob
//! that makes brute-forcing a master password expensive. The count is
//! configurable via `.keyforge.toml` but never below `MIN_ITERATIONS`
//! for newly sealed envelopes.

use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::crypto::keys::SymmetricKey;
use crate::errors::{KeyForgeError, Result};

/// Length of the salt in bytes (256 bits).
pub const SALT_LEN: usize = 32;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Iteration floor for sealing. Opening honors whatever count an
/// existing envelope recorded, as long as it is nonzero.
pub const MIN_ITERATIONS: u32 = 600_000;

/// Default iteration count for new envelopes.
pub const DEFAULT_ITERATIONS: u32 = 600_000;

/// Derive a 256-bit key from a secret and salt using PBKDF2-HMAC-SHA256.
///
/// The same `(secret, salt, iterations)` triple always produces the same
/// key; there is no internal randomness.
pub fn derive_key(secret: &[u8], salt: &[u8], iterations: u32) -> Result<SymmetricKey> {
    if salt.len() != SALT_LEN {
        return Err(KeyForgeError::InvalidInput(format!(
            "salt must be exactly {SALT_LEN} bytes (got {})",
            salt.len()
        )));
    }
    if iterations == 0 {
        return Err(KeyForgeError::InvalidInput(
            "iteration count must be nonzero".into(),
        ));
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(secret, salt, iterations, &mut key);

    let wrapped = SymmetricKey::new(key);
    key.zeroize();
    Ok(wrapped)
}

/// Generate a cryptographically random 32-byte salt.
///
/// A fresh salt is generated on every seal, never reused across saves.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}
