//! Key material wrapper.
//!
//! Derived keys are sensitive in-memory material; `SymmetricKey` owns
//! the raw bytes and zeroes them when dropped, so a key cannot linger
//! after it is no longer needed — including on error paths.

use zeroize::Zeroize;

use crate::crypto::kdf::KEY_LEN;

/// A 256-bit symmetric key that automatically zeroes its memory when
/// dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct SymmetricKey {
    bytes: [u8; KEY_LEN],
}

impl SymmetricKey {
    /// Create a new `SymmetricKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to build an AEAD cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}
