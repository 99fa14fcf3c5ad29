//! Cryptographic primitives for KeyForge.
//!
//! This module provides:
//! - AES-256-GCM sealing and opening with associated data (`encryption`)
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - The zeroize-on-drop key wrapper (`keys`)
//! - Random password generation and strength scoring (`passgen`)

pub mod encryption;
pub mod kdf;
pub mod keys;
pub mod passgen;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, derive_key, ...};
pub use encryption::{generate_aad, generate_nonce, open, seal};
pub use kdf::{derive_key, generate_salt, DEFAULT_ITERATIONS, MIN_ITERATIONS};
pub use keys::SymmetricKey;
pub use passgen::{generate_password, password_strength, PasswordOptions};
