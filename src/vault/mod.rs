//! Vault module — the encrypted storage engine.
//!
//! This module provides:
//! - The versioned ciphertext envelope format (`envelope`)
//! - The plaintext document model and schema migration (`document`)
//! - Sealing/opening composition of KDF + AEAD + envelope (`codec`)
//! - The high-level `VaultStore` handle (`store`)

pub mod codec;
pub mod document;
pub mod envelope;
pub mod store;

// Re-export the most commonly used items.
pub use codec::VaultCodec;
pub use document::{Folder, PasswordEntry, VaultDocument, SCHEMA_VERSION};
pub use envelope::{Envelope, FORMAT_VERSION};
pub use store::{NewEntry, VaultStore};
