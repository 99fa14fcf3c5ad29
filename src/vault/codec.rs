//! Sealing and opening: the composition of KDF, AEAD, and envelope.
//!
//! `seal` is the only place envelopes are produced, so freshness (new
//! salt, new nonce, new associated data on every call) is enforced
//! here. `open` is the only place envelopes are consumed, and it
//! collapses every cryptographic or parse failure into one opaque
//! `AuthenticationFailed` so nothing leaks about *why* an unlock
//! failed.

use zeroize::Zeroizing;

use crate::crypto::{self, kdf};
use crate::errors::{KeyForgeError, Result};
use crate::vault::document::{self, VaultDocument, SCHEMA_VERSION};
use crate::vault::envelope::{Envelope, FORMAT_VERSION};

/// Turns vault documents into envelopes and back.
#[derive(Debug, Clone)]
pub struct VaultCodec {
    iterations: u32,
}

impl VaultCodec {
    /// Create a codec sealing with the given PBKDF2 iteration count.
    ///
    /// Counts below the floor are rejected: weakening the KDF on new
    /// seals is never acceptable, even via config.
    pub fn new(iterations: u32) -> Result<Self> {
        if iterations < kdf::MIN_ITERATIONS {
            return Err(KeyForgeError::InvalidInput(format!(
                "iteration count must be at least {} (got {iterations})",
                kdf::MIN_ITERATIONS
            )));
        }
        Ok(Self { iterations })
    }

    /// A codec with the default iteration count.
    pub fn with_defaults() -> Self {
        Self {
            iterations: kdf::DEFAULT_ITERATIONS,
        }
    }

    /// Seal a document under a secret.
    ///
    /// Stamps the current schema version, then generates a fresh salt,
    /// nonce, and associated data — two seals of the same document
    /// never produce the same envelope.
    pub fn seal(&self, document: &VaultDocument, secret: &str) -> Result<Envelope> {
        let mut stamped = document.clone();
        stamped.schema_version = SCHEMA_VERSION.to_string();

        let plaintext = Zeroizing::new(
            serde_json::to_vec(&stamped)
                .map_err(|e| KeyForgeError::SerializationError(format!("vault document: {e}")))?,
        );

        let salt = crypto::generate_salt();
        let nonce = crypto::generate_nonce();
        let aad = crypto::generate_aad();

        let key = crypto::derive_key(secret.as_bytes(), &salt, self.iterations)?;
        let ciphertext = crypto::seal(&key, &nonce, &plaintext, &aad)?;

        Ok(Envelope {
            ciphertext,
            iv: nonce.to_vec(),
            salt: salt.to_vec(),
            iterations: self.iterations,
            aad: Some(aad.to_vec()),
            version: FORMAT_VERSION.to_string(),
        })
    }

    /// Open an envelope with a candidate secret.
    ///
    /// The key is re-derived from the envelope's own salt and iteration
    /// count, so envelopes sealed under older settings stay readable.
    /// Any failure past this point — wrong secret, tampered bytes,
    /// unparseable plaintext — is reported as `AuthenticationFailed`
    /// with no further detail.
    pub fn open(&self, envelope: &Envelope, secret: &str) -> Result<VaultDocument> {
        let key = crypto::derive_key(secret.as_bytes(), &envelope.salt, envelope.iterations)
            .map_err(|_| KeyForgeError::AuthenticationFailed)?;

        let aad = envelope.aad.as_deref().unwrap_or(&[]);
        let plaintext = Zeroizing::new(crypto::open(
            &key,
            &envelope.iv,
            &envelope.ciphertext,
            aad,
        )?);

        document::parse_document(&plaintext).map_err(|_| KeyForgeError::AuthenticationFailed)
    }
}
