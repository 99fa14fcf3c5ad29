//! The versioned envelope format for a sealed vault.
//!
//! An envelope is the JSON object persisted at rest:
//!
//! ```json
//! { "ciphertext": "<base64>", "iv": "<base64>", "salt": "<base64>",
//!   "iterations": 600000, "aad": "<base64>", "version": "2.0" }
//! ```
//!
//! It carries everything needed to re-derive the key (salt, iteration
//! count) and to authenticate the payload (nonce, associated data, tag
//! appended to the ciphertext). Two independent copies of this structure
//! exist on disk: the primary vault blob and the recovery backup; they
//! are never merged.
//!
//! Forward-compatible parsing: "1.0" envelopes have no `aad` field and
//! may omit `iterations` and `version`.

use serde::{Deserialize, Serialize};

use crate::crypto::encryption::{NONCE_LEN, TAG_LEN};
use crate::crypto::kdf::{DEFAULT_ITERATIONS, SALT_LEN};
use crate::errors::{KeyForgeError, Result};

/// Format version written by every new seal.
pub const FORMAT_VERSION: &str = "2.0";

/// Oldest format version still readable.
const LEGACY_FORMAT_VERSION: &str = "1.0";

/// A sealed vault payload plus the parameters needed to open it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Ciphertext with the 16-byte GCM tag appended (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub ciphertext: Vec<u8>,

    /// The 12-byte nonce, fresh per seal (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub iv: Vec<u8>,

    /// The 32-byte KDF salt, fresh per seal (base64 in JSON).
    #[serde(serialize_with = "base64_encode", deserialize_with = "base64_decode")]
    pub salt: Vec<u8>,

    /// PBKDF2 iteration count used to derive the key.
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Random associated data bound into the auth tag. Absent in
    /// version 1.0 envelopes.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "base64_encode_opt",
        deserialize_with = "base64_decode_opt"
    )]
    pub aad: Option<Vec<u8>>,

    /// Envelope format version.
    #[serde(default = "legacy_version")]
    pub version: String,
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn legacy_version() -> String {
    LEGACY_FORMAT_VERSION.to_string()
}

impl Envelope {
    /// Serialize to the canonical JSON text form.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| KeyForgeError::SerializationError(format!("envelope: {e}")))
    }

    /// Parse and validate an envelope from its JSON text form.
    ///
    /// Structural problems (bad JSON, wrong field lengths, unknown
    /// version) are `MalformedEnvelope` — distinct from authentication
    /// failures, which can only surface once decryption is attempted.
    pub fn decode(text: &str) -> Result<Self> {
        let envelope: Envelope = serde_json::from_str(text)
            .map_err(|e| KeyForgeError::MalformedEnvelope(format!("invalid JSON: {e}")))?;
        envelope.validate()?;
        Ok(envelope)
    }

    /// Check field lengths and version without touching any key material.
    fn validate(&self) -> Result<()> {
        if self.version != FORMAT_VERSION && self.version != LEGACY_FORMAT_VERSION {
            return Err(KeyForgeError::MalformedEnvelope(format!(
                "unsupported format version '{}'",
                self.version
            )));
        }
        if self.salt.len() != SALT_LEN {
            return Err(KeyForgeError::MalformedEnvelope(format!(
                "salt must be {SALT_LEN} bytes (got {})",
                self.salt.len()
            )));
        }
        if self.iv.len() != NONCE_LEN {
            return Err(KeyForgeError::MalformedEnvelope(format!(
                "iv must be {NONCE_LEN} bytes (got {})",
                self.iv.len()
            )));
        }
        if self.ciphertext.len() < TAG_LEN {
            return Err(KeyForgeError::MalformedEnvelope(
                "ciphertext shorter than the auth tag".into(),
            ));
        }
        if self.iterations == 0 {
            return Err(KeyForgeError::MalformedEnvelope(
                "iteration count must be nonzero".into(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Serde helpers for base64-encoded byte fields
// ---------------------------------------------------------------------------

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

pub(crate) fn base64_encode<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&BASE64.encode(data))
}

pub(crate) fn base64_decode<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BASE64.decode(&s).map_err(serde::de::Error::custom)
}

fn base64_encode_opt<S>(
    data: &Option<Vec<u8>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    // Only called when the field is Some, thanks to skip_serializing_if.
    match data {
        Some(bytes) => serializer.serialize_str(&BASE64.encode(bytes)),
        None => serializer.serialize_none(),
    }
}

fn base64_decode_opt<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<u8>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) => BASE64
            .decode(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
