//! The plaintext vault document: entries, folders, schema migration.
//!
//! Field names are camelCase on the wire because that is the format the
//! vault has always persisted. Early vaults stored the entry list under
//! `entries`; the canonical field is `passwords`. Parsing goes through
//! the `StoredDocument` union so the rename is a single explicit
//! migration step on load, not optional-field probing scattered around.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{KeyForgeError, Result};

/// Schema version stamped into every sealed document.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// A single login entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordEntry {
    pub id: Uuid,
    pub title: String,
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An organizing folder for entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub expanded: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The decrypted vault contents.
///
/// Owned exclusively by whoever holds the decrypted copy; the engine
/// never shares one between callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultDocument {
    /// Logical schema version, re-stamped on every seal.
    #[serde(rename = "version")]
    pub schema_version: String,

    /// Login entries (canonical field name).
    pub passwords: Vec<PasswordEntry>,

    #[serde(default)]
    pub folders: Vec<Folder>,

    /// Fingerprint of the recovery key (never the key itself). Present
    /// iff a recovery phrase has been generated for this vault.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_key_fingerprint: Option<String>,
}

impl VaultDocument {
    /// A fresh document with no entries or folders.
    pub fn empty() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            passwords: Vec::new(),
            folders: Vec::new(),
            recovery_key_fingerprint: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Schema migration
// ---------------------------------------------------------------------------

/// Every document shape the vault has ever persisted.
///
/// Serde tries the variants in order: a document with a `passwords`
/// field is current; one with only `entries` is legacy and gets folded
/// into the canonical shape by [`parse_document`].
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDocument {
    Current(VaultDocument),
    Legacy(LegacyDocument),
}

/// Pre-rename document shape: entries lived under `entries`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyDocument {
    #[serde(rename = "version", default = "legacy_schema_version")]
    schema_version: String,
    entries: Vec<PasswordEntry>,
    #[serde(default)]
    folders: Vec<Folder>,
    #[serde(default)]
    recovery_key_fingerprint: Option<String>,
}

fn legacy_schema_version() -> String {
    SCHEMA_VERSION.to_string()
}

/// Deserialize a document from plaintext JSON, normalizing the legacy
/// `entries` field name to the canonical `passwords`.
pub fn parse_document(bytes: &[u8]) -> Result<VaultDocument> {
    let stored: StoredDocument = serde_json::from_slice(bytes)
        .map_err(|e| KeyForgeError::SerializationError(format!("vault document: {e}")))?;

    Ok(match stored {
        StoredDocument::Current(doc) => doc,
        StoredDocument::Legacy(legacy) => VaultDocument {
            schema_version: legacy.schema_version,
            passwords: legacy.entries,
            folders: legacy.folders,
            recovery_key_fingerprint: legacy.recovery_key_fingerprint,
        },
    })
}
