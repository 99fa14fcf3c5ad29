//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` wraps the storage collaborator and the codec so the
//! rest of the application can work with simple method calls like
//! `store.add_entry(...)`. It owns the decrypted document and the
//! session secret; mutations edit the in-memory document and `save`
//! re-seals it. The caller guarantees at most one in-flight
//! mutate-then-save sequence per vault — the store does not serialize
//! concurrent writers itself.

use chrono::Utc;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::errors::{KeyForgeError, Result};
use crate::recovery;
use crate::storage::VaultStorage;
use crate::vault::codec::VaultCodec;
use crate::vault::document::{Folder, PasswordEntry, VaultDocument};
use crate::vault::envelope::Envelope;

/// Fields supplied when creating a new entry.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub folder_id: Option<Uuid>,
}

/// The main vault handle. Create one with `VaultStore::create`,
/// `VaultStore::unlock`, or `VaultStore::unlock_with_recovery`.
pub struct VaultStore<S: VaultStorage> {
    storage: S,
    codec: VaultCodec,
    document: VaultDocument,
    /// Session secret, wiped from memory on drop. After a recovery
    /// unlock this holds the derived recovery key.
    secret: Zeroizing<String>,
}

impl<S: VaultStorage> VaultStore<S> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a brand-new vault sealed under `secret`.
    pub fn create(storage: S, codec: VaultCodec, secret: &str) -> Result<Self> {
        if storage.exists()? {
            return Err(KeyForgeError::VaultAlreadyExists);
        }

        let mut store = Self {
            storage,
            codec,
            document: VaultDocument::empty(),
            secret: Zeroizing::new(secret.to_string()),
        };
        store.save()?;
        Ok(store)
    }

    /// Unlock the primary vault with a candidate master password.
    pub fn unlock(storage: S, codec: VaultCodec, secret: &str) -> Result<Self> {
        let payload = storage.read_primary()?.ok_or(KeyForgeError::VaultNotFound)?;
        let envelope = Envelope::decode(&payload)?;
        let document = codec.open(&envelope, secret)?;

        Ok(Self {
            storage,
            codec,
            document,
            secret: Zeroizing::new(secret.to_string()),
        })
    }

    /// Unlock via the recovery backup using a 15-word phrase.
    ///
    /// The session continues under the derived recovery key: a
    /// following `save` re-seals the *primary* vault under it, so the
    /// caller should prompt for a new master password promptly (the
    /// CLI restore flow does).
    pub fn unlock_with_recovery(storage: S, codec: VaultCodec, words: &[String]) -> Result<Self> {
        let key = recovery::phrase_to_key(words)?;
        let payload = storage
            .read_recovery_backup()?
            .ok_or(KeyForgeError::RecoveryNotConfigured)?;
        let envelope = Envelope::decode(&payload)?;
        let document = codec.open(&envelope, &key)?;

        Ok(Self {
            storage,
            codec,
            document,
            secret: key,
        })
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Seal the document and write the primary blob.
    ///
    /// Every save produces a fresh salt and nonce; the previous
    /// envelope is fully replaced, never patched.
    pub fn save(&mut self) -> Result<()> {
        let envelope = self.codec.seal(&self.document, &self.secret)?;
        self.storage.write_primary(&envelope.encode()?)
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Add an entry; returns its id.
    pub fn add_entry(&mut self, new: NewEntry) -> Result<Uuid> {
        let now = Utc::now();
        let id = Uuid::new_v4();

        self.document.passwords.push(PasswordEntry {
            id,
            title: new.title,
            username: new.username,
            password: new.password,
            url: new.url,
            notes: new.notes,
            pinned: false,
            folder_id: new.folder_id,
            created_at: now,
            updated_at: now,
        });

        Ok(id)
    }

    /// Apply a mutation to the entry with the given id, stamping its
    /// `updated_at`.
    pub fn update_entry(&mut self, id: Uuid, apply: impl FnOnce(&mut PasswordEntry)) -> Result<()> {
        let entry = self
            .document
            .passwords
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| KeyForgeError::EntryNotFound(id.to_string()))?;

        apply(entry);
        entry.updated_at = Utc::now();
        Ok(())
    }

    /// Remove an entry by id.
    pub fn delete_entry(&mut self, id: Uuid) -> Result<()> {
        let before = self.document.passwords.len();
        self.document.passwords.retain(|e| e.id != id);
        if self.document.passwords.len() == before {
            return Err(KeyForgeError::EntryNotFound(id.to_string()));
        }
        Ok(())
    }

    /// All entries, in stored order.
    pub fn entries(&self) -> &[PasswordEntry] {
        &self.document.passwords
    }

    /// Look up an entry by (case-insensitive) title.
    pub fn find_entry(&self, title: &str) -> Option<&PasswordEntry> {
        self.document
            .passwords
            .iter()
            .find(|e| e.title.eq_ignore_ascii_case(title))
    }

    /// Move entries into a folder (`Some`) or out of any (`None`).
    pub fn move_entries_to_folder(&mut self, ids: &[Uuid], folder_id: Option<Uuid>) -> Result<()> {
        if let Some(fid) = folder_id {
            if !self.document.folders.iter().any(|f| f.id == fid) {
                return Err(KeyForgeError::FolderNotFound(fid.to_string()));
            }
        }

        let now = Utc::now();
        for entry in &mut self.document.passwords {
            if ids.contains(&entry.id) {
                entry.folder_id = folder_id;
                entry.updated_at = now;
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Folder operations
    // ------------------------------------------------------------------

    /// Add a folder; returns its id.
    pub fn add_folder(&mut self, name: &str, color: &str) -> Result<Uuid> {
        let now = Utc::now();
        let id = Uuid::new_v4();

        self.document.folders.push(Folder {
            id,
            name: name.to_string(),
            color: color.to_string(),
            expanded: true,
            created_at: now,
            updated_at: now,
        });

        Ok(id)
    }

    /// Remove a folder, clearing the `folder_id` of every entry that
    /// referenced it so no dangling references are persisted.
    pub fn delete_folder(&mut self, id: Uuid) -> Result<()> {
        let before = self.document.folders.len();
        self.document.folders.retain(|f| f.id != id);
        if self.document.folders.len() == before {
            return Err(KeyForgeError::FolderNotFound(id.to_string()));
        }

        for entry in &mut self.document.passwords {
            if entry.folder_id == Some(id) {
                entry.folder_id = None;
            }
        }
        Ok(())
    }

    /// All folders, in stored order.
    pub fn folders(&self) -> &[Folder] {
        &self.document.folders
    }

    /// Look up a folder by (case-insensitive) name.
    pub fn find_folder(&self, name: &str) -> Option<&Folder> {
        self.document
            .folders
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    // ------------------------------------------------------------------
    // Recovery
    // ------------------------------------------------------------------

    /// Generate (or regenerate) the recovery phrase for this vault.
    ///
    /// Stamps the key fingerprint into the document, re-seals the
    /// primary blob, and writes a recovery backup sealed under the
    /// derived recovery key. The returned phrase is shown once and
    /// never stored. The backup is a snapshot: later edits are not
    /// mirrored into it until the phrase is regenerated.
    pub fn generate_recovery(&mut self) -> Result<Vec<String>> {
        let phrase = recovery::generate_phrase();
        let key = recovery::phrase_to_key(&phrase)?;

        self.document.recovery_key_fingerprint = Some(recovery::key_fingerprint(&key));
        self.save()?;

        let backup = self.codec.seal(&self.document, &key)?;
        self.storage.write_recovery_backup(&backup.encode()?)?;

        Ok(phrase)
    }

    /// Whether a recovery phrase has been generated for this vault.
    pub fn recovery_configured(&self) -> bool {
        self.document.recovery_key_fingerprint.is_some()
    }

    // ------------------------------------------------------------------
    // Secret rotation
    // ------------------------------------------------------------------

    /// Re-seal the primary vault under a new master password.
    ///
    /// The recovery backup is untouched: a previously generated phrase
    /// keeps working until it is regenerated.
    pub fn change_secret(&mut self, new_secret: &str) -> Result<()> {
        self.secret = Zeroizing::new(new_secret.to_string());
        self.save()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Read-only view of the decrypted document.
    pub fn document(&self) -> &VaultDocument {
        &self.document
    }

    /// Number of entries in the vault.
    pub fn entry_count(&self) -> usize {
        self.document.passwords.len()
    }
}
