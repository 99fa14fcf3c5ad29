//! Persistence collaborators: the vault blobs and rate-limit state.
//!
//! The engine is agnostic to the medium — it only consumes the
//! `VaultStorage` trait. The filesystem implementation keeps three
//! files in a vault directory:
//!
//! - `vault.json` — the primary envelope
//! - `vault.recovery.json` — the recovery-backup envelope
//! - `attempts.json` — rate-limit records, `{ key: { count, resetAt } }`
//!
//! All writes are atomic: write to a temp file in the same directory,
//! then rename over the target, so readers never see a half-written
//! blob.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{KeyForgeError, Result};
use crate::ratelimit::{AttemptRecord, AttemptStore};

/// File name of the primary vault envelope.
pub const PRIMARY_FILE: &str = "vault.json";

/// File name of the recovery-backup envelope.
pub const RECOVERY_FILE: &str = "vault.recovery.json";

/// File name of the persisted rate-limit state.
pub const ATTEMPTS_FILE: &str = "attempts.json";

/// Where sealed envelopes live.
///
/// Two independent blobs exist side by side — the primary vault and
/// the recovery backup — and are never merged.
pub trait VaultStorage {
    fn read_primary(&self) -> Result<Option<String>>;
    fn write_primary(&mut self, payload: &str) -> Result<()>;
    fn read_recovery_backup(&self) -> Result<Option<String>>;
    fn write_recovery_backup(&mut self, payload: &str) -> Result<()>;
    fn exists(&self) -> Result<bool>;
    fn clear_all(&mut self) -> Result<()>;
}

/// Filesystem-backed vault storage rooted at a directory.
#[derive(Debug, Clone)]
pub struct FsStorage {
    dir: PathBuf,
}

impl FsStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this storage lives in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_file(&self, name: &str) -> Result<Option<String>> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write_file(&self, name: &str, contents: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        write_atomic(&self.dir.join(name), contents)
    }
}

impl VaultStorage for FsStorage {
    fn read_primary(&self) -> Result<Option<String>> {
        self.read_file(PRIMARY_FILE)
    }

    fn write_primary(&mut self, payload: &str) -> Result<()> {
        self.write_file(PRIMARY_FILE, payload)
    }

    fn read_recovery_backup(&self) -> Result<Option<String>> {
        self.read_file(RECOVERY_FILE)
    }

    fn write_recovery_backup(&mut self, payload: &str) -> Result<()> {
        self.write_file(RECOVERY_FILE, payload)
    }

    fn exists(&self) -> Result<bool> {
        Ok(self.dir.join(PRIMARY_FILE).exists())
    }

    /// Remove every blob this vault ever wrote, rate-limit state
    /// included. Missing files are fine — the end state is what
    /// matters.
    fn clear_all(&mut self) -> Result<()> {
        for name in [PRIMARY_FILE, RECOVERY_FILE, ATTEMPTS_FILE] {
            let path = self.dir.join(name);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

/// Rate-limit records persisted as a JSON map next to the vault.
#[derive(Debug, Clone)]
pub struct FsAttemptStore {
    path: PathBuf,
}

impl FsAttemptStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(ATTEMPTS_FILE),
        }
    }

    fn read_map(&self) -> Result<HashMap<String, AttemptRecord>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        serde_json::from_str(&contents)
            .map_err(|e| KeyForgeError::SerializationError(format!("attempt records: {e}")))
    }

    fn write_map(&self, map: &HashMap<String, AttemptRecord>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string(map)
            .map_err(|e| KeyForgeError::SerializationError(format!("attempt records: {e}")))?;
        write_atomic(&self.path, &contents)
    }
}

impl AttemptStore for FsAttemptStore {
    fn load(&self, key: &str) -> Result<Option<AttemptRecord>> {
        Ok(self.read_map()?.remove(key))
    }

    fn save(&mut self, key: &str, record: &AttemptRecord) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), record.clone());
        self.write_map(&map)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

/// Atomic write: temp file in the same directory, then rename.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}
