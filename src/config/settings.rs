use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::crypto::kdf::{DEFAULT_ITERATIONS, MIN_ITERATIONS};
use crate::errors::{KeyForgeError, Result};
use crate::ratelimit::DEFAULT_MAX_ATTEMPTS;
use crate::vault::VaultCodec;

/// User-level configuration, loaded from `.keyforge.toml`.
///
/// Every field has a sensible default so KeyForge works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory where vault files are stored.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,

    /// PBKDF2 iteration count for new seals (default: 600 000).
    /// Values below the floor are rejected, not clamped.
    #[serde(default = "default_iterations")]
    pub pbkdf2_iterations: u32,

    /// Failed-unlock attempts allowed per window (default: 5).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Length of the rate-limit window in seconds (default: 900).
    #[serde(default = "default_window_secs")]
    pub attempt_window_secs: u64,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> String {
    ".keyforge".to_string()
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_window_secs() -> u64 {
    900 // 15 minutes
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            pbkdf2_iterations: default_iterations(),
            max_attempts: default_max_attempts(),
            attempt_window_secs: default_window_secs(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for.
    const FILE_NAME: &'static str = ".keyforge.toml";

    /// Load settings from `<dir>/.keyforge.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            KeyForgeError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        if settings.pbkdf2_iterations < MIN_ITERATIONS {
            return Err(KeyForgeError::ConfigError(format!(
                "pbkdf2_iterations must be at least {MIN_ITERATIONS} (got {})",
                settings.pbkdf2_iterations
            )));
        }

        Ok(settings)
    }

    /// Build the vault directory path relative to `base`.
    pub fn vault_dir_path(&self, base: &Path) -> PathBuf {
        base.join(&self.vault_dir)
    }

    /// Build a codec with the configured iteration count.
    pub fn codec(&self) -> Result<VaultCodec> {
        VaultCodec::new(self.pbkdf2_iterations)
    }

    /// The rate-limit window as a duration.
    pub fn attempt_window(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.attempt_window_secs as i64)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.vault_dir, ".keyforge");
        assert_eq!(s.pbkdf2_iterations, 600_000);
        assert_eq!(s.max_attempts, 5);
        assert_eq!(s.attempt_window_secs, 900);
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_dir, ".keyforge");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
vault_dir = "secrets"
pbkdf2_iterations = 800000
max_attempts = 3
attempt_window_secs = 600
"#;
        fs::write(tmp.path().join(".keyforge.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_dir, "secrets");
        assert_eq!(settings.pbkdf2_iterations, 800_000);
        assert_eq!(settings.max_attempts, 3);
        assert_eq!(settings.attempt_window_secs, 600);
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        let config = "max_attempts = 10\n";
        fs::write(tmp.path().join(".keyforge.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.max_attempts, 10);
        // Rest should be defaults
        assert_eq!(settings.vault_dir, ".keyforge");
        assert_eq!(settings.pbkdf2_iterations, 600_000);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".keyforge.toml"), "not valid {{toml").unwrap();

        let result = Settings::load(tmp.path());
        assert!(result.is_err());
    }

    #[test]
    fn load_rejects_weak_iteration_count() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".keyforge.toml"), "pbkdf2_iterations = 1000\n").unwrap();

        let result = Settings::load(tmp.path());
        assert!(result.is_err(), "iteration counts below the floor must be rejected");
    }

    #[test]
    fn vault_dir_path_respects_custom_dir() {
        let s = Settings {
            vault_dir: "secrets".to_string(),
            ..Settings::default()
        };
        let base = Path::new("/home/user");
        assert_eq!(s.vault_dir_path(base), PathBuf::from("/home/user/secrets"));
    }
}
