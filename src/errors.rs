use chrono::{DateTime, Utc};
use thiserror::Error;

/// All errors that can occur in KeyForge.
#[derive(Debug, Error)]
pub enum KeyForgeError {
    // --- Crypto errors ---
    /// Malformed arguments: wrong salt/nonce length, zero iterations.
    /// Always a caller bug, never expected in normal operation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Wrong secret or tampered/corrupted ciphertext. Deliberately
    /// undifferentiated so callers cannot tell the cases apart.
    #[error("Authentication failed — wrong password or corrupted vault data")]
    AuthenticationFailed,

    // --- Envelope errors ---
    /// Persisted data is structurally unparseable. Surfaced as "vault
    /// cannot be read", never auto-repaired.
    #[error("Malformed vault envelope: {0}")]
    MalformedEnvelope(String),

    // --- Rate limiting ---
    #[error("Too many failed attempts — try again after {retry_at}")]
    RateLimited { retry_at: DateTime<Utc> },

    // --- Vault errors ---
    #[error("No vault found — run `keyforge init` to create one")]
    VaultNotFound,

    #[error("A vault already exists here")]
    VaultAlreadyExists,

    #[error("Entry '{0}' not found")]
    EntryNotFound(String),

    #[error("Folder '{0}' not found")]
    FolderNotFound(String),

    // --- Recovery errors ---
    #[error("No recovery backup is configured for this vault")]
    RecoveryNotConfigured,

    #[error("Invalid recovery phrase — expected 15 words from the recovery wordlist")]
    InvalidRecoveryPhrase,

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

/// Convenience type alias for KeyForge results.
pub type Result<T> = std::result::Result<T, KeyForgeError>;
