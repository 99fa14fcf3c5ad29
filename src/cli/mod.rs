//! CLI module — Clap argument parser, output helpers, and command
//! implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{KeyForgeError, Result};
use crate::ratelimit::{AttemptLimiter, Decision};
use crate::storage::{FsAttemptStore, FsStorage};
use crate::vault::{VaultCodec, VaultStore};

/// Minimum password length to prevent trivially weak passwords.
const MIN_PASSWORD_LEN: usize = 8;

/// Rate-limit action key for unlock attempts (master password and
/// recovery phrase share one budget).
pub const UNLOCK_ACTION: &str = "unlock";

/// KeyForge CLI: encrypted password vault.
#[derive(Parser)]
#[command(name = "keyforge", about = "Encrypted password vault", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory (default: .keyforge, or vault_dir from .keyforge.toml)
    #[arg(long, global = true)]
    pub vault_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Initialize a new vault
    Init,

    /// Add a login entry
    Add {
        /// Entry title (e.g. "GitHub")
        title: String,

        /// Username or email for the entry
        #[arg(short, long, default_value = "")]
        username: String,

        /// Password value (omit for interactive prompt)
        #[arg(short, long)]
        password: Option<String>,

        /// Generate a random password instead of prompting
        #[arg(short = 'g', long, conflicts_with = "password")]
        generate: bool,

        /// Website URL
        #[arg(long)]
        url: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,

        /// Folder name to file the entry under
        #[arg(long)]
        folder: Option<String>,
    },

    /// Show a single entry
    Show {
        /// Entry title
        title: String,

        /// Print the password instead of masking it
        #[arg(long)]
        reveal: bool,
    },

    /// List all entries
    List {
        /// Only show entries in this folder
        #[arg(long)]
        folder: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry title
        title: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Manage folders
    Folder {
        #[command(subcommand)]
        action: FolderAction,
    },

    /// Move an entry into (or out of) a folder
    Move {
        /// Entry title
        title: String,

        /// Target folder name
        #[arg(long, conflicts_with = "unfiled")]
        folder: Option<String>,

        /// Remove the entry from its folder
        #[arg(long)]
        unfiled: bool,
    },

    /// Generate a random password (no vault needed)
    Generate {
        /// Password length
        #[arg(short, long, default_value = "20")]
        length: usize,

        /// Exclude symbol characters
        #[arg(long)]
        no_symbols: bool,

        /// Exclude digits
        #[arg(long)]
        no_numbers: bool,

        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Exclude look-alike characters (i, l, o, 0, 1)
        #[arg(long)]
        exclude_similar: bool,
    },

    /// Manage the recovery phrase
    Recovery {
        #[command(subcommand)]
        action: RecoveryAction,
    },

    /// Change the vault's master password
    ChangePassword,

    /// Delete the vault, recovery backup, and rate-limit state
    Destroy {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

/// Folder subcommands.
#[derive(clap::Subcommand)]
pub enum FolderAction {
    /// Create a folder
    Add {
        /// Folder name
        name: String,

        /// Display color (hex or named)
        #[arg(long, default_value = "#808080")]
        color: String,
    },

    /// List all folders
    List,

    /// Delete a folder (entries inside are kept, unfiled)
    Delete {
        /// Folder name
        name: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Recovery subcommands.
#[derive(clap::Subcommand)]
pub enum RecoveryAction {
    /// Generate a recovery phrase and write the recovery backup
    Setup,

    /// Unlock with a recovery phrase and set a new master password
    Restore {
        /// The 15 phrase words (prompted interactively when omitted)
        #[arg(num_args = 0..)]
        words: Vec<String>,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the vault password, trying in order:
/// 1. `KEYFORGE_PASSWORD` env var (scripts/CI)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("KEYFORGE_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master password")
        .interact()
        .map_err(|e| KeyForgeError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new password with confirmation (used during `init`,
/// `change-password`, and recovery restore).
///
/// Also respects `KEYFORGE_PASSWORD` for scripted usage. Enforces a
/// minimum password length.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("KEYFORGE_PASSWORD") {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSWORD_LEN {
                return Err(KeyForgeError::CommandFailed(format!(
                    "password must be at least {MIN_PASSWORD_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt("Choose master password")
            .with_confirmation("Confirm master password", "Passwords do not match, try again")
            .interact()
            .map_err(|e| KeyForgeError::CommandFailed(format!("password prompt: {e}")))?;

        if password.len() < MIN_PASSWORD_LEN {
            output::warning(&format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Resolve the vault directory: the `--vault-dir` flag wins, then the
/// `vault_dir` setting, relative to the current directory.
pub fn vault_dir(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(match &cli.vault_dir {
        Some(dir) => cwd.join(dir),
        None => settings.vault_dir_path(&cwd),
    })
}

/// Load settings and build the pieces every vault command needs.
pub fn engine(cli: &Cli) -> Result<(Settings, PathBuf, VaultCodec)> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let dir = vault_dir(cli, &settings)?;
    let codec = settings.codec()?;
    Ok((settings, dir, codec))
}

/// Prompt for the master password and unlock the vault, gated by the
/// attempt limiter.
///
/// The check consumes one attempt whether or not the password turns
/// out to be right; a successful unlock clears the window. On an
/// authentication failure the remaining-attempts counter is shown
/// next to the generic error.
pub fn open_vault(cli: &Cli) -> Result<VaultStore<FsStorage>> {
    let (settings, dir, codec) = engine(cli)?;
    let password = prompt_password()?;

    let mut limiter = AttemptLimiter::new(FsAttemptStore::new(&dir));
    if let Decision::Denied { retry_at } =
        limiter.check(UNLOCK_ACTION, settings.max_attempts, settings.attempt_window())?
    {
        return Err(KeyForgeError::RateLimited { retry_at });
    }

    match VaultStore::unlock(FsStorage::new(&dir), codec, &password) {
        Ok(store) => {
            limiter.clear(UNLOCK_ACTION)?;
            Ok(store)
        }
        Err(e @ KeyForgeError::AuthenticationFailed) => {
            let remaining = limiter.remaining(UNLOCK_ACTION, settings.max_attempts)?;
            output::warning(&format!("{remaining} attempt(s) remaining in this window."));
            Err(e)
        }
        Err(e) => Err(e),
    }
}
