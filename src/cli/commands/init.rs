//! `keyforge init` — create a new empty vault.

use crate::cli::output;
use crate::cli::{engine, prompt_new_password, Cli};
use crate::errors::{KeyForgeError, Result};
use crate::storage::{FsStorage, VaultStorage};
use crate::vault::VaultStore;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (_settings, dir, codec) = engine(cli)?;
    let storage = FsStorage::new(&dir);

    // 1. Refuse to clobber an existing vault.
    if storage.exists()? {
        output::tip("Use `keyforge add` to add entries to the existing vault.");
        return Err(KeyForgeError::VaultAlreadyExists);
    }

    // 2. Prompt for a new master password (with confirmation).
    let password = prompt_new_password()?;

    // 3. Seal an empty vault to disk.
    VaultStore::create(storage, codec, &password)?;

    output::success(&format!("Vault created at {}", dir.display()));
    output::warning("Your master password is the only way in. There is no reset.");

    // 4. Helpful next steps.
    output::tip("Run `keyforge add <title>` to add an entry.");
    output::tip("Run `keyforge recovery setup` to generate a recovery phrase.");

    Ok(())
}
