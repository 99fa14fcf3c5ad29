//! `keyforge destroy` — permanently delete all vault data.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{engine, Cli};
use crate::errors::{KeyForgeError, Result};
use crate::storage::{FsStorage, VaultStorage};

/// Execute the `destroy` command.
pub fn execute(cli: &Cli, force: bool) -> Result<()> {
    let (_settings, dir, _codec) = engine(cli)?;
    let mut storage = FsStorage::new(&dir);

    if !storage.exists()? {
        output::info("Nothing to destroy — no vault found.");
        return Ok(());
    }

    if !force {
        let confirmed = Confirm::new()
            .with_prompt("Permanently delete the vault and its recovery backup? This cannot be undone.")
            .default(false)
            .interact()
            .map_err(|e| KeyForgeError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    storage.clear_all()?;

    output::success("Vault, recovery backup, and rate-limit state deleted.");
    Ok(())
}
