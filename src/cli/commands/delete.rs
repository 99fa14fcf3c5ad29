//! `keyforge delete` — remove an entry from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{KeyForgeError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, title: &str, force: bool) -> Result<()> {
    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete entry '{title}'?"))
            .default(false)
            .interact()
            .map_err(|e| KeyForgeError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let mut store = open_vault(cli)?;

    let id = store
        .find_entry(title)
        .ok_or_else(|| KeyForgeError::EntryNotFound(title.to_string()))?
        .id;

    store.delete_entry(id)?;
    store.save()?;

    output::success(&format!("Deleted entry '{title}'"));

    Ok(())
}
