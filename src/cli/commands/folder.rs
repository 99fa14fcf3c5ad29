//! `keyforge folder` — create, list, and delete folders.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{KeyForgeError, Result};

/// Execute `folder add`.
pub fn execute_add(cli: &Cli, name: &str, color: &str) -> Result<()> {
    let mut store = open_vault(cli)?;

    if store.find_folder(name).is_some() {
        return Err(KeyForgeError::CommandFailed(format!(
            "a folder named '{name}' already exists"
        )));
    }

    store.add_folder(name, color)?;
    store.save()?;

    output::success(&format!("Folder '{name}' created"));
    Ok(())
}

/// Execute `folder list`.
pub fn execute_list(cli: &Cli) -> Result<()> {
    let store = open_vault(cli)?;
    output::print_folders_table(store.folders(), store.entries());
    Ok(())
}

/// Execute `folder delete`.
///
/// Entries filed under the folder are kept and become unfiled.
pub fn execute_delete(cli: &Cli, name: &str, force: bool) -> Result<()> {
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete folder '{name}'? Entries inside are kept, unfiled."
            ))
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
        .find_folder(name)
        .ok_or_else(|| KeyForgeError::FolderNotFound(name.to_string()))?
        .id;

    store.delete_folder(id)?;
    store.save()?;

    output::success(&format!("Deleted folder '{name}'"));
    Ok(())
}
