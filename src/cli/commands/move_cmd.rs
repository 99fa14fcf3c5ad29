//! `keyforge move` — move an entry into or out of a folder.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{KeyForgeError, Result};

/// Execute the `move` command.
pub fn execute(cli: &Cli, title: &str, folder: Option<&str>, unfiled: bool) -> Result<()> {
    if folder.is_none() && !unfiled {
        return Err(KeyForgeError::CommandFailed(
            "specify either --folder <name> or --unfiled".into(),
        ));
    }

    let mut store = open_vault(cli)?;

    let entry_id = store
        .find_entry(title)
        .ok_or_else(|| KeyForgeError::EntryNotFound(title.to_string()))?
        .id;

    let folder_id = match folder {
        Some(name) => Some(
            store
                .find_folder(name)
                .ok_or_else(|| KeyForgeError::FolderNotFound(name.to_string()))?
                .id,
        ),
        None => None,
    };

    store.move_entries_to_folder(&[entry_id], folder_id)?;
    store.save()?;

    match folder {
        Some(name) => output::success(&format!("Moved '{title}' into folder '{name}'")),
        None => output::success(&format!("Moved '{title}' out of its folder")),
    }

    Ok(())
}
