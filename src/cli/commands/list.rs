//! `keyforge list` — display entries in a table.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{KeyForgeError, Result};
use crate::vault::PasswordEntry;

/// Execute the `list` command.
pub fn execute(cli: &Cli, folder: Option<&str>) -> Result<()> {
    let store = open_vault(cli)?;

    let filter_id = match folder {
        Some(name) => Some(
            store
                .find_folder(name)
                .ok_or_else(|| KeyForgeError::FolderNotFound(name.to_string()))?
                .id,
        ),
        None => None,
    };

    // Pinned entries first, then alphabetical by title.
    let mut entries: Vec<&PasswordEntry> = store
        .entries()
        .iter()
        .filter(|e| filter_id.map_or(true, |id| e.folder_id == Some(id)))
        .collect();
    entries.sort_by(|a, b| b.pinned.cmp(&a.pinned).then(a.title.cmp(&b.title)));

    output::info(&format!("{} entr(y/ies)", entries.len()));
    output::print_entries_table(&entries, store.folders());

    Ok(())
}
