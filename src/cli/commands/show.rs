//! `keyforge show` — display a single entry.

use console::style;

use crate::cli::{open_vault, Cli};
use crate::errors::{KeyForgeError, Result};

/// Execute the `show` command.
pub fn execute(cli: &Cli, title: &str, reveal: bool) -> Result<()> {
    let store = open_vault(cli)?;

    let entry = store
        .find_entry(title)
        .ok_or_else(|| KeyForgeError::EntryNotFound(title.to_string()))?;

    let folder_name = entry
        .folder_id
        .and_then(|id| store.folders().iter().find(|f| f.id == id))
        .map(|f| f.name.as_str())
        .unwrap_or("-");

    println!("{}  {}", style("Title:").dim(), entry.title);
    println!("{}  {}", style("User: ").dim(), entry.username);
    if reveal {
        println!("{}  {}", style("Pass: ").dim(), entry.password);
    } else {
        println!("{}  ********  (use --reveal to print)", style("Pass: ").dim());
    }
    if let Some(url) = &entry.url {
        println!("{}  {}", style("URL:  ").dim(), url);
    }
    if let Some(notes) = &entry.notes {
        println!("{}  {}", style("Notes:").dim(), notes);
    }
    println!("{}  {}", style("Folder:").dim(), folder_name);
    println!(
        "{}  {}",
        style("Updated:").dim(),
        entry.updated_at.format("%Y-%m-%d %H:%M:%S")
    );

    Ok(())
}
