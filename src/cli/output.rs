//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::{Folder, PasswordEntry};

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of entries (Title, Username, URL, Folder, Updated).
///
/// Passwords are never shown here — `show --reveal` is the only path
/// that prints one.
pub fn print_entries_table(entries: &[&PasswordEntry], folders: &[Folder]) {
    if entries.is_empty() {
        info("No entries in this vault yet.");
        tip("Run `keyforge add <title>` to add your first entry.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Title", "Username", "URL", "Folder", "Updated"]);

    for e in entries {
        let folder_name = e
            .folder_id
            .and_then(|id| folders.iter().find(|f| f.id == id))
            .map(|f| f.name.clone())
            .unwrap_or_default();
        let pin = if e.pinned { "\u{2605} " } else { "" };

        table.add_row(vec![
            format!("{pin}{}", e.title),
            e.username.clone(),
            e.url.clone().unwrap_or_default(),
            folder_name,
            e.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }

    println!("{table}");
}

/// Print a table of folders (Name, Color, Entries, Created).
pub fn print_folders_table(folders: &[Folder], entries: &[PasswordEntry]) {
    if folders.is_empty() {
        info("No folders in this vault yet.");
        tip("Run `keyforge folder add <name>` to create one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Color", "Entries", "Created"]);

    for f in folders {
        let count = entries.iter().filter(|e| e.folder_id == Some(f.id)).count();
        table.add_row(vec![
            f.name.clone(),
            f.color.clone(),
            count.to_string(),
            f.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }

    println!("{table}");
}

/// Print a recovery phrase as a numbered grid, one word per slot.
pub fn print_recovery_phrase(words: &[String]) {
    for (i, word) in words.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, style(word).bold());
    }
}
