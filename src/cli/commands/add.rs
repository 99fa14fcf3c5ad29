//! `keyforge add` — add a login entry to the vault.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::crypto::passgen::{generate_password, password_strength, PasswordOptions};
use crate::errors::{KeyForgeError, Result};
use crate::vault::NewEntry;

/// Arguments for the `add` command.
pub struct AddArgs<'a> {
    pub title: &'a str,
    pub username: &'a str,
    pub password: Option<&'a str>,
    pub generate: bool,
    pub url: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub folder: Option<&'a str>,
}

/// Execute the `add` command.
pub fn execute(cli: &Cli, args: &AddArgs) -> Result<()> {
    // Determine the entry password from one of three sources.
    let entry_password = if args.generate {
        // Source 1: Generated on the spot.
        let generated = generate_password(&PasswordOptions::default())?;
        output::info("Generated a random password for this entry.");
        generated
    } else if let Some(p) = args.password {
        // Source 2: Inline value on the command line.
        output::warning("Password provided on command line — it may appear in shell history.");
        p.to_string()
    } else {
        // Source 3: Interactive secure prompt (default).
        dialoguer::Password::new()
            .with_prompt(format!("Password for '{}'", args.title))
            .interact()
            .map_err(|e| KeyForgeError::CommandFailed(format!("input prompt: {e}")))?
    };

    let strength = password_strength(&entry_password);
    if strength < 50 {
        output::warning(&format!("Weak password (strength {strength}/100)."));
    }

    let mut store = open_vault(cli)?;

    if store.find_entry(args.title).is_some() {
        return Err(KeyForgeError::CommandFailed(format!(
            "an entry titled '{}' already exists",
            args.title
        )));
    }

    // Resolve the folder name, if one was given.
    let folder_id = match args.folder {
        Some(name) => Some(
            store
                .find_folder(name)
                .ok_or_else(|| KeyForgeError::FolderNotFound(name.to_string()))?
                .id,
        ),
        None => None,
    };

    store.add_entry(NewEntry {
        title: args.title.to_string(),
        username: args.username.to_string(),
        password: entry_password,
        url: args.url.map(str::to_string),
        notes: args.notes.map(str::to_string),
        folder_id,
    })?;
    store.save()?;

    output::success(&format!(
        "Entry '{}' added ({} total)",
        args.title,
        store.entry_count()
    ));

    Ok(())
}
