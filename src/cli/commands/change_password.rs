//! `keyforge change-password` — re-seal the vault under a new master
//! password.

use crate::cli::output;
use crate::cli::{open_vault, prompt_new_password, Cli};
use crate::errors::Result;

/// Execute the `change-password` command.
pub fn execute(cli: &Cli) -> Result<()> {
    output::info("Enter your current master password.");
    let mut store = open_vault(cli)?;

    output::info("Choose your new master password.");
    let new_password = prompt_new_password()?;
    store.change_secret(&new_password)?;

    output::success("Master password changed.");
    if store.recovery_configured() {
        output::tip(
            "Your recovery phrase still opens the last recovery snapshot — run `keyforge recovery setup` to refresh it.",
        );
    }

    Ok(())
}
