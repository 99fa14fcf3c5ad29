//! `keyforge recovery` — generate the recovery phrase, or unlock with
//! one.

use dialoguer::{Confirm, Input};

use crate::cli::output;
use crate::cli::{engine, open_vault, prompt_new_password, Cli, UNLOCK_ACTION};
use crate::errors::{KeyForgeError, Result};
use crate::ratelimit::{AttemptLimiter, Decision};
use crate::recovery;
use crate::storage::{FsAttemptStore, FsStorage};
use crate::vault::VaultStore;

/// Execute `recovery setup`.
///
/// Prints the phrase exactly once; it is never written anywhere in
/// plaintext.
pub fn execute_setup(cli: &Cli) -> Result<()> {
    let mut store = open_vault(cli)?;

    if store.recovery_configured() {
        let confirmed = Confirm::new()
            .with_prompt("A recovery phrase already exists. Replace it?")
            .default(false)
            .interact()
            .map_err(|e| KeyForgeError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled. The existing phrase stays valid.");
            return Ok(());
        }
    }

    let phrase = store.generate_recovery()?;

    output::warning("Write these 15 words down, in order. They are shown only once.");
    output::print_recovery_phrase(&phrase);
    output::warning("Anyone with this phrase can open your vault.");
    output::tip("The recovery backup is a snapshot — rerun `keyforge recovery setup` after major changes.");

    Ok(())
}

/// Execute `recovery restore`.
///
/// Shares the unlock attempt budget with password logins, then forces
/// a new master password so the session does not keep running on the
/// recovery key.
pub fn execute_restore(cli: &Cli, words: &[String]) -> Result<()> {
    let (settings, dir, codec) = engine(cli)?;

    let words: Vec<String> = if words.is_empty() {
        let line: String = Input::new()
            .with_prompt("Enter your 15-word recovery phrase")
            .interact_text()
            .map_err(|e| KeyForgeError::CommandFailed(format!("input prompt: {e}")))?;
        line.split_whitespace().map(str::to_string).collect()
    } else {
        words.to_vec()
    };

    // Structural check first — a malformed phrase should not burn an
    // unlock attempt.
    if !recovery::validate_phrase(&words) {
        return Err(KeyForgeError::InvalidRecoveryPhrase);
    }

    let mut limiter = AttemptLimiter::new(FsAttemptStore::new(&dir));
    if let Decision::Denied { retry_at } =
        limiter.check(UNLOCK_ACTION, settings.max_attempts, settings.attempt_window())?
    {
        return Err(KeyForgeError::RateLimited { retry_at });
    }

    match VaultStore::unlock_with_recovery(FsStorage::new(&dir), codec, &words) {
        Ok(mut store) => {
            limiter.clear(UNLOCK_ACTION)?;
            output::success("Recovery phrase accepted.");

            output::info("Choose a new master password for this vault.");
            let new_password = prompt_new_password()?;
            store.change_secret(&new_password)?;

            output::success("Vault re-sealed under the new master password.");
            output::tip("Run `keyforge recovery setup` to generate a fresh recovery phrase.");
            Ok(())
        }
        Err(e @ KeyForgeError::AuthenticationFailed) => {
            let remaining = limiter.remaining(UNLOCK_ACTION, settings.max_attempts)?;
            output::warning(&format!("{remaining} attempt(s) remaining in this window."));
            Err(e)
        }
        Err(e) => Err(e),
    }
}
