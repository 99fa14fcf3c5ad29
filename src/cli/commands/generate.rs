//! `keyforge generate` — print a random password without touching any
//! vault.

use crate::cli::output;
use crate::crypto::passgen::{generate_password, password_strength, PasswordOptions};
use crate::errors::Result;

/// Arguments for the `generate` command.
pub struct GenerateArgs {
    pub length: usize,
    pub no_symbols: bool,
    pub no_numbers: bool,
    pub no_uppercase: bool,
    pub exclude_similar: bool,
}

/// Execute the `generate` command.
pub fn execute(args: &GenerateArgs) -> Result<()> {
    let options = PasswordOptions {
        length: args.length,
        include_uppercase: !args.no_uppercase,
        include_lowercase: true,
        include_numbers: !args.no_numbers,
        include_symbols: !args.no_symbols,
        exclude_similar: args.exclude_similar,
        ..PasswordOptions::default()
    };

    let password = generate_password(&options)?;
    let strength = password_strength(&password);

    // Value on stdout so it can be piped; commentary on stderr.
    println!("{password}");
    output::warning(&format!("Strength: {strength}/100"));

    Ok(())
}
