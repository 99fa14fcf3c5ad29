//! Random password generation and strength scoring.

use rand::rngs::OsRng;
use rand::Rng;

use crate::errors::{KeyForgeError, Result};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Look-alike characters dropped by `exclude_similar` (i/l/o/0/1).
const SIMILAR: &[char] = &['i', 'l', 'o', 'I', 'L', 'O', '0', '1'];

/// Symbols dropped by `exclude_ambiguous` (brackets, quotes, slashes).
const AMBIGUOUS: &[char] = &[
    '{', '}', '[', ']', '(', ')', '/', '\\', '\'', '"', '`', '~', ',', ';', ':', '.', '<', '>',
];

/// Character-set options for password generation.
#[derive(Debug, Clone)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
    pub custom_charset: String,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 20,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: false,
            exclude_ambiguous: false,
            custom_charset: String::new(),
        }
    }
}

/// Generate a random password from the configured character sets.
///
/// Each character is drawn independently from the OS RNG.
pub fn generate_password(options: &PasswordOptions) -> Result<String> {
    let mut charset: Vec<char> = Vec::new();

    if options.include_lowercase {
        charset.extend(LOWERCASE.chars());
    }
    if options.include_uppercase {
        charset.extend(UPPERCASE.chars());
    }
    if options.include_numbers {
        charset.extend(DIGITS.chars());
    }
    if options.include_symbols {
        let mut symbols: Vec<char> = SYMBOLS.chars().collect();
        if options.exclude_ambiguous {
            symbols.retain(|c| !AMBIGUOUS.contains(c));
        }
        charset.extend(symbols);
    }
    if options.exclude_similar {
        charset.retain(|c| !SIMILAR.contains(c));
    }
    charset.extend(options.custom_charset.chars());

    charset.sort_unstable();
    charset.dedup();

    if charset.is_empty() {
        return Err(KeyForgeError::InvalidInput(
            "at least one character type must be selected".into(),
        ));
    }

    let mut rng = OsRng;
    let password: String = (0..options.length)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect();

    Ok(password)
}

/// Score a password's strength from 0 to 100.
///
/// Length dominates; character variety and uniqueness add the rest.
pub fn password_strength(password: &str) -> u32 {
    let mut score = 0u32;
    let len = password.chars().count();

    if len >= 8 {
        score += 25;
    }
    if len >= 12 {
        score += 10;
    }
    if len >= 16 {
        score += 10;
    }
    if len >= 18 {
        return 100;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 10;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 15;
    }

    let unique: std::collections::HashSet<char> = password.chars().collect();
    if len > 0 && unique.len() as f64 / len as f64 > 0.7 {
        score += 10;
    }

    score.min(100)
}
