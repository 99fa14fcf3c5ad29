//! Recovery phrases: a second, independent master secret.
//!
//! A recovery phrase is 15 words drawn from a fixed 256-word
//! vocabulary, shown to the user exactly once. The phrase reduces
//! deterministically to a key string that works anywhere the master
//! password does — the same codec seals a second copy of the vault
//! ("recovery backup") under it.
//!
//! Only a fingerprint of the derived key is ever persisted, so the
//! stored vault reveals whether recovery is configured but nothing
//! usable to mount it.

pub mod wordlist;

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::errors::{KeyForgeError, Result};

pub use wordlist::WORDLIST;

/// Number of words in a recovery phrase.
pub const PHRASE_WORDS: usize = 15;

/// Domain separator so a fingerprint can never collide with a key
/// derived from the same bytes in another context.
const FINGERPRINT_CONTEXT: &[u8] = b"keyforge.recovery.fingerprint.v1:";

/// Generate a fresh 15-word recovery phrase.
///
/// One random byte indexes one word; with 256 words the draw is
/// uniform without rejection sampling.
pub fn generate_phrase() -> Vec<String> {
    let mut indices = [0u8; PHRASE_WORDS];
    OsRng.fill_bytes(&mut indices);
    indices
        .iter()
        .map(|&i| WORDLIST[i as usize].to_string())
        .collect()
}

/// Check that a candidate phrase is structurally well-formed: exactly
/// 15 entries, each a known wordlist word after normalization.
///
/// Reveals nothing about any vault — this is a shape check only.
pub fn validate_phrase(words: &[String]) -> bool {
    words.len() == PHRASE_WORDS
        && words
            .iter()
            .all(|w| WORDLIST.binary_search(&normalize(w).as_str()).is_ok())
}

/// Reduce a recovery phrase to its derived key.
///
/// Words are trimmed, lowercased, and joined with single spaces before
/// hashing, so presentation differences (case, stray whitespace) never
/// change the key. Identical phrases always yield the identical key.
pub fn phrase_to_key(words: &[String]) -> Result<Zeroizing<String>> {
    if !validate_phrase(words) {
        return Err(KeyForgeError::InvalidRecoveryPhrase);
    }

    let joined = Zeroizing::new(
        words
            .iter()
            .map(|w| normalize(w))
            .collect::<Vec<_>>()
            .join(" "),
    );

    let digest = Sha256::digest(joined.as_bytes());
    Ok(Zeroizing::new(hex::encode(digest)))
}

/// Fingerprint of a derived recovery key, safe to persist.
pub fn key_fingerprint(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(FINGERPRINT_CONTEXT);
    hasher.update(key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Constant-time check of a derived key against a stored fingerprint.
pub fn fingerprint_matches(key: &str, stored: &str) -> bool {
    key_fingerprint(key)
        .as_bytes()
        .ct_eq(stored.as_bytes())
        .into()
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}
