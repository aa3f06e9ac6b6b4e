//! Symbol section - checks for a character from the configured symbol set.

use crate::rules::Rules;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub const SYMBOL_SUGGESTION: &str = "Add symbols (!@#$ etc.)";

/// Checks if the password contains at least one symbol from `rules.symbols()`.
///
/// Punctuation outside the set (e.g. `-`, `_`, `~`) does not count.
pub fn symbol_section(password: &SecretString, rules: &Rules) -> SectionResult {
    let symbols = rules.symbols();
    if password.expose_secret().chars().any(|c| symbols.contains(c)) {
        return None;
    }
    Some(SYMBOL_SUGGESTION.to_string())
}
