//! Length section - checks password minimum length.

use crate::rules::Rules;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks if the password has at least `rules.min_length()` characters.
///
/// Length is counted in characters, not bytes.
///
/// # Returns
/// - `Some(suggestion)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString, rules: &Rules) -> SectionResult {
    let min_length = rules.min_length();
    if password.expose_secret().chars().count() < min_length {
        return Some(format!("Use at least {} characters.", min_length));
    }
    None
}
