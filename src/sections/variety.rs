//! Character variety sections - digits, uppercase and lowercase letters.
//!
//! Only ASCII characters count; accented or non-Latin letters and
//! non-ASCII digits satisfy none of these criteria.

use crate::rules::Rules;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

fn missing(password: &SecretString, class: fn(&char) -> bool, suggestion: &str) -> SectionResult {
    if password.expose_secret().chars().any(|c| class(&c)) {
        None
    } else {
        Some(suggestion.to_string())
    }
}

/// Checks for at least one ASCII digit.
pub fn digit_section(password: &SecretString, _rules: &Rules) -> SectionResult {
    missing(password, char::is_ascii_digit, "Include numbers.")
}

/// Checks for at least one ASCII uppercase letter.
pub fn uppercase_section(password: &SecretString, _rules: &Rules) -> SectionResult {
    missing(password, char::is_ascii_uppercase, "Add uppercase letters.")
}

/// Checks for at least one ASCII lowercase letter.
pub fn lowercase_section(password: &SecretString, _rules: &Rules) -> SectionResult {
    missing(password, char::is_ascii_lowercase, "Add lowercase letters.")
}
