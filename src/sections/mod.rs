//! Password evaluation sections
//!
//! Each section checks one criterion and yields a suggestion when the
//! criterion is not met.

mod length;
mod symbol;
mod variety;

pub use length::length_section;
pub use symbol::symbol_section;
pub use variety::{digit_section, lowercase_section, uppercase_section};

use crate::rules::Rules;
use secrecy::SecretString;

/// Result type for section evaluation functions.
/// - `Some(suggestion)` - Criterion not met
/// - `None` - Criterion met
pub type SectionResult = Option<String>;

pub type SectionFn = fn(&SecretString, &Rules) -> SectionResult;

/// Sections in evaluation order. Suggestions are reported in this order.
pub const SECTIONS: [(&str, SectionFn); 5] = [
    ("length", length_section),
    ("digit", digit_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("symbol", symbol_section),
];
