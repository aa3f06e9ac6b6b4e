//! Text rendering of a [`ScoreResult`] for front ends.
//!
//! Nothing here scores anything; it only formats what the evaluator returned.

use std::fmt;

use crate::types::ScoreResult;

/// Shown instead of a report when the caller refuses to evaluate empty input.
pub const EMPTY_PASSWORD_NOTICE: &str = "Please enter a password.";

pub const STRONG_PASSWORD_MESSAGE: &str = "Great job! Your password looks strong.";

/// Display adapter: headline followed by suggestions or a congratulation.
///
/// ```rust
/// use pwd_check::{evaluate_str, Report};
///
/// let result = evaluate_str("Abcdefg1");
/// assert_eq!(
///     Report(&result).to_string(),
///     "Password Strength: Moderate\nSuggestions:\n- Add symbols (!@#$ etc.)"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a>(pub &'a ScoreResult);

impl Report<'_> {
    pub fn headline(&self) -> String {
        format!("Password Strength: {}", self.0.strength)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline())?;
        if self.0.suggestions.is_empty() {
            return f.write_str(STRONG_PASSWORD_MESSAGE);
        }
        f.write_str("Suggestions:")?;
        for suggestion in &self.0.suggestions {
            write!(f, "\n- {}", suggestion)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate_str;

    #[test]
    fn test_report_strong() {
        let result = evaluate_str("Abcdefg1!");
        assert_eq!(
            Report(&result).to_string(),
            "Password Strength: Strong\nGreat job! Your password looks strong."
        );
    }

    #[test]
    fn test_report_weak_lists_suggestions_in_order() {
        let result = evaluate_str("abc");
        assert_eq!(
            Report(&result).to_string(),
            "Password Strength: Weak\nSuggestions:\n\
             - Use at least 8 characters.\n\
             - Include numbers.\n\
             - Add uppercase letters.\n\
             - Add symbols (!@#$ etc.)"
        );
    }

    #[test]
    fn test_headline() {
        let result = evaluate_str("A1!");
        assert_eq!(Report(&result).headline(), "Password Strength: Moderate");
    }
}
