//! Result types produced by the evaluator.

use std::fmt;

/// Number of satisfied criteria, from 0 to [`Score::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u8);

impl Score {
    /// Number of criteria a password is checked against.
    pub const MAX: u8 = 5;

    /// Builds a score, returning `None` above [`Score::MAX`].
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Progress value in the 0..=100 range (20 points per criterion).
    pub fn percent(self) -> u8 {
        self.0 * 20
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Strength classification derived from a [`Score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    /// Hex color conventionally used to paint this strength.
    pub fn color(self) -> &'static str {
        match self {
            Strength::Weak => "#e74c3c",
            Strength::Moderate => "#f39c12",
            Strength::Strong => "#27ae60",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        }
    }
}

impl From<Score> for Strength {
    fn from(score: Score) -> Self {
        match score.value() {
            0..=2 => Strength::Weak,
            3 | 4 => Strength::Moderate,
            _ => Strength::Strong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a password evaluation.
///
/// `suggestions` holds one entry per unsatisfied criterion, in evaluation
/// order, so `suggestions.len() == Score::MAX - score`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: Score,
    pub strength: Strength,
    pub suggestions: Vec<String>,
}

impl ScoreResult {
    pub(crate) fn from_suggestions(suggestions: Vec<String>) -> Self {
        let satisfied = usize::from(Score::MAX).saturating_sub(suggestions.len());
        // at most Score::MAX after the subtraction above
        let score = Score(satisfied as u8);
        Self {
            score,
            strength: Strength::from(score),
            suggestions,
        }
    }

    pub fn percent(&self) -> u8 {
        self.score.percent()
    }

    /// True when every criterion is satisfied.
    pub fn is_strong(&self) -> bool {
        self.strength == Strength::Strong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_new_rejects_out_of_range() {
        assert_eq!(Score::new(5).map(Score::value), Some(5));
        assert!(Score::new(6).is_none());
    }

    #[test]
    fn test_strength_partition() {
        let expected = [
            Strength::Weak,
            Strength::Weak,
            Strength::Weak,
            Strength::Moderate,
            Strength::Moderate,
            Strength::Strong,
        ];
        for (value, strength) in expected.into_iter().enumerate() {
            let score = Score::new(value as u8).unwrap();
            assert_eq!(Strength::from(score), strength, "score {}", value);
        }
    }

    #[test]
    fn test_percent() {
        assert_eq!(Score::new(0).unwrap().percent(), 0);
        assert_eq!(Score::new(3).unwrap().percent(), 60);
        assert_eq!(Score::new(5).unwrap().percent(), 100);
    }

    #[test]
    fn test_strength_display_and_color() {
        assert_eq!(Strength::Moderate.to_string(), "Moderate");
        assert_eq!(Strength::Weak.color(), "#e74c3c");
        assert_eq!(Strength::Strong.color(), "#27ae60");
    }

    #[test]
    fn test_from_suggestions() {
        let result = ScoreResult::from_suggestions(vec!["Include numbers.".to_string()]);
        assert_eq!(result.score.value(), 4);
        assert_eq!(result.strength, Strength::Moderate);
        assert!(!result.is_strong());
        assert_eq!(result.percent(), 80);
    }
}
