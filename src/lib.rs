//! Password strength checking library
//!
//! Scores a password against five criteria (length, digit, uppercase,
//! lowercase, symbol), classifies it as weak, moderate or strong, and lists
//! a suggestion for every criterion it misses.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-check` binary
//!
//! # Environment Variables
//!
//! Read by [`Rules::from_env`] only:
//!
//! - `PWD_MIN_LENGTH`: Minimum password length (default: `8`)
//! - `PWD_SYMBOLS`: Characters accepted as symbols
//!   (default: `!@#$%^&*(),.?":{}|<>`)
//!
//! # Example
//!
//! ```rust
//! use pwd_check::{evaluate, Strength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = evaluate(&password);
//!
//! assert_eq!(result.score.value(), 5);
//! assert_eq!(result.strength, Strength::Strong);
//! assert!(result.suggestions.is_empty());
//! ```

// Internal modules
mod evaluator;
mod report;
mod rules;
mod sections;
mod types;

// Public API
pub use evaluator::{evaluate, evaluate_str, Evaluator};
pub use report::{Report, EMPTY_PASSWORD_NOTICE, STRONG_PASSWORD_MESSAGE};
pub use rules::{
    Rules, RulesError, SymbolSet, DEFAULT_MIN_LENGTH, DEFAULT_SYMBOLS, MIN_LENGTH_VAR,
    SYMBOLS_VAR,
};
pub use types::{Score, ScoreResult, Strength};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_tx, DEBOUNCE};
