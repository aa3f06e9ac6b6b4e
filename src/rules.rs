//! Evaluation rules
//!
//! Holds the tunable parameters of the criteria: minimum length and the
//! accepted symbol set.

use std::env::VarError;
use std::fmt;
use thiserror::Error;

/// Symbols accepted by the symbol criterion unless overridden.
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum password length unless overridden.
pub const DEFAULT_MIN_LENGTH: usize = 8;

pub const MIN_LENGTH_VAR: &str = "PWD_MIN_LENGTH";
pub const SYMBOLS_VAR: &str = "PWD_SYMBOLS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("Symbol set is empty")]
    EmptySymbolSet,
    #[error("Invalid symbol {0:?}: letters, digits and whitespace are not symbols")]
    InvalidSymbol(char),
    #[error("Minimum length must be at least 1")]
    ZeroMinLength,
    #[error("Invalid minimum length: {0:?}")]
    InvalidMinLength(String),
    #[error("{var} is not valid unicode: {value:?}")]
    NotUnicode { var: &'static str, value: String },
}

/// Set of characters that satisfy the symbol criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    chars: Vec<char>,
}

impl SymbolSet {
    /// Builds a symbol set from the characters of `symbols`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `symbols` is empty
    /// - a character is an ASCII letter, an ASCII digit or whitespace
    pub fn new(symbols: &str) -> Result<Self, RulesError> {
        let mut chars = Vec::new();
        for c in symbols.chars() {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                return Err(RulesError::InvalidSymbol(c));
            }
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        if chars.is_empty() {
            return Err(RulesError::EmptySymbolSet);
        }
        Ok(Self { chars })
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`: construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self {
            chars: DEFAULT_SYMBOLS.chars().collect(),
        }
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Parameters of the five criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    min_length: usize,
    symbols: SymbolSet,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            symbols: SymbolSet::default(),
        }
    }
}

impl Rules {
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn with_min_length(mut self, min_length: usize) -> Result<Self, RulesError> {
        if min_length == 0 {
            return Err(RulesError::ZeroMinLength);
        }
        self.min_length = min_length;
        Ok(self)
    }

    pub fn with_symbols(mut self, symbols: SymbolSet) -> Self {
        self.symbols = symbols;
        self
    }

    /// Builds rules from the environment.
    ///
    /// Priority for each parameter:
    /// 1. Environment variable (`PWD_MIN_LENGTH`, `PWD_SYMBOLS`)
    /// 2. Built-in default
    ///
    /// # Errors
    ///
    /// A variable that is set but invalid is an error, not a fallback.
    pub fn from_env() -> Result<Self, RulesError> {
        let mut rules = Self::default();

        if let Some(raw) = read_var(MIN_LENGTH_VAR)? {
            let min_length = raw.trim().parse::<usize>().map_err(|_| {
                #[cfg(feature = "tracing")]
                tracing::warn!("Rejected {}: not a positive integer", MIN_LENGTH_VAR);
                RulesError::InvalidMinLength(raw.clone())
            })?;
            rules = rules.with_min_length(min_length)?;
        }

        if let Some(raw) = read_var(SYMBOLS_VAR)? {
            let symbols = SymbolSet::new(&raw).inspect_err(|_e| {
                #[cfg(feature = "tracing")]
                tracing::warn!("Rejected {}: {}", SYMBOLS_VAR, _e);
            })?;
            rules = rules.with_symbols(symbols);
        }

        Ok(rules)
    }
}

/// Returns `None` only when `var` is unset; a non-unicode value is an error.
fn read_var(var: &'static str) -> Result<Option<String>, RulesError> {
    match std::env::var(var) {
        Ok(raw) => Ok(Some(raw)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected {}: not valid unicode", var);
            Err(RulesError::NotUnicode {
                var,
                value: raw.to_string_lossy().into_owned(),
            })
        }
    }
}
