//! Error types for numeric literal decomposition and structure parsing.
//!
//! These errors only surface from the lower-level building blocks
//! ([`Anatomy::parse`](crate::Anatomy::parse), [`parse_numbers`](crate::parse_numbers),
//! [`CompareOptions::apply_directive`](crate::CompareOptions::apply_directive)).
//! The boolean comparison entry points absorb them: malformed output is a failed
//! match, never a crash of the test harness.
//!
//! ## Error Categories
//!
//! - **Malformed numbers**: a leaf token that is not a complete numeric literal
//! - **Malformed structures**: unbalanced brackets, dangling signs, missing or trailing values
//! - **Unknown directives**: option names that are not registered
//!
//! ## Examples
//!
//! ```rust
//! use numtest::{parse_numbers, Error};
//!
//! let result = parse_numbers("[1, 2");
//! assert!(matches!(result, Err(Error::MalformedStructure { .. })));
//!
//! if let Err(err) = result {
//!     assert!(err.to_string().contains("line 1"));
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors raised while decomposing or parsing numeric text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A leaf token does not fully match the numeric literal grammar
    #[error("invalid number syntax {literal:?}")]
    MalformedNumber { literal: String },

    /// Bracket imbalance or an unexpected token inside a structure
    #[error("invalid structure at line {line}, column {col}: {msg}")]
    MalformedStructure { line: usize, col: usize, msg: String },

    /// A directive name that is not registered
    #[error("unknown directive {0:?}")]
    UnknownDirective(String),
}

impl Error {
    /// Creates a malformed number error for the offending literal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numtest::Error;
    ///
    /// let err = Error::malformed_number("1.2.3");
    /// assert_eq!(err.to_string(), "invalid number syntax \"1.2.3\"");
    /// ```
    pub fn malformed_number(literal: &str) -> Self {
        Error::MalformedNumber {
            literal: literal.to_string(),
        }
    }

    /// Creates a malformed structure error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numtest::Error;
    ///
    /// let err = Error::malformed_structure(2, 7, "unclosed '['");
    /// assert!(err.to_string().contains("column 7"));
    /// ```
    pub fn malformed_structure(line: usize, col: usize, msg: &str) -> Self {
        Error::MalformedStructure {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an unknown directive error.
    pub fn unknown_directive(name: &str) -> Self {
        Error::UnknownDirective(name.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
