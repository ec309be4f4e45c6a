//! Configuration for output comparison.
//!
//! This module provides:
//!
//! - [`CompareOptions`]: per-example or per-suite comparison settings
//! - [`Directive`]: the registered option names a host can toggle from example
//!   annotations such as `+NUMBER`
//!
//! ## Examples
//!
//! ```rust
//! use numtest::{CompareOptions, Directive};
//!
//! // Tolerant numeric comparison
//! let options = CompareOptions::tolerant();
//! assert!(options.tolerant);
//!
//! // From an example annotation
//! let options = CompareOptions::new().apply_directive("+NUMBER").unwrap();
//! assert!(options.tolerant);
//!
//! // Hosts can check that tolerant mode is available
//! assert!("NUMBER".parse::<Directive>().is_ok());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named comparison option that can be switched on or off per example.
///
/// The set is fixed at compile time, so registration happens once and is
/// read-only afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Directive {
    /// Compare numbers with a tolerance derived from the expected precision.
    Number,
    /// Treat all runs of whitespace as equal in the default text comparison.
    NormalizeWhitespace,
}

impl Directive {
    /// Every registered directive.
    pub const ALL: [Directive; 2] = [Directive::Number, Directive::NormalizeWhitespace];

    /// Returns the annotation name of this directive.
    ///
    /// ```rust
    /// use numtest::Directive;
    ///
    /// assert_eq!(Directive::Number.name(), "NUMBER");
    /// assert_eq!(Directive::NormalizeWhitespace.name(), "NORMALIZE_WHITESPACE");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Directive::Number => "NUMBER",
            Directive::NormalizeWhitespace => "NORMALIZE_WHITESPACE",
        }
    }
}

impl FromStr for Directive {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Directive::ALL
            .into_iter()
            .find(|directive| directive.name() == s)
            .ok_or_else(|| Error::unknown_directive(s))
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings for comparing one expected/actual pair.
///
/// Deserializable with every field optional, so a host can keep suite-wide
/// defaults in its own configuration file.
///
/// # Examples
///
/// ```rust
/// use numtest::CompareOptions;
///
/// let options = CompareOptions::new()
///     .with_tolerant(true)
///     .with_normalize_whitespace(true);
/// assert!(options.tolerant);
/// assert!(options.normalize_whitespace);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Route through the numeric structural matcher instead of text equality.
    pub tolerant: bool,
    /// Collapse whitespace before the default text comparison.
    pub normalize_whitespace: bool,
}

impl CompareOptions {
    /// Creates default options (strict text comparison).
    ///
    /// ```rust
    /// use numtest::CompareOptions;
    ///
    /// let options = CompareOptions::new();
    /// assert!(!options.tolerant);
    /// assert!(!options.normalize_whitespace);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with tolerant numeric comparison enabled.
    #[must_use]
    pub fn tolerant() -> Self {
        CompareOptions {
            tolerant: true,
            ..Default::default()
        }
    }

    /// Enables or disables tolerant numeric comparison.
    #[must_use]
    pub fn with_tolerant(mut self, tolerant: bool) -> Self {
        self.tolerant = tolerant;
        self
    }

    /// Enables or disables whitespace-insensitive text comparison.
    #[must_use]
    pub fn with_normalize_whitespace(mut self, normalize_whitespace: bool) -> Self {
        self.normalize_whitespace = normalize_whitespace;
        self
    }

    /// Sets or clears a single directive.
    #[must_use]
    pub fn with_directive(mut self, directive: Directive, enabled: bool) -> Self {
        match directive {
            Directive::Number => self.tolerant = enabled,
            Directive::NormalizeWhitespace => self.normalize_whitespace = enabled,
        }
        self
    }

    /// Returns whether a directive is currently enabled.
    #[must_use]
    pub fn is_enabled(&self, directive: Directive) -> bool {
        match directive {
            Directive::Number => self.tolerant,
            Directive::NormalizeWhitespace => self.normalize_whitespace,
        }
    }

    /// Applies an annotation such as `"+NUMBER, -NORMALIZE_WHITESPACE"`.
    ///
    /// Entries are separated by commas and/or whitespace; each must be a
    /// registered directive name prefixed with `+` (enable) or `-` (disable).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numtest::CompareOptions;
    ///
    /// let options = CompareOptions::new()
    ///     .apply_directive("+NUMBER +NORMALIZE_WHITESPACE")
    ///     .unwrap()
    ///     .apply_directive("-NORMALIZE_WHITESPACE")
    ///     .unwrap();
    /// assert!(options.tolerant);
    /// assert!(!options.normalize_whitespace);
    ///
    /// assert!(CompareOptions::new().apply_directive("+FLOAT").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDirective`] for an unregistered name or an entry
    /// without a `+`/`-` prefix.
    pub fn apply_directive(mut self, text: &str) -> Result<Self> {
        let entries = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|entry| !entry.is_empty());

        for entry in entries {
            let (enabled, name) = if let Some(name) = entry.strip_prefix('+') {
                (true, name)
            } else if let Some(name) = entry.strip_prefix('-') {
                (false, name)
            } else {
                return Err(Error::unknown_directive(entry));
            };
            self = self.with_directive(name.parse()?, enabled);
        }

        Ok(self)
    }
}
