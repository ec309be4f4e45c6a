//! # numtest
//!
//! Precision-aware comparison of numeric text, for example-based test harnesses.
//!
//! ## Why?
//!
//! Plain string equality is too strict for floating-point output: two
//! numerically equivalent values rarely print identically across platforms or
//! rounding paths. `numtest` parses the expected and actual text into numbers
//! and lets the *expected text* decide the tolerance: each expected value
//! accepts anything within half a unit of its last written digit.
//!
//! | Expected | Accepts |
//! |----------|---------|
//! | `3.14` | `[3.135, 3.145]` |
//! | `3` | `[2.5, 3.5]` |
//! | `1e3` | `[500, 1500]` |
//! | `[1, 2]` | two-element lists whose elements are within `0.5` of `1` and `2` |
//!
//! ## Key Features
//!
//! - **Exact**: decomposition and comparison work on decimal digits and
//!   arbitrary-precision integers, never on binary floats
//! - **Structural**: nested lists must have the same shape before any element is compared
//! - **Forgiving about decoration**: `array([...], dtype=float32)` and whitespace
//!   separated `[1. 2. 3.]` output parse as plain lists
//! - **Never crashes the harness**: malformed output is a failed match, not an error
//!
//! ## Quick Start
//!
//! ```rust
//! use numtest::compare;
//!
//! // Tolerant mode
//! assert!(compare("3.14\n", "3.141592653589793\n", true));
//! assert!(compare("[[0.33, 0.667]]", "[[0.333, 0.667]]", true));
//! assert!(!compare("[1, 2, 3]", "[1, 2]", true));
//!
//! // Strict mode is plain text equality
//! assert!(!compare("3.14\n", "3.141592653589793\n", false));
//! ```
//!
//! ## Plugging into a test host
//!
//! A host keeps an [`OutputChecker`] and the [`CompareOptions`] of each example:
//!
//! ```rust
//! use numtest::{CompareOptions, NumericChecker, OutputChecker};
//!
//! let checker = NumericChecker::new();
//! let options = CompareOptions::new().apply_directive("+NUMBER").unwrap();
//!
//! let (want, got) = ("[3.14, 0.1, 13]\n", "[3.1415, 0.097, 13.1]\n");
//! if !checker.check_output(want, got, &options) {
//!     eprintln!("{}", checker.output_difference(want, got, &options));
//! }
//! ```
//!
//! ## Thread Safety
//!
//! Every comparison is a pure function of its inputs. There is no global
//! state, so checkers can be shared freely between threads.

pub mod anatomy;
pub mod checker;
pub mod error;
pub mod grammar;
pub mod macros;
pub mod matcher;
pub mod options;
pub mod parser;
pub mod tolerance;
pub mod value;

pub use anatomy::{Anatomy, Literal, Special};
pub use checker::{strip_line_terminator, NumericChecker, OutputChecker, TextChecker};
pub use error::{Error, Result};
pub use matcher::{array_match, check, check_values, Mismatch, Side};
pub use options::{CompareOptions, Directive};
pub use parser::parse_numbers;
pub use tolerance::{literal_match, number_match};
pub use value::{ParsedValue, Shape};

/// Compares an expected text block with the actual output of an example.
///
/// With `tolerant` set, both texts are parsed as numbers or nested lists and
/// compared with the precision of `expected`; otherwise they must be equal as
/// text.
///
/// # Examples
///
/// ```rust
/// use numtest::compare;
///
/// assert!(compare("1e3", "951", true));
/// assert!(compare("inf\n", "+inf\n", true));
/// assert!(!compare("[1, 2]", "[1, 2", true));
/// assert!(compare("[1, 2]", "[1, 2]", false));
/// ```
#[must_use]
pub fn compare(expected: &str, actual: &str, tolerant: bool) -> bool {
    compare_with_options(
        expected,
        actual,
        &CompareOptions::new().with_tolerant(tolerant),
    )
}

/// Compares an expected text block with actual output under custom options.
///
/// # Examples
///
/// ```rust
/// use numtest::{compare_with_options, CompareOptions};
///
/// let options = CompareOptions::new().with_normalize_whitespace(true);
/// assert!(compare_with_options("1   2\n", "1 2\n", &options));
/// ```
#[must_use]
pub fn compare_with_options(expected: &str, actual: &str, options: &CompareOptions) -> bool {
    NumericChecker::new().check_output(expected, actual, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_tolerant() {
        assert!(compare("3.14\n", "3.141592653589793\n", true));
        assert!(compare("3\n", "3.141592653589793\n", true));
        assert!(!compare("3.141\n", "3.14\n", true));
    }

    #[test]
    fn test_compare_strict() {
        assert!(compare("3.14\n", "3.14\n", false));
        assert!(!compare("3.14\n", "3.140\n", false));
    }

    #[test]
    fn test_compare_strips_one_line_terminator() {
        assert!(compare("1.5\n", "1.5", true));
        assert!(compare("1.5\r\n", "1.5\n", true));
    }

    #[test]
    fn test_compare_never_panics_on_garbage() {
        for actual in ["", "[", "]", "[[1]", "-", "Traceback (most recent call last):", "1 2"] {
            assert!(!compare("[1]", actual, true), "{:?}", actual);
        }
    }
}
