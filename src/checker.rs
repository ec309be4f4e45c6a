//! Comparison strategies a test host plugs in to check example output.
//!
//! A host holds an [`OutputChecker`] and calls it with the expected text, the
//! text the example actually produced, and the [`CompareOptions`] in effect for
//! that example. [`NumericChecker`] adds tolerant numeric comparison on top of
//! any other checker, which it delegates to whenever tolerant mode is off.
//!
//! ## Examples
//!
//! ```rust
//! use numtest::{CompareOptions, NumericChecker, OutputChecker};
//!
//! let checker = NumericChecker::new();
//! let options = CompareOptions::new().apply_directive("+NUMBER").unwrap();
//!
//! assert!(checker.check_output("3.14\n", "3.141592653589793\n", &options));
//! assert!(!checker.check_output("3.14\n", "3.141592653589793\n", &CompareOptions::new()));
//! ```

use crate::matcher::check;
use crate::CompareOptions;

/// Decides whether an example's output matches what was expected.
pub trait OutputChecker {
    /// Returns `true` if `got` is an acceptable rendering of `want`.
    fn check_output(&self, want: &str, got: &str, options: &CompareOptions) -> bool;

    /// Describes the difference between `want` and `got` for a failure report.
    fn output_difference(&self, want: &str, got: &str, _options: &CompareOptions) -> String {
        format!("Expected:\n{}Got:\n{}", indent(want), indent(got))
    }
}

/// Plain text comparison: exact, or modulo whitespace runs when
/// `normalize_whitespace` is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextChecker;

impl OutputChecker for TextChecker {
    fn check_output(&self, want: &str, got: &str, options: &CompareOptions) -> bool {
        if want == got {
            return true;
        }
        options.normalize_whitespace && want.split_whitespace().eq(got.split_whitespace())
    }
}

/// Tolerant numeric comparison layered over a fallback checker.
///
/// When `options.tolerant` is set, one trailing line terminator is stripped
/// from each side and the texts go through the structural matcher. Otherwise
/// the fallback decides.
///
/// # Examples
///
/// ```rust
/// use numtest::{CompareOptions, NumericChecker, OutputChecker, TextChecker};
///
/// let checker = NumericChecker::with_fallback(TextChecker);
/// let options = CompareOptions::tolerant();
///
/// assert!(checker.check_output("[1, 2]\n", "[1.0, 2.0]\n", &options));
/// assert!(!checker.check_output("[1, 2]\n", "[1.0, 2.0, 3.0]\n", &options));
/// ```
#[derive(Clone, Debug, Default)]
pub struct NumericChecker<F = TextChecker> {
    fallback: F,
}

impl NumericChecker {
    /// Creates a numeric checker falling back to [`TextChecker`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F> NumericChecker<F> {
    /// Creates a numeric checker falling back to the host's own checker.
    #[must_use]
    pub fn with_fallback(fallback: F) -> Self {
        NumericChecker { fallback }
    }

    /// Returns the checker used when tolerant mode is off.
    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<F: OutputChecker> OutputChecker for NumericChecker<F> {
    fn check_output(&self, want: &str, got: &str, options: &CompareOptions) -> bool {
        if options.tolerant {
            check(strip_line_terminator(want), strip_line_terminator(got)).is_ok()
        } else {
            self.fallback.check_output(want, got, options)
        }
    }

    fn output_difference(&self, want: &str, got: &str, options: &CompareOptions) -> String {
        let difference = self.fallback.output_difference(want, got, options);
        if !options.tolerant {
            return difference;
        }
        match check(strip_line_terminator(want), strip_line_terminator(got)) {
            Ok(()) => difference,
            Err(mismatch) => format!("{}Reason:\n    {}\n", difference, mismatch),
        }
    }
}

/// Removes at most one trailing `\n` or `\r\n`.
///
/// ```rust
/// use numtest::strip_line_terminator;
///
/// assert_eq!(strip_line_terminator("1.5\n"), "1.5");
/// assert_eq!(strip_line_terminator("1.5\r\n"), "1.5");
/// assert_eq!(strip_line_terminator("1.5\n\n"), "1.5\n");
/// assert_eq!(strip_line_terminator("1.5"), "1.5");
/// ```
#[must_use]
pub fn strip_line_terminator(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

fn indent(text: &str) -> String {
    text.lines().map(|line| format!("    {}\n", line)).collect()
}
