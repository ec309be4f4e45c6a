//! Structural comparison of two numeric texts.
//!
//! Both sides are parsed into [`ParsedValue`] trees. The trees must have the
//! same [`Shape`]; corresponding leaves are then compared with the
//! precision-derived tolerance of the expected leaf.
//!
//! Malformed text on either side is a failed match, not an error: the
//! comparison functions here never return `Err` or panic on bad input.
//!
//! ## Examples
//!
//! ```rust
//! use numtest::{array_match, check, Mismatch};
//!
//! assert!(array_match(
//!     "[[0.33, 0.667], [0.999, 1.333]]",
//!     "[[0.333, 0.667], [0.999, 1.333]]",
//! ));
//! assert!(!array_match("[0.333]", "[0.33]"));
//! assert!(!array_match("[1, 2, 3]", "[1, 2]"));
//!
//! let mismatch = check("[1.0, 2.0]", "[1.0, 2.2]").unwrap_err();
//! assert_eq!(mismatch.to_string(), "value mismatch at [1]: expected 2.0, got 2.2");
//! ```

use crate::anatomy::Literal;
use crate::tolerance::literal_match;
use crate::{parse_numbers, Error, ParsedValue, Shape};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

/// Which side of a comparison a problem was found on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Expected,
    Actual,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Expected => f.write_str("expected"),
            Side::Actual => f.write_str("actual"),
        }
    }
}

/// The reason a tolerant comparison failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Mismatch {
    /// One side could not be parsed as numeric text
    #[error("{side} output is not numeric: {error}")]
    Malformed { side: Side, error: Error },

    /// The nesting or lengths differ
    #[error("shape mismatch: expected {expected}, got {actual}")]
    Shape { expected: Shape, actual: Shape },

    /// A leaf lies outside the tolerance of its expected counterpart
    #[error("value mismatch{}: expected {expected}, got {actual}", format_path(.path))]
    Value {
        path: Vec<usize>,
        expected: String,
        actual: String,
    },
}

fn format_path(path: &[usize]) -> String {
    if path.is_empty() {
        String::new()
    } else {
        let indices: String = path.iter().map(|i| format!("[{}]", i)).collect();
        format!(" at {}", indices)
    }
}

/// Compares two numeric texts and reports the first reason they differ.
///
/// # Errors
///
/// Returns the [`Mismatch`] that made the comparison fail.
pub fn check(expected: &str, actual: &str) -> std::result::Result<(), Mismatch> {
    let expected = parse_numbers(expected).map_err(|error| malformed(Side::Expected, error))?;
    let actual = parse_numbers(actual).map_err(|error| malformed(Side::Actual, error))?;
    check_values(&expected, &actual)
}

/// Compares two already parsed trees.
///
/// # Errors
///
/// Returns the [`Mismatch`] that made the comparison fail.
pub fn check_values(
    expected: &ParsedValue,
    actual: &ParsedValue,
) -> std::result::Result<(), Mismatch> {
    if !expected.same_shape(actual) {
        let mismatch = Mismatch::Shape {
            expected: expected.shape(),
            actual: actual.shape(),
        };
        debug!(%mismatch, "numeric comparison failed");
        return Err(mismatch);
    }

    let mut path = Vec::new();
    walk(expected, actual, &mut path)
}

/// Returns `true` if `actual` matches `expected` in shape and, leaf by leaf,
/// within the expected precision.
///
/// Empty sequences of equal shape match vacuously.
#[must_use]
pub fn array_match(expected: &str, actual: &str) -> bool {
    check(expected, actual).is_ok()
}

fn walk(
    expected: &ParsedValue,
    actual: &ParsedValue,
    path: &mut Vec<usize>,
) -> std::result::Result<(), Mismatch> {
    match (expected, actual) {
        (ParsedValue::Leaf(want), ParsedValue::Leaf(got)) => leaf_match(want, got, path),
        (ParsedValue::Node(wants), ParsedValue::Node(gots)) => {
            for (index, (want, got)) in wants.iter().zip(gots).enumerate() {
                path.push(index);
                walk(want, got, path)?;
                path.pop();
            }
            Ok(())
        }
        // Shapes were checked before walking.
        _ => Err(Mismatch::Shape {
            expected: expected.shape(),
            actual: actual.shape(),
        }),
    }
}

fn leaf_match(want: &str, got: &str, path: &[usize]) -> std::result::Result<(), Mismatch> {
    let expected = Literal::parse(want).map_err(|error| malformed(Side::Expected, error))?;
    let actual = Literal::parse(got).map_err(|error| malformed(Side::Actual, error))?;

    if literal_match(&expected, &actual) {
        Ok(())
    } else {
        trace!(expected = want, actual = got, ?path, "leaf outside tolerance");
        Err(Mismatch::Value {
            path: path.to_vec(),
            expected: want.to_string(),
            actual: got.to_string(),
        })
    }
}

fn malformed(side: Side, error: Error) -> Mismatch {
    debug!(%side, %error, "malformed numeric text treated as a mismatch");
    Mismatch::Malformed { side, error }
}
