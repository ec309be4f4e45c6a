//! Precision-derived tolerance comparison of two numeric literals.
//!
//! The tolerance is not a fixed epsilon: it is half a unit in the last digit
//! written in the *expected* literal. `3.14` accepts anything in
//! `[3.135, 3.145]`, `1e3` accepts anything in `[500, 1500]`.
//!
//! ## Algorithm
//!
//! 1. The expected value is folded into an integer `W` at exponent `p`
//!    (the exponent of its last written digit).
//! 2. The actual value is aligned to the same exponent: its integer part `G`
//!    is `floor(actual / 10^p)` and the digits finer than `10^p` form a
//!    remainder `R` in `[0, 1)`.
//! 3. With `half = 0.5`, the values match iff `G == W && R <= half` (actual
//!    rounds down onto expected) or `G == W - 1 && R >= half` (actual rounds
//!    up onto expected).
//!
//! Everything is done on integers and digit sequences; no binary floating point
//! is involved. Both bounds are inclusive, so the accepted interval is closed
//! and symmetric under negation.
//!
//! ## Examples
//!
//! ```rust
//! use numtest::number_match;
//!
//! assert!(number_match("3.14", "3.141592653589793").unwrap());
//! assert!(!number_match("3.141", "3.14").unwrap());
//! assert!(number_match("1e3", "951").unwrap());
//! assert!(number_match("inf", "+inf").unwrap());
//! ```

use crate::anatomy::{signed, Anatomy, Literal, Special};
use crate::Result;
use num_bigint::{BigInt, BigUint};
use std::collections::VecDeque;

/// Compares two leaf tokens, `expected` granting the tolerance.
///
/// # Errors
///
/// Returns [`Error::MalformedNumber`](crate::Error::MalformedNumber) if either
/// token is not a valid literal. A legitimate mismatch is `Ok(false)`.
pub fn number_match(expected: &str, actual: &str) -> Result<bool> {
    let expected = Literal::parse(expected)?;
    let actual = Literal::parse(actual)?;
    Ok(literal_match(&expected, &actual))
}

/// Compares two classified literals.
///
/// A special value only ever matches a special value, and a finite value only a
/// finite one.
#[must_use]
pub fn literal_match(expected: &Literal, actual: &Literal) -> bool {
    match (expected, actual) {
        (Literal::Special(expected), Literal::Special(actual)) => special_match(*expected, *actual),
        (Literal::Finite(expected), Literal::Finite(actual)) => anatomy_match(expected, actual),
        _ => false,
    }
}

/// `nan` matches only `nan`; infinities match the same signed token, and an
/// unsigned expected `inf` also accepts `+inf`.
#[must_use]
pub fn special_match(expected: Special, actual: Special) -> bool {
    match expected {
        Special::Inf => matches!(actual, Special::Inf | Special::PlusInf),
        other => other == actual,
    }
}

/// Compares two finite numbers with the half-unit-in-last-digit rule.
#[must_use]
pub fn anatomy_match(expected: &Anatomy, actual: &Anatomy) -> bool {
    let (want, precision) = expected.folded();
    let Some(got) = Aligned::new(actual, precision, decimal_len(want.magnitude())) else {
        return false;
    };

    let half = half_unit(got.remainder.len());
    if got.integer == want {
        got.remainder <= half
    } else if got.integer == want - 1u32 {
        got.remainder >= half
    } else {
        false
    }
}

/// An actual value expressed at the expected value's precision.
#[derive(Debug)]
struct Aligned {
    /// `floor(actual / 10^precision)`
    integer: BigInt,
    /// Digits of `actual / 10^precision - integer`, never empty.
    remainder: Vec<u8>,
}

impl Aligned {
    /// Aligns `actual` so that its integer part sits at `precision`.
    ///
    /// Returns `None` when the aligned integer would have more than
    /// `max_digits + 1` digits, in which case it cannot be within one unit of
    /// the expected integer.
    fn new(actual: &Anatomy, precision: i64, max_digits: usize) -> Option<Self> {
        let mut magnitude = actual.integer().clone();
        let mut fraction: VecDeque<u8> = actual.fraction().iter().copied().collect();
        // exponents span the whole i64 range, so their differences need i128
        let precision = i128::from(precision);
        let mut exponent = i128::from(actual.exponent());

        while exponent > precision {
            let Some(digit) = fraction.pop_front() else {
                break;
            };
            magnitude = magnitude * 10u32 + u32::from(digit);
            exponent -= 1;
        }

        if exponent > precision {
            // Fraction exhausted: the remaining shifts only append zeros.
            let zeros = exponent - precision;
            if magnitude != BigUint::default() {
                if decimal_len(&magnitude) as i128 + zeros > max_digits as i128 + 1 {
                    return None;
                }
                magnitude *= BigUint::from(10u32).pow(u32::try_from(zeros).ok()?);
            }
            exponent = precision;
        }

        if exponent < precision {
            let shifts = precision - exponent;
            let digits = magnitude.to_radix_be(10);
            if shifts <= digits.len() as i128 {
                let split = digits.len() - shifts as usize;
                magnitude = BigUint::from_radix_be(&digits[..split], 10).unwrap_or_default();
                for &digit in digits[split..].iter().rev() {
                    fraction.push_front(digit);
                }
            } else {
                // Leading zeros beyond the first cannot change a comparison with one half.
                for &digit in digits.iter().rev() {
                    fraction.push_front(digit);
                }
                fraction.push_front(0);
                magnitude = BigUint::default();
            }
        }

        let mut remainder: Vec<u8> = fraction.into();
        if remainder.is_empty() {
            remainder.push(0);
        }

        let integer = if actual.is_negative() && remainder.iter().any(|&d| d != 0) {
            remainder = complement(&remainder);
            -signed(false, magnitude) - 1u32
        } else {
            signed(actual.is_negative(), magnitude)
        };

        Some(Aligned { integer, remainder })
    }
}

/// Digits of one half, padded with zeros to `len` digits.
fn half_unit(len: usize) -> Vec<u8> {
    let mut half = vec![0; len.max(1)];
    half[0] = 5;
    half
}

/// Ten's complement of a non-zero fraction: the digits of `1 - 0.d1d2...dn`.
fn complement(digits: &[u8]) -> Vec<u8> {
    let mut result = digits.to_vec();
    let last = digits.iter().rposition(|&d| d != 0).unwrap_or(0);
    for (i, digit) in result.iter_mut().enumerate().take(last + 1) {
        *digit = if i == last { 10 - *digit } else { 9 - *digit };
    }
    result
}

fn decimal_len(value: &BigUint) -> usize {
    value.to_radix_be(10).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(expected: &str, actual: &str) -> bool {
        number_match(expected, actual).unwrap()
    }

    #[test]
    fn test_precision_rule() {
        assert!(matches("3.14", "3.141592653589793"));
        assert!(matches("3.1416", "3.141592653589793"));
        assert!(matches("3", "3.141592653589793"));
        assert!(matches("3.141592653589793", "3.141592653589793"));
        assert!(!matches("3.141", "3.14"));
        assert!(!matches("3.14", "3.16"));
    }

    #[test]
    fn test_exponent_precision() {
        assert!(matches("1e3", "951"));
        assert!(matches("1e3", "1049"));
        assert!(matches("1e3", "1050"));
        assert!(matches("8.22e5", "8.22222e5"));
        assert!(matches("6.0e-3", "0.598e-2"));
        assert!(!matches("6.0e-3", "0.65e-2"));
    }

    #[test]
    fn test_half_unit_boundaries() {
        assert!(matches("1e3", "500"));
        assert!(matches("1e3", "1500"));
        assert!(!matches("1e3", "499.999"));
        assert!(!matches("1e3", "1500.001"));

        assert!(matches("0.1", "0.05"));
        assert!(matches("0.1", "0.15"));
        assert!(!matches("0.1", "0.0499"));
        assert!(!matches("0.1", "0.1501"));
    }

    #[test]
    fn test_negative_boundaries_are_symmetric() {
        assert!(matches("-1e3", "-500"));
        assert!(matches("-1e3", "-1500"));
        assert!(!matches("-1e3", "-499"));
        assert!(!matches("-1e3", "-1501"));
        assert!(matches("-3.14", "-3.141592653589793"));
        assert!(!matches("-3.14", "3.14"));
    }

    #[test]
    fn test_sign_crossing_near_zero() {
        assert!(matches("0", "-0.3"));
        assert!(matches("0", "-0.5"));
        assert!(!matches("0", "-0.51"));
        assert!(matches("-0.0", "0.04"));
        assert!(matches("-0", "0"));
    }

    #[test]
    fn test_far_exponents_do_not_blow_up() {
        assert!(!matches("1", "1e2000000000"));
        assert!(matches("1e2000000000", "1.0e2000000000"));
        assert!(matches("1", "1.00000000000000000000000000000000000001"));
        assert!(!matches("1e-2000000000", "1"));
        assert!(matches("0", "1e-2000000000"));
        assert!(matches("0", "-1e-2000000000"));
    }

    #[test]
    fn test_exponents_beyond_32_bits() {
        assert!(matches("1e3000000000", "1e3000000000"));
        assert!(matches("1e3000000000", "1.0e3000000000"));
        assert!(!matches("1e3000000000", "1e-3000000000"));
        assert!(!matches("1e3000000000", "2"));
        assert!(matches("1e9223372036854775807", "1e9223372036854775807"));
        assert!(!matches("1e9223372036854775807", "1e-9223372036854775808"));
        assert!(!matches("0e-9223372036854775808", "1e9223372036854775807"));
    }

    #[test]
    fn test_special_values() {
        assert!(matches("inf", "inf"));
        assert!(matches("inf", "+inf"));
        assert!(!matches("+inf", "inf"));
        assert!(!matches("-inf", "inf"));
        assert!(matches("-inf", "-inf"));
        assert!(matches("nan", "nan"));
        assert!(!matches("nan", "1"));
        assert!(!matches("1", "nan"));
        assert!(!matches("1e308", "inf"));
    }

    #[test]
    fn test_malformed_propagates() {
        assert!(number_match("1.2.3", "1").is_err());
        assert!(number_match("1", "one").is_err());
    }

    #[test]
    fn test_complement() {
        assert_eq!(complement(&[3]), vec![7]);
        assert_eq!(complement(&[1, 5, 0]), vec![8, 5, 0]);
        assert_eq!(complement(&[0, 0, 1]), vec![9, 9, 9]);
    }

    #[test]
    fn test_half_unit() {
        assert_eq!(half_unit(0), vec![5]);
        assert_eq!(half_unit(1), vec![5]);
        assert_eq!(half_unit(3), vec![5, 0, 0]);
    }
}
