//! Exact decomposition of numeric literals.
//!
//! A literal such as `-3.140e+2` is split into its sign, the digits before the
//! decimal point (as an arbitrary-precision integer), the digits after it, and
//! the decimal exponent. Nothing is converted to a binary float here, so the
//! precision asserted by the text survives untouched.
//!
//! ## Examples
//!
//! ```rust
//! use numtest::Anatomy;
//!
//! let anatomy = Anatomy::parse("-3.140e+2").unwrap();
//! assert!(anatomy.is_negative());
//! assert_eq!(anatomy.integer().to_string(), "3");
//! assert_eq!(anatomy.fraction(), &[1, 4, 0]);
//! assert_eq!(anatomy.exponent(), 2);
//! assert_eq!(anatomy.precision_exponent(), -1);
//! ```

use crate::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use std::fmt;
use std::str::FromStr;

/// The exact digit-and-exponent decomposition of a finite numeric literal.
///
/// The represented value is `±(integer . fraction) × 10^exponent`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anatomy {
    negative: bool,
    integer: BigUint,
    fraction: Vec<u8>,
    exponent: i64,
}

impl Anatomy {
    /// Decomposes a literal matching `[+-]?(\d*\.\d+|\d+\.?)([Ee][+-]?\d+)?`.
    ///
    /// The whole text must match; a valid prefix followed by anything else is
    /// rejected rather than truncated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numtest::Anatomy;
    ///
    /// assert_eq!(Anatomy::parse(".5").unwrap().fraction(), &[5]);
    /// assert_eq!(Anatomy::parse("42.").unwrap().integer().to_string(), "42");
    /// assert!(Anatomy::parse("1.5x").is_err());
    /// assert!(Anatomy::parse(".").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedNumber`] if the literal does not match the grammar
    /// or its exponent does not fit in 64 bits.
    pub fn parse(literal: &str) -> Result<Self> {
        let bytes = literal.as_bytes();
        let invalid = || Error::malformed_number(literal);
        let mut pos = 0;

        let negative = match bytes.first() {
            Some(b'-') => {
                pos += 1;
                true
            }
            Some(b'+') => {
                pos += 1;
                false
            }
            _ => false,
        };

        let integer_start = pos;
        pos = skip_digits(bytes, pos);
        let integer_digits = &bytes[integer_start..pos];

        let mut fraction = Vec::new();
        if bytes.get(pos) == Some(&b'.') {
            let fraction_start = pos + 1;
            pos = skip_digits(bytes, fraction_start);
            fraction.extend(bytes[fraction_start..pos].iter().map(|b| b - b'0'));
        }

        if integer_digits.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let mut exponent = 0i64;
        if matches!(bytes.get(pos), Some(b'e' | b'E')) {
            let exponent_start = pos + 1;
            let mut digits_start = exponent_start;
            if matches!(bytes.get(digits_start), Some(b'+' | b'-')) {
                digits_start += 1;
            }
            pos = skip_digits(bytes, digits_start);
            if pos == digits_start {
                return Err(invalid());
            }
            exponent = literal[exponent_start..pos]
                .parse::<i64>()
                .map_err(|_| invalid())?;
            // the precision exponent must stay representable
            exponent
                .checked_sub(fraction.len() as i64)
                .ok_or_else(invalid)?;
        }

        if pos != bytes.len() {
            return Err(invalid());
        }

        let integer = if integer_digits.is_empty() {
            BigUint::default()
        } else {
            BigUint::parse_bytes(integer_digits, 10).ok_or_else(invalid)?
        };

        Ok(Anatomy {
            negative,
            integer,
            fraction,
            exponent,
        })
    }

    /// Returns `true` if the literal carried a leading `-`.
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The digits before the decimal point, zero when there were none.
    #[inline]
    #[must_use]
    pub fn integer(&self) -> &BigUint {
        &self.integer
    }

    /// The digits after the decimal point, most significant first.
    #[inline]
    #[must_use]
    pub fn fraction(&self) -> &[u8] {
        &self.fraction
    }

    /// The explicit decimal exponent, zero when absent.
    #[inline]
    #[must_use]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Exponent of the least significant digit written in the literal.
    ///
    /// Half of `10^precision_exponent` is the tolerance an expected value grants.
    ///
    /// ```rust
    /// use numtest::Anatomy;
    ///
    /// assert_eq!(Anatomy::parse("3.14").unwrap().precision_exponent(), -2);
    /// assert_eq!(Anatomy::parse("1e3").unwrap().precision_exponent(), 3);
    /// assert_eq!(Anatomy::parse("0.001e-6").unwrap().precision_exponent(), -9);
    /// ```
    #[must_use]
    pub fn precision_exponent(&self) -> i64 {
        self.exponent - self.fraction.len() as i64
    }

    /// Folds every fraction digit into the integer part.
    ///
    /// Returns the signed integer and the exponent of its last digit, so that the
    /// value equals `integer × 10^exponent` exactly.
    #[must_use]
    pub fn folded(&self) -> (BigInt, i64) {
        let mut magnitude = self.integer.clone();
        for &digit in &self.fraction {
            magnitude = magnitude * 10u32 + u32::from(digit);
        }
        (signed(self.negative, magnitude), self.precision_exponent())
    }
}

impl FromStr for Anatomy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Anatomy::parse(s)
    }
}

impl fmt::Display for Anatomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}", self.integer)?;
        if !self.fraction.is_empty() {
            f.write_str(".")?;
            for digit in &self.fraction {
                write!(f, "{}", digit)?;
            }
        }
        if self.exponent != 0 {
            write!(f, "e{}", self.exponent)?;
        }
        Ok(())
    }
}

/// Non-finite values recognized as atomic keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Special {
    /// `nan`
    Nan,
    /// `inf`
    Inf,
    /// `+inf`
    PlusInf,
    /// `-inf`
    MinusInf,
}

impl Special {
    /// Recognizes `nan`, `inf`, `+inf` and `-inf`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "nan" => Some(Special::Nan),
            "inf" => Some(Special::Inf),
            "+inf" => Some(Special::PlusInf),
            "-inf" => Some(Special::MinusInf),
            _ => None,
        }
    }

    /// The keyword as it is written in output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Special::Nan => "nan",
            Special::Inf => "inf",
            Special::PlusInf => "+inf",
            Special::MinusInf => "-inf",
        }
    }
}

impl fmt::Display for Special {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified leaf token: either a special keyword or a finite decomposed number.
///
/// # Examples
///
/// ```rust
/// use numtest::{Literal, Special};
///
/// assert_eq!(Literal::parse("-inf").unwrap(), Literal::Special(Special::MinusInf));
/// assert!(matches!(Literal::parse("2.5").unwrap(), Literal::Finite(_)));
/// assert!(Literal::parse("-nan").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    /// `nan`, `inf`, `+inf` or `-inf`.
    Special(Special),
    /// Any literal of the decimal grammar.
    Finite(Anatomy),
}

impl Literal {
    /// Classifies and decomposes a leaf token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedNumber`] if the token is neither a keyword nor a
    /// complete numeric literal.
    pub fn parse(token: &str) -> Result<Self> {
        match Special::from_token(token) {
            Some(special) => Ok(Literal::Special(special)),
            None => Anatomy::parse(token).map(Literal::Finite),
        }
    }
}

impl FromStr for Literal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Literal::parse(s)
    }
}

pub(crate) fn signed(negative: bool, magnitude: BigUint) -> BigInt {
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(sign, magnitude)
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        let a = Anatomy::parse("42").unwrap();
        assert!(!a.is_negative());
        assert_eq!(a.integer(), &BigUint::from(42u32));
        assert!(a.fraction().is_empty());
        assert_eq!(a.exponent(), 0);

        let a = Anatomy::parse("-.25E-3").unwrap();
        assert!(a.is_negative());
        assert_eq!(a.integer(), &BigUint::default());
        assert_eq!(a.fraction(), &[2, 5]);
        assert_eq!(a.exponent(), -3);

        let a = Anatomy::parse("+7.e+4").unwrap();
        assert!(!a.is_negative());
        assert_eq!(a.integer(), &BigUint::from(7u32));
        assert_eq!(a.exponent(), 4);
    }

    #[test]
    fn test_parse_keeps_trailing_zeros() {
        let a = Anatomy::parse("2.00").unwrap();
        assert_eq!(a.fraction(), &[0, 0]);
        assert_eq!(a.precision_exponent(), -2);
    }

    #[test]
    fn test_parse_big_integer() {
        let a = Anatomy::parse("123456789012345678901234567890").unwrap();
        assert_eq!(a.integer().to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn test_parse_rejects_partial_matches() {
        for literal in [
            "", "+", "-", ".", "e5", "1e", "1e+", "1.2.3", "1,5", " 1", "1 ", "0x10", "1e5.0",
            "inf", "--1", "1e99999999999999999999", "1.5e-9223372036854775808",
        ] {
            assert!(
                matches!(Anatomy::parse(literal), Err(Error::MalformedNumber { .. })),
                "{:?} should be rejected",
                literal
            );
        }
    }

    #[test]
    fn test_parse_extreme_exponents() {
        let a = Anatomy::parse("1e3000000000").unwrap();
        assert_eq!(a.exponent(), 3_000_000_000);
        assert_eq!(Anatomy::parse("1e9223372036854775807").unwrap().exponent(), i64::MAX);
        let a = Anatomy::parse("1e-9223372036854775808").unwrap();
        assert_eq!(a.precision_exponent(), i64::MIN);
    }

    #[test]
    fn test_folded() {
        let (integer, exponent) = Anatomy::parse("-3.14").unwrap().folded();
        assert_eq!(integer, BigInt::from(-314));
        assert_eq!(exponent, -2);

        let (integer, exponent) = Anatomy::parse("-0.5").unwrap().folded();
        assert_eq!(integer, BigInt::from(-5));
        assert_eq!(exponent, -1);

        let (integer, exponent) = Anatomy::parse("6.78e7").unwrap().folded();
        assert_eq!(integer, BigInt::from(678));
        assert_eq!(exponent, 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Anatomy::parse("-.50e3").unwrap().to_string(), "-0.50e3");
        assert_eq!(Anatomy::parse("+12").unwrap().to_string(), "12");
    }

    #[test]
    fn test_special_tokens() {
        assert_eq!(Special::from_token("nan"), Some(Special::Nan));
        assert_eq!(Special::from_token("+inf"), Some(Special::PlusInf));
        assert_eq!(Special::from_token("Infinity"), None);
        assert_eq!(Special::MinusInf.to_string(), "-inf");
    }
}
