//! Accepted Text Grammar
//!
//! This module documents the numeric text accepted by the parser and the
//! comparison rules applied to it.
//!
//! # Overview
//!
//! Expected and actual output are parsed the same way. The text is either a
//! single number or a bracketed, arbitrarily nested list of numbers, possibly
//! wrapped in constructor-style decoration.
//!
//! # Numeric Literals
//!
//! | Part | Pattern | Notes |
//! |------|---------|-------|
//! | Sign | `[+-]?` | Kept on the literal |
//! | Mantissa | `\d*\.\d+` or `\d+\.?` | `.5`, `2.`, `42`, `3.14` |
//! | Exponent | `([Ee][+-]?\d+)?` | Fits in 64 bits |
//!
//! The whole token must match; `1.5x` is malformed, not `1.5`.
//!
//! **Keywords**: `nan`, `inf`, `+inf`, `-inf` are atomic special values.
//! `+nan` and `-nan` are malformed.
//!
//! **Precision**: the last written digit sets the precision, so trailing zeros
//! matter:
//!
//! ```text
//! 2       precision 1        accepts [1.5, 2.5]
//! 2.0     precision 0.1      accepts [1.95, 2.05]
//! 2.00    precision 0.01     accepts [1.995, 2.005]
//! 2e3     precision 1000     accepts [1500, 2500]
//! 2.0e3   precision 100      accepts [1950, 2050]
//! ```
//!
//! # Structures
//!
//! ```text
//! value    := literal | keyword | sequence
//! sequence := '[' (value | ',')* ']'
//! ```
//!
//! **Rules**:
//! - Commas are separators only; whitespace alone also separates elements
//! - A unary `+` or `-` must be directly followed by a number or keyword
//! - Nesting deeper than [`MAX_DEPTH`](crate::parser::MAX_DEPTH) is rejected
//!
//! **Examples**:
//! ```text
//! 42                       -> 42
//! [1, 2, 3]                -> [1, 2, 3]
//! [[1. 2.]                 -> [[1., 2.], [3., 4.]]
//!  [3. 4.]]
//! [-1.0, inf, nan]         -> [-1.0, inf, nan]
//! ```
//!
//! # Decoration
//!
//! Tokens before the first number, keyword, bracket or sign are skipped. After
//! the value, commas are skipped and the first other token that cannot start a
//! value ends the scan:
//!
//! ```text
//! array([0, 1, 2], uint8)           -> [0, 1, 2]
//! array([ 1.,  2.], dtype=float32)  -> [1., 2.]
//! array(3.5)                        -> 3.5
//! ```
//!
//! # Malformed Text
//!
//! | Input | Reason |
//! |-------|--------|
//! | `[1, 2` | unclosed `[` |
//! | `[1]]` | unmatched `]` |
//! | `[1, x]` | unexpected token inside brackets |
//! | `-[1]`, `-` | sign without a number |
//! | `1 2`, `(1, 2)` | a second top-level value |
//! | empty text, `hello` | no numeric value |
//!
//! Malformed text never raises from the comparison entry points; it simply
//! fails to match.
//!
//! # Comparison
//!
//! - Shapes must be equal: same nesting, same length at every level. A scalar
//!   never matches a one-element list.
//! - `nan` matches only `nan`.
//! - `inf` matches `inf` and `+inf`; `+inf` matches only `+inf`; `-inf` only `-inf`.
//! - A finite expected value `e` with precision `u` matches a finite actual
//!   value `a` iff `|a - e| <= u / 2`. Both bounds are inclusive.
//! - Finite values never match special values.

// This module contains only documentation; no implementation code
