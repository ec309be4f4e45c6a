//! Shape-preserving representation of parsed numeric text.
//!
//! [`ParsedValue`] mirrors the bracket nesting of the text it came from: leaves
//! hold the literal token text exactly as written, nodes hold their children in
//! order. [`Shape`] captures only the nesting and lengths, and is what the
//! structural matcher compares before looking at any number.
//!
//! ## Examples
//!
//! ```rust
//! use numtest::{parse_numbers, parsed};
//!
//! let value = parse_numbers("[[0.1, 2.00], [1e-2, 3.14]]").unwrap();
//! assert_eq!(value, parsed!([["0.1", "2.00"], ["1e-2", "3.14"]]));
//! assert_eq!(value.shape().dims(), Some(vec![2, 2]));
//! assert_eq!(value.to_string(), "[[0.1, 2.00], [1e-2, 3.14]]");
//! ```

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt;

/// A leaf token or an ordered sequence of values.
///
/// Immutable once built; each parse produces a fresh, exclusively owned tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParsedValue {
    Leaf(String),
    Node(Vec<ParsedValue>),
}

impl ParsedValue {
    /// Returns `true` if this is a single token.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, ParsedValue::Leaf(_))
    }

    /// Returns `true` if this is a sequence.
    #[inline]
    #[must_use]
    pub const fn is_node(&self) -> bool {
        matches!(self, ParsedValue::Node(_))
    }

    /// Returns the token text if this is a leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            ParsedValue::Leaf(token) => Some(token),
            ParsedValue::Node(_) => None,
        }
    }

    /// Returns the children if this is a sequence.
    #[must_use]
    pub fn as_node(&self) -> Option<&[ParsedValue]> {
        match self {
            ParsedValue::Leaf(_) => None,
            ParsedValue::Node(children) => Some(children),
        }
    }

    /// Computes the nesting profile of this value.
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            ParsedValue::Leaf(_) => Shape::Scalar,
            ParsedValue::Node(children) => {
                Shape::Sequence(children.iter().map(ParsedValue::shape).collect())
            }
        }
    }

    /// Returns `true` if both values have the same nesting and lengths at every level.
    ///
    /// Equivalent to `self.shape() == other.shape()` without building either shape.
    #[must_use]
    pub fn same_shape(&self, other: &ParsedValue) -> bool {
        match (self, other) {
            (ParsedValue::Leaf(_), ParsedValue::Leaf(_)) => true,
            (ParsedValue::Node(a), ParsedValue::Node(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.same_shape(b))
            }
            _ => false,
        }
    }

    /// Iterates over the leaves in depth-first order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }
}

impl fmt::Display for ParsedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedValue::Leaf(token) => f.write_str(token),
            ParsedValue::Node(children) => {
                f.write_str("[")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl Serialize for ParsedValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ParsedValue::Leaf(token) => serializer.serialize_str(token),
            ParsedValue::Node(children) => {
                let mut seq = serializer.serialize_seq(Some(children.len()))?;
                for child in children {
                    seq.serialize_element(child)?;
                }
                seq.end()
            }
        }
    }
}

impl From<&str> for ParsedValue {
    fn from(token: &str) -> Self {
        ParsedValue::Leaf(token.to_string())
    }
}

impl From<String> for ParsedValue {
    fn from(token: String) -> Self {
        ParsedValue::Leaf(token)
    }
}

impl From<Vec<ParsedValue>> for ParsedValue {
    fn from(children: Vec<ParsedValue>) -> Self {
        ParsedValue::Node(children)
    }
}

/// Depth-first iterator over the leaf tokens of a [`ParsedValue`].
pub struct Leaves<'a> {
    stack: Vec<&'a ParsedValue>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(value) = self.stack.pop() {
            match value {
                ParsedValue::Leaf(token) => return Some(token),
                ParsedValue::Node(children) => self.stack.extend(children.iter().rev()),
            }
        }
        None
    }
}

/// The nesting and length profile of a [`ParsedValue`].
///
/// Ragged sequences are represented faithfully; [`Shape::dims`] only succeeds
/// for rectangular ones.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    Sequence(Vec<Shape>),
}

impl Shape {
    /// Returns the dimensions of a rectangular shape, `[]` for a scalar.
    ///
    /// ```rust
    /// use numtest::{parse_numbers, Shape};
    ///
    /// assert_eq!(Shape::Scalar.dims(), Some(vec![]));
    /// assert_eq!(parse_numbers("[[1, 2, 3]]").unwrap().shape().dims(), Some(vec![1, 3]));
    /// assert_eq!(parse_numbers("[[1, 2], [3]]").unwrap().shape().dims(), None);
    /// ```
    #[must_use]
    pub fn dims(&self) -> Option<Vec<usize>> {
        match self {
            Shape::Scalar => Some(Vec::new()),
            Shape::Sequence(children) => {
                let mut dims = vec![children.len()];
                if let Some((first, rest)) = children.split_first() {
                    if rest.iter().any(|child| child != first) {
                        return None;
                    }
                    dims.extend(first.dims()?);
                }
                Some(dims)
            }
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dims() {
            Some(dims) if dims.len() == 1 => write!(f, "({},)", dims[0]),
            Some(dims) => {
                let dims: Vec<String> = dims.iter().map(ToString::to_string).collect();
                write!(f, "({})", dims.join(", "))
            }
            None => match self {
                Shape::Scalar => f.write_str("()"),
                Shape::Sequence(children) => {
                    f.write_str("[")?;
                    for (i, child) in children.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", child)?;
                    }
                    f.write_str("]")
                }
            },
        }
    }
}
