/// Builds a [`ParsedValue`](crate::ParsedValue) tree from a bracketed literal.
///
/// Numeric literals keep the exact text they were written with; string
/// literals are taken verbatim, which is how negative numbers and keywords are
/// written.
///
/// ```rust
/// use numtest::{parsed, ParsedValue};
///
/// let value = parsed!([[1, 2.00], ["-inf", "1e-2"]]);
/// assert_eq!(value.to_string(), "[[1, 2.00], [-inf, 1e-2]]");
/// assert_eq!(parsed!(3.14), ParsedValue::Leaf("3.14".to_string()));
/// ```
#[macro_export]
macro_rules! parsed {
    // Handle empty sequence
    ([]) => {
        $crate::ParsedValue::Node(vec![])
    };

    // Handle non-empty sequence
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::ParsedValue::Node(vec![$($crate::parsed!($elem)),*])
    };

    // Handle a single token
    ($leaf:literal) => {
        $crate::macros::leaf(stringify!($leaf))
    };
}

#[doc(hidden)]
pub fn leaf(text: &str) -> crate::ParsedValue {
    let token = text
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text);
    crate::ParsedValue::Leaf(token.to_string())
}

#[cfg(test)]
mod tests {
    use crate::ParsedValue;

    fn leaf(token: &str) -> ParsedValue {
        ParsedValue::Leaf(token.to_string())
    }

    #[test]
    fn test_parsed_macro_leaves() {
        assert_eq!(parsed!(42), leaf("42"));
        assert_eq!(parsed!(2.50), leaf("2.50"));
        assert_eq!(parsed!(1e-7), leaf("1e-7"));
        assert_eq!(parsed!("-3"), leaf("-3"));
        assert_eq!(parsed!("nan"), leaf("nan"));
    }

    #[test]
    fn test_parsed_macro_sequences() {
        assert_eq!(parsed!([]), ParsedValue::Node(vec![]));
        assert_eq!(
            parsed!([1, [2, 3], []]),
            ParsedValue::Node(vec![
                leaf("1"),
                ParsedValue::Node(vec![leaf("2"), leaf("3")]),
                ParsedValue::Node(vec![]),
            ])
        );
        assert_eq!(parsed!([1, 2,]), parsed!([1, 2]));
    }
}
