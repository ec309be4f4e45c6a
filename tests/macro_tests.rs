use numtest::{parse_numbers, parsed, ParsedValue};

#[test]
fn test_parsed_macro_numbers() {
    let int_val = parsed!(42);
    assert_eq!(int_val, ParsedValue::Leaf("42".to_string()));

    let float_val = parsed!(3.50);
    assert_eq!(float_val, ParsedValue::Leaf("3.50".to_string()));

    let exp_val = parsed!(6.78e7);
    assert_eq!(exp_val, ParsedValue::Leaf("6.78e7".to_string()));
}

#[test]
fn test_parsed_macro_strings() {
    let negative_val = parsed!("-123");
    assert_eq!(negative_val, ParsedValue::Leaf("-123".to_string()));

    let keyword = parsed!("inf");
    assert_eq!(keyword, ParsedValue::Leaf("inf".to_string()));
}

#[test]
fn test_parsed_macro_sequences() {
    let empty = parsed!([]);
    assert_eq!(empty, ParsedValue::Node(vec![]));

    let flat = parsed!([1, 2, 3]);
    assert_eq!(
        flat,
        ParsedValue::Node(vec![
            ParsedValue::Leaf("1".to_string()),
            ParsedValue::Leaf("2".to_string()),
            ParsedValue::Leaf("3".to_string()),
        ])
    );

    let nested = parsed!([[[0.1]]]);
    assert_eq!(
        nested,
        ParsedValue::Node(vec![ParsedValue::Node(vec![ParsedValue::Node(vec![
            ParsedValue::Leaf("0.1".to_string())
        ])])])
    );
}

#[test]
fn test_parsed_macro_agrees_with_parser() {
    let cases = [
        ("[[0.1, 2.00], [1e-2, 3.14]]", parsed!([[0.1, 2.00], [1e-2, 3.14]])),
        ("[-1.0, 1.0, -1.0, 1.0]", parsed!(["-1.0", 1.0, "-1.0", 1.0])),
        ("[inf, nan, []]", parsed!(["inf", "nan", []])),
        ("0.001e-6", parsed!(0.001e-6)),
    ];

    for (text, expected) in cases {
        assert_eq!(parse_numbers(text).unwrap(), expected, "{}", text);
    }
}

#[test]
fn test_parsed_macro_trailing_comma() {
    assert_eq!(parsed!([1, [2, 3,],]), parsed!([1, [2, 3]]));
}
