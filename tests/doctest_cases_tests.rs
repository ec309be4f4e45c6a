//! Output/expectation pairs as they appear in annotated documentation examples.
//!
//! Each case is `(expected, actual)` where `actual` is what the example printed.

use numtest::{compare, CompareOptions, NumericChecker, OutputChecker};

const PI: &str = "3.141592653589793\n";

fn tolerant(expected: &str, actual: &str) -> bool {
    let options = CompareOptions::new().apply_directive("+NUMBER").unwrap();
    NumericChecker::new().check_output(expected, actual, &options)
}

#[test]
fn test_scalars() {
    assert!(compare(PI, PI, false));
    assert!(tolerant("3.141592653589793\n", PI));
    assert!(tolerant("3.1416\n", PI));
    assert!(tolerant("3.14\n", PI));
    assert!(tolerant("3\n", PI));
    assert!(tolerant("1e3\n", "951\n"));
    assert!(tolerant("1e3\n", "1049\n"));
    assert!(tolerant("inf\n", "inf\n"));
}

#[test]
fn test_lists() {
    assert!(tolerant(
        "[3.14, 0.1, 13, 7, 8.22e5, 6.0e-3]\n",
        "[3.1415, 0.097, 13.1, 7, 822222.0, 0.00598]\n"
    ));
    assert!(tolerant(
        "[[0.33, 0.667], [0.999, 1.333]]\n",
        "[[0.333, 0.667], [0.999, 1.333]]\n"
    ));
    assert!(tolerant("[[[0.1]]]\n", "[[[0.101]]]\n"));
}

#[test]
fn test_arrays() {
    assert!(tolerant("[]\n", "array([], dtype=float64)\n"));
    assert!(tolerant("[1]\n", "array([1.])\n"));
    assert!(tolerant("[-1.0]\n", "array([-1.])\n"));
    assert!(tolerant(
        "[-1.0, 1.0, -1.0, 1.0]\n",
        "array([-1.,  1., -1.,  1.])\n"
    ));
    assert!(tolerant(
        "[[1, 2], [3, 4]]\n",
        "array([[1., 2.],\n       [3., 4.]])\n"
    ));
}

#[test]
fn test_failures() {
    assert!(!tolerant("3.141\n", "3.14\n"));
    assert!(!tolerant("[3.14, 0.1]\n", "[3.1415, 0.2]\n"));
    assert!(!tolerant("[1]\n", "array([1., 2.])\n"));
    assert!(!tolerant("[[1, 2], [3, 4]]\n", "array([1., 2., 3., 4.])\n"));
    assert!(!tolerant("-1.0\n", "1.0\n"));
}
