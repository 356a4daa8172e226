//! Tests for equation normalization

use curve_eval::{looks_mathematical, normalize, Expression};

#[test]
fn test_normalize_extraction_output() {
    // Typical outputs of the extraction step
    assert_eq!(normalize("y = 2*x + 3"), "2*x+3");
    assert_eq!(normalize("y = 0.0023 × x^2 − 0.15 × x + 4.2"), "0.0023*x^2-0.15*x+4.2");
    assert_eq!(normalize("Y = 10 ÷ (x + 1)"), "10/(x+1)");
    assert_eq!(normalize("I(V) = 1e-3 * exp(V / 0.025)"), "1e-3*exp(V/0.025)");

    // The exponent caret passes through
    assert_eq!(normalize("x ^ 2"), "x^2");
}

#[test]
fn test_normalized_text_parses() {
    for raw in [
        "y = 2*x + 3",
        "y = 3 × x²",
        "f(x) = sqrt(x) ÷ 2",
        "y = −x + 1",
        "y = log10(x) · 20",
    ] {
        let canonical = normalize(raw);
        assert!(
            Expression::parse(&canonical).is_ok(),
            "{:?} normalized to {:?} which does not parse",
            raw,
            canonical
        );
    }
}

#[test]
fn test_normalize_is_total() {
    // Nothing here panics, even though none of it is an equation
    for raw in ["", "=", "==", "y =", "(((", "😀 = 1", "y = = x"] {
        let once = normalize(raw);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn test_looks_mathematical() {
    assert!(looks_mathematical("y = 2*x + 3"));
    assert!(looks_mathematical("exponential (approximately)"));
    assert!(!looks_mathematical("the curve rises steeply"));
}
