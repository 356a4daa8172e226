//! Tests for expression evaluation

use approx::assert_relative_eq;
use curve_eval::expression::{evaluate, DomainError, Expression};
use curve_eval::EvaluationResult;
use std::f64::consts::PI;

fn at(source: &str, x: f64) -> EvaluationResult {
    evaluate(&Expression::parse(source).unwrap(), x)
}

#[test]
fn test_evaluate_polynomials() {
    assert_eq!(at("2*x + 3", 5.0), EvaluationResult::Number(13.0));
    assert_eq!(at("x^2 - 4*x + 4", 2.0), EvaluationResult::Number(0.0));
    assert_eq!(at("(x - 1) * (x + 1)", 3.0), EvaluationResult::Number(8.0));
    assert_eq!(at("-x^2", 2.0), EvaluationResult::Number(-4.0));
    assert_eq!(at("2^-2", 0.0), EvaluationResult::Number(0.25));
}

#[test]
fn test_evaluate_transcendental() {
    assert_relative_eq!(at("sin(x)", PI / 2.0).value().unwrap(), 1.0);
    assert_relative_eq!(at("cos(pi)", 0.0).value().unwrap(), -1.0);
    assert_relative_eq!(at("exp(ln(x))", 7.0).value().unwrap(), 7.0, epsilon = 1e-12);
    assert_relative_eq!(at("20*log10(x)", 10.0).value().unwrap(), 20.0, epsilon = 1e-12);
    assert_relative_eq!(at("atan(x)", 1.0).value().unwrap(), PI / 4.0);
    assert_relative_eq!(at("tau / 2", 0.0).value().unwrap(), PI);
}

#[test]
fn test_domain_errors_are_values() {
    assert_eq!(
        at("1/x", 0.0),
        EvaluationResult::DomainError(DomainError::DivisionByZero)
    );
    assert_eq!(
        at("x^(1/3)", -8.0),
        EvaluationResult::DomainError(DomainError::NegativeBase)
    );
    assert_eq!(
        at("sqrt(x)", -4.0),
        EvaluationResult::DomainError(DomainError::SqrtOfNegative)
    );
    assert_eq!(
        at("log10(x)", -1.0),
        EvaluationResult::DomainError(DomainError::LogOfNonPositive { function: "log10" })
    );
    assert_eq!(
        at("acos(x)", 1.5),
        EvaluationResult::DomainError(DomainError::OutOfRange { function: "acos" })
    );
    assert_eq!(
        at("cosh(x)", 1e4),
        EvaluationResult::DomainError(DomainError::NonFinite)
    );
}

#[test]
fn test_reasons() {
    assert_eq!(DomainError::DivisionByZero.to_string(), "division by zero");
    assert_eq!(
        DomainError::NegativeBase.to_string(),
        "undefined for negative base"
    );
}

#[test]
fn test_division_by_zero_inside_larger_expression() {
    assert_eq!(
        at("3 + 2 / (x - x)", 1.0),
        EvaluationResult::DomainError(DomainError::DivisionByZero)
    );
    assert_eq!(
        at("sin(1 / (x - 2))", 2.0),
        EvaluationResult::DomainError(DomainError::DivisionByZero)
    );
}
