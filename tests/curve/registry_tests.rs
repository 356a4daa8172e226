//! Integration tests for the CurveRegistry
//!
//! These tests verify the query façade: input checking, memoization and
//! invalidation when the curve set changes.

use curve_eval::curve::{Curve, CurveDescriptor, CurveRegistry, ParseState};
use curve_eval::{
    CurveError, DomainError, EngineConfig, EvaluationResult, InputError, ParseError,
};

#[test]
fn test_registry_basic_operations() {
    let mut registry = CurveRegistry::new();
    assert_eq!(registry.len(), 0);
    assert!(registry.is_empty());

    registry
        .load_curves(vec![
            Curve::new("curve-1", "Line", "y = 2*x + 3"),
            Curve::new("curve-2", "Hyperbola", "1/x"),
        ])
        .unwrap();

    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
    assert_eq!(registry.get("curve-2").unwrap().name(), "Hyperbola");
    assert!(registry.get("curve-3").is_none());

    let names: Vec<&str> = registry.curves().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["Line", "Hyperbola"]);
}

#[test]
fn test_parse_state_transitions_once() {
    let mut registry = CurveRegistry::new();
    registry
        .load_curves(vec![
            Curve::new("good", "Good", "y = x^2"),
            Curve::new("bad", "Bad", "y = rises steeply"),
        ])
        .unwrap();

    assert_eq!(registry.get("good").unwrap().parse_state(), ParseState::Unparsed);
    assert_eq!(registry.get("bad").unwrap().parse_state(), ParseState::Unparsed);

    for input in ["1", "2", "3"] {
        assert!(registry.query_y("good", input).is_number());
        assert!(matches!(
            registry.query_y("bad", input),
            EvaluationResult::ParseError(_)
        ));
    }

    assert!(matches!(
        registry.get("good").unwrap().parse_state(),
        ParseState::Parsed(_)
    ));
    assert!(matches!(
        registry.get("bad").unwrap().parse_state(),
        ParseState::ParseFailed(_)
    ));
    assert_eq!(registry.get("good").unwrap().canonical(), Some("x^2"));
}

#[test]
fn test_cache_holds_latest_input_per_curve() {
    let mut registry = CurveRegistry::new();
    registry
        .load_curves(vec![
            Curve::new("a", "A", "x + 1"),
            Curve::new("b", "B", "x * 2"),
        ])
        .unwrap();

    for input in ["1", "1.0", "2", "1"] {
        registry.query_y("a", input);
    }
    registry.query_y("b", "4");
    assert_eq!(registry.cached_results(), 2);
    assert_eq!(registry.query_y("a", "1.0"), EvaluationResult::Number(2.0));
    assert_eq!(registry.query_y("b", "4"), EvaluationResult::Number(8.0));

    // Input errors are not memoized
    registry.query_y("a", "one");
    assert_eq!(registry.cached_results(), 2);
}

#[test]
fn test_no_stale_results_after_reload() {
    let mut registry = CurveRegistry::new();
    registry
        .load_curves(vec![Curve::new("curve-1", "First graph", "x")])
        .unwrap();
    assert_eq!(registry.query_y("curve-1", "2"), EvaluationResult::Number(2.0));

    registry
        .load_curves(vec![Curve::new("curve-1", "Second graph", "1/(x-2)")])
        .unwrap();
    assert_eq!(
        registry.query_y("curve-1", "2"),
        EvaluationResult::DomainError(DomainError::DivisionByZero)
    );
    assert_eq!(registry.get("curve-1").unwrap().name(), "Second graph");
}

#[test]
fn test_reloaded_curves_are_parsed_again() {
    let config = EngineConfig::default().with_variable("t");
    let mut first = CurveRegistry::with_config(config).unwrap();
    first
        .load_curves(vec![Curve::new("c1", "Line", "y = x + 1")])
        .unwrap();
    assert!(matches!(
        first.query_y("c1", "1"),
        EvaluationResult::ParseError(ParseError::UnknownIdentifier { .. })
    ));

    let mut second = CurveRegistry::new();
    second.load_curves(first.curves().to_vec()).unwrap();
    assert_eq!(second.query_y("c1", "1"), EvaluationResult::Number(2.0));

    // Reloading into the same registry parses again as well
    let again = second.curves().to_vec();
    second.load_curves(again).unwrap();
    assert_eq!(second.get("c1").unwrap().parse_state(), ParseState::Unparsed);
    assert_eq!(second.query_y("c1", "3"), EvaluationResult::Number(4.0));
}

#[test]
fn test_oversized_equation_is_a_parse_error() {
    let mut registry = CurveRegistry::new();
    let equation = format!("y = {}", vec!["x"; 5_000].join("+"));
    registry
        .load_curves(vec![Curve::new("long", "Long", &equation)])
        .unwrap();

    assert_eq!(
        registry.query_y("long", "1"),
        EvaluationResult::ParseError(ParseError::TooDeep { limit: 256 })
    );
    assert_eq!(registry.query_all("1").len(), 1);
}

#[test]
fn test_failures_are_independent() {
    let mut registry = CurveRegistry::new();
    registry
        .load_curves(vec![
            Curve::new("a", "A", "sqrt(x)"),
            Curve::new("b", "B", "x - 1"),
        ])
        .unwrap();

    assert!(matches!(
        registry.query_y("a", "-1"),
        EvaluationResult::DomainError(_)
    ));
    assert_eq!(registry.query_y("b", "-1"), EvaluationResult::Number(-2.0));
    assert_eq!(registry.query_y("a", "9"), EvaluationResult::Number(3.0));
}

#[test]
fn test_custom_variable_name() {
    let config = EngineConfig::default().with_variable("t");
    let mut registry = CurveRegistry::with_config(config).unwrap();
    registry
        .load_curves(vec![Curve::new("decay", "Decay", "v(t) = 5 * exp(-t)")])
        .unwrap();
    assert_eq!(registry.query_y("decay", "0"), EvaluationResult::Number(5.0));

    assert!(CurveRegistry::with_config(EngineConfig::default().with_variable("pi")).is_err());
}

#[test]
fn test_load_descriptors() {
    let mut registry = CurveRegistry::new();
    let mut first = CurveDescriptor::new("", "", "y = x / 2");
    first.x_range = Some("0 to 4".to_string());
    registry
        .load_descriptors(vec![first, CurveDescriptor::new("", "", "x")])
        .unwrap();

    assert_eq!(registry.get("curve-1").unwrap().name(), "Curve 1");
    assert_eq!(registry.get("curve-2").unwrap().name(), "Curve 2");
    assert_eq!(registry.outside_hint("curve-1", 5.0), Some(true));
    // The hint is advisory: evaluation still happens
    assert_eq!(registry.query_y("curve-1", "5"), EvaluationResult::Number(2.5));
}

#[test]
fn test_load_json_errors() {
    let mut registry = CurveRegistry::new();
    assert!(matches!(
        registry.load_json("not json"),
        Err(CurveError::JsonError(_))
    ));
    assert!(matches!(
        registry.load_json(r#"{"success": false}"#),
        Err(CurveError::Extraction(_))
    ));
    assert!(matches!(
        registry.load_json(
            r#"{"curves": [{"id": "a", "equation": "x"}, {"id": "a", "equation": "x"}]}"#
        ),
        Err(CurveError::DuplicateCurve(_))
    ));
}

#[test]
fn test_input_errors() {
    let mut registry = CurveRegistry::new();
    registry
        .load_curves(vec![Curve::new("c", "c", "x")])
        .unwrap();
    assert_eq!(
        registry.query_y("c", ""),
        EvaluationResult::InputError(InputError::NotANumber)
    );
    assert_eq!(
        registry.query_y("c", "   "),
        EvaluationResult::InputError(InputError::NotANumber)
    );
    assert_eq!(
        registry.query_y("c", "1,5"),
        EvaluationResult::InputError(InputError::NotANumber)
    );
    assert_eq!(
        registry.query_y("c", "-inf"),
        EvaluationResult::InputError(InputError::NonFinite)
    );
    assert_eq!(registry.query_y("c", " 7 "), EvaluationResult::Number(7.0));
}
