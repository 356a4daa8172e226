//! A single extracted curve and its memoized parse

use std::sync::OnceLock;

use tracing::{debug, warn};

use super::hint::DomainHint;
use crate::config::EngineConfig;
use crate::expression::{evaluate, Expression, ParseError};
use crate::normalize::{looks_mathematical, normalize};
use crate::result::EvaluationResult;

/// Outcome of the one parse attempt a curve gets
#[derive(Debug, Clone)]
struct ParsedEquation {
    canonical: String,
    outcome: Result<Expression, ParseError>,
}

/// Parse progress of a curve's equation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseState<'a> {
    /// No query has needed the equation yet
    Unparsed,

    /// The equation parsed into this tree
    Parsed(&'a Expression),

    /// The equation cannot be parsed, for this reason
    ParseFailed(&'a ParseError),
}

/// A named analytic relationship between two axes, extracted from a graph
///
/// The raw equation is fixed at construction. Its canonical form and parse
/// result are computed on first use and kept for the lifetime of the curve,
/// so the transition out of [`ParseState::Unparsed`] happens at most once.
#[derive(Debug, Clone)]
pub struct Curve {
    id: String,
    name: String,
    raw_equation: String,
    x_axis: String,
    y_axis: String,
    domain_hint: Option<DomainHint>,
    notes: Option<String>,
    parsed: OnceLock<ParsedEquation>,
}

impl Curve {
    /// Create a curve with default axis labels `x` and `y`
    pub fn new(id: &str, name: &str, raw_equation: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            raw_equation: raw_equation.to_string(),
            x_axis: "x".to_string(),
            y_axis: "y".to_string(),
            domain_hint: None,
            notes: None,
            parsed: OnceLock::new(),
        }
    }

    /// Set the independent and dependent axis labels
    pub fn with_axes(mut self, x_axis: &str, y_axis: &str) -> Self {
        self.x_axis = x_axis.to_string();
        self.y_axis = y_axis.to_string();
        self
    }

    /// Attach an advisory input range description
    pub fn with_domain_hint(mut self, hint: &str) -> Self {
        self.domain_hint = Some(DomainHint::new(hint));
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_equation(&self) -> &str {
        &self.raw_equation
    }

    pub fn x_axis(&self) -> &str {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &str {
        &self.y_axis
    }

    pub fn domain_hint(&self) -> Option<&DomainHint> {
        self.domain_hint.as_ref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Whether the raw text passes the superficial "looks like math" check
    pub fn looks_mathematical(&self) -> bool {
        looks_mathematical(&self.raw_equation)
    }

    /// Current parse state, without triggering a parse
    pub fn parse_state(&self) -> ParseState<'_> {
        match self.parsed.get() {
            None => ParseState::Unparsed,
            Some(ParsedEquation {
                outcome: Ok(expr), ..
            }) => ParseState::Parsed(expr),
            Some(ParsedEquation {
                outcome: Err(err), ..
            }) => ParseState::ParseFailed(err),
        }
    }

    /// Forget the stored parse so the next query parses again
    pub(crate) fn reset_parse(&mut self) {
        self.parsed = OnceLock::new();
    }

    /// Canonical equation text, once the equation has been parsed
    pub fn canonical(&self) -> Option<&str> {
        self.parsed.get().map(|parsed| parsed.canonical.as_str())
    }

    /// The parsed equation, normalizing and parsing it on first call
    ///
    /// Later calls return the stored tree or the stored error; `config` is
    /// only consulted the first time.
    pub fn expression(&self, config: &EngineConfig) -> Result<&Expression, &ParseError> {
        self.parsed
            .get_or_init(|| self.parse_equation(config))
            .outcome
            .as_ref()
    }

    fn parse_equation(&self, config: &EngineConfig) -> ParsedEquation {
        let canonical = normalize(&self.raw_equation);
        let outcome = Expression::parse_with(&canonical, config);

        match &outcome {
            Ok(expr) => debug!(
                curve = %self.id,
                canonical = %canonical,
                nodes = expr.node_count(),
                "parsed curve equation"
            ),
            Err(err) => warn!(
                curve = %self.id,
                equation = %self.raw_equation,
                error = %err,
                "curve equation could not be parsed"
            ),
        }

        ParsedEquation { canonical, outcome }
    }

    /// Evaluate the curve at `x`
    pub fn evaluate(&self, x: f64, config: &EngineConfig) -> EvaluationResult {
        match self.expression(config) {
            Ok(expr) => evaluate(expr, x),
            Err(err) => EvaluationResult::ParseError(err.clone()),
        }
    }

    /// Whether the display layer should warn that the equation may not be usable
    ///
    /// Parses the equation if that has not happened yet.
    pub fn needs_warning(&self, config: &EngineConfig) -> bool {
        !self.looks_mathematical() || self.expression(config).is_err()
    }
}
