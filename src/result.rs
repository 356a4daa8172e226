//! Outcome of evaluating a curve at one input
//!
//! [`EvaluationResult`] is the single value handed to the display layer. It
//! is exactly one of a number or one of the three failure categories, each
//! carrying its own reason.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::expression::{DomainError, ParseError};

/// Reason the user-supplied input could not be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("not a number")]
    NotANumber,

    #[error("input is not finite")]
    NonFinite,

    #[error("unknown curve '{id}'")]
    UnknownCurve { id: String },
}

/// Parse the text of an input field as the independent-variable value
///
/// Surrounding whitespace is ignored. Anything that is not a complete finite
/// decimal number, blank text included, is rejected.
pub fn parse_input(text: &str) -> Result<f64, InputError> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NonFinite)
    }
}

/// Evaluation outcome for one curve at one input
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationResult {
    /// The curve's value at the input
    Number(f64),

    /// The equation is undefined at the input
    DomainError(DomainError),

    /// The equation text could not be parsed
    ParseError(ParseError),

    /// The input text could not be used
    InputError(InputError),
}

impl EvaluationResult {
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// The numeric value, if evaluation succeeded
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Short machine-readable name of the outcome category
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::DomainError(_) => "domain_error",
            Self::ParseError(_) => "parse_error",
            Self::InputError(_) => "input_error",
        }
    }

    /// The failure reason, if any
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Number(_) => None,
            Self::DomainError(err) => Some(err.to_string()),
            Self::ParseError(err) => Some(err.to_string()),
            Self::InputError(err) => Some(err.to_string()),
        }
    }

    /// Text for the result field: four decimals, or a message per category
    pub fn display_text(&self) -> String {
        match self {
            Self::Number(value) => format_value(*value),
            Self::DomainError(err) => format!("Undefined at this input: {}", err),
            Self::ParseError(err) => format!("Equation could not be parsed: {}", err),
            Self::InputError(err) => format!("Invalid input: {}", err),
        }
    }
}

/// Four decimals, without a sign on values that round to zero
fn format_value(value: f64) -> String {
    let text = format!("{:.4}", value);
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}

impl From<DomainError> for EvaluationResult {
    fn from(err: DomainError) -> Self {
        Self::DomainError(err)
    }
}

impl From<ParseError> for EvaluationResult {
    fn from(err: ParseError) -> Self {
        Self::ParseError(err)
    }
}

impl From<InputError> for EvaluationResult {
    fn from(err: InputError) -> Self {
        Self::InputError(err)
    }
}

/// Tagged wire form for the display collaborator
#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum WireResult {
    Number { value: f64 },
    DomainError { reason: String },
    ParseError { reason: String },
    InputError { reason: String },
}

impl Serialize for EvaluationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            Self::Number(value) => WireResult::Number { value: *value },
            Self::DomainError(err) => WireResult::DomainError {
                reason: err.to_string(),
            },
            Self::ParseError(err) => WireResult::ParseError {
                reason: err.to_string(),
            },
            Self::InputError(err) => WireResult::InputError {
                reason: err.to_string(),
            },
        };
        wire.serialize(serializer)
    }
}
