//! # curve-eval
//!
//! `curve-eval` turns the free-form equations produced by a graph extraction
//! step into values the user can query.
//!
//! The library provides:
//! - An equation normalizer that rewrites raw text such as `"y = 2 × x + 3"`
//!   into a canonical expression
//! - A closed-grammar parser producing an explicit expression tree
//! - An evaluator that reports undefined points as typed domain errors
//!   instead of `NaN` or infinities
//! - A curve registry that memoizes parses and results for the display layer
//!
//! ## Basic Usage
//!
//! ```
//! use curve_eval::{normalize, Curve, CurveRegistry, EvaluationResult, InputError};
//!
//! assert_eq!(normalize("y = 2 × x + 3"), "2*x+3");
//!
//! let mut registry = CurveRegistry::new();
//! registry
//!     .load_curves(vec![Curve::new("curve-1", "Line", "y = 2*x + 3")])
//!     .unwrap();
//!
//! assert_eq!(registry.query_y("curve-1", "5"), EvaluationResult::Number(13.0));
//! assert_eq!(
//!     registry.query_y("curve-1", "abc"),
//!     EvaluationResult::InputError(InputError::NotANumber)
//! );
//! ```

// Public modules
pub mod config;
pub mod curve;
pub mod error;
pub mod expression;
pub mod normalize;
pub mod result;

// Re-exports for convenience
pub use config::EngineConfig;
pub use curve::{Curve, CurveDescriptor, CurveRegistry, GraphAnalysis};
pub use error::{CurveError, Result};
pub use expression::{evaluate, parse, DomainError, Expression, ParseError};
pub use normalize::{looks_mathematical, normalize};
pub use result::{parse_input, EvaluationResult, InputError};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
