//! # Curves
//!
//! Curves extracted from a graph image, the payloads they arrive in, and the
//! registry the display layer queries.
//!
//! ## Example Usage
//!
//! ```rust
//! use curve_eval::curve::{Curve, CurveRegistry};
//! use curve_eval::EvaluationResult;
//!
//! let mut registry = CurveRegistry::new();
//! registry
//!     .load_curves(vec![
//!         Curve::new("curve-1", "Line", "y = 2*x + 3"),
//!         Curve::new("curve-2", "Root", "sqrt(x)"),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(registry.query_y("curve-1", "5"), EvaluationResult::Number(13.0));
//! assert_eq!(registry.query_y("curve-2", "4"), EvaluationResult::Number(2.0));
//! assert!(!registry.query_y("curve-2", "-4").is_number());
//! ```

pub mod curve;
pub mod descriptor;
pub mod hint;
pub mod registry;

// Re-export key types
pub use curve::{Curve, ParseState};
pub use descriptor::{CurveDescriptor, GraphAnalysis};
pub use hint::DomainHint;
pub use registry::CurveRegistry;
