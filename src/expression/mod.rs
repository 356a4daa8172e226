//! # Expression Engine
//!
//! Parsing and evaluation of single-variable algebraic expressions over a
//! closed grammar. There is no general-purpose evaluation path: input text
//! becomes an [`Expression`] tree only if every character belongs to the
//! grammar, and the tree can only reference the bound variable, the constants
//! `pi`, `e` and `tau`, and the functions on the allow-list.
//!
//! ## Example Usage
//!
//! ```rust
//! use curve_eval::expression::{evaluate, DomainError, Expression};
//! use curve_eval::EvaluationResult;
//!
//! let expr = Expression::parse("2*x + 3").unwrap();
//! assert_eq!(expr.eval(5.0), Ok(13.0));
//!
//! let expr = Expression::parse("1/x").unwrap();
//! assert_eq!(
//!     evaluate(&expr, 0.0),
//!     EvaluationResult::DomainError(DomainError::DivisionByZero)
//! );
//! ```

pub mod ast;
pub mod evaluator;
mod lexer;
pub mod parser;

pub(crate) use lexer::identifier;

// Re-export key types
pub use ast::{Arity, BinaryOp, Constant, Expression, Function, UnaryOp};
pub use evaluator::{evaluate, DomainError, EvalResult};
pub use parser::{parse, ParseError, ParseResult};
