//! Evaluation of parsed expressions at a single point
//!
//! All arithmetic is plain `f64`. Every intermediate value is checked, so a
//! `NaN` or an infinity never comes back as if it were a number: it is turned
//! into the [`DomainError`] that explains it.

use thiserror::Error;

use super::ast::{BinaryOp, Expression, Function, UnaryOp};
use crate::result::EvaluationResult;

/// Reason an expression is undefined at the requested input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("undefined for negative base")]
    NegativeBase,

    #[error("{function} undefined for non-positive argument")]
    LogOfNonPositive { function: &'static str },

    #[error("logarithm base must be positive and not 1")]
    InvalidLogBase,

    #[error("square root of negative number")]
    SqrtOfNegative,

    #[error("{function} argument outside [-1, 1]")]
    OutOfRange { function: &'static str },

    #[error("result is not a finite number")]
    NonFinite,

    #[error("{function} cannot take {count} argument(s)")]
    InvalidArguments { function: &'static str, count: usize },
}

/// Result type for evaluation
pub type EvalResult<T> = Result<T, DomainError>;

fn finite(value: f64) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite)
    }
}

fn divide(lhs: f64, rhs: f64) -> EvalResult<f64> {
    if rhs == 0.0 {
        Err(DomainError::DivisionByZero)
    } else {
        finite(lhs / rhs)
    }
}

fn power(base: f64, exponent: f64) -> EvalResult<f64> {
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(DomainError::NegativeBase);
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    finite(base.powf(exponent))
}

fn logarithm(function: Function, value: f64) -> EvalResult<f64> {
    if value <= 0.0 {
        return Err(DomainError::LogOfNonPositive {
            function: function.name(),
        });
    }
    Ok(value.ln())
}

fn unit_interval(function: Function, value: f64) -> EvalResult<f64> {
    if (-1.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(DomainError::OutOfRange {
            function: function.name(),
        })
    }
}

fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn call(function: Function, args: &[f64]) -> EvalResult<f64> {
    let value = match (function, args) {
        (Function::Sin, [a]) => a.sin(),
        (Function::Cos, [a]) => a.cos(),
        (Function::Tan, [a]) => a.tan(),
        (Function::Asin, [a]) => unit_interval(function, *a)?.asin(),
        (Function::Acos, [a]) => unit_interval(function, *a)?.acos(),
        (Function::Atan, [a]) => a.atan(),
        (Function::Sinh, [a]) => a.sinh(),
        (Function::Cosh, [a]) => a.cosh(),
        (Function::Tanh, [a]) => a.tanh(),
        (Function::Exp, [a]) => a.exp(),
        (Function::Ln, [a]) | (Function::Log, [a]) => logarithm(function, *a)?,
        (Function::Log, [a, base]) => {
            let numerator = logarithm(function, *a)?;
            if *base <= 0.0 || *base == 1.0 {
                return Err(DomainError::InvalidLogBase);
            }
            numerator / base.ln()
        }
        (Function::Log10, [a]) => logarithm(function, *a)? / std::f64::consts::LN_10,
        (Function::Log2, [a]) => logarithm(function, *a)? / std::f64::consts::LN_2,
        (Function::Sqrt, [a]) => {
            if *a < 0.0 {
                return Err(DomainError::SqrtOfNegative);
            }
            a.sqrt()
        }
        (Function::Cbrt, [a]) => a.cbrt(),
        (Function::Abs, [a]) => a.abs(),
        (Function::Floor, [a]) => a.floor(),
        (Function::Ceil, [a]) => a.ceil(),
        (Function::Round, [a]) => a.round(),
        (Function::Sign, [a]) => sign(*a),
        (Function::Pow, [base, exponent]) => power(*base, *exponent)?,
        (Function::Min, values) if values.len() >= 2 => {
            values.iter().copied().fold(f64::INFINITY, f64::min)
        }
        (Function::Max, values) if values.len() >= 2 => {
            values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
        }
        _ => {
            return Err(DomainError::InvalidArguments {
                function: function.name(),
                count: args.len(),
            })
        }
    };
    finite(value)
}

impl Expression {
    /// Evaluate the expression with the bound variable set to `x`
    pub fn eval(&self, x: f64) -> EvalResult<f64> {
        match self {
            Self::Number(n) => finite(*n),

            Self::Variable => finite(x),

            Self::Constant(c) => Ok(c.value()),

            Self::Unary(op, expr) => {
                let value = expr.eval(x)?;
                match op {
                    UnaryOp::Neg => Ok(-value),
                    UnaryOp::Plus => Ok(value),
                }
            }

            Self::Binary(op, left, right) => {
                let lhs = left.eval(x)?;
                let rhs = right.eval(x)?;

                match op {
                    BinaryOp::Add => finite(lhs + rhs),
                    BinaryOp::Sub => finite(lhs - rhs),
                    BinaryOp::Mul => finite(lhs * rhs),
                    BinaryOp::Div => divide(lhs, rhs),
                    BinaryOp::Pow => power(lhs, rhs),
                }
            }

            Self::Function(function, args) => {
                let values = args
                    .iter()
                    .map(|arg| arg.eval(x))
                    .collect::<EvalResult<Vec<f64>>>()?;
                call(*function, &values)
            }
        }
    }
}

/// Evaluate `ast` at `x`, folding any domain failure into the result
pub fn evaluate(ast: &Expression, x: f64) -> EvaluationResult {
    match ast.eval(x) {
        Ok(value) => EvaluationResult::Number(value),
        Err(err) => EvaluationResult::DomainError(err),
    }
}
