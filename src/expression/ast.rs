//! Abstract syntax tree for curve expressions
//!
//! The tree only has room for what the grammar accepts: literals, the bound
//! variable, named constants, unary and binary operators and calls to the
//! functions on the allow-list. Anything else is rejected by the parser
//! before a tree is ever built.

use std::fmt;

/// Expression AST node
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Numeric literal
    Number(f64),

    /// The bound variable
    Variable,

    /// Named constant
    Constant(Constant),

    /// Unary operations
    Unary(UnaryOp, Box<Expression>),

    /// Binary operations
    Binary(BinaryOp, Box<Expression>, Box<Expression>),

    /// Function call
    Function(Function, Vec<Expression>),
}

/// Unary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Negation (-)
    Neg,

    /// Identity (+)
    Plus,
}

/// Binary operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition (+)
    Add,

    /// Subtraction (-)
    Sub,

    /// Multiplication (*)
    Mul,

    /// Division (/)
    Div,

    /// Power (^)
    Pow,
}

impl BinaryOp {
    fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }
}

/// Named constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
    Tau,
}

impl Constant {
    /// Look up a constant by its identifier
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Constant::Pi),
            "e" => Some(Constant::E),
            "tau" => Some(Constant::Tau),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
            Constant::Tau => "tau",
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
            Constant::Tau => std::f64::consts::TAU,
        }
    }
}

/// Number of arguments a function accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments
    Exact(usize),

    /// Between `min` and `max` arguments, inclusive
    Range(usize, usize),

    /// At least this many arguments
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::Range(min, max) => (min..=max).contains(&count),
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::Range(min, max) => write!(f, "{} to {}", min, max),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

/// The closed set of callable functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    /// Natural logarithm, or logarithm to the base given as second argument
    Log,
    Log10,
    Log2,
    Sqrt,
    Cbrt,
    Abs,
    Floor,
    Ceil,
    Round,
    Sign,
    Pow,
    Min,
    Max,
}

const FUNCTIONS: &[(&str, Function)] = &[
    ("sin", Function::Sin),
    ("cos", Function::Cos),
    ("tan", Function::Tan),
    ("asin", Function::Asin),
    ("acos", Function::Acos),
    ("atan", Function::Atan),
    ("sinh", Function::Sinh),
    ("cosh", Function::Cosh),
    ("tanh", Function::Tanh),
    ("exp", Function::Exp),
    ("ln", Function::Ln),
    ("log", Function::Log),
    ("log10", Function::Log10),
    ("log2", Function::Log2),
    ("sqrt", Function::Sqrt),
    ("cbrt", Function::Cbrt),
    ("abs", Function::Abs),
    ("floor", Function::Floor),
    ("ceil", Function::Ceil),
    ("round", Function::Round),
    ("sign", Function::Sign),
    ("pow", Function::Pow),
    ("min", Function::Min),
    ("max", Function::Max),
];

impl Function {
    /// Look up a function by its identifier
    pub fn from_name(name: &str) -> Option<Self> {
        FUNCTIONS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, function)| *function)
    }

    pub fn name(self) -> &'static str {
        FUNCTIONS
            .iter()
            .find(|(_, function)| *function == self)
            .map(|(name, _)| *name)
            .unwrap_or("?")
    }

    pub fn arity(self) -> Arity {
        match self {
            Function::Log => Arity::Range(1, 2),
            Function::Pow => Arity::Exact(2),
            Function::Min | Function::Max => Arity::AtLeast(2),
            _ => Arity::Exact(1),
        }
    }

    /// All names on the allow-list
    pub fn names() -> impl Iterator<Item = &'static str> {
        FUNCTIONS.iter().map(|(name, _)| *name)
    }
}

impl Expression {
    /// Whether the bound variable appears anywhere in the expression
    pub fn uses_variable(&self) -> bool {
        match self {
            Self::Number(_) | Self::Constant(_) => false,
            Self::Variable => true,
            Self::Unary(_, expr) => expr.uses_variable(),
            Self::Binary(_, left, right) => left.uses_variable() || right.uses_variable(),
            Self::Function(_, args) => args.iter().any(Expression::uses_variable),
        }
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        match self {
            Self::Number(_) | Self::Constant(_) | Self::Variable => 1,
            Self::Unary(_, expr) => 1 + expr.node_count(),
            Self::Binary(_, left, right) => 1 + left.node_count() + right.node_count(),
            Self::Function(_, args) => 1 + args.iter().map(Expression::node_count).sum::<usize>(),
        }
    }
}

/// Fully parenthesized rendering, using `x` for the bound variable.
///
/// A tree produced by the parser renders to text that parses back to the
/// same tree when `x` is the bound variable. Hand-built trees need not: a
/// negative literal renders as `(-1.0)`, which parses as a negation.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => {
                if *n < 0.0 {
                    write!(f, "({:?})", n)
                } else {
                    write!(f, "{:?}", n)
                }
            }
            Self::Variable => write!(f, "x"),
            Self::Constant(c) => write!(f, "{}", c.name()),
            Self::Unary(UnaryOp::Neg, expr) => write!(f, "(-{})", expr),
            Self::Unary(UnaryOp::Plus, expr) => write!(f, "(+{})", expr),
            Self::Binary(op, left, right) => write!(f, "({}{}{})", left, op.symbol(), right),
            Self::Function(function, args) => {
                write!(f, "{}(", function.name())?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
