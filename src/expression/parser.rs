//! Recursive descent parser over the closed expression grammar
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := unary (('*' | '/') unary)*
//! unary      := ('+' | '-') unary | power
//! power      := primary ('^' unary)?
//! primary    := number | constant | variable
//!             | function '(' expression (',' expression)* ')'
//!             | '(' expression ')'
//! ```
//!
//! `^` binds tighter than a leading sign, so `-x^2` is `-(x^2)`, and is
//! right-associative through `unary`, so `2^3^2` is `2^(3^2)`.

use thiserror::Error;

use super::ast::{BinaryOp, Constant, Expression, Function, UnaryOp};
use super::lexer::{tokenize, Token, TokenKind};
use crate::config::EngineConfig;

/// Reason an equation could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("unmatched parenthesis at position {position}")]
    UnmatchedParen { position: usize },

    #[error("unknown identifier '{name}'")]
    UnknownIdentifier { name: String },

    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },

    #[error("unexpected trailing input '{rest}' at position {position}")]
    TrailingInput { position: usize, rest: String },

    #[error("malformed number '{literal}'")]
    MalformedNumber { literal: String },

    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unexpected '{found}' at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("function '{name}' expects {expected} argument(s), got {found}")]
    WrongArity {
        name: String,
        expected: String,
        found: usize,
    },

    #[error("expression nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Result type for parsing
pub type ParseResult<T> = Result<T, ParseError>;

impl Expression {
    /// Parse an expression with the default configuration (bound variable `x`)
    pub fn parse(input: &str) -> ParseResult<Self> {
        Self::parse_with(input, &EngineConfig::default())
    }

    /// Parse an expression using the bound variable and depth limit of `config`
    pub fn parse_with(input: &str, config: &EngineConfig) -> ParseResult<Self> {
        let tokens = tokenize(input)?;
        if tokens.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut parser = TokenParser {
            input,
            tokens,
            pos: 0,
            depth: 0,
            variable: &config.variable,
            max_depth: config.max_depth,
        };

        let expr = parser.expression()?;

        // Make sure the entire input was consumed
        match parser.peek() {
            None => Ok(expr),
            Some(token) if token.kind == TokenKind::RParen => Err(ParseError::UnmatchedParen {
                position: token.position,
            }),
            Some(token) => Err(ParseError::TrailingInput {
                position: token.position,
                rest: input[token.position..].to_string(),
            }),
        }
    }
}

struct TokenParser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    variable: &'a str,
    max_depth: usize,
}

impl<'a> TokenParser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|token| &token.kind)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn descend(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            Err(ParseError::TooDeep {
                limit: self.max_depth,
            })
        } else {
            Ok(())
        }
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn unexpected(&self, token: &Token) -> ParseError {
        ParseError::UnexpectedToken {
            found: token.kind.to_string(),
            position: token.position,
        }
    }

    /// Parse an additive expression (expr + expr, expr - expr)
    fn expression(&mut self) -> ParseResult<Expression> {
        self.descend()?;
        let mut left = self.term()?;
        let mut links = 0;

        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            // Each link nests the tree built so far one level deeper
            self.descend()?;
            links += 1;
            let right = self.term()?;
            left = Expression::Binary(op, Box::new(left), Box::new(right));
        }

        self.depth -= links;
        self.ascend();
        Ok(left)
    }

    /// Parse a multiplicative expression (expr * expr, expr / expr)
    fn term(&mut self) -> ParseResult<Expression> {
        let mut left = self.unary()?;
        let mut links = 0;

        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Star) => BinaryOp::Mul,
                Some(TokenKind::Slash) => BinaryOp::Div,
                _ => break,
            };
            self.advance();
            self.descend()?;
            links += 1;
            let right = self.unary()?;
            left = Expression::Binary(op, Box::new(left), Box::new(right));
        }

        self.depth -= links;
        Ok(left)
    }

    /// Parse a signed expression (-expr, +expr)
    fn unary(&mut self) -> ParseResult<Expression> {
        let op = match self.peek_kind() {
            Some(TokenKind::Minus) => UnaryOp::Neg,
            Some(TokenKind::Plus) => UnaryOp::Plus,
            _ => return self.power(),
        };
        self.advance();

        self.descend()?;
        let operand = self.unary()?;
        self.ascend();

        Ok(Expression::Unary(op, Box::new(operand)))
    }

    /// Parse a power expression (expr ^ expr)
    fn power(&mut self) -> ParseResult<Expression> {
        let base = self.primary()?;

        if self.peek_kind() != Some(&TokenKind::Caret) {
            return Ok(base);
        }
        self.advance();

        self.descend()?;
        let exponent = self.unary()?;
        self.ascend();

        Ok(Expression::Binary(
            BinaryOp::Pow,
            Box::new(base),
            Box::new(exponent),
        ))
    }

    /// Parse a primary expression (number, name, function call, or parenthesized expression)
    fn primary(&mut self) -> ParseResult<Expression> {
        let token = self.advance().ok_or(ParseError::UnexpectedEnd)?;

        match token.kind {
            TokenKind::Number(value) => Ok(Expression::Number(value)),
            TokenKind::Ident(ref name) => {
                if self.peek_kind() == Some(&TokenKind::LParen) {
                    return self.function_call(name);
                }
                self.name(name)
            }
            TokenKind::LParen => {
                let inner = self.expression()?;
                self.close_paren(token.position)?;
                Ok(inner)
            }
            _ => Err(self.unexpected(&token)),
        }
    }

    /// Resolve a bare identifier to the bound variable or a constant
    fn name(&self, name: &str) -> ParseResult<Expression> {
        if name == self.variable {
            return Ok(Expression::Variable);
        }
        Constant::from_name(name)
            .map(Expression::Constant)
            .ok_or_else(|| ParseError::UnknownIdentifier {
                name: name.to_string(),
            })
    }

    /// Parse the argument list of a call; the current token is the '('
    fn function_call(&mut self, name: &str) -> ParseResult<Expression> {
        let function = Function::from_name(name).ok_or_else(|| ParseError::UnknownFunction {
            name: name.to_string(),
        })?;

        let open = self.advance().ok_or(ParseError::UnexpectedEnd)?;
        let mut args = Vec::new();

        if self.peek_kind() == Some(&TokenKind::RParen) {
            self.advance();
        } else {
            loop {
                args.push(self.expression()?);
                if self.peek_kind() == Some(&TokenKind::Comma) {
                    self.advance();
                    continue;
                }
                self.close_paren(open.position)?;
                break;
            }
        }

        let arity = function.arity();
        if !arity.accepts(args.len()) {
            return Err(ParseError::WrongArity {
                name: function.name().to_string(),
                expected: arity.to_string(),
                found: args.len(),
            });
        }

        Ok(Expression::Function(function, args))
    }

    /// Consume the ')' matching the '(' at `open_position`
    fn close_paren(&mut self, open_position: usize) -> ParseResult<()> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::RParen => {
                self.advance();
                Ok(())
            }
            Some(token) => Err(self.unexpected(token)),
            None => Err(ParseError::UnmatchedParen {
                position: open_position,
            }),
        }
    }
}

/// Convenience: parse `input` as a whole expression with the default configuration
pub fn parse(input: &str) -> ParseResult<Expression> {
    Expression::parse(input)
}
