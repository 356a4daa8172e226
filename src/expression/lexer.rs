//! Tokenizer for canonical curve expressions
//!
//! Numeric literals and identifiers are recognized with nom; every other
//! accepted character is a single-character operator. Anything outside the
//! grammar stops tokenization with a [`ParseError`].

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, digit0, digit1, one_of},
    combinator::{opt, recognize},
    multi::many0,
    sequence::pair,
    IResult, Parser,
};
use std::fmt;

use super::parser::ParseError;

/// Kinds of tokens produced by [`tokenize`]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Ident(name) => write!(f, "{}", name),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Caret => write!(f, "^"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Comma => write!(f, ","),
        }
    }
}

/// A token and the byte offset where it starts
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Parse an identifier (variable, constant or function name)
pub(crate) fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))
    .parse(input)
}

/// Recognize a decimal literal: `12`, `1.5`, `.5`, `1.`, `2e-3`
fn number_literal(input: &str) -> IResult<&str, &str> {
    recognize((
        alt((
            recognize((digit1, opt((char('.'), digit0)))),
            recognize((char('.'), digit1)),
        )),
        opt((one_of("eE"), opt(one_of("+-")), digit1)),
    ))
    .parse(input)
}

fn continues_literal(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '.'
}

/// Everything up to the next character that cannot belong to a literal
fn literal_run(input: &str) -> &str {
    let end = input
        .find(|c: char| !continues_literal(c))
        .unwrap_or(input.len());
    &input[..end]
}

/// Split `input` into tokens.
///
/// Whitespace separates tokens and is otherwise ignored. A numeric literal
/// that runs straight into a letter, digit, `_` or `.` is malformed: there is
/// no implicit multiplication.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        let position = input.len() - rest.len();

        if ch.is_whitespace() {
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        if ch.is_ascii_digit() || ch == '.' {
            let (after, literal) = match number_literal(rest) {
                Ok(parsed) => parsed,
                Err(_) => {
                    return Err(ParseError::MalformedNumber {
                        literal: literal_run(rest).to_string(),
                    })
                }
            };

            if after.starts_with(continues_literal) {
                return Err(ParseError::MalformedNumber {
                    literal: format!("{}{}", literal, literal_run(after)),
                });
            }

            let value = literal
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseError::MalformedNumber {
                    literal: literal.to_string(),
                })?;

            tokens.push(Token {
                kind: TokenKind::Number(value),
                position,
            });
            rest = after;
            continue;
        }

        if ch.is_ascii_alphabetic() || ch == '_' {
            let (after, name) =
                identifier(rest).map_err(|_| ParseError::UnexpectedChar { ch, position })?;
            tokens.push(Token {
                kind: TokenKind::Ident(name.to_string()),
                position,
            });
            rest = after;
            continue;
        }

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            _ => return Err(ParseError::UnexpectedChar { ch, position }),
        };
        tokens.push(Token { kind, position });
        rest = &rest[ch.len_utf8()..];
    }

    Ok(tokens)
}
