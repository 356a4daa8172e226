//! Rewriting of raw extracted equation text into canonical form
//!
//! Extraction output is close to prose: `"y = 2 × x + 3"`, `"f(x) = x²"`.
//! [`normalize`] is a fixed, total rewrite that turns such text into a
//! string the parser can read (`"2*x+3"`, `"x^2"`). It never fails; text that
//! is not an equation simply comes out as something the parser rejects.

use nom::{
    character::complete::{char, multispace0},
    combinator::{opt, recognize},
    sequence::delimited,
    IResult, Parser,
};

use crate::expression::identifier;

/// Unicode glyphs and their ASCII replacements
const GLYPHS: &[(char, &str)] = &[
    ('×', "*"),
    ('·', "*"),
    ('⋅', "*"),
    ('∙', "*"),
    ('÷', "/"),
    ('∕', "/"),
    ('−', "-"),
    ('–', "-"),
    ('²', "^2"),
    ('³', "^3"),
];

/// Recognize a leading `y =` or `f(x) =` and return what follows it
fn assignment_prefix(input: &str) -> IResult<&str, &str> {
    recognize((
        multispace0,
        identifier,
        opt(delimited(char('('), identifier, char(')'))),
        multispace0,
        char('='),
        multispace0,
    ))
    .parse(input)
}

/// Drop every leading assignment prefix
fn strip_assignments(mut text: &str) -> &str {
    while let Ok((rest, _)) = assignment_prefix(text) {
        // "y == 2" is a comparison, not an assignment
        if rest.starts_with('=') {
            break;
        }
        text = rest;
    }
    text
}

fn translate_glyphs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match GLYPHS.iter().find(|(glyph, _)| *glyph == ch) {
            Some((_, replacement)) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    out
}

/// Normalize raw equation text into canonical form.
///
/// In order: strip leading `<identifier> =` assignments (case-insensitive,
/// also `f(x) =`), translate multiplication/division/minus glyphs to ASCII,
/// remove all whitespace. Assignments are stripped once more from the
/// compacted text so that `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let rhs = strip_assignments(raw);
    let ascii = translate_glyphs(rhs);
    let compact: String = ascii.chars().filter(|c| !c.is_whitespace()).collect();
    strip_assignments(&compact).to_string()
}

/// Superficial check that text could be an equation at all.
///
/// True when the text contains a digit or one of `+ - * / ^ ( )`. Used only
/// to decide whether to show an advisory warning.
pub fn looks_mathematical(raw: &str) -> bool {
    raw.chars()
        .any(|c| c.is_ascii_digit() || "+-*/^()".contains(c))
}
