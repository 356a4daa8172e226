//! Advisory input ranges
//!
//! Extraction describes the valid input range as free text, e.g.
//! `"3.8 to 6"`. When the text reads as a range its bounds are kept so the
//! display layer can flag inputs outside it. The hint is never enforced.

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{opt, recognize},
    sequence::delimited,
    IResult, Parser,
};

/// Free-text description of a curve's valid input range
#[derive(Debug, Clone, PartialEq)]
pub struct DomainHint {
    text: String,
    bounds: Option<(f64, f64)>,
}

impl DomainHint {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            bounds: parse_bounds(text),
        }
    }

    /// The hint as extracted
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lower and upper bound, if the text reads as a range
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }

    /// Whether `x` lies inside the hinted range; `None` when there is no range
    pub fn contains(&self, x: f64) -> Option<bool> {
        self.bounds.map(|(lo, hi)| lo <= x && x <= hi)
    }
}

fn decimal(input: &str) -> IResult<&str, f64> {
    let (rest, literal) = recognize((
        opt(one_of("+-")),
        digit1,
        opt((char('.'), digit1)),
    ))
    .parse(input)?;

    match literal.parse::<f64>() {
        Ok(value) => Ok((rest, value)),
        Err(_) => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Float,
        ))),
    }
}

fn separator(input: &str) -> IResult<&str, &str> {
    delimited(
        multispace0,
        alt((tag_no_case("to"), tag(".."), tag("-"), tag("–"), tag(","))),
        multispace0,
    )
    .parse(input)
}

/// `a to b`, `a - b`, `a..b`, `[a, b]`, ignoring anything after the range
fn range(input: &str) -> IResult<&str, (f64, f64)> {
    let (input, _) = (multispace0, opt(one_of("[(")), multispace0).parse(input)?;
    let (input, lo) = decimal(input)?;
    let (input, _) = separator(input)?;
    let (input, hi) = decimal(input)?;
    Ok((input, (lo, hi)))
}

fn parse_bounds(text: &str) -> Option<(f64, f64)> {
    let (_, (a, b)) = range(text).ok()?;
    Some(if a <= b { (a, b) } else { (b, a) })
}
