//! Numbers per CSS Values & Units Level 3 §4.
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>

use crate::ParseError;
use cssparser::{Parser, Token};

/// A CSS `<number>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f32);

impl Number {
    /// Parse a `<number>` from a complete string, e.g. `"1.5"`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` when the input is not a
    /// `<number>`, or `ParseError::TrailingInput` when tokens follow it.
    #[inline]
    pub fn from_css(text: &str) -> Result<Self, ParseError> {
        crate::parse_entirely(text, parse_number)
    }
}

/// Parse a CSS `<number>` (§4.2). Accepts integer or real numbers.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a
/// `<number>`.
pub fn parse_number(input: &mut Parser) -> Result<Number, ParseError> {
    input.next_including_whitespace_and_comments().map_or(
        Err(ParseError::UnexpectedToken),
        |token| {
            if let Token::Number { value, .. } = token.clone() {
                Ok(Number(value))
            } else {
                Err(ParseError::UnexpectedToken)
            }
        },
    )
}
