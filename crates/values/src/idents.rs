//! Identifier values (keywords such as `inherit` and `normal`).
//! Spec: <https://www.w3.org/TR/CSS2/syndata.html#value-def-identifier>

use crate::ParseError;
use cssparser::{Parser, Token};

/// A CSS identifier value, lowercased for canonical comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident(pub String);

impl Ident {
    /// Parse an identifier from a complete string.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` when the input is not an
    /// identifier, or `ParseError::TrailingInput` when tokens follow it.
    #[inline]
    pub fn from_css(text: &str) -> Result<Self, ParseError> {
        crate::parse_entirely(text, parse_ident)
    }
}

/// Parse a CSS identifier token.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an
/// identifier.
pub fn parse_ident(input: &mut Parser) -> Result<Ident, ParseError> {
    input.next_including_whitespace_and_comments().map_or(
        Err(ParseError::UnexpectedToken),
        |token| {
            if let Token::Ident(text) = token.clone() {
                Ok(Ident(text.as_ref().to_ascii_lowercase()))
            } else {
                Err(ParseError::UnexpectedToken)
            }
        },
    )
}
