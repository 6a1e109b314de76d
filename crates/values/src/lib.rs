//! Value types shared by the rhythm resolver: lengths, numbers, identifiers.
//! Modeled on CSS Values & Units Level 3: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

pub mod dimensions;
pub mod idents;
pub mod numbers;

pub use dimensions::{Length, LengthUnit, parse_length};
pub use idents::{Ident, parse_ident};
pub use numbers::{Number, parse_number};

use cssparser::{Parser, ParserInput};

/// Parse error for the value parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
    /// Extra tokens followed an otherwise valid value.
    TrailingInput,
}

/// Run `parse` over `text`, requiring it to consume the whole input.
///
/// Used by the `from_css` constructors: configuration values and directive
/// values are single tokens, so trailing input is a caller error rather
/// than something to silently ignore.
///
/// # Errors
/// Returns the inner parse error, or `ParseError::TrailingInput` when
/// tokens remain after the value.
pub fn parse_entirely<T>(
    text: &str,
    parse: impl FnOnce(&mut Parser) -> Result<T, ParseError>,
) -> Result<T, ParseError> {
    let mut input = ParserInput::new(text.trim());
    let mut parser = Parser::new(&mut input);
    let value = parse(&mut parser)?;
    if parser.is_exhausted() {
        Ok(value)
    } else {
        Err(ParseError::TrailingInput)
    }
}
