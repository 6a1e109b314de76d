//! Lengths (px/rem subset) per CSS Values & Units Level 3 §6.
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>

use crate::ParseError;
use cssparser::{Parser, Token};

/// Supported subset of CSS `<length>`: px, rem, plus unitless zero.
///
/// The rhythm system works in absolute pixels internally; rem is accepted
/// at configuration boundaries and resolved against the base font size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Pixels,
    RootEms,
}

/// A CSS `<length>` value with unit. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    /// An absolute pixel length.
    #[inline]
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Pixels,
        }
    }

    /// A root-relative length, resolved later against a base font size.
    #[inline]
    pub const fn rem(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::RootEms,
        }
    }

    /// Whether this length needs no reference size to resolve.
    #[inline]
    pub const fn is_absolute(self) -> bool {
        matches!(self.unit, LengthUnit::Pixels)
    }

    /// Compute the pixel value of this length.
    ///
    /// - Pixels: returns the raw value.
    /// - `RootEms`: scales by the provided root font size.
    #[inline]
    pub fn to_px(self, root_font_size_px: f32) -> f32 {
        match self.unit {
            LengthUnit::Pixels => self.value,
            LengthUnit::RootEms => self.value * root_font_size_px,
        }
    }

    /// Parse a `<length>` from a complete string, e.g. `"16px"` or `"1.5rem"`.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedToken` for anything that is not a
    /// supported `<length>`, or `ParseError::TrailingInput` when tokens
    /// follow the value.
    #[inline]
    pub fn from_css(text: &str) -> Result<Self, ParseError> {
        crate::parse_entirely(text, parse_length)
    }
}

/// Parse a CSS `<length>` (§6.2). Supports px/rem and unitless zero per spec.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a
/// supported `<length>`.
pub fn parse_length(input: &mut Parser) -> Result<Length, ParseError> {
    match input.next_including_whitespace_and_comments() {
        Ok(token) => match token.clone() {
            Token::Dimension { value, unit, .. } => {
                let unit_kind = match unit.as_ref().to_ascii_lowercase().as_str() {
                    "px" => LengthUnit::Pixels,
                    "rem" => LengthUnit::RootEms,
                    _ => return Err(ParseError::UnexpectedToken),
                };
                Ok(Length {
                    value,
                    unit: unit_kind,
                })
            }
            Token::Number { value: 0.0, .. } => Ok(Length::px(0.0)),
            Token::Ident(_)
            | Token::AtKeyword(_)
            | Token::Hash(_)
            | Token::IDHash(_)
            | Token::QuotedString(_)
            | Token::UnquotedUrl(_)
            | Token::Delim(_)
            | Token::Number { .. }
            | Token::Percentage { .. }
            | Token::WhiteSpace(_)
            | Token::Comment(_)
            | Token::Colon
            | Token::Semicolon
            | Token::Comma
            | Token::IncludeMatch
            | Token::DashMatch
            | Token::PrefixMatch
            | Token::SuffixMatch
            | Token::SubstringMatch
            | Token::CDO
            | Token::CDC
            | Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock
            | Token::BadUrl(_)
            | Token::BadString(_)
            | Token::CloseParenthesis
            | Token::CloseSquareBracket
            | Token::CloseCurlyBracket => Err(ParseError::UnexpectedToken),
        },
        Err(_) => Err(ParseError::UnexpectedToken),
    }
}
