//! Line-height directives.
//!
//! A declaration site's raw line-height value is classified exactly once,
//! at the call boundary, into a tagged directive. The resolver then
//! dispatches on the tag; the unrecognized case is an explicit variant
//! rather than a fallthrough branch, so the warning path is visible in the
//! type.

use rhythm_values::{Ident, Number};

/// The keywords passed through to the emitted style unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineHeightKeyword {
    Inherit,
    Normal,
}

impl LineHeightKeyword {
    /// The keyword's canonical CSS spelling.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inherit => "inherit",
            Self::Normal => "normal",
        }
    }
}

/// How line-height should be computed (or omitted) for one declaration.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LineHeightDirective {
    /// Derive the line-height from the vertical-rhythm grid.
    #[default]
    Auto,
    /// A unitless ratio, passed through unchanged.
    Ratio(f32),
    /// `inherit` or `normal`, passed through unchanged.
    Keyword(LineHeightKeyword),
    /// Emit no line-height at all (the authoring surface's `false`/`none`
    /// sentinel).
    Suppress,
    /// Anything else. Resolution warns and omits the line-height.
    Invalid(String),
}

impl LineHeightDirective {
    /// Classify a raw declaration value into a directive.
    ///
    /// Accepts a unitless number, the keywords `inherit`/`normal`, and the
    /// suppress sentinels `false` and `none`. Everything else (lengths,
    /// percentages, unknown idents, trailing junk) becomes `Invalid`
    /// carrying the raw text for the diagnostic.
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(Number(value)) = Number::from_css(trimmed) {
            return Self::Ratio(value);
        }
        match Ident::from_css(trimmed) {
            Ok(Ident(name)) => match name.as_str() {
                "inherit" => Self::Keyword(LineHeightKeyword::Inherit),
                "normal" => Self::Keyword(LineHeightKeyword::Normal),
                "false" | "none" => Self::Suppress,
                _ => Self::Invalid(trimmed.to_owned()),
            },
            Err(_) => Self::Invalid(trimmed.to_owned()),
        }
    }
}
