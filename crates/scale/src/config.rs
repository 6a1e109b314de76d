//! Scale configuration: the two process-wide bases every resolution reads.

use std::fmt;

/// Read-only typographic bases, in absolute pixels.
///
/// Built once at configuration-load time and passed by reference into
/// [`crate::resolve`]. Fields are private so a constructed config always
/// satisfies the positivity invariant; relative-size math divides by both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleConfig {
    base_font_size_px: f32,
    base_line_height_px: f32,
}

impl ScaleConfig {
    /// Build a config from the two bases.
    ///
    /// # Errors
    /// Returns `ScaleError::NonPositiveBase` when either base is zero,
    /// negative, or non-finite. Rejected here, at load time, so resolution
    /// never has to re-check.
    pub fn new(base_font_size_px: f32, base_line_height_px: f32) -> Result<Self, ScaleError> {
        if !base_font_size_px.is_finite() || base_font_size_px <= 0.0 {
            return Err(ScaleError::NonPositiveBase {
                field: "base-font-size",
                value: base_font_size_px,
            });
        }
        if !base_line_height_px.is_finite() || base_line_height_px <= 0.0 {
            return Err(ScaleError::NonPositiveBase {
                field: "base-line-height",
                value: base_line_height_px,
            });
        }
        Ok(Self {
            base_font_size_px,
            base_line_height_px,
        })
    }

    /// The base font size in pixels. Always positive and finite.
    #[inline]
    pub const fn base_font_size_px(&self) -> f32 {
        self.base_font_size_px
    }

    /// The base line-height (rhythm unit) in pixels. Always positive and finite.
    #[inline]
    pub const fn base_line_height_px(&self) -> f32 {
        self.base_line_height_px
    }
}

impl Default for ScaleConfig {
    /// The conventional 16px / 24px typographic baseline.
    #[inline]
    fn default() -> Self {
        Self {
            base_font_size_px: 16.0,
            base_line_height_px: 24.0,
        }
    }
}

/// Errors produced by scale configuration and resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleError {
    /// A configured base was zero, negative, or non-finite.
    NonPositiveBase {
        /// Which configuration field was rejected.
        field: &'static str,
        value: f32,
    },
    /// A per-call font size was zero, negative, or non-finite.
    InvalidMagnitude { value: f32 },
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveBase { field, value } => {
                write!(f, "{field} must be a positive length, got {value}")
            }
            Self::InvalidMagnitude { value } => {
                write!(f, "font size must be a positive length, got {value}")
            }
        }
    }
}

impl std::error::Error for ScaleError {}
