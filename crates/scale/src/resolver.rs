//! The scale resolution itself: pure math over a read-only config.

use crate::{LineHeightDirective, LineHeightKeyword, ScaleConfig, ScaleError};

/// A resolved line-height value, ready for emission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineHeight {
    /// A unitless multiplier of the element's own font size.
    Ratio(f32),
    /// `inherit` or `normal`, carried through verbatim.
    Keyword(LineHeightKeyword),
}

/// Output of one resolution: the style tokens for a single declaration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedStyle {
    /// Absolute font size in pixels.
    pub size_px: f32,
    /// The same size as a multiplier of the base font size.
    pub size_rem: f32,
    /// Resolved line-height, or `None` when suppressed or invalid.
    pub line_height: Option<LineHeight>,
}

/// The number of whole rhythm units needed to cover `font_size_px`.
///
/// At least 1: even text smaller than the rhythm unit occupies one line of
/// the grid.
#[inline]
pub fn rhythm_step(config: &ScaleConfig, font_size_px: f32) -> u32 {
    let steps = (font_size_px / config.base_line_height_px()).ceil() as u32;
    steps.max(1)
}

/// The smallest integer multiple of the base line-height that is at least
/// `font_size_px`, in absolute pixels.
#[inline]
pub fn rhythm_line_height_px(config: &ScaleConfig, font_size_px: f32) -> f32 {
    rhythm_step(config, font_size_px) as f32 * config.base_line_height_px()
}

/// Resolve one font-size declaration into style tokens.
///
/// Pure over its inputs: no state, idempotent, safe to call from any
/// number of declaration sites in any order. The only side effect is a
/// warning log on the `Invalid` directive path.
///
/// # Errors
/// Returns `ScaleError::InvalidMagnitude` when `font_size_px` is zero,
/// negative, or non-finite. An unrecognized explicit line-height is not an
/// error: it logs a warning and the output simply omits the line-height.
pub fn resolve(
    config: &ScaleConfig,
    font_size_px: f32,
    directive: &LineHeightDirective,
) -> Result<ResolvedStyle, ScaleError> {
    if !font_size_px.is_finite() || font_size_px <= 0.0 {
        return Err(ScaleError::InvalidMagnitude {
            value: font_size_px,
        });
    }

    let size_rem = font_size_px / config.base_font_size_px();

    let line_height = match directive {
        LineHeightDirective::Auto => {
            // Express the grid-aligned absolute height as a ratio of the
            // element's own size, so the emitted value stays unitless.
            let absolute_px = rhythm_line_height_px(config, font_size_px);
            Some(LineHeight::Ratio(absolute_px / font_size_px))
        }
        LineHeightDirective::Ratio(ratio) => Some(LineHeight::Ratio(*ratio)),
        LineHeightDirective::Keyword(keyword) => Some(LineHeight::Keyword(*keyword)),
        LineHeightDirective::Suppress => None,
        LineHeightDirective::Invalid(raw) => {
            log::warn!("unrecognized line-height value {raw:?}; omitting line-height");
            None
        }
    };

    Ok(ResolvedStyle {
        size_px: font_size_px,
        size_rem,
        line_height,
    })
}
