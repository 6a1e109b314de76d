//! The style engine: validated config plus per-declaration resolution.

use crate::RawConfig;
use anyhow::{Context as _, Result, anyhow};
use rhythm_emit::{Declaration, font_size_declarations};
use rhythm_scale::{LineHeightDirective, ResolvedStyle, ScaleConfig, resolve};
use rhythm_values::{Length, Number};

/// Holds the validated [`ScaleConfig`] for the lifetime of a build pass.
///
/// Built once before any resolution; every `resolve_*` call is read-only,
/// so calls need no ordering between declaration sites.
#[derive(Clone, Copy, Debug)]
pub struct StyleEngine {
    config: ScaleConfig,
}

impl StyleEngine {
    /// Build an engine from raw configuration values.
    ///
    /// # Errors
    /// Returns an error when a base fails to parse, when the base font
    /// size is not an absolute length, or when a base is non-positive.
    pub fn from_raw(raw: &RawConfig) -> Result<Self> {
        let base_font_size = Length::from_css(&raw.base_font_size)
            .map_err(|parse_error| {
                anyhow!("base-font-size {:?}: {parse_error:?}", raw.base_font_size)
            })?;
        if !base_font_size.is_absolute() {
            return Err(anyhow!(
                "base-font-size {:?} must be an absolute length",
                raw.base_font_size
            ));
        }
        let base_font_size_px = base_font_size.value;

        let base_line_height_px = base_line_height_px(&raw.base_line_height, base_font_size_px)
            .with_context(|| format!("base-line-height {:?}", raw.base_line_height))?;

        let config = ScaleConfig::new(base_font_size_px, base_line_height_px)
            .context("invalid rhythm configuration")?;
        log::debug!(
            "rhythm bases: font-size {base_font_size_px}px, line-height {base_line_height_px}px"
        );
        Ok(Self { config })
    }

    /// Build an engine from a JSON configuration document.
    ///
    /// # Errors
    /// Returns an error when the document fails to deserialize or the
    /// configured bases are rejected.
    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_raw(&RawConfig::from_json(text)?)
    }

    /// An engine over the default 16px / 24px bases.
    #[inline]
    pub fn with_defaults() -> Self {
        Self {
            config: ScaleConfig::default(),
        }
    }

    /// The validated configuration this engine resolves against.
    #[inline]
    pub const fn config(&self) -> &ScaleConfig {
        &self.config
    }

    /// Resolve one declaration site into style tokens.
    ///
    /// An absent `raw_line_height` means automatic rhythm derivation.
    ///
    /// # Errors
    /// Returns an error for a non-positive font size. The failure is
    /// scoped to this declaration; the engine stays usable and the caller
    /// decides whether to skip the declaration or abort the build.
    pub fn resolve_declaration(
        &self,
        font_size_px: f32,
        raw_line_height: Option<&str>,
    ) -> Result<ResolvedStyle> {
        let directive =
            raw_line_height.map_or(LineHeightDirective::Auto, LineHeightDirective::classify);
        resolve(&self.config, font_size_px, &directive)
            .with_context(|| format!("cannot resolve font-size {font_size_px}px"))
    }

    /// Resolve one declaration site and emit its declarations.
    ///
    /// # Errors
    /// Same conditions as [`Self::resolve_declaration`].
    pub fn emit_declaration(
        &self,
        font_size_px: f32,
        raw_line_height: Option<&str>,
    ) -> Result<Vec<Declaration>> {
        let resolved = self.resolve_declaration(font_size_px, raw_line_height)?;
        Ok(font_size_declarations(&resolved))
    }
}

/// Resolve the base line-height, which may be a length (px or rem against
/// the base font size) or a unitless ratio.
fn base_line_height_px(raw: &str, base_font_size_px: f32) -> Result<f32> {
    if let Ok(length) = Length::from_css(raw) {
        return Ok(length.to_px(base_font_size_px));
    }
    match Number::from_css(raw) {
        Ok(Number(ratio)) => Ok(ratio * base_font_size_px),
        Err(parse_error) => Err(anyhow!("not a length or ratio: {parse_error:?}")),
    }
}
