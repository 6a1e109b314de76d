//! Raw (pre-validation) configuration as the build supplies it.

use anyhow::{Context as _, Result};
use serde::Deserialize;

/// Configuration as written by the build: CSS value strings, not yet
/// parsed or validated.
///
/// `base_line_height` additionally accepts a unitless ratio (`"1.5"`),
/// resolved against the base font size. The base font size itself must be
/// an absolute length.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    pub base_font_size: String,
    pub base_line_height: String,
}

impl Default for RawConfig {
    /// The conventional 16px / 24px typographic baseline.
    #[inline]
    fn default() -> Self {
        Self {
            base_font_size: "16px".to_owned(),
            base_line_height: "24px".to_owned(),
        }
    }
}

impl RawConfig {
    /// Deserialize a configuration document. Missing fields fall back to
    /// the defaults; unknown fields are rejected so typos surface at load
    /// time instead of silently keeping a default.
    ///
    /// # Errors
    /// Returns an error when `text` is not a JSON object of the expected
    /// shape.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid rhythm configuration document")
    }
}
