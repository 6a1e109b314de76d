//! Typographic scale resolver.
//!
//! Computes font-size tokens (absolute px plus a rem equivalent normalized
//! against a base size) and line-height values that align every element to
//! a shared vertical-rhythm grid: the resolved line-height in absolute
//! pixels is always an integer multiple of the configured base line-height.
//! Line-height behavior follows CSS2 §10.8:
//! <https://www.w3.org/TR/CSS2/visudet.html#line-height>

#![forbid(unsafe_code)]

mod config;
mod directive;
mod resolver;

pub use config::{ScaleConfig, ScaleError};
pub use directive::{LineHeightDirective, LineHeightKeyword};
pub use resolver::{LineHeight, ResolvedStyle, resolve, rhythm_line_height_px, rhythm_step};
