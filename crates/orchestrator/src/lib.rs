//! Coordinating crate: loads the typographic configuration once, then
//! resolves and emits style tokens per declaration site.
//!
//! This is the only crate that talks `anyhow`; the member crates keep
//! their own plain error types and this seam adds context.

#![forbid(unsafe_code)]

mod config;
mod engine;

pub use config::RawConfig;
pub use engine::StyleEngine;
