//! Declaration and rule records plus the emission helpers built on them.
//!
//! Everything here is a plain value transform: resolved style tokens in,
//! name/value declaration records out, serialized to CSS text by the
//! `Display` impls.

#![forbid(unsafe_code)]

pub mod prefix;
pub mod selection;
pub mod typography;
pub mod visibility;

pub use prefix::{VENDOR_PREFIXES, prefixed_declarations};
pub use selection::selection_rules;
pub use typography::font_size_declarations;
pub use visibility::{hidden, invisible, visually_hidden, visually_hidden_focusable};

use std::fmt;

/// A single `name: value` style declaration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    /// A declaration without `!important`.
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            important: false,
        }
    }

    /// A declaration carrying `!important`.
    #[inline]
    pub fn important(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            important: true,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.important {
            write!(f, "{}: {} !important", self.name, self.value)
        } else {
            write!(f, "{}: {}", self.name, self.value)
        }
    }
}

/// A selector with its declaration block.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    #[inline]
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for declaration in &self.declarations {
            writeln!(f, "    {declaration};")?;
        }
        write!(f, "}}")
    }
}
