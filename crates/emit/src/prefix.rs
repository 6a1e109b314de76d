//! Vendor-prefix fan-out for a single declaration.

use crate::Declaration;

/// Prefixes fanned out, in emission order. The unprefixed form is emitted
/// last so it wins where the client understands the standard property.
pub const VENDOR_PREFIXES: [&str; 4] = ["-webkit-", "-moz-", "-ms-", "-o-"];

/// Expand one property into its vendor-prefixed variants plus the
/// standard form.
pub fn prefixed_declarations(name: &str, value: &str) -> Vec<Declaration> {
    let mut out: Vec<Declaration> = VENDOR_PREFIXES
        .iter()
        .map(|prefix| Declaration::new(format!("{prefix}{name}"), value))
        .collect();
    out.push(Declaration::new(name, value));
    out
}
