//! Visibility toggle declaration sets.
//!
//! Fixed declaration lists with no branching; the distinctions matter
//! though: `hidden` removes the element from layout, `visually_hidden`
//! keeps it available to screen readers, `invisible` keeps its box in the
//! layout.

use crate::Declaration;

/// Hide from everyone, including screen readers. Removed from layout.
pub fn hidden() -> Vec<Declaration> {
    vec![Declaration::important("display", "none")]
}

/// Hide visually while remaining available to screen readers.
pub fn visually_hidden() -> Vec<Declaration> {
    vec![
        Declaration::new("border", "0"),
        Declaration::new("clip", "rect(0 0 0 0)"),
        Declaration::new("height", "1px"),
        Declaration::new("margin", "-1px"),
        Declaration::new("overflow", "hidden"),
        Declaration::new("padding", "0"),
        Declaration::new("position", "absolute"),
        Declaration::new("width", "1px"),
    ]
}

/// Undo [`visually_hidden`] when the element receives focus, so keyboard
/// users can reach skip links and similar controls.
pub fn visually_hidden_focusable() -> Vec<Declaration> {
    vec![
        Declaration::new("clip", "auto"),
        Declaration::new("height", "auto"),
        Declaration::new("margin", "0"),
        Declaration::new("overflow", "visible"),
        Declaration::new("position", "static"),
        Declaration::new("width", "auto"),
    ]
}

/// Hide visually and from screen readers, but keep the box in layout.
pub fn invisible() -> Vec<Declaration> {
    vec![Declaration::new("visibility", "hidden")]
}
