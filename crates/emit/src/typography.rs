//! Font-size emission: the px declaration, its rem fallback pair, and the
//! resolved line-height when one is present.

use crate::Declaration;
use rhythm_scale::{LineHeight, ResolvedStyle};

/// Emit the declarations for one resolved style.
///
/// The px declaration comes first so clients without rem support keep a
/// usable size; the rem declaration then overrides it where supported.
/// Suppressed or invalid line-heights emit no line-height declaration at
/// all.
pub fn font_size_declarations(style: &ResolvedStyle) -> Vec<Declaration> {
    let mut out = vec![
        Declaration::new("font-size", format!("{}px", style.size_px)),
        Declaration::new("font-size", format!("{}rem", style.size_rem)),
    ];
    if let Some(line_height) = style.line_height {
        out.push(Declaration::new("line-height", line_height_value(line_height)));
    }
    out
}

fn line_height_value(line_height: LineHeight) -> String {
    match line_height {
        LineHeight::Ratio(ratio) => format!("{ratio}"),
        LineHeight::Keyword(keyword) => keyword.as_str().to_owned(),
    }
}
