#![allow(clippy::unwrap_used)]

use rhythm_emit::{
    Declaration, Rule, font_size_declarations, hidden, invisible, prefixed_declarations,
    selection_rules, visually_hidden, visually_hidden_focusable,
};
use rhythm_scale::{LineHeightDirective, ScaleConfig, resolve};

fn resolve_16_24(font_size_px: f32, directive: &LineHeightDirective) -> rhythm_scale::ResolvedStyle {
    let config = ScaleConfig::new(16.0, 24.0).unwrap();
    resolve(&config, font_size_px, directive).unwrap()
}

#[test]
fn font_size_emits_px_then_rem_fallback_pair() {
    let resolved = resolve_16_24(32.0, &LineHeightDirective::Auto);
    let declarations = font_size_declarations(&resolved);
    assert_eq!(
        declarations,
        vec![
            Declaration::new("font-size", "32px"),
            Declaration::new("font-size", "2rem"),
            Declaration::new("line-height", "1.5"),
        ]
    );
}

#[test]
fn suppressed_line_height_emits_no_line_height_declaration() {
    let resolved = resolve_16_24(32.0, &LineHeightDirective::Suppress);
    let declarations = font_size_declarations(&resolved);
    assert_eq!(declarations.len(), 2);
    assert!(declarations.iter().all(|decl| decl.name == "font-size"));
}

#[test]
fn keyword_line_height_emits_verbatim() {
    let directive = LineHeightDirective::classify("inherit");
    let resolved = resolve_16_24(16.0, &directive);
    let declarations = font_size_declarations(&resolved);
    assert_eq!(
        declarations.last().unwrap(),
        &Declaration::new("line-height", "inherit")
    );
}

#[test]
fn whole_numbers_serialize_without_decimal_point() {
    let resolved = resolve_16_24(16.0, &LineHeightDirective::Suppress);
    let declarations = font_size_declarations(&resolved);
    assert_eq!(declarations[0].value, "16px");
    assert_eq!(declarations[1].value, "1rem");
}

#[test]
fn declaration_display_includes_important_flag() {
    assert_eq!(
        Declaration::new("color", "inherit").to_string(),
        "color: inherit"
    );
    assert_eq!(
        Declaration::important("display", "none").to_string(),
        "display: none !important"
    );
}

#[test]
fn rule_display_formats_a_block() {
    let rule = Rule::new("::selection", vec![Declaration::new("text-shadow", "none")]);
    assert_eq!(
        rule.to_string(),
        "::selection {\n    text-shadow: none;\n}"
    );
}

#[test]
fn vendor_prefixes_fan_out_with_standard_form_last() {
    let declarations = prefixed_declarations("box-sizing", "border-box");
    let names: Vec<&str> = declarations
        .iter()
        .map(|decl| decl.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "-webkit-box-sizing",
            "-moz-box-sizing",
            "-ms-box-sizing",
            "-o-box-sizing",
            "box-sizing",
        ]
    );
    assert!(declarations.iter().all(|decl| decl.value == "border-box"));
}

#[test]
fn hidden_removes_from_layout_with_important() {
    assert_eq!(hidden(), vec![Declaration::important("display", "none")]);
}

#[test]
fn visually_hidden_uses_the_clip_pattern() {
    let declarations = visually_hidden();
    let clip = declarations
        .iter()
        .find(|decl| decl.name == "clip")
        .unwrap();
    assert_eq!(clip.value, "rect(0 0 0 0)");
    assert!(declarations.iter().any(|decl| decl.name == "position"));
}

#[test]
fn focusable_variant_undoes_the_clip_pattern() {
    let undo = visually_hidden_focusable();
    for name in ["clip", "height", "margin", "overflow", "position", "width"] {
        assert!(
            undo.iter().any(|decl| decl.name == name),
            "missing reset for {name}"
        );
    }
}

#[test]
fn invisible_keeps_the_box_in_layout() {
    assert_eq!(invisible(), vec![Declaration::new("visibility", "hidden")]);
}

#[test]
fn selection_rules_keep_moz_separate_from_standard() {
    let rules = selection_rules("#b3d4fc", "#000");
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].selector, "::-moz-selection");
    assert_eq!(rules[1].selector, "::selection");
    for rule in &rules {
        assert_eq!(
            rule.declarations,
            vec![
                Declaration::new("background", "#b3d4fc"),
                Declaration::new("color", "#000"),
                Declaration::new("text-shadow", "none"),
            ]
        );
    }
}
