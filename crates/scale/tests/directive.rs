#![allow(clippy::unwrap_used)]
#![allow(clippy::float_cmp)]

use rhythm_scale::{LineHeightDirective, LineHeightKeyword};

#[test]
fn numeric_values_classify_as_ratio() {
    assert_eq!(
        LineHeightDirective::classify("1.2"),
        LineHeightDirective::Ratio(1.2)
    );
    assert_eq!(
        LineHeightDirective::classify("2"),
        LineHeightDirective::Ratio(2.0)
    );
}

#[test]
fn keywords_classify_case_insensitively() {
    assert_eq!(
        LineHeightDirective::classify("inherit"),
        LineHeightDirective::Keyword(LineHeightKeyword::Inherit)
    );
    assert_eq!(
        LineHeightDirective::classify("Normal"),
        LineHeightDirective::Keyword(LineHeightKeyword::Normal)
    );
}

#[test]
fn false_sentinel_classifies_as_suppress() {
    assert_eq!(
        LineHeightDirective::classify("false"),
        LineHeightDirective::Suppress
    );
}

#[test]
fn none_sentinel_classifies_as_suppress() {
    assert_eq!(
        LineHeightDirective::classify("none"),
        LineHeightDirective::Suppress
    );
    assert_eq!(
        LineHeightDirective::classify("NONE"),
        LineHeightDirective::Suppress
    );
}

#[test]
fn whitespace_is_trimmed_before_classification() {
    assert_eq!(
        LineHeightDirective::classify("  normal  "),
        LineHeightDirective::Keyword(LineHeightKeyword::Normal)
    );
}

#[test]
fn unknown_idents_classify_as_invalid() {
    assert_eq!(
        LineHeightDirective::classify("bogus"),
        LineHeightDirective::Invalid("bogus".to_owned())
    );
}

#[test]
fn lengths_and_percentages_classify_as_invalid() {
    // The rhythm system emits unitless line-heights only; dimensioned
    // explicit values are an authoring mistake, not a passthrough.
    assert_eq!(
        LineHeightDirective::classify("24px"),
        LineHeightDirective::Invalid("24px".to_owned())
    );
    assert_eq!(
        LineHeightDirective::classify("150%"),
        LineHeightDirective::Invalid("150%".to_owned())
    );
}

#[test]
fn trailing_junk_classifies_as_invalid() {
    assert_eq!(
        LineHeightDirective::classify("1.2 oops"),
        LineHeightDirective::Invalid("1.2 oops".to_owned())
    );
}

#[test]
fn empty_input_classifies_as_invalid() {
    assert_eq!(
        LineHeightDirective::classify(""),
        LineHeightDirective::Invalid(String::new())
    );
}

#[test]
fn default_directive_is_auto() {
    assert_eq!(LineHeightDirective::default(), LineHeightDirective::Auto);
}
