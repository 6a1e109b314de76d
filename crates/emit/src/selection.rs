//! Selection pseudo-element rules.

use crate::{Declaration, Rule};

/// Build the `::selection` rule pair for the given colors.
///
/// The `-moz-` rule must stay separate from the standard one: a grouped
/// selector containing a pseudo-element the client does not recognize
/// drops the entire rule.
pub fn selection_rules(background: &str, color: &str) -> Vec<Rule> {
    ["::-moz-selection", "::selection"]
        .iter()
        .map(|selector| {
            Rule::new(
                *selector,
                vec![
                    Declaration::new("background", background),
                    Declaration::new("color", color),
                    Declaration::new("text-shadow", "none"),
                ],
            )
        })
        .collect()
}
