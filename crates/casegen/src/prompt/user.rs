//! User prompt assembly.
//!
//! The user prompt is a template for a downstream engine: `{{name}}`,
//! `{{#if}}`, `{{#each}}`, `{{#with}}` and `{{! }}` tokens are emitted as-is.

use super::builder::PromptBuilder;
use super::templates::{
    CATEGORY_DEFINITIONS_HEADING, CATEGORY_LINE, CLASSIC_USER_TEMPLATE, NATURE_LINE,
    REFERENCE_LINE, USER_HEADER, USER_RELATED_CLOSE, USER_RELATED_OPEN,
};
use crate::enumeration::ListName;
use crate::state::{ConfiguratorState, Variant};
use crate::toggles::ToggleState;

/// Build the user prompt for the given state.
pub fn compose_user_prompt(state: &ConfiguratorState) -> String {
    match state.variant {
        Variant::Full => compose_full(state),
        Variant::Classic => PromptBuilder::new(CLASSIC_USER_TEMPLATE).build(),
    }
}

fn compose_full(state: &ConfiguratorState) -> String {
    let toggles = &state.toggles;
    let lines = requirement_lines(toggles);

    PromptBuilder::new(USER_HEADER)
        .fragment_opt(lines.as_deref())
        .fragment(USER_RELATED_OPEN)
        .fragment_opt(lines.as_deref())
        .fragment(USER_RELATED_CLOSE)
        .fragment_if(toggles.category, || {
            format!(
                "{CATEGORY_DEFINITIONS_HEADING}{}",
                state.lists.get(ListName::Category).explanation_lines()
            )
        })
        .build()
}

/// Blank line plus the `Reference:`/`Category:`/`Nature:` placeholder lines
/// that are switched on, in that order. Shared by the main requirement and
/// every related requirement.
fn requirement_lines(toggles: &ToggleState) -> Option<String> {
    let lines: String = [
        (toggles.references, REFERENCE_LINE),
        (toggles.category, CATEGORY_LINE),
        (toggles.nature, NATURE_LINE),
    ]
    .into_iter()
    .filter_map(|(on, line)| on.then_some(line))
    .collect();

    (!lines.is_empty()).then(|| format!("\n{lines}"))
}
