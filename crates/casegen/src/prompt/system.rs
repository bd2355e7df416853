//! System prompt assembly.

use super::builder::PromptBuilder;
use super::templates::{
    DATASET_HEAD, DATASET_TAIL, DATASET_TYPE_LINE, NATURE_SCHEMA_LINE, STATIC_TYPE_BLOCK,
    SYSTEM_FOOTER, SYSTEM_HEADER, SYSTEM_SCHEMA_BODY, TYPE_SCHEMA_LINE,
};
use crate::enumeration::{EnumerationList, ListName};
use crate::state::{ConfiguratorState, Variant};

/// Build the system prompt for the given state.
///
/// Fragment order is fixed: header, `nature` then `type` schema lines,
/// schema body, nature then type explanations, dataset block, footer.
pub fn compose_system_prompt(state: &ConfiguratorState) -> String {
    match state.variant {
        Variant::Full => compose_full(state),
        Variant::Classic => compose_classic(state),
    }
}

fn compose_full(state: &ConfiguratorState) -> String {
    let toggles = &state.toggles;
    let lists = &state.lists;

    PromptBuilder::new(SYSTEM_HEADER)
        .fragment_if(toggles.nature, || NATURE_SCHEMA_LINE.into())
        .fragment_if(toggles.r#type, || TYPE_SCHEMA_LINE.into())
        .fragment(SYSTEM_SCHEMA_BODY)
        .fragment_if(toggles.nature, || {
            explanation_block(ListName::Nature, lists.get(ListName::Nature))
        })
        .fragment_if(toggles.r#type, || {
            explanation_block(ListName::Type, lists.get(ListName::Type))
        })
        .fragment_if(toggles.dataset, || {
            [DATASET_HEAD, DATASET_TAIL].concat()
        })
        .fragment(SYSTEM_FOOTER)
        .build()
}

fn compose_classic(state: &ConfiguratorState) -> String {
    let toggles = &state.toggles;

    PromptBuilder::new(SYSTEM_HEADER)
        .fragment_if(toggles.nature, || NATURE_SCHEMA_LINE.into())
        .fragment(TYPE_SCHEMA_LINE)
        .fragment(SYSTEM_SCHEMA_BODY)
        .fragment_if(toggles.nature, || {
            explanation_block(ListName::Nature, state.lists.get(ListName::Nature))
        })
        .fragment(STATIC_TYPE_BLOCK)
        .fragment_if(toggles.dataset, || {
            [DATASET_HEAD, DATASET_TYPE_LINE, DATASET_TAIL].concat()
        })
        .fragment(SYSTEM_FOOTER)
        .build()
}

/// `The "<field>" field must have one of the following values:` followed by
/// the active entries. The heading is kept even when no entry is active.
pub fn explanation_block(field: ListName, list: &EnumerationList) -> String {
    format!(
        "\nThe \"{field}\" field must have one of the following values:\n{}",
        list.explanation_lines()
    )
}
