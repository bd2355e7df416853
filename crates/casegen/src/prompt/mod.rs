//! Prompt composition: state in, two strings out.
//!
//! The composer has three layers:
//!
//! 1. **[`templates`]**: literal fragments, including the leading/trailing
//!    newlines that glue them together.
//!
//! 2. **[`PromptBuilder`]**: concatenates fragments in call order, with
//!    conditional and optional helpers, and trims the result.
//!
//! 3. **[`compose_system_prompt`] / [`compose_user_prompt`]**: the fixed
//!    fragment order for each prompt, driven by a [`ConfiguratorState`].
//!
//! Composition is pure: identical state always yields byte-identical output,
//! and the result depends only on current state, never on the order in
//! which toggles were flipped.

pub mod builder;
mod system;
pub mod templates;
mod user;

pub use builder::PromptBuilder;
pub use system::{compose_system_prompt, explanation_block};
pub use user::compose_user_prompt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::state::ConfiguratorState;

/// The two generated prompts, trimmed and ready for display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedPrompts {
    pub system_prompt: String,
    pub user_prompt: String,
}

/// Compose both prompts for the given state.
pub fn compose(state: &ConfiguratorState) -> ComposedPrompts {
    let prompts = ComposedPrompts {
        system_prompt: compose_system_prompt(state),
        user_prompt: compose_user_prompt(state),
    };
    trace!(
        variant = %state.variant,
        system_len = prompts.system_prompt.len(),
        user_len = prompts.user_prompt.len(),
        "prompts composed"
    );
    prompts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_matches_individual_functions() {
        let state = ConfiguratorState::default();
        let prompts = compose(&state);
        assert_eq!(prompts.system_prompt, compose_system_prompt(&state));
        assert_eq!(prompts.user_prompt, compose_user_prompt(&state));
    }

    #[test]
    fn composed_prompts_serialize_with_snake_case_fields() {
        let json = serde_json::to_value(compose(&ConfiguratorState::default())).unwrap();
        assert!(json["system_prompt"].as_str().unwrap().starts_with("You are an expert"));
        assert!(json["user_prompt"].as_str().unwrap().starts_with("## Requirement"));
    }
}
