//! Serializable projection of a [`Configurator`] for WebSocket and REST transport.

use casegen::{ComposedPrompts, Configurator, ConfiguratorState};
use serde::Serialize;

/// Everything a front end needs to render: the state it edits and the two
/// prompts derived from it.
#[derive(Debug, Serialize)]
pub struct ConfiguratorSnapshot {
    #[serde(flatten)]
    pub state: ConfiguratorState,
    #[serde(flatten)]
    pub prompts: ComposedPrompts,
}

impl ConfiguratorSnapshot {
    /// Build a snapshot. Should be called while holding the configurator lock.
    pub fn from_configurator(configurator: &Configurator) -> Self {
        Self {
            state: configurator.state().clone(),
            prompts: configurator.prompts().clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
