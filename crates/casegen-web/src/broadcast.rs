//! [`EventHandler`] that converts configurator events into WebSocket messages.
//!
//! [`WebBroadcastHandler`] is installed on the shared
//! [`Configurator`](casegen::Configurator). Every accepted mutation, whichever
//! client or endpoint triggered it, is serialized into [`WsMessage`] values
//! and fanned out to all connected clients through a
//! `tokio::sync::broadcast` channel.

use casegen::events::{ConfigEvent, EventHandler};
use casegen::{EnumerationEntry, ListName, Toggle, Variant};
use serde::Serialize;
use tokio::sync::broadcast;

/// A message sent from the server to WebSocket clients.
///
/// Discriminated on the `type` field when serialized to JSON.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    /// Full state snapshot (sent on connect and after a client lags).
    Snapshot { data: serde_json::Value },
    /// A toggle was switched.
    Toggle { toggle: Toggle, enabled: bool },
    /// An enumeration entry changed.
    Entry {
        list: ListName,
        index: usize,
        entry: EnumerationEntry,
    },
    /// A list was restored to its defaults.
    ListReset { list: ListName },
    /// The template variant changed.
    Variant { variant: Variant },
    /// The recomputed prompts. Always follows one of the change messages.
    Prompts {
        system_prompt: String,
        user_prompt: String,
    },
}

impl WsMessage {
    /// Convert a configurator event into its wire form.
    pub fn from_event(event: &ConfigEvent<'_>) -> Self {
        match event {
            ConfigEvent::ToggleChanged { toggle, enabled } => Self::Toggle {
                toggle: *toggle,
                enabled: *enabled,
            },
            ConfigEvent::EntryChanged { list, index, entry } => Self::Entry {
                list: *list,
                index: *index,
                entry: (*entry).clone(),
            },
            ConfigEvent::ListReset { list } => Self::ListReset { list: *list },
            ConfigEvent::VariantChanged { variant } => Self::Variant { variant: *variant },
            ConfigEvent::PromptsComposed(prompts) => Self::Prompts {
                system_prompt: prompts.system_prompt.clone(),
                user_prompt: prompts.user_prompt.clone(),
            },
        }
    }
}

/// Broadcasts configurator events to WebSocket clients.
pub struct WebBroadcastHandler {
    tx: broadcast::Sender<WsMessage>,
}

impl WebBroadcastHandler {
    pub fn new(tx: broadcast::Sender<WsMessage>) -> Self {
        Self { tx }
    }
}

impl EventHandler for WebBroadcastHandler {
    fn on_event(&self, event: &ConfigEvent<'_>) {
        // No subscribers is fine: nobody is connected yet.
        let _ = self.tx.send(WsMessage::from_event(event));
    }
}
