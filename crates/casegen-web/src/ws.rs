//! WebSocket upgrade handler and message dispatch.
//!
//! Each connected client receives:
//! 1. A full [`ConfiguratorSnapshot`] on connect.
//! 2. Incremental [`WsMessage`] updates after every mutation, from any client.
//!
//! Clients send JSON messages back to edit the configuration.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use casegen::{Configurator, ListName, Toggle, Variant};
use futures::{SinkExt, StreamExt, stream::SplitSink};
use serde::Deserialize;
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::api::{apply_entry_update, lock};
use crate::broadcast::WsMessage;
use crate::snapshot::ConfiguratorSnapshot;

/// Shared state for WebSocket handlers.
#[derive(Clone)]
pub struct WsState {
    pub configurator: Arc<Mutex<Configurator>>,
    pub broadcast_tx: broadcast::Sender<WsMessage>,
}

/// A message received from a WebSocket client.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ClientMessage {
    SetToggle {
        toggle: Toggle,
        enabled: bool,
    },
    SetEntry {
        list: ListName,
        index: usize,
        #[serde(default)]
        enabled: Option<bool>,
        #[serde(default)]
        description: Option<String>,
    },
    SetVariant {
        variant: Variant,
    },
    ResetList {
        list: ListName,
    },
}

/// GET /ws: WebSocket upgrade handler.
pub async fn ws_upgrade(
    ws: WebSocketUpgrade,
    State(ws_state): State<WsState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, ws_state))
}

/// Handle a single WebSocket connection.
async fn handle_socket(socket: WebSocket, ws_state: WsState) {
    let (mut sink, mut stream) = socket.split();

    // Subscribe before taking the snapshot so no mutation falls in between.
    let mut broadcast_rx = ws_state.broadcast_tx.subscribe();

    let snapshot_msg = snapshot_message(&ws_state.configurator);
    if ws_send(&mut sink, &snapshot_msg).await.is_err() {
        return;
    }

    debug!("WebSocket client connected");

    let configurator_for_resync = ws_state.configurator.clone();
    let forward_task = tokio::spawn(async move {
        loop {
            match broadcast_rx.recv().await {
                Ok(msg) => {
                    if ws_send(&mut sink, &msg).await.is_err() {
                        break; // Client disconnected.
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("WebSocket client lagged by {n} messages, resending snapshot");
                    let msg = snapshot_message(&configurator_for_resync);
                    if ws_send(&mut sink, &msg).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    while let Some(Ok(msg)) = stream.next().await {
        match msg {
            Message::Text(text) => handle_client_message(&text, &ws_state.configurator),
            Message::Close(_) => break,
            _ => {} // Ignore binary, ping, pong.
        }
    }

    debug!("WebSocket client disconnected");
    forward_task.abort();
}

/// Apply a JSON message received from a client. The resulting updates reach
/// every client, this one included, through the broadcast channel.
fn handle_client_message(text: &str, configurator: &Arc<Mutex<Configurator>>) {
    let msg = match serde_json::from_str::<ClientMessage>(text) {
        Ok(msg) => msg,
        Err(e) => {
            debug!("Ignoring malformed WebSocket message: {e}");
            return;
        }
    };

    let mut configurator = lock(configurator);
    match msg {
        ClientMessage::SetToggle { toggle, enabled } => {
            configurator.set_toggle(toggle, enabled);
        }
        ClientMessage::SetEntry {
            list,
            index,
            enabled,
            description,
        } => {
            if let Err(e) =
                apply_entry_update(&mut configurator, list, index, enabled, description)
            {
                warn!("Rejected WebSocket entry update: {e}");
            }
        }
        ClientMessage::SetVariant { variant } => {
            configurator.set_variant(variant);
        }
        ClientMessage::ResetList { list } => {
            configurator.reset_list(list);
        }
    }
}

fn snapshot_message(configurator: &Arc<Mutex<Configurator>>) -> WsMessage {
    let data = {
        let configurator = lock(configurator);
        ConfiguratorSnapshot::from_configurator(&configurator).to_json()
    };
    WsMessage::Snapshot { data }
}

/// Serialize a `WsMessage` and send it over the WebSocket sink.
async fn ws_send(sink: &mut SplitSink<WebSocket, Message>, msg: &WsMessage) -> Result<(), ()> {
    let json = serde_json::to_string(msg).unwrap_or_default();
    sink.send(Message::Text(json.into())).await.map_err(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared() -> Arc<Mutex<Configurator>> {
        Arc::new(Mutex::new(Configurator::default()))
    }

    #[test]
    fn set_toggle_message_applies() {
        let configurator = shared();
        handle_client_message(
            r#"{"type":"set_toggle","toggle":"category","enabled":false}"#,
            &configurator,
        );
        assert!(!lock(&configurator).state().toggles.category);
    }

    #[test]
    fn set_entry_message_applies_description() {
        let configurator = shared();
        handle_client_message(
            r#"{"type":"set_entry","list":"type","index":5,"description":"Third-party integration"}"#,
            &configurator,
        );
        let guard = lock(&configurator);
        assert!(
            guard
                .prompts()
                .system_prompt
                .contains("- \"partner\": Third-party integration")
        );
    }

    #[test]
    fn malformed_and_out_of_range_messages_change_nothing() {
        let configurator = shared();
        handle_client_message("not json", &configurator);
        handle_client_message(r#"{"type":"set_entry","list":"nature","index":99,"enabled":false}"#, &configurator);
        handle_client_message(r#"{"type":"explode"}"#, &configurator);
        assert_eq!(lock(&configurator).state(), Configurator::default().state());
    }

    #[test]
    fn variant_and_reset_messages_apply() {
        let configurator = shared();
        handle_client_message(
            r#"{"type":"set_entry","list":"nature","index":0,"enabled":false}"#,
            &configurator,
        );
        handle_client_message(r#"{"type":"reset_list","list":"nature"}"#, &configurator);
        handle_client_message(r#"{"type":"set_variant","variant":"classic"}"#, &configurator);

        let guard = lock(&configurator);
        assert_eq!(guard.state().variant, Variant::Classic);
        assert!(guard.state().lists.get(ListName::Nature).entries()[0].enabled);
    }
}
