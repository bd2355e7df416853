//! Browser-facing boundary for the `casegen` prompt configurator.
//!
//! `casegen-web` serves a shared [`Configurator`] over a REST API and a
//! WebSocket endpoint. A browser page renders the toggles and enumeration
//! lists, sends edits, and receives the recomputed prompts after every
//! change. Rendering and clipboard access stay in the page.
//!
//! # Quick start
//!
//! ```ignore
//! use casegen::ConfiguratorState;
//! use casegen_web::{WebConfig, shared_configurator, spawn_web};
//!
//! let config = WebConfig::default();
//! let (ws_tx, _) = tokio::sync::broadcast::channel(config.broadcast_capacity);
//! let configurator = shared_configurator(ConfiguratorState::default(), ws_tx.clone());
//!
//! let addr = spawn_web(configurator, ws_tx, config).await?;
//! println!("Configurator API: http://{addr}/api/state");
//! ```
//!
//! # Architecture
//!
//! ```text
//! /api/*, /ws client edits ──▶ Arc<Mutex<Configurator>> ──ConfigEvent──▶ WebBroadcastHandler
//!                                                                              │
//!                         WebSocket clients ◀──────────── WsMessage ───────────┘
//! ```
//!
//! The [`WebBroadcastHandler`] implements
//! [`EventHandler`](casegen::events::EventHandler), so every accepted edit,
//! whichever endpoint it came through, reaches every connected client as a
//! change message followed by the new prompts.

mod api;
pub mod broadcast;
mod server;
pub mod snapshot;
mod ws;

pub use broadcast::{WebBroadcastHandler, WsMessage};
pub use snapshot::ConfiguratorSnapshot;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use casegen::events::{CompositeEventHandler, LoggingHandler};
use casegen::{Configurator, ConfiguratorState};

/// Configuration for the web server.
pub struct WebConfig {
    /// Address to bind to. Default: `127.0.0.1:3001`.
    pub bind_addr: SocketAddr,
    /// Directory of a static front end to serve at `/`.
    ///
    /// If `None`, only API/WS endpoints are served.
    pub static_dir: Option<PathBuf>,
    /// WebSocket broadcast channel capacity. Default: 256.
    ///
    /// Clients that fall behind by this many messages receive a fresh
    /// snapshot to resynchronize.
    pub broadcast_capacity: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3001)),
            static_dir: None,
            broadcast_capacity: 256,
        }
    }
}

/// Wrap `state` in a shared [`Configurator`] that logs its events and
/// broadcasts them to WebSocket clients through `broadcast_tx`.
pub fn shared_configurator(
    state: ConfiguratorState,
    broadcast_tx: tokio::sync::broadcast::Sender<WsMessage>,
) -> Arc<Mutex<Configurator>> {
    let handler = CompositeEventHandler::new()
        .with(LoggingHandler)
        .with(WebBroadcastHandler::new(broadcast_tx));
    Arc::new(Mutex::new(Configurator::new(state).with_event_handler(handler)))
}

/// Spawn the web server on a Tokio task and return the bound address.
///
/// The server runs until the Tokio runtime shuts down.
///
/// # Arguments
///
/// * `configurator`: Shared configurator; build it with
///   [`shared_configurator`] so edits reach WebSocket clients.
/// * `broadcast_tx`: Sender half of the WebSocket broadcast channel, the
///   same one given to [`WebBroadcastHandler::new()`].
/// * `config`: Server configuration.
pub async fn spawn_web(
    configurator: Arc<Mutex<Configurator>>,
    broadcast_tx: tokio::sync::broadcast::Sender<WsMessage>,
    config: WebConfig,
) -> std::io::Result<SocketAddr> {
    let router = server::build_router(configurator, broadcast_tx, config.static_dir);
    server::start_server(router, config.bind_addr).await
}
