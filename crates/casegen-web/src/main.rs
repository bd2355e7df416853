//! Serve the prompt configurator to a browser.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p casegen-web
//! cargo run -p casegen-web -- --port 8080 --static-dir ./web/dist
//! cargo run -p casegen-web -- --variant classic --no-dataset
//! ```
//!
//! ## Editing from a client
//!
//! **WebSocket** (connect to `/ws`):
//! ```json
//! {"type": "set_toggle", "toggle": "dataset", "enabled": false}
//! {"type": "set_entry", "list": "nature", "index": 6, "enabled": false}
//! ```
//!
//! **REST**:
//! ```json
//! POST /api/toggle {"toggle": "references", "enabled": false}
//! POST /api/entry  {"list": "category", "index": 2, "description": "UX"}
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use casegen::{ConfiguratorState, Toggle, ToggleState, Variant};
use casegen_web::{WebConfig, WsMessage, shared_configurator, spawn_web};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prompt configurator web server.
#[derive(Parser)]
#[command(about = "Serve the test-case prompt configurator over REST and WebSocket")]
struct Args {
    /// Port for the web server.
    #[arg(long, default_value_t = 3001)]
    port: u16,

    /// Directory of a static front end to serve at `/`.
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Template variant to start with.
    #[arg(long, default_value = "full")]
    variant: Variant,

    /// Start with the dataset toggle off.
    #[arg(long)]
    no_dataset: bool,

    /// WebSocket broadcast channel capacity.
    #[arg(long, default_value_t = 256)]
    broadcast_capacity: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let web_config = WebConfig {
        bind_addr: ([127, 0, 0, 1], args.port).into(),
        static_dir: args.static_dir,
        broadcast_capacity: args.broadcast_capacity,
    };

    let (ws_tx, _) = tokio::sync::broadcast::channel::<WsMessage>(web_config.broadcast_capacity);
    let toggles = ToggleState::all_on().with(Toggle::Dataset, !args.no_dataset);
    let configurator = shared_configurator(ConfiguratorState::new(args.variant, toggles), ws_tx.clone());

    let addr = spawn_web(configurator, ws_tx, web_config)
        .await
        .with_context(|| format!("failed to bind port {}", args.port))?;
    info!("Configurator API: http://{addr}/api/state");
    println!("Web UI: http://{addr}");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for ctrl-c")?;
    info!("shutting down");
    Ok(())
}
