//! Axum server setup and router construction.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::routing::{get, post};
use casegen::Configurator;
use tokio::sync::broadcast;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::error;

use crate::api::{self, AppState};
use crate::broadcast::WsMessage;
use crate::ws::{self, WsState};

/// Build the full axum router.
///
/// The router serves:
/// - WebSocket at `/ws`
/// - REST API at `/api/*`
/// - Optional static files for a front end built elsewhere
pub fn build_router(
    configurator: Arc<Mutex<Configurator>>,
    broadcast_tx: broadcast::Sender<WsMessage>,
    static_dir: Option<PathBuf>,
) -> Router {
    let app_state = AppState {
        configurator: configurator.clone(),
    };

    let ws_state = WsState {
        configurator,
        broadcast_tx,
    };

    // CORS layer for a front end served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let ws_routes = Router::new()
        .route("/ws", get(ws::ws_upgrade))
        .with_state(ws_state);

    let api_routes = Router::new()
        .route("/api/state", get(api::get_state))
        .route("/api/prompts", get(api::get_prompts))
        .route("/api/toggle", post(api::post_toggle))
        .route("/api/entry", post(api::post_entry))
        .route("/api/variant", post(api::post_variant))
        .route("/api/reset", post(api::post_reset))
        .with_state(app_state);

    let mut router = Router::new().merge(ws_routes).merge(api_routes).layer(cors);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
}

/// Bind the listener, start serving on a background task, and return the
/// bound address.
pub async fn start_server(router: Router, bind_addr: SocketAddr) -> std::io::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            error!("web server stopped: {e}");
        }
    });

    Ok(addr)
}
