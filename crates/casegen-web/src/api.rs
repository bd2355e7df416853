//! REST API endpoint handlers.
//!
//! These complement the WebSocket channel for clients that prefer
//! request/response semantics. Every mutation recomputes the prompts and is
//! broadcast to WebSocket clients by the configurator's event handler.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use casegen::{ComposedPrompts, Configurator, Error, ListName, Toggle, Variant};
use serde::Deserialize;

use crate::snapshot::ConfiguratorSnapshot;

/// Shared application state passed to all handlers via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub configurator: Arc<Mutex<Configurator>>,
}

/// Lock the configurator, recovering from a poisoned mutex. Each configurator
/// call leaves the state consistent before it dispatches events, so a panic
/// in a handler cannot leave an entry half-edited. A request that makes two
/// calls, like [`apply_entry_update`], may be cut off between them.
pub(crate) fn lock(configurator: &Arc<Mutex<Configurator>>) -> MutexGuard<'_, Configurator> {
    configurator.lock().unwrap_or_else(|e| e.into_inner())
}

/// Apply an entry update after checking the index, so either every
/// requested field changes or none does.
pub(crate) fn apply_entry_update(
    configurator: &mut Configurator,
    list: ListName,
    index: usize,
    enabled: Option<bool>,
    description: Option<String>,
) -> casegen::Result<()> {
    let len = configurator.state().lists.get(list).len();
    if index >= len {
        return Err(Error::IndexOutOfRange { list, index, len });
    }
    if let Some(enabled) = enabled {
        configurator.set_enabled(list, index, enabled)?;
    }
    if let Some(description) = description {
        configurator.set_description(list, index, description)?;
    }
    Ok(())
}

/// GET /api/state: Full state snapshot.
///
/// Returns the variant, toggles, enumeration lists and both prompts.
pub async fn get_state(State(app): State<AppState>) -> Json<serde_json::Value> {
    let snapshot = {
        let configurator = lock(&app.configurator);
        ConfiguratorSnapshot::from_configurator(&configurator)
    };
    Json(snapshot.to_json())
}

/// GET /api/prompts: The two current prompts.
pub async fn get_prompts(State(app): State<AppState>) -> Json<ComposedPrompts> {
    Json(lock(&app.configurator).prompts().clone())
}

/// Request body for POST /api/toggle.
#[derive(Deserialize)]
pub struct ToggleRequest {
    pub toggle: Toggle,
    pub enabled: bool,
}

/// POST /api/toggle: Switch one toggle. Returns 204.
pub async fn post_toggle(
    State(app): State<AppState>,
    Json(body): Json<ToggleRequest>,
) -> StatusCode {
    lock(&app.configurator).set_toggle(body.toggle, body.enabled);
    StatusCode::NO_CONTENT
}

/// Request body for POST /api/entry.
#[derive(Deserialize)]
pub struct EntryRequest {
    pub list: ListName,
    pub index: usize,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

/// POST /api/entry: Change an entry's enabled flag and/or description.
///
/// Returns 204 on success, 404 if the index is out of range.
pub async fn post_entry(
    State(app): State<AppState>,
    Json(body): Json<EntryRequest>,
) -> StatusCode {
    let mut configurator = lock(&app.configurator);
    match apply_entry_update(
        &mut configurator,
        body.list,
        body.index,
        body.enabled,
        body.description,
    ) {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::NOT_FOUND,
    }
}

/// Request body for POST /api/variant.
#[derive(Deserialize)]
pub struct VariantRequest {
    pub variant: Variant,
}

/// POST /api/variant: Switch template variant. Returns 204.
pub async fn post_variant(
    State(app): State<AppState>,
    Json(body): Json<VariantRequest>,
) -> StatusCode {
    lock(&app.configurator).set_variant(body.variant);
    StatusCode::NO_CONTENT
}

/// Request body for POST /api/reset.
#[derive(Deserialize)]
pub struct ResetRequest {
    pub list: ListName,
}

/// POST /api/reset: Restore a list to its defaults. Returns 204.
pub async fn post_reset(
    State(app): State<AppState>,
    Json(body): Json<ResetRequest>,
) -> StatusCode {
    lock(&app.configurator).reset_list(body.list);
    StatusCode::NO_CONTENT
}
