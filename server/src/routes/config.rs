//! Provider configuration published to the browser build.

use axum::Json;
use axum::extract::State;
use gotrue::ClientConfig;

use crate::state::AppState;

/// `GET /api/config`: provider URL and anon key, or `null` when unset.
pub async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(state.client_config.as_ref().clone())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
