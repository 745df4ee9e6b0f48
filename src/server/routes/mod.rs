//! Route handlers module.

pub mod health;
pub mod stats;
pub mod users;

use crate::server::state::AppState;
use crate::store::types::{PresenceStore, UserId};
use axum::http::StatusCode;
use std::sync::Arc;

/// Fetches the cached presence store, mapping failure to a 500.
pub(crate) fn load_store(state: &AppState) -> Result<Arc<PresenceStore>, StatusCode> {
    state.cache.get().map_err(|e| {
        tracing::error!(error = %e, "failed to load presence data");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Logs and returns the 404 for an id missing from the dataset.
pub(crate) fn user_not_found(user_id: UserId) -> StatusCode {
    tracing::debug!(user_id, "user not found");
    StatusCode::NOT_FOUND
}
