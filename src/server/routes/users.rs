//! User listing endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

use super::load_store;
use crate::server::state::AppState;
use crate::store::types::UserId;

/// Entry of the v1 dropdown listing, derived from the dataset alone.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub user_id: UserId,
    pub name: String,
}

/// Entry of the v2 listing, backed by the user directory.
#[derive(Debug, Serialize)]
pub struct UserDetail {
    pub user_id: UserId,
    pub name: String,
    pub avatar: Option<String>,
}

/// GET /api/v1/users - Users present in the dataset, ascending id.
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserSummary>>, StatusCode> {
    let store = load_store(&state)?;

    let users = store
        .user_ids()
        .map(|user_id| UserSummary {
            user_id,
            name: format!("User {}", user_id),
        })
        .collect();

    Ok(Json(users))
}

/// GET /api/v2/users - Directory entries sorted by display name.
pub async fn list_directory(State(state): State<Arc<AppState>>) -> Json<Vec<UserDetail>> {
    let users = state
        .users
        .sorted_by_name()
        .into_iter()
        .map(|(user_id, profile)| UserDetail {
            user_id,
            name: profile.name.clone(),
            avatar: profile.avatar.clone(),
        })
        .collect();

    Json(users)
}

/// GET /api/v2/users/:user_id - One directory entry.
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<UserDetail>, StatusCode> {
    match state.users.get(user_id) {
        Some(profile) => Ok(Json(UserDetail {
            user_id,
            name: profile.name.clone(),
            avatar: profile.avatar.clone(),
        })),
        None => {
            tracing::debug!(user_id, "user not found in directory");
            Err(StatusCode::NOT_FOUND)
        }
    }
}
