//! User record API endpoints.

use axum::extract::{Path, State};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::UserRecord;
use crate::AppState;

/// GET /api/users - All records in source order.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserRecord>> {
    let revision_id = state.session.lock().await.revision_id();
    success(state.source.records().to_vec(), revision_id)
}

/// GET /api/users/{id} - Get a single record.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserRecord> {
    let revision_id = state.session.lock().await.revision_id();

    match state.source.get(&id) {
        Some(user) => success(user.clone(), revision_id),
        None => error(
            AppError::NotFound(format!("User {} not found", id)),
            revision_id,
        ),
    }
}
