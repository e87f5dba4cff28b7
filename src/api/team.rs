//! Team API endpoints.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use super::{error, success, ApiResult};
use crate::engine::Intent;
use crate::errors::AppError;
use crate::models::{RawRecordId, TeamResponse, UserRecord};
use crate::AppState;

/// Request body for adding a user to the team.
#[derive(Debug, Clone, Deserialize)]
pub struct AddToTeamRequest {
    pub id: RawRecordId,
}

/// GET /api/team - Current roster in selection order.
pub async fn get_team(State(state): State<AppState>) -> ApiResult<Vec<UserRecord>> {
    let session = state.session.lock().await;
    success(session.state().roster.clone(), session.revision_id())
}

/// POST /api/team - Add a user to the team.
///
/// A candidate that is unavailable or whose domain is already taken leaves
/// the roster unchanged and reports `accepted: false`; it is not an error.
pub async fn add_to_team(
    State(state): State<AppState>,
    payload: Result<Json<AddToTeamRequest>, JsonRejection>,
) -> ApiResult<TeamResponse> {
    let mut session = state.session.lock().await;
    let revision_id = session.revision_id();

    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error(rejection.into(), revision_id),
    };

    let id = request.id.into_string();
    if session.source().get(&id).is_none() {
        return error(
            AppError::NotFound(format!("User {} not found", id)),
            revision_id,
        );
    }

    let accepted = session
        .dispatch(Intent::AddToTeam { id })
        .is_some_and(|outcome| outcome.is_accepted());

    success(
        TeamResponse {
            team: session.state().roster.clone(),
            accepted,
        },
        session.revision_id(),
    )
}
