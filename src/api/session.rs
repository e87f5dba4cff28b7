//! Session API endpoints.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use super::{error, success, ApiResult};
use crate::engine::Intent;
use crate::models::{DispatchResult, FilterOptions, RevisionInfo, SessionView};
use crate::AppState;

/// GET /api/session - Current derived view.
pub async fn get_session(State(state): State<AppState>) -> ApiResult<SessionView> {
    let mut session = state.session.lock().await;
    let revision_id = session.revision_id();
    success(session.view(), revision_id)
}

/// GET /api/session/revision - Current revision info.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    let session = state.session.lock().await;
    let info = session.revision_info();
    let revision_id = info.revision_id;
    success(info, revision_id)
}

/// POST /api/session/intents - Dispatch one intent and return the new view.
pub async fn dispatch_intent(
    State(state): State<AppState>,
    payload: Result<Json<Intent>, JsonRejection>,
) -> ApiResult<DispatchResult> {
    let mut session = state.session.lock().await;

    let Json(intent) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error(rejection.into(), session.revision_id()),
    };

    let selection = session.dispatch(intent);
    let view = session.view();
    success(DispatchResult { view, selection }, session.revision_id())
}

/// GET /api/options - Selector options for the current state.
pub async fn get_options(State(state): State<AppState>) -> ApiResult<FilterOptions> {
    let session = state.session.lock().await;
    success(session.options(), session.revision_id())
}
