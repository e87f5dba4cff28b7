//! Rendered page and form-post endpoints.

use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::engine::Intent;
use crate::errors::{AppError, AppErrorWithRevision};
use crate::models::AvailabilityFilter;
use crate::render;
use crate::AppState;

/// A control submission from the rendered page.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentForm {
    pub action: String,
    #[serde(default)]
    pub value: String,
}

impl IntentForm {
    /// Translate the form into exactly one intent.
    pub fn into_intent(self) -> Result<Intent, AppError> {
        let value = self.value;
        let optional = |v: String| if v.is_empty() { None } else { Some(v) };

        match self.action.as_str() {
            "search" => Ok(Intent::Search { text: value }),
            "domain" => Ok(Intent::SetDomain {
                domain: optional(value),
            }),
            "gender" => Ok(Intent::SetGender {
                gender: optional(value),
            }),
            "availability" => Ok(Intent::SetAvailability {
                availability: AvailabilityFilter::from_control_value(&value),
            }),
            "page" => value
                .trim()
                .parse()
                .map(|page| Intent::ChangePage { page })
                .map_err(|_| AppError::Validation(format!("Invalid page number: {:?}", value))),
            "addToTeam" => Ok(Intent::AddToTeam { id: value }),
            other => Err(AppError::BadRequest(format!("Unknown action: {}", other))),
        }
    }
}

/// GET / - Render the widget for the current session.
pub async fn index(
    State(state): State<AppState>,
) -> Result<Html<String>, AppErrorWithRevision> {
    let mut session = state.session.lock().await;
    let revision_id = session.revision_id();

    render::render_page(&session.view())
        .map(Html)
        .map_err(|error| AppErrorWithRevision { error, revision_id })
}

/// POST /ui/intent - Apply one control change, then redirect to the page.
pub async fn ui_intent(
    State(state): State<AppState>,
    form: Result<Form<IntentForm>, FormRejection>,
) -> Result<Redirect, AppErrorWithRevision> {
    let mut session = state.session.lock().await;
    let revision_id = session.revision_id();

    let intent = form
        .map_err(AppError::from)
        .and_then(|Form(form)| form.into_intent())
        .map_err(|error| AppErrorWithRevision { error, revision_id })?;

    session.dispatch(intent);
    Ok(Redirect::to("/"))
}
