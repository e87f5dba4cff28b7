//! Derived view models returned by the presentation layer.

use serde::Serialize;

use super::{FilterState, UserRecord};
use crate::engine::SelectionOutcome;

/// One entry of a selector control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected,
        }
    }
}

/// Options for the three filter selectors.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub domains: Vec<SelectOption>,
    pub genders: Vec<SelectOption>,
    pub availability: Vec<SelectOption>,
}

/// A page-number button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub number: usize,
    pub current: bool,
}

/// Everything needed to render the widget for the current session state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub filter: FilterState,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub page_size: usize,
    pub users: Vec<UserRecord>,
    pub pages: Vec<PageButton>,
    pub team: Vec<UserRecord>,
    pub options: FilterOptions,
}

/// Revision information for change detection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: i64,
    pub updated_at: String,
}

/// Result of dispatching one intent.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchResult {
    pub view: SessionView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionOutcome>,
}

/// The roster after an add-to-team request.
#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub team: Vec<UserRecord>,
    pub accepted: bool,
}
