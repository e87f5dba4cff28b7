//! Session store: the single owner of mutable UI state.
//!
//! Handlers lock the store, dispatch one intent, and derive a fresh view.

use std::sync::Arc;

use chrono::Utc;

use crate::engine::{self, FilterCache, Intent, SelectionOutcome, SessionState, PAGE_SIZE};
use crate::models::{
    AvailabilityFilter, FilterOptions, PageButton, RevisionInfo, SelectOption, SessionView,
};
use crate::source::RecordSource;

/// Holds the current session state together with its revision counter.
#[derive(Debug)]
pub struct SessionStore {
    source: Arc<RecordSource>,
    state: SessionState,
    revision_id: i64,
    updated_at: String,
    cache: FilterCache,
}

impl SessionStore {
    pub fn new(source: Arc<RecordSource>, cache_capacity: usize) -> Self {
        Self {
            source,
            state: SessionState::default(),
            revision_id: 0,
            updated_at: Utc::now().to_rfc3339(),
            cache: FilterCache::new(cache_capacity),
        }
    }

    pub fn source(&self) -> &RecordSource {
        &self.source
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn revision_id(&self) -> i64 {
        self.revision_id
    }

    pub fn revision_info(&self) -> RevisionInfo {
        RevisionInfo {
            revision_id: self.revision_id,
            updated_at: self.updated_at.clone(),
        }
    }

    /// Reduce one intent into the session and bump the revision.
    pub fn dispatch(&mut self, intent: Intent) -> Option<SelectionOutcome> {
        let kind = intent.kind();
        let transition = engine::reduce(&self.state, intent, &self.source);

        self.state = transition.state;
        self.revision_id += 1;
        self.updated_at = Utc::now().to_rfc3339();

        match &transition.selection {
            Some(SelectionOutcome::Accepted) => {
                tracing::info!(team_size = self.state.roster.len(), "Added user to team");
            }
            Some(rejected) => {
                tracing::debug!(outcome = ?rejected, "Add to team rejected");
            }
            None => {}
        }
        tracing::debug!(
            intent = kind,
            revision_id = self.revision_id,
            page = self.state.current_page,
            "Dispatched intent"
        );

        transition.selection
    }

    /// Derive the full view for the current state.
    pub fn view(&mut self) -> SessionView {
        let records = self.source.records();
        let matching = self.cache.matching(records, &self.state.filter);
        let page = engine::paginate(&matching, PAGE_SIZE, self.state.current_page)
            .map(|index| records[index].clone());

        let pages = (1..=page.total_pages)
            .map(|number| PageButton {
                number,
                current: number == page.current_page,
            })
            .collect();

        SessionView {
            filter: self.state.filter.clone(),
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_matches: page.total_items,
            page_size: PAGE_SIZE,
            users: page.items,
            pages,
            team: self.state.roster.clone(),
            options: self.options(),
        }
    }

    /// Selector options with the active choice marked.
    pub fn options(&self) -> FilterOptions {
        let filter = &self.state.filter;

        let mut domains = vec![SelectOption::new("", "All", filter.domain.is_none())];
        domains.extend(self.source.domains().iter().map(|domain| {
            SelectOption::new(
                domain.as_str(),
                domain.as_str(),
                filter.domain.as_deref() == Some(domain.as_str()),
            )
        }));

        let mut genders = vec![SelectOption::new("", "All", filter.gender.is_none())];
        genders.extend(engine::SELECTABLE_GENDERS.iter().map(|gender| {
            SelectOption::new(
                gender.as_str(),
                gender.as_str(),
                filter.gender.as_ref() == Some(gender),
            )
        }));

        let availability = AvailabilityFilter::options()
            .into_iter()
            .map(|option| {
                SelectOption::new(
                    option.as_str(),
                    option.label(),
                    filter.availability == option,
                )
            })
            .collect();

        FilterOptions {
            domains,
            genders,
            availability,
        }
    }
}
