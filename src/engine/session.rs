//! Session state and the intent reducer.
//!
//! Every user action becomes one [`Intent`]; [`reduce`] maps the current
//! state and an intent to the next state without touching anything else.

use serde::{Deserialize, Serialize};

use super::selection::{self, SelectionOutcome};
use crate::models::{AvailabilityFilter, FilterState, Gender, UserRecord};
use crate::source::RecordSource;

/// Genders always offered by the gender selector.
pub const SELECTABLE_GENDERS: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Agender];

/// Immutable snapshot of one operator session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub filter: FilterState,
    /// 1-based
    pub current_page: usize,
    pub roster: Vec<UserRecord>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            current_page: 1,
            roster: Vec::new(),
        }
    }
}

/// A single user action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Intent {
    Search {
        #[serde(default)]
        text: String,
    },
    SetDomain {
        #[serde(default)]
        domain: Option<String>,
    },
    SetGender {
        #[serde(default)]
        gender: Option<String>,
    },
    SetAvailability {
        availability: AvailabilityFilter,
    },
    ChangePage {
        page: usize,
    },
    AddToTeam {
        id: String,
    },
}

impl Intent {
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::Search { .. } => "search",
            Intent::SetDomain { .. } => "setDomain",
            Intent::SetGender { .. } => "setGender",
            Intent::SetAvailability { .. } => "setAvailability",
            Intent::ChangePage { .. } => "changePage",
            Intent::AddToTeam { .. } => "addToTeam",
        }
    }
}

/// The state produced by one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    /// Set only for [`Intent::AddToTeam`].
    pub selection: Option<SelectionOutcome>,
}

/// Map a selector value to a domain filter. Empty values and domains absent
/// from the source mean no filter.
pub fn normalize_domain(value: Option<&str>, source: &RecordSource) -> Option<String> {
    let value = value?;
    if value.is_empty() || !source.has_domain(value) {
        return None;
    }
    Some(value.to_string())
}

/// Map a selector value to a gender filter, with the same rules as domains.
pub fn normalize_gender(value: Option<&str>, source: &RecordSource) -> Option<Gender> {
    let value = value?;
    if value.is_empty() {
        return None;
    }
    let gender = Gender::from(value);
    if SELECTABLE_GENDERS.contains(&gender) || source.has_gender(&gender) {
        Some(gender)
    } else {
        None
    }
}

/// Compute the next session state.
///
/// Any filter change resets the page to 1 in the same step.
pub fn reduce(state: &SessionState, intent: Intent, source: &RecordSource) -> Transition {
    let mut next = state.clone();
    let mut selection = None;

    match intent {
        Intent::Search { text } => {
            next.filter.search = text;
            next.current_page = 1;
        }
        Intent::SetDomain { domain } => {
            next.filter.domain = normalize_domain(domain.as_deref(), source);
            next.current_page = 1;
        }
        Intent::SetGender { gender } => {
            next.filter.gender = normalize_gender(gender.as_deref(), source);
            next.current_page = 1;
        }
        Intent::SetAvailability { availability } => {
            next.filter.availability = availability;
            next.current_page = 1;
        }
        Intent::ChangePage { page } => {
            next.current_page = page.max(1);
        }
        Intent::AddToTeam { id } => {
            let outcome = match source.get(&id) {
                Some(candidate) => {
                    let outcome = selection::check(&state.roster, candidate);
                    if outcome.is_accepted() {
                        next.roster = selection::add_to_team(&state.roster, candidate).0;
                    }
                    outcome
                }
                None => SelectionOutcome::UnknownRecord,
            };
            selection = Some(outcome);
        }
    }

    Transition {
        state: next,
        selection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, first: &str, domain: &str, gender: &str, available: bool) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: String::new(),
            email: String::new(),
            gender: Gender::from(gender),
            domain: domain.to_string(),
            avatar: String::new(),
            available,
        }
    }

    fn source() -> RecordSource {
        RecordSource::from_records(vec![
            user("ann", "Ann", "X", "Female", true),
            user("bob", "Bob", "X", "Male", true),
            user("cid", "Cid", "Y", "Bigender", false),
            user("dee", "Dee", "Z", "Female", true),
        ])
    }

    fn apply_all(intents: Vec<Intent>, source: &RecordSource) -> SessionState {
        intents
            .into_iter()
            .fold(SessionState::default(), |state, intent| {
                reduce(&state, intent, source).state
            })
    }

    #[test]
    fn test_domain_change_resets_page() {
        let source = source();
        let on_page_four = apply_all(vec![Intent::ChangePage { page: 4 }], &source);
        assert_eq!(on_page_four.current_page, 4);

        let next = reduce(
            &on_page_four,
            Intent::SetDomain {
                domain: Some("X".to_string()),
            },
            &source,
        );
        assert_eq!(next.state.current_page, 1);
        assert_eq!(next.state.filter.domain.as_deref(), Some("X"));
    }

    #[test]
    fn test_every_filter_change_resets_page() {
        let source = source();
        let intents = [
            Intent::Search {
                text: "a".to_string(),
            },
            Intent::SetGender {
                gender: Some("Male".to_string()),
            },
            Intent::SetAvailability {
                availability: AvailabilityFilter::All,
            },
        ];
        for intent in intents {
            let state = SessionState {
                current_page: 3,
                ..Default::default()
            };
            assert_eq!(reduce(&state, intent, &source).state.current_page, 1);
        }
    }

    #[test]
    fn test_page_change_is_not_clamped() {
        let source = source();
        let state = apply_all(vec![Intent::ChangePage { page: 9 }], &source);
        assert_eq!(state.current_page, 9);

        let state = reduce(&state, Intent::ChangePage { page: 0 }, &source).state;
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_unknown_filter_values_mean_no_filter() {
        let source = source();
        let state = apply_all(
            vec![
                Intent::SetDomain {
                    domain: Some("Nowhere".to_string()),
                },
                Intent::SetGender {
                    gender: Some("Unlisted".to_string()),
                },
            ],
            &source,
        );
        assert!(state.filter.domain.is_none());
        assert!(state.filter.gender.is_none());

        let state = apply_all(
            vec![
                Intent::SetDomain {
                    domain: Some("All".to_string()),
                },
                Intent::SetGender {
                    gender: Some("Bigender".to_string()),
                },
            ],
            &source,
        );
        assert!(state.filter.domain.is_none());
        assert_eq!(
            state.filter.gender,
            Some(Gender::Other("Bigender".to_string()))
        );
    }

    #[test]
    fn test_domain_and_gender_named_all_are_real_values() {
        let source = RecordSource::from_records(vec![
            user("1", "Ann", "All", "All", true),
            user("2", "Bob", "IT", "Male", true),
        ]);

        let state = apply_all(
            vec![Intent::SetDomain {
                domain: Some("All".to_string()),
            }],
            &source,
        );
        assert_eq!(state.filter.domain.as_deref(), Some("All"));
        let shown: Vec<&str> = crate::engine::filter::matching_indices(
            source.records(),
            &state.filter,
        )
        .into_iter()
        .map(|i| source.records()[i].id.as_str())
        .collect();
        assert_eq!(shown, ["1"]);

        let state = apply_all(
            vec![Intent::SetGender {
                gender: Some("All".to_string()),
            }],
            &source,
        );
        assert_eq!(state.filter.gender, Some(Gender::Other("All".to_string())));
    }

    #[test]
    fn test_add_to_team_rejects_same_domain_silently() {
        let source = source();
        let first = reduce(
            &SessionState::default(),
            Intent::AddToTeam {
                id: "ann".to_string(),
            },
            &source,
        );
        assert_eq!(first.selection, Some(SelectionOutcome::Accepted));

        let second = reduce(
            &first.state,
            Intent::AddToTeam {
                id: "bob".to_string(),
            },
            &source,
        );
        assert_eq!(second.state.roster, first.state.roster);
        assert_eq!(
            second.selection,
            Some(SelectionOutcome::DomainTaken {
                member_id: "ann".to_string()
            })
        );
    }

    #[test]
    fn test_add_to_team_does_not_touch_page_or_filter() {
        let source = source();
        let state = SessionState {
            current_page: 2,
            ..Default::default()
        };
        let next = reduce(
            &state,
            Intent::AddToTeam {
                id: "dee".to_string(),
            },
            &source,
        );
        assert_eq!(next.state.current_page, 2);
        assert_eq!(next.state.filter, state.filter);
        assert_eq!(next.state.roster.len(), 1);
    }

    #[test]
    fn test_unknown_and_unavailable_candidates() {
        let source = source();
        let unknown = reduce(
            &SessionState::default(),
            Intent::AddToTeam {
                id: "nobody".to_string(),
            },
            &source,
        );
        assert_eq!(unknown.selection, Some(SelectionOutcome::UnknownRecord));
        assert!(unknown.state.roster.is_empty());

        let unavailable = reduce(
            &SessionState::default(),
            Intent::AddToTeam {
                id: "cid".to_string(),
            },
            &source,
        );
        assert_eq!(unavailable.selection, Some(SelectionOutcome::Unavailable));
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let source = source();
        let state = SessionState::default();
        let _ = reduce(
            &state,
            Intent::Search {
                text: "zz".to_string(),
            },
            &source,
        );
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_intent_json() {
        let intent: Intent =
            serde_json::from_str(r#"{"type": "setDomain", "domain": "Sales"}"#).unwrap();
        assert_eq!(
            intent,
            Intent::SetDomain {
                domain: Some("Sales".to_string())
            }
        );

        let intent: Intent =
            serde_json::from_str(r#"{"type": "setAvailability", "availability": "unavailable"}"#)
                .unwrap();
        assert_eq!(
            intent,
            Intent::SetAvailability {
                availability: AvailabilityFilter::Unavailable
            }
        );

        let intent: Intent = serde_json::from_str(r#"{"type": "changePage", "page": 3}"#).unwrap();
        assert_eq!(intent.kind(), "changePage");

        assert!(serde_json::from_str::<Intent>(r#"{"type": "removeFromTeam"}"#).is_err());
    }
}
