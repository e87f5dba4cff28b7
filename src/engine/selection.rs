//! Selection engine: the one-member-per-domain team rule.

use serde::Serialize;

use crate::models::UserRecord;

/// What happened to an add-to-team request.
///
/// Rejections are informational only; the roster is simply left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum SelectionOutcome {
    Accepted,
    Unavailable,
    #[serde(rename_all = "camelCase")]
    DomainTaken {
        member_id: String,
    },
    UnknownRecord,
}

impl SelectionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SelectionOutcome::Accepted)
    }
}

/// Check whether `candidate` may join `roster`.
pub fn check(roster: &[UserRecord], candidate: &UserRecord) -> SelectionOutcome {
    if !candidate.available {
        return SelectionOutcome::Unavailable;
    }
    match roster.iter().find(|m| m.domain == candidate.domain) {
        Some(member) => SelectionOutcome::DomainTaken {
            member_id: member.id.clone(),
        },
        None => SelectionOutcome::Accepted,
    }
}

/// Append `candidate` if it is available and its domain is not yet on the team.
///
/// Returns the resulting roster and whether the candidate was accepted.
pub fn add_to_team(roster: &[UserRecord], candidate: &UserRecord) -> (Vec<UserRecord>, bool) {
    let mut next = roster.to_vec();
    let accepted = check(roster, candidate).is_accepted();
    if accepted {
        next.push(candidate.clone());
    }
    (next, accepted)
}
