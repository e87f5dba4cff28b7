//! Filter engine.
//!
//! Pure functions deciding which records match the active filter state.
//! The filtered sequence is expressed as positions into the record source,
//! always in source order.

use crate::models::{AvailabilityFilter, FilterState, Gender, UserRecord};

/// First name contains the search text, ignoring case. Empty search matches all.
pub fn matches_search(record: &UserRecord, search: &str) -> bool {
    search.is_empty()
        || record
            .first_name
            .to_lowercase()
            .contains(&search.to_lowercase())
}

pub fn matches_domain(record: &UserRecord, domain: Option<&str>) -> bool {
    match domain {
        None | Some("") => true,
        Some(domain) => record.domain == domain,
    }
}

pub fn matches_gender(record: &UserRecord, gender: Option<&Gender>) -> bool {
    gender.map_or(true, |gender| record.gender == *gender)
}

pub fn matches_availability(record: &UserRecord, availability: AvailabilityFilter) -> bool {
    match availability {
        AvailabilityFilter::Available => record.available,
        AvailabilityFilter::Unavailable => !record.available,
        AvailabilityFilter::All => true,
    }
}

/// True iff the record passes all four predicates.
pub fn matches(record: &UserRecord, filter: &FilterState) -> bool {
    matches_search(record, &filter.search)
        && matches_domain(record, filter.domain.as_deref())
        && matches_gender(record, filter.gender.as_ref())
        && matches_availability(record, filter.availability)
}

/// Source positions of the records that pass the filter, ascending.
pub fn matching_indices(records: &[UserRecord], filter: &FilterState) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches(r, filter))
        .map(|(i, _)| i)
        .collect()
}
