//! Filter state model.

use serde::{Deserialize, Serialize};

use super::Gender;

/// Tri-state availability filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum AvailabilityFilter {
    #[default]
    Available,
    Unavailable,
    All,
}

impl AvailabilityFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityFilter::Available => "available",
            AvailabilityFilter::Unavailable => "unavailable",
            AvailabilityFilter::All => "all",
        }
    }

    /// Label shown by the availability selector.
    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityFilter::Available => "Available",
            AvailabilityFilter::Unavailable => "Not Available",
            AvailabilityFilter::All => "All",
        }
    }

    /// Options offered by the availability selector, in display order.
    pub fn options() -> [AvailabilityFilter; 3] {
        [
            AvailabilityFilter::Available,
            AvailabilityFilter::Unavailable,
            AvailabilityFilter::All,
        ]
    }

    /// Parse a selector value. Anything unrecognised keeps every record.
    pub fn from_control_value(value: &str) -> Self {
        match value.trim() {
            "available" | "true" => AvailabilityFilter::Available,
            "unavailable" | "false" => AvailabilityFilter::Unavailable,
            _ => AvailabilityFilter::All,
        }
    }
}

impl From<String> for AvailabilityFilter {
    fn from(value: String) -> Self {
        AvailabilityFilter::from_control_value(&value)
    }
}

impl From<AvailabilityFilter> for String {
    fn from(filter: AvailabilityFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// The active search and filter selections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Case-insensitive substring matched against first names
    pub search: String,
    /// Exact domain match; `None` means no filter
    pub domain: Option<String>,
    /// Exact gender match; `None` means no filter
    pub gender: Option<Gender>,
    pub availability: AvailabilityFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_shows_available_only() {
        let filter = FilterState::default();
        assert_eq!(filter.search, "");
        assert!(filter.domain.is_none());
        assert!(filter.gender.is_none());
        assert_eq!(filter.availability, AvailabilityFilter::Available);
    }

    #[test]
    fn test_availability_control_values() {
        assert_eq!(
            AvailabilityFilter::from_control_value("true"),
            AvailabilityFilter::Available
        );
        assert_eq!(
            AvailabilityFilter::from_control_value("unavailable"),
            AvailabilityFilter::Unavailable
        );
        assert_eq!(
            AvailabilityFilter::from_control_value(""),
            AvailabilityFilter::All
        );
        assert_eq!(
            AvailabilityFilter::from_control_value("maybe"),
            AvailabilityFilter::All
        );
    }

    #[test]
    fn test_availability_serde() {
        let parsed: AvailabilityFilter = serde_json::from_str("\"unavailable\"").unwrap();
        assert_eq!(parsed, AvailabilityFilter::Unavailable);
        assert_eq!(
            serde_json::to_string(&AvailabilityFilter::All).unwrap(),
            "\"all\""
        );
    }
}
