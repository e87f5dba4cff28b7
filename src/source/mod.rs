//! Record source module.
//!
//! Loads the immutable user records once at startup and exposes the
//! catalog of distinct domains and genders used by the filter controls.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::errors::AppError;
use crate::models::{Gender, RawUserRecord, UserRecord};

/// Dataset compiled into the binary, used when no data path is configured.
const BUNDLED_USERS: &str = include_str!("../../data/users.json");

/// Immutable, ordered sequence of user records.
#[derive(Debug, Clone, Default)]
pub struct RecordSource {
    records: Vec<UserRecord>,
    by_id: HashMap<String, usize>,
    domains: Vec<String>,
    genders: Vec<Gender>,
}

impl RecordSource {
    /// Load records from `path`, or the bundled dataset when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => {
                tracing::info!("Loading user records from {:?}", path);
                let raw = std::fs::read_to_string(path)?;
                Self::from_json_str(&raw)
            }
            None => {
                tracing::info!("Loading bundled user records");
                Self::bundled()
            }
        }
    }

    /// Load the dataset compiled into the binary.
    pub fn bundled() -> Result<Self, AppError> {
        Self::from_json_str(BUNDLED_USERS)
    }

    /// Parse a JSON array of records. Individual fields may be missing.
    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        let raw_records: Vec<RawUserRecord> = serde_json::from_str(raw).map_err(|e| {
            AppError::DataSource(format!("Record source is not a JSON array of users: {}", e))
        })?;

        let records = raw_records
            .into_iter()
            .map(|raw| raw.into_record(|| uuid::Uuid::new_v4().to_string()))
            .collect();

        Ok(Self::from_records(records))
    }

    /// Build a source from already-parsed records, dropping duplicate ids.
    pub fn from_records(records: Vec<UserRecord>) -> Self {
        let mut kept = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());
        let mut domains = Vec::new();
        let mut seen_domains = HashSet::new();
        let mut genders = Vec::new();

        for record in records {
            if by_id.contains_key(&record.id) {
                tracing::warn!("Skipping user record with duplicate id {}", record.id);
                continue;
            }
            if !record.domain.is_empty() && seen_domains.insert(record.domain.clone()) {
                domains.push(record.domain.clone());
            }
            if !genders.contains(&record.gender) {
                genders.push(record.gender.clone());
            }
            by_id.insert(record.id.clone(), kept.len());
            kept.push(record);
        }

        Self {
            records: kept,
            by_id,
            domains,
            genders,
        }
    }

    /// All records in source order.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&UserRecord> {
        self.by_id.get(id).map(|&index| &self.records[index])
    }

    /// Distinct non-empty domains in first-appearance order.
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn has_domain(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| d == domain)
    }

    pub fn has_gender(&self, gender: &Gender) -> bool {
        self.genders.contains(gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_dataset_loads() {
        let source = RecordSource::bundled().unwrap();
        assert!(!source.is_empty());
        assert!(!source.domains().is_empty());
        assert!(source.get("1").is_some());
    }

    #[test]
    fn test_domains_in_first_appearance_order() {
        let source = RecordSource::from_json_str(
            r#"[
                {"id": 1, "first_name": "Ann", "domain": "Sales"},
                {"id": 2, "first_name": "Bob", "domain": "IT"},
                {"id": 3, "first_name": "Cid", "domain": "Sales"},
                {"id": 4, "first_name": "Dee", "domain": "Finance"}
            ]"#,
        )
        .unwrap();

        assert_eq!(source.domains(), ["Sales", "IT", "Finance"]);
        assert!(source.has_domain("IT"));
        assert!(!source.has_domain("Legal"));
    }

    #[test]
    fn test_records_without_domain_stay_out_of_catalog() {
        let source = RecordSource::from_json_str(
            r#"[
                {"id": 1, "first_name": "Ann"},
                {"id": 2, "first_name": "Bob", "domain": "IT"},
                {"id": 3, "first_name": "Cid", "domain": ""}
            ]"#,
        )
        .unwrap();

        assert_eq!(source.len(), 3);
        assert_eq!(source.domains(), ["IT"]);
        assert!(!source.has_domain(""));
    }

    #[test]
    fn test_missing_ids_are_generated_and_duplicates_skipped() {
        let source = RecordSource::from_json_str(
            r#"[
                {"first_name": "NoId"},
                {"id": "a", "first_name": "First"},
                {"id": "a", "first_name": "Second"}
            ]"#,
        )
        .unwrap();

        assert_eq!(source.len(), 2);
        assert!(!source.records()[0].id.is_empty());
        assert_eq!(source.get("a").unwrap().first_name, "First");
    }

    #[test]
    fn test_non_array_source_is_rejected() {
        let err = RecordSource::from_json_str(r#"{"users": []}"#).unwrap_err();
        assert_eq!(err.error_code(), "DATA_SOURCE_ERROR");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 10, "first_name": "Anton", "gender": "Polygender", "available": true}}]"#
        )
        .unwrap();

        let source = RecordSource::load(Some(file.path())).unwrap();
        assert_eq!(source.len(), 1);
        assert!(source.has_gender(&Gender::Other("Polygender".into())));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = RecordSource::load(Some(dir.path().join("absent.json").as_path())).unwrap_err();
        assert_eq!(err.error_code(), "DATA_SOURCE_ERROR");
    }
}
