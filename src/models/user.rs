//! User record model.

use serde::{Deserialize, Serialize};

/// Gender as it appears in the record source.
///
/// The three values offered by the gender selector get their own variants;
/// anything else is carried verbatim so exact-match filtering still works.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Agender,
    Other(String),
    #[default]
    Unspecified,
}

impl Gender {
    pub fn as_str(&self) -> &str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Agender => "Agender",
            Gender::Other(value) => value,
            Gender::Unspecified => "",
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            "Agender" => Gender::Agender,
            "" => Gender::Unspecified,
            _ => Gender::Other(value),
        }
    }
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        Gender::from(value.to_string())
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.as_str().to_string()
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user that can be listed, filtered and added to the team.
///
/// Serialized with camelCase field names like every response body; the
/// snake_case source spelling is only read, through [`RawUserRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: Gender,
    pub domain: String,
    pub avatar: String,
    pub available: bool,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            _ => self.last_name.clone(),
        }
    }
}

/// Record identifier as found in the source: numeric or textual.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRecordId {
    Number(u64),
    Text(String),
}

impl RawRecordId {
    pub fn into_string(self) -> String {
        match self {
            RawRecordId::Number(n) => n.to_string(),
            RawRecordId::Text(s) => s,
        }
    }
}

/// A record as read from the source; every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUserRecord {
    #[serde(default)]
    pub id: Option<RawRecordId>,
    #[serde(default, alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(default, alias = "lastName")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub available: Option<bool>,
}

impl RawUserRecord {
    /// Fill missing fields with empty values, using `fallback_id` when the id is absent.
    pub fn into_record(self, fallback_id: impl FnOnce() -> String) -> UserRecord {
        let id = match self.id.map(RawRecordId::into_string) {
            Some(id) if !id.trim().is_empty() => id,
            _ => fallback_id(),
        };

        UserRecord {
            id,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            gender: self.gender.unwrap_or_default(),
            domain: self.domain.unwrap_or_default(),
            avatar: self.avatar.unwrap_or_default(),
            available: self.available.unwrap_or(false),
        }
    }
}
