use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a survey record.
///
/// Assigned at load time from the configured ID column and stable for the
/// whole session. Once a record is deleted its ID stays reserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Lifecycle status of a record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordStatus {
    /// Loaded and untouched
    Active,
    /// Marked stale by the operator, still listed and dumped
    Outdated,
    /// Tombstoned: removed from listings, ID stays reserved
    Deleted,
}

impl RecordStatus {
    pub fn name(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Outdated => "outdated",
            RecordStatus::Deleted => "deleted",
        }
    }
}

/// One university survey entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Unique stable identifier
    pub id: RecordId,

    /// Column name -> value, in source column order
    pub fields: Vec<(String, String)>,

    /// Current status
    pub status: RecordStatus,
}

impl Record {
    pub fn new(id: impl Into<RecordId>, fields: Vec<(String, String)>) -> Self {
        Self {
            id: id.into(),
            fields,
            status: RecordStatus::Active,
        }
    }

    /// Value of a named field, if the column exists
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, value)| value.as_str())
    }

    /// Overwrite a named field. Returns false if the column is absent.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|(col, _)| col == name) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Values in column order, for the CSV writer
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new(
            "17",
            vec![
                ("id".to_string(), "17".to_string()),
                ("school".to_string(), "Alpha".to_string()),
            ],
        )
    }

    #[test]
    fn test_new_record_is_active() {
        let record = sample();
        assert_eq!(record.status, RecordStatus::Active);
        assert_eq!(record.id.as_str(), "17");
    }

    #[test]
    fn test_field_lookup() {
        let record = sample();
        assert_eq!(record.field("school"), Some("Alpha"));
        assert_eq!(record.field("missing"), None);
    }

    #[test]
    fn test_set_field() {
        let mut record = sample();
        assert!(record.set_field("school", "Beta"));
        assert_eq!(record.field("school"), Some("Beta"));
        assert!(!record.set_field("missing", "x"));
    }

    #[test]
    fn test_values_preserve_column_order() {
        let record = sample();
        let values: Vec<&str> = record.values().collect();
        assert_eq!(values, vec!["17", "Alpha"]);
    }

    #[test]
    fn test_record_id_serialization_is_transparent() {
        let id = RecordId::new("42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42\"");
    }
}
