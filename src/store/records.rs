//! RecordStore - survey records with tombstoning

use super::error::{EditError, EditResult};
use crate::models::{Record, RecordId, RecordStatus};
use std::collections::HashMap;

/// In-memory store of survey records
///
/// Records keep their load order; deletion tombstones a record instead of
/// removing it so its ID can never be reassigned within the session.
#[derive(Debug, Default)]
pub struct RecordStore {
    /// Column header captured at load, in source order
    columns: Vec<String>,
    /// All records in load order, tombstones included
    records: Vec<Record>,
    /// ID -> position in `records`
    index: HashMap<RecordId, usize>,
}

impl RecordStore {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Ordered CSV header captured at load
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Insert a record at load time.
    ///
    /// Fails with `DuplicateId` if any record, tombstoned or not, already
    /// holds the ID.
    pub fn insert(&mut self, record: Record) -> EditResult<()> {
        if self.index.contains_key(&record.id) {
            return Err(EditError::DuplicateId(record.id));
        }
        self.index.insert(record.id.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Look up a live (Active or Outdated) record
    pub fn get(&self, id: &RecordId) -> EditResult<&Record> {
        self.live_position(id)
            .map(|pos| &self.records[pos])
            .ok_or_else(|| EditError::NotFound(id.clone()))
    }

    /// Tombstone a record, returning its prior snapshot.
    ///
    /// Deleting an already-deleted ID fails rather than silently passing, so
    /// operator mistakes surface.
    pub fn delete(&mut self, id: &RecordId) -> EditResult<Record> {
        let pos = self
            .live_position(id)
            .ok_or_else(|| EditError::NotFound(id.clone()))?;
        let snapshot = self.records[pos].clone();
        self.records[pos].status = RecordStatus::Deleted;
        Ok(snapshot)
    }

    /// Transition a record to Outdated
    pub fn outdate(&mut self, id: &RecordId) -> EditResult<()> {
        let pos = self
            .live_position(id)
            .ok_or_else(|| EditError::NotFound(id.clone()))?;
        if self.records[pos].status == RecordStatus::Outdated {
            return Err(EditError::AlreadyOutdated(id.clone()));
        }
        self.records[pos].status = RecordStatus::Outdated;
        Ok(())
    }

    /// Active and Outdated records in load order.
    ///
    /// Each call yields a fresh iterator; the dumper and `view` rely on this.
    pub fn iter_active(&self) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(|r| r.status != RecordStatus::Deleted)
    }

    /// Rewrite `column` to `to` on every live record where it equals `from`.
    /// Returns the number of records touched.
    pub fn rewrite_field(&mut self, column: &str, from: &str, to: &str) -> usize {
        let mut touched = 0;
        for record in &mut self.records {
            if record.status == RecordStatus::Deleted {
                continue;
            }
            if record.field(column) == Some(from) {
                record.set_field(column, to);
                touched += 1;
            }
        }
        touched
    }

    /// Count of live records
    pub fn len_active(&self) -> usize {
        self.iter_active().count()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn live_position(&self, id: &RecordId) -> Option<usize> {
        let pos = *self.index.get(id)?;
        if self.records[pos].status == RecordStatus::Deleted {
            None
        } else {
            Some(pos)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(ids: &[&str]) -> RecordStore {
        let mut store = RecordStore::new(vec!["id".to_string(), "school".to_string()]);
        for id in ids {
            store
                .insert(Record::new(
                    *id,
                    vec![
                        ("id".to_string(), id.to_string()),
                        ("school".to_string(), format!("School {}", id)),
                    ],
                ))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut store = store_with(&["1"]);
        let err = store
            .insert(Record::new("1", vec![("id".to_string(), "1".to_string())]))
            .unwrap_err();
        assert_eq!(err, EditError::DuplicateId(RecordId::new("1")));
    }

    #[test]
    fn test_duplicate_check_includes_tombstones() {
        let mut store = store_with(&["1"]);
        store.delete(&RecordId::new("1")).unwrap();

        let err = store
            .insert(Record::new("1", vec![("id".to_string(), "1".to_string())]))
            .unwrap_err();
        assert_eq!(err, EditError::DuplicateId(RecordId::new("1")));
    }

    #[test]
    fn test_delete_returns_prior_snapshot() {
        let mut store = store_with(&["1"]);
        let snapshot = store.delete(&RecordId::new("1")).unwrap();
        assert_eq!(snapshot.status, RecordStatus::Active);
        assert_eq!(snapshot.field("school"), Some("School 1"));
    }

    #[test]
    fn test_delete_is_not_idempotent() {
        let mut store = store_with(&["1"]);
        store.delete(&RecordId::new("1")).unwrap();

        let err = store.delete(&RecordId::new("1")).unwrap_err();
        assert_eq!(err, EditError::NotFound(RecordId::new("1")));
    }

    #[test]
    fn test_outdate_then_delete() {
        let mut store = store_with(&["1"]);
        let id = RecordId::new("1");

        store.outdate(&id).unwrap();
        assert_eq!(store.outdate(&id).unwrap_err(), EditError::AlreadyOutdated(id.clone()));

        // outdated records can still be deleted
        let snapshot = store.delete(&id).unwrap();
        assert_eq!(snapshot.status, RecordStatus::Outdated);
        assert_eq!(store.outdate(&id).unwrap_err(), EditError::NotFound(id));
    }

    #[test]
    fn test_deleted_record_leaves_listing() {
        let mut store = store_with(&["1", "2", "3"]);
        store.delete(&RecordId::new("2")).unwrap();

        let ids: Vec<&str> = store.iter_active().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(store.get(&RecordId::new("2")).is_err());
    }

    #[test]
    fn test_iter_active_is_restartable() {
        let store = store_with(&["1", "2"]);
        assert_eq!(store.iter_active().count(), 2);
        assert_eq!(store.iter_active().count(), 2);
    }

    #[test]
    fn test_rewrite_field_skips_tombstones() {
        let mut store = RecordStore::new(vec!["id".to_string(), "school".to_string()]);
        for id in ["1", "2", "3"] {
            store
                .insert(Record::new(
                    id,
                    vec![
                        ("id".to_string(), id.to_string()),
                        ("school".to_string(), "Alpha".to_string()),
                    ],
                ))
                .unwrap();
        }
        store.delete(&RecordId::new("3")).unwrap();

        let touched = store.rewrite_field("school", "Alpha", "Beta");
        assert_eq!(touched, 2);
        assert_eq!(store.get(&RecordId::new("1")).unwrap().field("school"), Some("Beta"));
    }
}
