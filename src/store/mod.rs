//! Session state: record store, alias registry, change log

pub mod alias;
pub mod changelog;
pub mod error;
pub mod records;

pub use alias::AliasRegistry;
pub use changelog::ChangeLog;
pub use error::{EditError, EditResult};
pub use records::RecordStore;

use crate::models::{ChangeKind, ChangeTarget, Record, RecordId};

/// Result of a successful rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    /// Canonical name the mapping was inserted under
    pub resolved_old: String,
    /// Number of live records whose institution field was rewritten
    pub records_updated: usize,
}

/// The one aggregate owning all session state.
///
/// Constructed at process start, dropped at exit. Every mutation validates
/// before touching anything, so a failed operation leaves the store, the
/// registry, and the log exactly as they were.
pub struct Session {
    institution_column: String,
    records: RecordStore,
    aliases: AliasRegistry,
    log: ChangeLog,
}

impl Session {
    pub fn new(institution_column: impl Into<String>) -> Self {
        Self {
            institution_column: institution_column.into(),
            records: RecordStore::default(),
            aliases: AliasRegistry::new(),
            log: ChangeLog::new(),
        }
    }

    /// Replace the record set with freshly loaded data.
    ///
    /// All records are validated for ID uniqueness before the existing store
    /// is swapped out; on error the previous records stay in place. The
    /// change log and alias registry carry across loads, they are session
    /// scoped, not file scoped.
    pub fn load(&mut self, columns: Vec<String>, records: Vec<Record>) -> EditResult<usize> {
        let mut fresh = RecordStore::new(columns);
        let count = records.len();
        for record in records {
            fresh.insert(record)?;
        }
        self.records = fresh;
        Ok(count)
    }

    /// Restore a persisted alias mapping without logging a change event
    pub fn restore_alias(&mut self, old: &str, new: &str) -> EditResult<()> {
        self.aliases.restore(old, new)
    }

    /// Tombstone a record and log the deletion. Returns the prior snapshot.
    pub fn delete(&mut self, id: &RecordId, issue_ids: Vec<String>) -> EditResult<Record> {
        let snapshot = self.records.delete(id)?;
        self.log
            .record(ChangeKind::Delete, ChangeTarget::Record(id.clone()), issue_ids);
        Ok(snapshot)
    }

    /// Mark a record outdated and log it
    pub fn outdate(&mut self, id: &RecordId, issue_ids: Vec<String>) -> EditResult<()> {
        self.records.outdate(id)?;
        self.log
            .record(ChangeKind::Outdate, ChangeTarget::Record(id.clone()), issue_ids);
        Ok(())
    }

    /// Register an institution rename.
    ///
    /// Resolves the old name through the alias chain, rejects no-op and
    /// cyclic renames, rewrites the institution field of every live record
    /// bearing the resolved old name, and logs the event. The registry
    /// validates before inserting, so a rejected rename changes nothing.
    pub fn rename(
        &mut self,
        old: &str,
        new: &str,
        issue_ids: Vec<String>,
    ) -> EditResult<RenameOutcome> {
        let resolved_old = self.aliases.rename(old, new)?;
        let records_updated =
            self.records
                .rewrite_field(&self.institution_column, &resolved_old, new);
        self.log.record(
            ChangeKind::Alias,
            ChangeTarget::Rename {
                old: resolved_old.clone(),
                new: new.to_string(),
            },
            issue_ids,
        );
        Ok(RenameOutcome {
            resolved_old,
            records_updated,
        })
    }

    pub fn get(&self, id: &RecordId) -> EditResult<&Record> {
        self.records.get(id)
    }

    pub fn render_log(&self) -> String {
        self.log.render()
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn aliases(&self) -> &AliasRegistry {
        &self.aliases
    }

    pub fn log(&self) -> &ChangeLog {
        &self.log
    }

    pub fn institution_column(&self) -> &str {
        &self.institution_column
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordStatus;

    fn session_with(schools: &[(&str, &str)]) -> Session {
        let mut session = Session::new("school");
        let records = schools
            .iter()
            .map(|(id, school)| {
                Record::new(
                    *id,
                    vec![
                        ("id".to_string(), id.to_string()),
                        ("school".to_string(), school.to_string()),
                    ],
                )
            })
            .collect();
        session
            .load(vec!["id".to_string(), "school".to_string()], records)
            .unwrap();
        session
    }

    #[test]
    fn test_rename_rewrites_matching_records() {
        let mut session = session_with(&[("1", "Old U"), ("2", "Other U")]);

        let outcome = session
            .rename("Old U", "New U", vec!["ISSUE-1".to_string()])
            .unwrap();
        assert_eq!(outcome.records_updated, 1);
        assert_eq!(
            session.get(&RecordId::new("1")).unwrap().field("school"),
            Some("New U")
        );
        assert_eq!(
            session.get(&RecordId::new("2")).unwrap().field("school"),
            Some("Other U")
        );
        assert!(session
            .render_log()
            .contains("- [ALIAS] Old U -> New U (issues: ISSUE-1)"));
    }

    #[test]
    fn test_rename_through_chain_rewrites_canonical_holders() {
        let mut session = session_with(&[("1", "B")]);
        // record already holds the canonical name B; renaming via the
        // historical name A must still reach it
        session.rename("A", "B", vec![]).unwrap();
        let outcome = session.rename("A", "C", vec![]).unwrap();

        assert_eq!(outcome.resolved_old, "B");
        assert_eq!(outcome.records_updated, 1);
        assert_eq!(
            session.get(&RecordId::new("1")).unwrap().field("school"),
            Some("C")
        );
    }

    #[test]
    fn test_failed_rename_leaves_log_untouched() {
        let mut session = session_with(&[("1", "A")]);
        session.rename("A", "B", vec![]).unwrap();

        let before = session.log().len();
        assert!(session.rename("B", "A", vec![]).is_err());
        assert_eq!(session.log().len(), before);
        assert_eq!(
            session.get(&RecordId::new("1")).unwrap().field("school"),
            Some("B")
        );
    }

    #[test]
    fn test_failed_delete_leaves_store_and_log_unchanged() {
        let mut session = session_with(&[("1", "Alpha")]);
        let before = session.log().len();

        let err = session.delete(&RecordId::new("99"), vec![]).unwrap_err();
        assert_eq!(err, EditError::NotFound(RecordId::new("99")));
        assert_eq!(session.log().len(), before);
        assert_eq!(session.records().len_active(), 1);
    }

    #[test]
    fn test_outdate_then_delete_scenario() {
        let mut session = session_with(&[("1", "Alpha"), ("2", "Beta")]);

        session.outdate(&RecordId::new("1"), vec![]).unwrap();
        session
            .delete(&RecordId::new("2"), vec!["BUG-7".to_string()])
            .unwrap();

        let doc = session.render_log();
        let outdate_at = doc.find("- [OUTDATE] record 1 (issues: none)").unwrap();
        let delete_at = doc.find("- [DELETE] record 2 (issues: BUG-7)").unwrap();
        assert!(outdate_at < delete_at);

        let live: Vec<&Record> = session.records().iter_active().collect();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].id, RecordId::new("1"));
        assert_eq!(live[0].status, RecordStatus::Outdated);
    }

    #[test]
    fn test_load_with_duplicate_id_keeps_previous_records() {
        let mut session = session_with(&[("1", "Alpha")]);

        let dup = vec![
            Record::new("7", vec![("id".to_string(), "7".to_string())]),
            Record::new("7", vec![("id".to_string(), "7".to_string())]),
        ];
        let err = session.load(vec!["id".to_string()], dup).unwrap_err();
        assert_eq!(err, EditError::DuplicateId(RecordId::new("7")));
        assert!(session.get(&RecordId::new("1")).is_ok());
    }

    #[test]
    fn test_deleted_record_survives_in_snapshot_after_rename() {
        // last-writer-wins: rename first, then delete snapshots renamed fields
        let mut session = session_with(&[("1", "Old U")]);
        session.rename("Old U", "New U", vec![]).unwrap();

        let snapshot = session.delete(&RecordId::new("1"), vec![]).unwrap();
        assert_eq!(snapshot.field("school"), Some("New U"));
    }
}
