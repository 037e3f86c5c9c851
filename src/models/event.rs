use super::RecordId;
use serde::{Deserialize, Serialize};

/// Kind of logged mutation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChangeKind {
    /// Institution rename
    Alias,
    /// Record marked stale
    Outdate,
    /// Record tombstoned
    Delete,
}

impl ChangeKind {
    /// Tag used in rendered log entries
    pub fn tag(&self) -> &'static str {
        match self {
            ChangeKind::Alias => "ALIAS",
            ChangeKind::Outdate => "OUTDATE",
            ChangeKind::Delete => "DELETE",
        }
    }

    /// Section heading in the rendered log
    pub fn heading(&self) -> &'static str {
        match self {
            ChangeKind::Alias => "Renamed institutions",
            ChangeKind::Outdate => "Outdated records",
            ChangeKind::Delete => "Deleted records",
        }
    }
}

/// What a change applied to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChangeTarget {
    Record(RecordId),
    Rename { old: String, new: String },
}

impl ChangeTarget {
    /// Human-readable description used in rendered log entries
    pub fn describe(&self) -> String {
        match self {
            ChangeTarget::Record(id) => format!("record {}", id),
            ChangeTarget::Rename { old, new } => format!("{} -> {}", old, new),
        }
    }
}

/// One logged mutation with its audit references
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Emission-order index, assigned by the change log on append
    pub sequence: u64,

    /// What happened
    pub kind: ChangeKind,

    /// What it happened to
    pub target: ChangeTarget,

    /// Operator-supplied issue/ticket references (may be empty)
    pub issue_ids: Vec<String>,
}

impl ChangeEvent {
    /// The comma-joined issue list, or "none"
    pub fn issues(&self) -> String {
        if self.issue_ids.is_empty() {
            "none".to_string()
        } else {
            self.issue_ids.join(", ")
        }
    }
}
