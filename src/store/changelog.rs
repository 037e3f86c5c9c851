//! ChangeLog - append-only mutation journal and Markdown renderer

use crate::models::{ChangeEvent, ChangeKind, ChangeTarget};

/// Group order in the rendered document
const RENDER_ORDER: [ChangeKind; 3] = [ChangeKind::Alias, ChangeKind::Outdate, ChangeKind::Delete];

/// Append-only ordered sequence of change events
#[derive(Debug, Default)]
pub struct ChangeLog {
    events: Vec<ChangeEvent>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, assigning the next sequence value
    pub fn record(&mut self, kind: ChangeKind, target: ChangeTarget, issue_ids: Vec<String>) {
        let sequence = self.events.len() as u64;
        self.events.push(ChangeEvent {
            sequence,
            kind,
            target,
            issue_ids,
        });
    }

    /// Render the accumulated events as Markdown.
    ///
    /// Pure and repeatable: the same events always produce byte-identical
    /// output. Entries are grouped Alias, Outdate, Delete, ascending sequence
    /// within each group; empty groups are omitted.
    pub fn render(&self) -> String {
        let mut out = String::from("# Change Log\n");

        if self.events.is_empty() {
            out.push_str("\nNo changes were made during this session.\n");
            return out;
        }

        for kind in RENDER_ORDER {
            let group: Vec<&ChangeEvent> =
                self.events.iter().filter(|e| e.kind == kind).collect();
            if group.is_empty() {
                continue;
            }

            out.push_str(&format!("\n## {}\n\n", kind.heading()));
            for event in group {
                out.push_str(&format!(
                    "- [{}] {} (issues: {})\n",
                    event.kind.tag(),
                    event.target.describe(),
                    event.issues()
                ));
            }
        }

        out
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChangeEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
