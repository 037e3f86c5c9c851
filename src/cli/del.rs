use super::alias::describe_issues;
use super::EditorState;
use crate::models::RecordId;
use crate::Result;
use colored::Colorize;

pub fn run(state: &mut EditorState, id: &RecordId, issue_ids: Vec<String>) -> Result<()> {
    let issues = describe_issues(&issue_ids);
    let snapshot = state.session.delete(id, issue_ids)?;

    let institution = snapshot
        .field(state.session.institution_column())
        .unwrap_or("?");
    println!(
        "{}",
        format!(
            "Deleted record {} ({}, issues: {})",
            id, institution, issues
        )
        .green()
    );

    state.dirty = true;
    Ok(())
}
