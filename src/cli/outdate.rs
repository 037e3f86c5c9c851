use super::alias::describe_issues;
use super::EditorState;
use crate::models::RecordId;
use crate::Result;
use colored::Colorize;

pub fn run(state: &mut EditorState, id: &RecordId, issue_ids: Vec<String>) -> Result<()> {
    let issues = describe_issues(&issue_ids);
    state.session.outdate(id, issue_ids)?;

    println!(
        "{}",
        format!("Marked record {} outdated (issues: {})", id, issues).green()
    );

    state.dirty = true;
    Ok(())
}
