use super::EditorState;
use crate::Result;
use colored::Colorize;

pub fn run(state: &mut EditorState, old: &str, new: &str, issue_ids: Vec<String>) -> Result<()> {
    let issues = describe_issues(&issue_ids);
    let outcome = state.session.rename(old, new, issue_ids)?;

    println!(
        "{}",
        format!(
            "Renamed {} -> {} ({} records updated, issues: {})",
            outcome.resolved_old, new, outcome.records_updated, issues
        )
        .green()
    );
    if outcome.resolved_old != old {
        println!(
            "{}",
            format!("note: '{}' already resolved to '{}'", old, outcome.resolved_old).bright_black()
        );
    }

    state.dirty = true;
    Ok(())
}

pub(super) fn describe_issues(issue_ids: &[String]) -> String {
    if issue_ids.is_empty() {
        "none".to_string()
    } else {
        issue_ids.join(", ")
    }
}
