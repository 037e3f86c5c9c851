use super::EditorState;
use crate::models::{Record, RecordId};
use crate::Result;
use colored::Colorize;

/// Print the requested records as a vertical table: one row per field, one
/// column per record.
pub fn run(state: &EditorState, ids: &[RecordId]) -> Result<()> {
    let mut records: Vec<&Record> = Vec::with_capacity(ids.len());
    for id in ids {
        records.push(state.session.get(id)?);
    }

    let columns = state.session.records().columns();
    let label_width = columns
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0)
        .max("status".len());

    let value_widths: Vec<usize> = records
        .iter()
        .map(|r| {
            r.values()
                .map(|v| v.chars().count())
                .max()
                .unwrap_or(0)
                .max(r.id.as_str().chars().count())
        })
        .collect();

    // header row: record ids
    print!("{:<width$}  ", "", width = label_width);
    for (record, &w) in records.iter().zip(&value_widths) {
        print!("{:<width$}  ", record.id.to_string().bold(), width = w);
    }
    println!();

    for column in columns {
        print!("{:<width$}  ", column, width = label_width);
        for (record, &w) in records.iter().zip(&value_widths) {
            print!("{:<width$}  ", record.field(column).unwrap_or(""), width = w);
        }
        println!();
    }

    // status is session state, not a data column
    print!("{:<width$}  ", "status", width = label_width);
    for (record, &w) in records.iter().zip(&value_widths) {
        print!("{:<width$}  ", record.status.name().dimmed(), width = w);
    }
    println!();

    Ok(())
}
