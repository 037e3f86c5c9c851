//! Minimal CSV reader/writer
//!
//! Covers what survey exports actually use: comma separators, CRLF or LF
//! line endings, double-quoted fields with `""` escapes and embedded
//! separators or newlines. The first row is the header.

use crate::Result;

/// A parsed CSV document: header plus data rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parse CSV text into a header and data rows.
///
/// Every data row must have exactly as many fields as the header; a short or
/// long row is reported with its 1-based line number.
pub fn parse(text: &str) -> Result<CsvDocument> {
    let mut records = parse_records(text)?;
    if records.is_empty() {
        anyhow::bail!("CSV input has no header row");
    }

    let columns = records.remove(0);
    for (i, row) in records.iter().enumerate() {
        if row.len() != columns.len() {
            anyhow::bail!(
                "CSV row {} has {} fields, expected {}",
                i + 2,
                row.len(),
                columns.len()
            );
        }
    }

    Ok(CsvDocument {
        columns,
        rows: records,
    })
}

/// Serialize a header and rows back to CSV text (LF line endings)
pub fn write<'a>(
    columns: &[String],
    rows: impl Iterator<Item = Vec<&'a str>>,
) -> String {
    let mut out = String::new();
    write_row(&mut out, columns.iter().map(|c| c.as_str()));
    for row in rows {
        write_row(&mut out, row.into_iter());
    }
    out
}

fn write_row<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        if field.contains(['"', ',', '\n', '\r']) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
}

fn parse_records(text: &str) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();
    // whether the current row has any content yet; bare trailing newlines
    // must not produce an empty record
    let mut row_started = false;

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' => {
                in_quotes = true;
                row_started = true;
            }
            ',' => {
                row.push(std::mem::take(&mut field));
                row_started = true;
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if row_started {
                    row.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut row));
                    row_started = false;
                }
            }
            '\n' => {
                if row_started {
                    row.push(std::mem::take(&mut field));
                    records.push(std::mem::take(&mut row));
                    row_started = false;
                }
            }
            _ => {
                field.push(ch);
                row_started = true;
            }
        }
    }

    if in_quotes {
        anyhow::bail!("unterminated quoted field at end of CSV input");
    }
    if row_started {
        row.push(field);
        records.push(row);
    }

    Ok(records)
}
