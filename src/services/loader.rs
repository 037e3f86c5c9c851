//! Source file loading
//!
//! Survey exports arrive in whatever encoding the survey platform produced.
//! Decoding order: BOM sniff, strict UTF-8, then GB18030. The detected
//! encoding is handed back so the dumper can re-encode on write.

use crate::models::{Record, RecordId};
use crate::parser::csv;
use crate::{Context, Result};
use encoding_rs::{Encoding, GB18030, UTF_8};
use std::path::Path;

/// A decoded and parsed survey data file
#[derive(Debug)]
pub struct LoadedCsv {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
    /// Encoding the file was decoded with, reused on dump
    pub encoding: &'static Encoding,
}

/// Read and decode a survey CSV file into records.
///
/// The ID column must be present; duplicate IDs are left for the store to
/// reject so the error carries the typed kind.
pub fn load_csv(path: &Path, id_column: &str) -> Result<LoadedCsv> {
    let (text, encoding) = read_text(path)?;
    let doc = csv::parse(&text).with_context(|| format!("failed to parse {}", path.display()))?;

    let id_index = doc
        .columns
        .iter()
        .position(|c| c == id_column)
        .with_context(|| {
            format!(
                "{}: missing id column '{}' (header: {})",
                path.display(),
                id_column,
                doc.columns.join(", ")
            )
        })?;

    let records = doc
        .rows
        .into_iter()
        .map(|row| {
            let id = RecordId::new(row[id_index].clone());
            let fields = doc.columns.iter().cloned().zip(row).collect();
            Record::new(id, fields)
        })
        .collect();

    Ok(LoadedCsv {
        columns: doc.columns,
        records,
        encoding,
    })
}

/// Read an alias file: one `old<TAB>new` mapping per line, UTF-8.
///
/// Blank lines are skipped; a line without a tab is reported with its number.
pub fn load_aliases(path: &Path) -> Result<Vec<(String, String)>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut mappings = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (old, new) = line.split_once('\t').with_context(|| {
            format!("{}: line {} is not 'old<TAB>new'", path.display(), i + 1)
        })?;
        mappings.push((old.to_string(), new.to_string()));
    }

    Ok(mappings)
}

/// Decode a file's bytes, detecting the encoding
fn read_text(path: &Path) -> Result<(String, &'static Encoding)> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    if let Some((encoding, bom_len)) = Encoding::for_bom(&bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return Ok((text.into_owned(), encoding));
    }

    match std::str::from_utf8(&bytes) {
        Ok(text) => Ok((text.to_string(), UTF_8)),
        Err(_) => {
            let (text, _) = GB18030.decode_without_bom_handling(&bytes);
            Ok((text.into_owned(), GB18030))
        }
    }
}
