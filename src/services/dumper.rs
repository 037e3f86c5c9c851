//! Data file writing
//!
//! Serializes the live records and the alias registry back to disk. Writes
//! go through a temp file in the destination directory and are persisted
//! with an atomic replace, so an interrupted dump never truncates the source
//! data.

use crate::parser::csv;
use crate::store::{AliasRegistry, RecordStore};
use crate::{Context, Result};
use encoding_rs::Encoding;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write Active and Outdated records as CSV in load order, re-encoded with
/// the encoding detected at load. Returns the number of rows written.
pub fn dump_csv(path: &Path, store: &RecordStore, encoding: &'static Encoding) -> Result<usize> {
    let rows = store.iter_active().map(|r| r.values().collect());
    let text = csv::write(store.columns(), rows);
    let (bytes, _, _) = encoding.encode(&text);

    atomic_write(path, &bytes)?;
    Ok(store.len_active())
}

/// Write alias mappings, one `old<TAB>new` line per mapping in insertion
/// order, UTF-8. Returns the number of lines written.
pub fn dump_aliases(path: &Path, registry: &AliasRegistry) -> Result<usize> {
    let mut text = String::new();
    for (old, new) in registry.iter() {
        text.push_str(old);
        text.push('\t');
        text.push_str(new);
        text.push('\n');
    }

    atomic_write(path, text.as_bytes())?;
    Ok(registry.len())
}

fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(parent)
        .with_context(|| format!("failed to create temp file next to {}", path.display()))?;
    temp_file.write_all(bytes)?;
    temp_file.flush()?;
    temp_file
        .persist(path)
        .with_context(|| format!("failed to replace {}", path.display()))?;

    Ok(())
}
