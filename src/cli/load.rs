use super::EditorState;
use crate::services::{discovery, loader};
use crate::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

pub fn run(state: &mut EditorState, files: Vec<PathBuf>) -> Result<()> {
    let (csv_path, alias_path) = match files.as_slice() {
        [] => auto_paths(state)?,
        [a, b] => pair_by_suffix(a, b)?,
        _ => anyhow::bail!("usage: load [data.csv alias.txt]"),
    };

    // Read and parse both files before touching the session, so a bad file
    // leaves the previous data in place.
    let loaded = loader::load_csv(&csv_path, &state.config.id_column)?;
    let mappings = loader::load_aliases(&alias_path)?;

    let count = state.session.load(loaded.columns, loaded.records)?;
    state.encoding = loaded.encoding;

    let mut restored = 0;
    for (old, new) in &mappings {
        match state.session.restore_alias(old, new) {
            Ok(()) => restored += 1,
            Err(e) => eprintln!(
                "{}",
                format!("skipping alias '{}' -> '{}': {}", old, new, e).yellow()
            ),
        }
    }

    println!(
        "{}",
        format!(
            "Loaded {} records from {} ({}), {} alias mappings from {}",
            count,
            csv_path.display(),
            loaded.encoding.name(),
            restored,
            alias_path.display()
        )
        .green()
    );

    state.csv_path = Some(csv_path);
    state.alias_path = Some(alias_path);
    Ok(())
}

/// Resolve the well-known file names through directory discovery
fn auto_paths(state: &EditorState) -> Result<(PathBuf, PathBuf)> {
    let found = discovery::scan_folders(&state.config.data_dirs);

    let csv = found.get(state.config.csv_file.as_str()).cloned();
    let alias = found.get(state.config.alias_file.as_str()).cloned();
    match (csv, alias) {
        (Some(csv), Some(alias)) => Ok((csv, alias)),
        _ => anyhow::bail!(
            "could not find '{}' and '{}' under {:?}; pass both paths explicitly",
            state.config.csv_file,
            state.config.alias_file,
            state.config.data_dirs
        ),
    }
}

/// Accept the csv/txt pair in either order, deciding by suffix
fn pair_by_suffix(a: &Path, b: &Path) -> Result<(PathBuf, PathBuf)> {
    match (extension(a), extension(b)) {
        (Some("csv"), Some("txt")) => Ok((a.to_path_buf(), b.to_path_buf())),
        (Some("txt"), Some("csv")) => Ok((b.to_path_buf(), a.to_path_buf())),
        _ => anyhow::bail!("expected one .csv and one .txt file"),
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}
