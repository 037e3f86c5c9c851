use super::EditorState;
use crate::services::dumper;
use crate::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

pub fn run(state: &mut EditorState, files: Vec<PathBuf>) -> Result<()> {
    if state.session.records().is_empty() {
        anyhow::bail!("nothing loaded; run 'load' first");
    }

    let (csv_target, alias_target) = targets(state, &files)?;

    if let Some(path) = &csv_target {
        let written = dumper::dump_csv(path, state.session.records(), state.encoding)?;
        println!(
            "{}",
            format!("Wrote {} records to {}", written, path.display()).green()
        );
    }
    if let Some(path) = &alias_target {
        let written = dumper::dump_aliases(path, state.session.aliases())?;
        println!(
            "{}",
            format!("Wrote {} alias mappings to {}", written, path.display()).green()
        );
    }

    if csv_target.is_some() {
        state.dirty = false;
    }
    Ok(())
}

/// Decide what to write where: a bare `dump` overwrites the loaded sources;
/// explicit paths are assigned by suffix.
fn targets(
    state: &EditorState,
    files: &[PathBuf],
) -> Result<(Option<PathBuf>, Option<PathBuf>)> {
    match files {
        [] => {
            let csv = state
                .csv_path
                .clone()
                .ok_or_else(|| anyhow::anyhow!("no source file remembered; pass a path"))?;
            let alias = state
                .alias_path
                .clone()
                .ok_or_else(|| anyhow::anyhow!("no alias file remembered; pass a path"))?;
            Ok((Some(csv), Some(alias)))
        }
        [one] => match extension(one) {
            Some("csv") => Ok((Some(one.clone()), None)),
            Some("txt") => Ok((None, Some(one.clone()))),
            _ => anyhow::bail!("expected a .csv or .txt file"),
        },
        [a, b] => match (extension(a), extension(b)) {
            (Some("csv"), Some("txt")) => Ok((Some(a.clone()), Some(b.clone()))),
            (Some("txt"), Some("csv")) => Ok((Some(b.clone()), Some(a.clone()))),
            _ => anyhow::bail!("expected one .csv and one .txt file"),
        },
        _ => anyhow::bail!("usage: dump [data.csv] [alias.txt]"),
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}
