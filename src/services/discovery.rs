//! Data file discovery
//!
//! Recursively scans the configured data directories for `.csv` and `.txt`
//! files. Files are keyed by bare file name; when two directories hold the
//! same name, the one encountered last wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scan directories for survey data files. Missing directories are skipped.
pub fn scan_folders(folders: &[PathBuf]) -> HashMap<String, PathBuf> {
    let mut found = HashMap::new();

    for folder in folders {
        if !folder.is_dir() {
            continue;
        }
        for entry in WalkDir::new(folder)
            .into_iter()
            .filter_entry(|e| !is_hidden(e.path()))
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            let matches = path
                .extension()
                .map_or(false, |ext| ext == "csv" || ext == "txt");
            if matches {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    found.insert(name.to_string(), path.to_path_buf());
                }
            }
        }
    }

    found
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map_or(false, |n| n.starts_with('.'))
}
