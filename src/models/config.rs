use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Editor configuration
///
/// Loaded from `uniinfo.toml` in the working directory; every field has a
/// default so the file is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Directories scanned for `.csv`/`.txt` data files
    #[serde(default = "default_data_dirs")]
    pub data_dirs: Vec<PathBuf>,

    /// Well-known survey data file name, auto-loaded by a bare `load`
    #[serde(default = "default_csv_file")]
    pub csv_file: String,

    /// Well-known alias file name, auto-loaded by a bare `load`
    #[serde(default = "default_alias_file")]
    pub alias_file: String,

    /// Markdown destination overwritten by `generate`
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Column holding the record identifier
    #[serde(default = "default_id_column")]
    pub id_column: String,

    /// Column holding the institution name, rewritten by `alias`
    #[serde(default = "default_institution_column")]
    pub institution_column: String,
}

fn default_data_dirs() -> Vec<PathBuf> {
    vec![
        PathBuf::from("university-information"),
        PathBuf::from("questionnaires"),
    ]
}

fn default_csv_file() -> String {
    "results.csv".to_string()
}

fn default_alias_file() -> String {
    "alias.txt".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("CHANGES.md")
}

fn default_id_column() -> String {
    "id".to_string()
}

fn default_institution_column() -> String {
    "school".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            data_dirs: default_data_dirs(),
            csv_file: default_csv_file(),
            alias_file: default_alias_file(),
            log_file: default_log_file(),
            id_column: default_id_column(),
            institution_column: default_institution_column(),
        }
    }
}

impl EditorConfig {
    /// Load config from the given path, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: EditorConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
