pub mod alias;
pub mod del;
pub mod dump;
pub mod generate;
pub mod load;
pub mod outdate;
pub mod repl;
pub mod view;

use crate::models::EditorConfig;
use crate::store::Session;
use encoding_rs::{Encoding, UTF_8};
use std::path::PathBuf;

/// Everything the interactive loop carries between commands
pub struct EditorState {
    pub config: EditorConfig,
    pub session: Session,
    /// Source paths remembered from `load`, reused by a bare `dump`
    pub csv_path: Option<PathBuf>,
    pub alias_path: Option<PathBuf>,
    /// Encoding detected at load, reused on dump
    pub encoding: &'static Encoding,
    /// Edits since the last dump
    pub dirty: bool,
}

impl EditorState {
    pub fn new(config: EditorConfig) -> Self {
        let session = Session::new(config.institution_column.clone());
        Self {
            config,
            session,
            csv_path: None,
            alias_path: None,
            encoding: UTF_8,
            dirty: false,
        }
    }
}
