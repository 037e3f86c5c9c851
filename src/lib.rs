// Uniinfo - University survey record editor
// Interactive maintenance of survey data with alias tracking and change log generation

pub mod cli;
pub mod models;
pub mod parser;
pub mod services;
pub mod store;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{ChangeEvent, ChangeKind, ChangeTarget, EditorConfig, Record, RecordId, RecordStatus};
pub use store::{AliasRegistry, ChangeLog, EditError, RecordStore, RenameOutcome, Session};
