use crate::models::RecordId;

/// Result type for session mutation operations
pub type EditResult<T> = Result<T, EditError>;

/// Errors raised by session mutations
///
/// All of these are recoverable: the REPL reports the kind and target and
/// keeps accepting commands. A failed mutation leaves no partial state.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditError {
    #[error("record '{0}' not found")]
    NotFound(RecordId),

    #[error("record '{0}' is already marked outdated")]
    AlreadyOutdated(RecordId),

    #[error("'{old}' already resolves to '{new}'")]
    NoOpRename { old: String, new: String },

    #[error("renaming '{old}' to '{new}' would create an alias cycle")]
    Cycle { old: String, new: String },

    #[error("duplicate record id '{0}'")]
    DuplicateId(RecordId),
}

impl EditError {
    /// Short kind name shown alongside the message in the REPL
    pub fn kind(&self) -> &'static str {
        match self {
            EditError::NotFound(_) => "not found",
            EditError::AlreadyOutdated(_) => "already outdated",
            EditError::NoOpRename { .. } => "no-op rename",
            EditError::Cycle { .. } => "cycle",
            EditError::DuplicateId(_) => "duplicate id",
        }
    }
}
