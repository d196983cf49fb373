// Error taxonomy for the record store

use thiserror::Error;

/// Errors surfaced by [`crate::Store`] operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was empty or a date did not parse.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("No record found with ID {0}.")]
    RecordNotFound(i64),

    #[error("No record found for location '{0}'.")]
    LocationNotFound(String),

    /// A stored row whose `change_date` no known layout can read
    #[error("record {id} has an unreadable change date '{value}'; fix it with `edit --id {id} --change_date YYYY-MM-DD`")]
    UnreadableDate { id: i64, value: String },

    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        StoreError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Whether this is one of the not-found variants
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::RecordNotFound(_) | StoreError::LocationNotFound(_))
    }

    /// Process exit code for this error kind
    pub fn exit_code(&self) -> ExitStatus {
        match self {
            StoreError::Validation { .. } => ExitStatus::Validation,
            StoreError::RecordNotFound(_) | StoreError::LocationNotFound(_) => ExitStatus::NotFound,
            StoreError::UnreadableDate { .. } | StoreError::Storage(_) | StoreError::Io(_) => ExitStatus::Storage,
        }
    }
}

/// Process exit status per outcome kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Validation = 1,
    NotFound = 2,
    Storage = 3,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        self as i32
    }
}
