//! Error types for seeding operations.

/// Result type alias for seeding operations
pub type SeedResult<T> = Result<T, SeedError>;

/// Error type for seeding operations.
///
/// `NotFound` is the only variant this crate recovers from itself (inside
/// find-or-create); everything else is surfaced to the caller unchanged.
#[derive(thiserror::Error, Debug)]
pub enum SeedError {
    #[error("record not found in table '{table}'")]
    NotFound { table: String },

    #[error("unknown column '{column}' on table '{table}'")]
    UnknownColumn { table: String, column: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SeedError {
    /// Build a `NotFound` error for the given table.
    pub fn not_found(table: impl Into<String>) -> Self {
        SeedError::NotFound {
            table: table.into(),
        }
    }

    /// Build an `UnknownColumn` error for the given table and column.
    pub fn unknown_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        SeedError::UnknownColumn {
            table: table.into(),
            column: column.into(),
        }
    }
}
