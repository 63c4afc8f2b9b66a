//! Error types for preprocessing operations.

/// Error type for preprocessing operations.
#[derive(Debug, thiserror::Error)]
pub enum PreprocessingError {
    /// The vocabulary handed to `fit` (or rebuilt from params) cannot produce a mapping.
    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),
    /// An operation that needs a fitted mapping was called before `fit`.
    #[error("Not fitted: {0}")]
    NotFitted(String),
    /// A selected column does not exist in the table.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
    /// A table was built with the same column name twice.
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),
    /// Shape mismatch between expected and actual table dimensions.
    #[error("Invalid shape: expected {expected}, got {got}")]
    InvalidShape { expected: String, got: String },
    /// A code could not be decoded back to a vocabulary entry.
    #[error("Invalid code: {0}")]
    InvalidCode(String),
}

/// Result type for preprocessing operations.
pub type Result<T> = std::result::Result<T, PreprocessingError>;
