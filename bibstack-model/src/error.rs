//! Error types for the model crate.

use crate::StringId;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur when mutating the string table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Another definition already uses this name.
    #[error("string name already in use: {0}")]
    NameTaken(String),

    /// No definition with this id exists in the database.
    #[error("string definition not found: {0}")]
    NotFound(StringId),
}
