//! Error types for store operations
//!
//! Provides unified error handling for library edits and persistence.

use crate::action::ActionError;
use thiserror::Error;

/// Errors that can occur while editing or persisting the range library
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The action list would become invalid
    #[error("invalid actions: {0}")]
    Action(#[from] ActionError),

    #[error("unknown folder {0:?}")]
    UnknownFolder(String),

    #[error("unknown range {0:?}")]
    UnknownRange(String),

    #[error("unknown action {0:?}")]
    UnknownAction(String),

    /// A weighted action still blends the action being removed
    #[error("action {id:?} is used by weighted action {used_by:?}")]
    ActionInUse { id: String, used_by: String },
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
