//! Error types for todo domain parsing.

use thiserror::Error;

/// Error returned while decoding todo statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown todo status: {0}")]
pub struct ParseTodoStatusError(pub String);
