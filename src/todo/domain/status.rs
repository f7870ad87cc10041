//! Todo status enumeration and string conversions.

use super::ParseTodoStatusError;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoStatus {
    /// The item still requires work.
    Active,
    /// The item has been finished.
    Completed,
}

impl TodoStatus {
    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
        }
    }

    /// Parses a caller-supplied status string.
    ///
    /// Matching is exact: only the canonical `ACTIVE` and `COMPLETED` forms
    /// are accepted. Returns `None` for anything else rather than erroring so
    /// callers decide how an unrecognised value is reported.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "ACTIVE" => Some(Self::Active),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl TryFrom<&str> for TodoStatus {
    type Error = ParseTodoStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| ParseTodoStatusError(value.to_owned()))
    }
}
