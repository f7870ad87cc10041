//! Todo entity and persisted-state reconstruction.

use super::{TodoId, TodoStatus};
use serde::{Deserialize, Serialize};

/// Todo entity.
///
/// The identifier is `None` until the entity has been persisted for the first
/// time; the persistence layer assigns it. The status is optional because an
/// update overwrites every mutable field with the caller-supplied value, so a
/// request without a status clears the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: Option<TodoId>,
    name: String,
    status: Option<TodoStatus>,
}

/// Parameter object for reconstructing a persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Store-assigned identifier.
    pub id: TodoId,
    /// Persisted name.
    pub name: String,
    /// Persisted status, if set.
    pub status: Option<TodoStatus>,
}

impl Todo {
    /// Creates a new, not-yet-persisted todo.
    ///
    /// New todos always start in [`TodoStatus::Active`]; any caller-supplied
    /// status is ignored at creation time.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            status: Some(TodoStatus::Active),
        }
    }

    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: Some(data.id),
            name: data.name,
            status: data.status,
        }
    }

    /// Returns the store-assigned identifier, if any.
    #[must_use]
    pub const fn id(&self) -> Option<TodoId> {
        self.id
    }

    /// Returns the todo name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the todo status, if set.
    #[must_use]
    pub const fn status(&self) -> Option<TodoStatus> {
        self.status
    }

    /// Overwrites the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Overwrites the status. `None` clears the stored status.
    pub fn set_status(&mut self, status: Option<TodoStatus>) {
        self.status = status;
    }
}
