//! Service layer for todo business rules and transfer-object mapping.
//!
//! This service is the only component that translates between the wire-format
//! [`TodoDto`] and the persisted [`Todo`] entity. Handlers stay free of
//! business logic and forward service failures untouched.

use crate::todo::{
    domain::{Todo, TodoId, TodoStatus},
    ports::{TodoRepository, TodoRepositoryError},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Wire representation of a todo, used for request and response bodies.
///
/// On input every field is optional: `id` is ignored wherever it appears,
/// creation ignores `status`, and an update applies `name` and `status`
/// exactly as supplied, absent fields included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDto {
    /// Store-assigned identifier; ignored on input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TodoId>,
    /// Free-text label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Status in canonical string form (`ACTIVE` or `COMPLETED`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Service-level errors for todo operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// A caller-supplied status string does not match a known value.
    #[error("the supplied status is not a valid todo status")]
    InvalidStatus,
    /// The referenced todo does not exist.
    #[error("no todo exists with the supplied identifier")]
    NotFound,
    /// Persistence did not yield a usable result after creation.
    #[error("the todo could not be created")]
    CreateFailed,
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Todo business-rule service.
#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    /// Creates a new todo service over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Lists todos, optionally restricted to one status value.
    ///
    /// Without a filter every stored todo is returned in storage order. An
    /// empty result set is a valid empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::InvalidStatus`] when the filter does not
    /// parse to a known status, or [`TodoServiceError::Repository`] when the
    /// lookup fails.
    pub async fn list_todos(&self, status: Option<&str>) -> TodoServiceResult<Vec<TodoDto>> {
        let todos = match status {
            None => self.repository.find_all().await?,
            Some(value) => {
                let parsed =
                    TodoStatus::from_value(value).ok_or(TodoServiceError::InvalidStatus)?;
                self.repository.find_by_status(parsed).await?
            }
        };
        Ok(todos.iter().map(map_to_dto).collect())
    }

    /// Retrieves a single todo by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when the todo does not exist,
    /// or [`TodoServiceError::Repository`] when the lookup fails.
    pub async fn get_todo(&self, id: TodoId) -> TodoServiceResult<TodoDto> {
        let todo = self.require_todo(id).await?;
        Ok(map_to_dto(&todo))
    }

    /// Creates a todo from the supplied transfer object.
    ///
    /// Any caller-supplied `id` or `status` is ignored; the new todo starts
    /// `ACTIVE`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::CreateFailed`] when persistence does not
    /// yield an identifier-bearing result, or
    /// [`TodoServiceError::Repository`] when the save fails.
    pub async fn create_todo(&self, dto: TodoDto) -> TodoServiceResult<TodoDto> {
        let todo = Todo::new(dto.name.unwrap_or_default());
        let created = self.repository.save(todo).await?;
        if created.id().is_none() {
            return Err(TodoServiceError::CreateFailed);
        }
        Ok(map_to_dto(&created))
    }

    /// Updates the name and status of an existing todo.
    ///
    /// Both fields are overwritten with the supplied values rather than
    /// patched: an absent name becomes the empty string and an absent status
    /// clears the stored status.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when the todo does not exist,
    /// [`TodoServiceError::InvalidStatus`] when a supplied status does not
    /// parse, or [`TodoServiceError::Repository`] when persistence fails.
    pub async fn update_todo(&self, id: TodoId, dto: TodoDto) -> TodoServiceResult<()> {
        let mut todo = self.require_todo(id).await?;

        let status = match dto.status.as_deref() {
            None => None,
            Some(value) => {
                Some(TodoStatus::from_value(value).ok_or(TodoServiceError::InvalidStatus)?)
            }
        };

        todo.set_name(dto.name.unwrap_or_default());
        todo.set_status(status);
        self.repository.save(todo).await?;
        Ok(())
    }

    /// Deletes a todo by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when the todo does not exist,
    /// or [`TodoServiceError::Repository`] when the delete fails.
    pub async fn delete_todo(&self, id: TodoId) -> TodoServiceResult<()> {
        self.require_todo(id).await?;
        self.repository.delete_by_id(id).await?;
        Ok(())
    }

    /// Deletes every stored todo. Always succeeds on an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the purge fails.
    pub async fn delete_all_todos(&self) -> TodoServiceResult<()> {
        self.repository.delete_all().await?;
        Ok(())
    }

    async fn require_todo(&self, id: TodoId) -> TodoServiceResult<Todo> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TodoServiceError::NotFound)
    }
}

/// Maps a persisted entity to its wire representation.
fn map_to_dto(todo: &Todo) -> TodoDto {
    TodoDto {
        id: todo.id(),
        name: Some(todo.name().to_owned()),
        status: todo.status().map(|status| status.as_str().to_owned()),
    }
}
