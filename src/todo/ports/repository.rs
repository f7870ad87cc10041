//! Repository port for todo persistence and lookup.

use crate::todo::domain::{Todo, TodoId, TodoStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Each operation is individually atomic; callers compose them without
/// cross-operation transactions, so a read-then-save sequence may race with a
/// concurrent writer and the last save wins.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns every stored todo in storage order.
    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>>;

    /// Returns the todos whose stored status equals `status`, in storage
    /// order.
    async fn find_by_status(&self, status: TodoStatus) -> TodoRepositoryResult<Vec<Todo>>;

    /// Finds a todo by identifier.
    ///
    /// Returns `None` when the todo does not exist.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Upserts a todo and returns the persisted form.
    ///
    /// A todo without an identifier is inserted and receives a store-assigned
    /// one; a todo with an identifier overwrites the existing record.
    async fn save(&self, todo: Todo) -> TodoRepositoryResult<Todo>;

    /// Deletes the todo with the given identifier, if present.
    async fn delete_by_id(&self, id: TodoId) -> TodoRepositoryResult<()>;

    /// Deletes every stored todo.
    async fn delete_all(&self) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
