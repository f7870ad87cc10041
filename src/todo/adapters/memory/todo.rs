//! In-memory repository for todo storage without a database.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{PersistedTodoData, Todo, TodoId, TodoStatus},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Identifiers are assigned from a monotonic sequence, so iteration in key
/// order matches insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    next_id: i64,
    todos: BTreeMap<TodoId, Todo>,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TodoRepositoryError {
    TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.todos.values().cloned().collect())
    }

    async fn find_by_status(&self, status: TodoStatus) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .todos
            .values()
            .filter(|todo| todo.status() == Some(status))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.todos.get(&id).cloned())
    }

    async fn save(&self, todo: Todo) -> TodoRepositoryResult<Todo> {
        let mut state = self.state.write().map_err(lock_error)?;
        let persisted = match todo.id() {
            Some(id) => {
                state.todos.insert(id, todo.clone());
                todo
            }
            None => {
                state.next_id += 1;
                let id = TodoId::new(state.next_id);
                let assigned = Todo::from_persisted(PersistedTodoData {
                    id,
                    name: todo.name().to_owned(),
                    status: todo.status(),
                });
                state.todos.insert(id, assigned.clone());
                assigned
            }
        };
        Ok(persisted)
    }

    async fn delete_by_id(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.todos.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> TodoRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.todos.clear();
        Ok(())
    }
}
