//! `PostgreSQL` repository implementation for todo storage.

use super::{
    models::{NewTodoRow, TodoRow},
    schema::todos,
};
use crate::todo::{
    domain::{PersistedTodoData, Todo, TodoId, TodoStatus},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed todo repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.run_blocking(|connection| {
            let rows = todos::table
                .order(todos::id.asc())
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }

    async fn find_by_status(&self, status: TodoStatus) -> TodoRepositoryResult<Vec<Todo>> {
        self.run_blocking(move |connection| {
            let rows = todos::table
                .filter(todos::status.eq(status.as_str()))
                .order(todos::id.asc())
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .find(id.into_inner())
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_todo).transpose()
        })
        .await
    }

    async fn save(&self, todo: Todo) -> TodoRepositoryResult<Todo> {
        self.run_blocking(move |connection| {
            let status = todo.status().map(|status| status.as_str().to_owned());
            let row = match todo.id() {
                Some(id) => diesel::update(todos::table.find(id.into_inner()))
                    .set((
                        todos::name.eq(todo.name().to_owned()),
                        todos::status.eq(status),
                    ))
                    .returning(TodoRow::as_returning())
                    .get_result::<TodoRow>(connection)
                    .map_err(TodoRepositoryError::persistence)?,
                None => diesel::insert_into(todos::table)
                    .values(NewTodoRow {
                        name: todo.name().to_owned(),
                        status,
                    })
                    .returning(TodoRow::as_returning())
                    .get_result::<TodoRow>(connection)
                    .map_err(TodoRepositoryError::persistence)?,
            };
            row_to_todo(row)
        })
        .await
    }

    async fn delete_by_id(&self, id: TodoId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(todos::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn delete_all(&self) -> TodoRepositoryResult<()> {
        self.run_blocking(|connection| {
            diesel::delete(todos::table)
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn row_to_todo(row: TodoRow) -> TodoRepositoryResult<Todo> {
    let TodoRow { id, name, status } = row;
    let status = status
        .as_deref()
        .map(TodoStatus::try_from)
        .transpose()
        .map_err(TodoRepositoryError::persistence)?;

    Ok(Todo::from_persisted(PersistedTodoData {
        id: TodoId::new(id),
        name,
        status,
    }))
}
