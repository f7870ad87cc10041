//! Todo API handlers.
//!
//! Thin adapters over [`TodoService`]: extract parameters and bodies, log the
//! request, delegate, and translate the result into an HTTP response. No
//! business logic lives here.

use crate::api::error::ApiResult;
use crate::todo::domain::TodoId;
use crate::todo::services::{TodoDto, TodoService};
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use tracing::info;

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListTodosQuery {
    /// Optional status filter; allowed values are `ACTIVE` and `COMPLETED`.
    status: Option<String>,
}

/// Lists all todos, or only those matching the `status` query parameter.
#[get("")]
pub async fn list_todos(
    service: web::Data<TodoService>,
    query: web::Query<ListTodosQuery>,
) -> ApiResult<web::Json<Vec<TodoDto>>> {
    info!(status = query.status.as_deref(), "GET request to list todos");
    let todos = service.list_todos(query.status.as_deref()).await?;
    Ok(web::Json(todos))
}

/// Fetches a single todo by identifier.
#[get("/{id}")]
pub async fn get_todo(
    service: web::Data<TodoService>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<TodoDto>> {
    let id = TodoId::new(path.into_inner());
    info!(%id, "GET request to fetch a todo");
    let todo = service.get_todo(id).await?;
    Ok(web::Json(todo))
}

/// Creates a todo. The created todo is always in `ACTIVE` status; any
/// caller-supplied `id` or `status` is ignored.
#[post("")]
pub async fn create_todo(
    service: web::Data<TodoService>,
    body: web::Json<TodoDto>,
) -> ApiResult<HttpResponse> {
    info!(name = body.name.as_deref(), "POST request to create a todo");
    let created = service.create_todo(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Updates the name and status of a todo.
#[put("/{id}")]
pub async fn update_todo(
    service: web::Data<TodoService>,
    path: web::Path<i64>,
    body: web::Json<TodoDto>,
) -> ApiResult<HttpResponse> {
    let id = TodoId::new(path.into_inner());
    info!(%id, "PUT request to update a todo");
    service.update_todo(id, body.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Deletes a todo by identifier.
#[delete("/{id}")]
pub async fn delete_todo(
    service: web::Data<TodoService>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = TodoId::new(path.into_inner());
    info!(%id, "DELETE request to delete a todo");
    service.delete_todo(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Deletes every todo.
#[delete("")]
pub async fn delete_all_todos(service: web::Data<TodoService>) -> ApiResult<HttpResponse> {
    info!("DELETE request to delete all todos");
    service.delete_all_todos().await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Mounts the todo endpoints under `/api/todos`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/todos")
            .service(list_todos)
            .service(create_todo)
            .service(delete_all_todos)
            .service(get_todo)
            .service(update_todo)
            .service(delete_todo),
    );
}
