//! Application services for todo management.

mod todos;

pub use todos::{TodoDto, TodoService, TodoServiceError, TodoServiceResult};
