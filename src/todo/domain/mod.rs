//! Domain model for todo management.
//!
//! The todo domain models a single entity with an identifier, a free-text
//! name, and a two-valued status, keeping all infrastructure concerns outside
//! of the domain boundary.

mod error;
mod ids;
mod item;
mod status;

pub use error::ParseTodoStatusError;
pub use ids::TodoId;
pub use item::{PersistedTodoData, Todo};
pub use status::TodoStatus;
