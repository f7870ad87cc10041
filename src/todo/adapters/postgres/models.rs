//! Diesel row models for todo persistence.

use super::schema::todos;
use diesel::prelude::*;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Free-text label.
    pub name: String,
    /// Lifecycle status in canonical string form.
    pub status: Option<String>,
}

/// Insert model for new todo records; the identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Free-text label.
    pub name: String,
    /// Lifecycle status in canonical string form.
    pub status: Option<String>,
}
