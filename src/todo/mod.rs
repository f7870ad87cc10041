//! Todo entity management.
//!
//! Implements the full lifecycle of a todo item: creation (always starting
//! `ACTIVE`), retrieval by identifier or status filter, name/status updates,
//! deletion by identifier, and purging every record. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Business services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
