//! Tasklist: a minimal todo-list management backend.
//!
//! This crate exposes create, read, update, delete, and purge operations over
//! a single `Todo` entity through an HTTP API backed by a relational store.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (PostgreSQL, in-memory)
//! - **Services**: Business rules and entity-to-transfer-object mapping
//!
//! # Modules
//!
//! - [`todo`]: Todo entity, persistence ports and adapters, business services
//! - [`api`]: HTTP handlers and error payload mapping

pub mod api;
pub mod todo;
