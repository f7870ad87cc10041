//! Unit tests for the todo domain and service layers.

mod service_tests;
