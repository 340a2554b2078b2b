//! Domain core for the todo service.
//!
//! # Overview
//! Holds the todo record types, the id decoding rules applied to request
//! bodies, and `TodoService`, the in-memory collection behind the HTTP API.
//! Nothing here knows about HTTP; the server crate maps `TodoError` onto
//! status codes.
//!
//! # Design
//! - `TodoService` is constructed once and shared by handle. Tests build a
//!   fresh instance each, so no state leaks between them.
//! - Create/update/delete each run under one write lock.
//! - Ids are allocated from a forward-only counter and never reused.

pub mod error;
pub mod service;
pub mod types;

pub use error::TodoError;
pub use service::TodoService;
pub use types::{StatusMessage, INVALID_INTEGER, Todo, TodoInput, TodoList, TodoMessage};
