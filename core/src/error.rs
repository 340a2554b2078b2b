//! Error types for the todo collection service.
//!
//! # Design
//! Only business-rule failures live here. Decoding failures (a body that is
//! not valid JSON, a path id that is not an integer) never reach the service
//! and are reported by the HTTP layer. The `Display` text of each variant is
//! the message returned to the client.

use thiserror::Error;

/// Errors returned by `TodoService` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// The request violates an id rule; the collection is left unchanged.
    #[error("{0}")]
    InvalidRequest(String),

    /// No todo with the given id exists.
    #[error("Todo {0} not found")]
    NotFound(i64),
}

impl TodoError {
    pub(crate) fn id_must_be_unassigned() -> Self {
        TodoError::InvalidRequest("ID must be 0 or None".to_string())
    }

    pub(crate) fn id_must_be_positive() -> Self {
        TodoError::InvalidRequest("ID must be a positive integer".to_string())
    }

    pub(crate) fn id_mismatch(path_id: i64, body_id: i64) -> Self {
        TodoError::InvalidRequest(format!(
            "Todo id from URL: {path_id} does not match body id: {body_id}"
        ))
    }
}
