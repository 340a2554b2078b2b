//! HTTP error mapping.
//!
//! # Design
//! Three kinds of failure reach the client. `Malformed` covers anything the
//! extractors reject before a handler runs (bad JSON, wrong field types, a
//! non-integer path id). `InvalidRequest` and `NotFound` come from the
//! service. Every variant renders as `{ "detail": "..." }`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use todo_core::{TodoError, INVALID_INTEGER};

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// The request could not be decoded (422).
    Malformed(String),

    /// A business rule rejected the request (400).
    InvalidRequest(String),

    /// The addressed todo does not exist (404).
    NotFound(String),

    /// The request was rejected with a status of its own, e.g. 415 for a
    /// missing JSON content type.
    Rejected(StatusCode, String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Malformed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Rejected(status, _) => *status,
        }
    }

    fn into_detail(self) -> String {
        match self {
            ApiError::Malformed(detail)
            | ApiError::InvalidRequest(detail)
            | ApiError::NotFound(detail)
            | ApiError::Rejected(_, detail) => detail,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.into_detail(),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<TodoError> for ApiError {
    fn from(e: TodoError) -> Self {
        match e {
            TodoError::InvalidRequest(msg) => ApiError::InvalidRequest(msg),
            e @ TodoError::NotFound(_) => ApiError::NotFound(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let detail = rejection.body_text();
        tracing::debug!(%detail, "rejected request body");
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                ApiError::Malformed(detail)
            }
            other => ApiError::Rejected(other.status(), detail),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        let detail = rejection.body_text();
        tracing::debug!(%detail, "rejected path parameter");
        match rejection {
            PathRejection::FailedToDeserializePathParams(_) => {
                ApiError::Malformed(format!("id: {INVALID_INTEGER} ({detail})"))
            }
            other => ApiError::Rejected(other.status(), detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let invalid: ApiError = TodoError::InvalidRequest("ID must be 0 or None".into()).into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let missing: ApiError = TodoError::NotFound(7).into();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.into_detail(), "Todo 7 not found");
    }

    #[test]
    fn malformed_is_unprocessable() {
        let err = ApiError::Malformed("Input should be a valid integer".into());
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
