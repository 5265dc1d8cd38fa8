use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::drafts::DraftError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(format!("Invalid path: {}", rejection.body_text()))
    }
}

impl From<DraftError> for AppError {
    fn from(e: DraftError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(format!("Invalid query: {}", rejection.body_text()))
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                sanitize_storage_message(&e.to_string(), is_unique_violation(e))
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                e.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

/// Maps raw storage errors onto messages that are safe to show to a client.
/// Only known shapes are passed through in reworded form.
pub fn sanitize_storage_message(raw: &str, unique_violation: bool) -> String {
    let lower = raw.to_lowercase();
    if unique_violation || lower.contains("duplicate") {
        "A record with these details already exists".to_string()
    } else if lower.contains("connection") || lower.contains("pool timed out") {
        "Database connection failed".to_string()
    } else {
        "A database error occurred".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_is_reworded() {
        let msg = sanitize_storage_message(
            "duplicate key value violates unique constraint \"custom_tones_name_key\"",
            false,
        );
        assert_eq!(msg, "A record with these details already exists");
    }

    #[test]
    fn test_unique_violation_flag_wins() {
        let msg = sanitize_storage_message("error returned from database", true);
        assert_eq!(msg, "A record with these details already exists");
    }

    #[test]
    fn test_connection_message_is_reworded() {
        let msg = sanitize_storage_message("error communicating with database: Connection refused", false);
        assert_eq!(msg, "Database connection failed");
        let msg = sanitize_storage_message("pool timed out while waiting for an open connection", false);
        assert_eq!(msg, "Database connection failed");
    }

    #[test]
    fn test_unknown_storage_error_is_hidden() {
        let msg = sanitize_storage_message("column \"secret\" does not exist", false);
        assert_eq!(msg, "A database error occurred");
    }

    #[test]
    fn test_draft_capacity_is_a_validation_error() {
        let err = AppError::from(DraftError::TooManyDrafts(25));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Validation error: a session may hold at most 25 drafts");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Llm(LlmError::EmptyContent).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
