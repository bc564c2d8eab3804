//! Error type shared by the resource managers and the HTTP layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Generic diagnostic returned with every 400.
pub const INVALID_DATA: &str = "Invalid Data";

/// Postgres `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// One or more field constraints failed; carries the field-level messages.
    #[error("Invalid Data: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The request body could not be decoded.
    #[error("Invalid Data: {0}")]
    InvalidBody(String),

    /// A path segment that is not an integer id.
    #[error("Invalid Data: {0}")]
    InvalidPath(String),

    #[error("Category {0} does not exist")]
    UnknownCategory(i32),

    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::InvalidBody(_)
            | Self::InvalidPath(_)
            | Self::UnknownCategory(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Maps a write failure on `todo_items`, turning a dangling category reference into a
    /// client error instead of a 500.
    pub fn from_todo_write(err: sqlx::Error, category_id: Option<i32>) -> Self {
        if let (sqlx::Error::Database(db_err), Some(id)) = (&err, category_id) {
            if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
                return Self::UnknownCategory(id);
            }
        }
        Self::Db(err)
    }
}

/// JSON body of 400 and 500 responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(errors) => ErrorResponse {
                message: INVALID_DATA.to_string(),
                errors,
            },
            Self::InvalidBody(detail) | Self::InvalidPath(detail) => ErrorResponse {
                message: INVALID_DATA.to_string(),
                errors: vec![detail],
            },
            Self::UnknownCategory(id) => ErrorResponse {
                message: INVALID_DATA.to_string(),
                errors: vec![format!("Category {} does not exist", id)],
            },
            Self::NotFound => return status.into_response(),
            Self::Db(e) => {
                tracing::error!(error = %e, "database error");
                ErrorResponse {
                    message: "Internal Server Error".to_string(),
                    errors: Vec::new(),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}
