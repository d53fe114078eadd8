//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    /// Wraps an error with the qualified name of the operation it passed through.
    #[error("{op}: {source}")]
    Context {
        op: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

/// Error class used for the status mapping, independent of how many
/// operations wrapped the error on the way up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    Conflict,
    Storage,
}

impl AppError {
    pub fn context(self, op: &'static str) -> Self {
        AppError::Context {
            op,
            source: Box::new(self),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::BadRequest(_) => ErrorKind::BadRequest,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Conflict(_) => ErrorKind::Conflict,
            AppError::Db(sqlx::Error::RowNotFound) => ErrorKind::NotFound,
            AppError::Db(_) => ErrorKind::Storage,
            AppError::Context { source, .. } => source.kind(),
        }
    }
}

/// Attach an operation name to the error side of a result.
pub trait ResultExt<T> {
    fn context(self, op: &'static str) -> Result<T, AppError>;
}

impl<T, E: Into<AppError>> ResultExt<T> for Result<T, E> {
    fn context(self, op: &'static str) -> Result<T, AppError> {
        self.map_err(|e| e.into().context(op))
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match self.kind() {
            // Client input errors carry no body.
            ErrorKind::BadRequest => return StatusCode::BAD_REQUEST.into_response(),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "conflict"),
            ErrorKind::Storage => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code,
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
