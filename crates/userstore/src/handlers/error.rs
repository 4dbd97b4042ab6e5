use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use userstore_core::storage::{
    repository_error_to_status_code, user_error_to_status_code, RepositoryError,
};
use userstore_core::user::{MessageResponse, UserError};

/// The request body could not be parsed as the expected JSON document.
#[derive(Debug, Error)]
#[error("Malformed request body: {0}")]
pub struct MalformedInput(pub String);

/// Application error type that wraps `anyhow::Error`.
///
/// Typed errors from the core crate are downcast to pick a status code;
/// anything else becomes a 500. The body is always `{"message": ...}`.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(error) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(error)
        } else if let Some(error) = self.0.downcast_ref::<UserError>() {
            user_error_to_status_code(error)
        } else if self.0.is::<MalformedInput>() {
            400
        } else {
            500
        };

        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self.0, "Rejected request");
        }

        (status, Json(MessageResponse::new(self.0.to_string()))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
