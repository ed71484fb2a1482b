use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    NotFound(String),
    Internal(String),
}

// Read-only surface: any repository failure, a missing related row
// included, is a server fault.
impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        error!("❌ Request failed: {err}");

        match err {
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::Sqlx(_) => HttpError::Internal("Database error".into()),
                RepositoryError::NotFound(_) => HttpError::Internal("Missing related row".into()),
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}
