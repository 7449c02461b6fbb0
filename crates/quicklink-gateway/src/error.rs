use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("at least one link is required")]
    EmptyBatch,
    #[error("at most {max} links can be shortened at once, got {got}")]
    BatchTooLarge { max: usize, got: usize },
    #[error("stored url cannot be used as a redirect target")]
    UnusableTarget,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyBatch | AppError::BatchTooLarge { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::UnusableTarget => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
