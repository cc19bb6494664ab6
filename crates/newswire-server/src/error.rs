use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Error type for HTTP handlers. Storage and other internal failures map to
/// 500 with an explicit error body; they are never folded into the
/// `{"saved":false}` shape validation skips use.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Post not found: {0}")]
    NotFound(i64),

    #[error(transparent)]
    Internal(#[from] newswire_core::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("post {} not found", id))
            }
            AppError::Internal(e) => {
                tracing::error!("Request failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
