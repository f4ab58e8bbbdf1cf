use crate::error::ListingForgeError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// Upstream provider failures become 502s; everything else is a generic 500.
/// Extraction never produces an error, so malformed model replies still yield
/// a well-formed 200 with fallback values.
pub enum AppError {
    Forge(ListingForgeError),
    Internal(anyhow::Error),
}

impl From<ListingForgeError> for AppError {
    fn from(err: ListingForgeError) -> Self {
        AppError::Forge(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Forge(err) => {
                error!("ListingForgeError: {err:?}");
                match &err {
                    ListingForgeError::Config { .. } => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Server is not configured correctly.".to_string(),
                    ),
                    e if e.is_upstream() => (
                        StatusCode::BAD_GATEWAY,
                        format!("Model provider request failed: {err}"),
                    ),
                    _ => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
                }
            }
            AppError::Internal(err) => {
                error!("Internal server error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
