use axum::{http::StatusCode, response::Json};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("validation errors")]
    Validation,
    #[error(transparent)]
    Database(#[from] diesel::result::Error),
    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": message })),
            )
                .into_response(),
            // Creation failures keep the flat "errors" list shape: price
            // validation reports the fixed message, everything the storage
            // layer raises (foreign key violations included) is stringified.
            ApiError::Validation => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": ["validation errors"] })),
            )
                .into_response(),
            ApiError::Database(err) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": [err.to_string()] })),
            )
                .into_response(),
            ApiError::Pool(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response(),
        }
    }
}
