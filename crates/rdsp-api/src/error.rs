use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rdsp_runtime::RuntimeError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorBody {
                    error: "Unauthorized",
                }),
            )
                .into_response(),
            // Body is the runtime message as-is, no classification.
            ApiError::Runtime(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}
