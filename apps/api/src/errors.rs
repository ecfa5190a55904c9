use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::parser::ParseError;
use crate::llm_client::LlmError;

/// Client-facing message for every downstream failure. Never carries detail.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze argument. Please try again later.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Response parse error: {0}")]
    Parse(#[from] ParseError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Llm(e) => {
                tracing::error!("Error analyzing argument: LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ANALYSIS_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::Parse(e) => {
                tracing::error!("Error analyzing argument: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ANALYSIS_FAILED_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
