//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::analysis::analyzer::{analyze_argument, AnalysisStage};
use crate::analysis::models::{AnalysisRequest, AnalysisResult, INVALID_ARGUMENT_MESSAGE};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/analysis
///
/// Validates `{ "argument": "<text>" }`, runs the analysis, and returns the
/// full `AnalysisResult`. A body that is not JSON at all is treated the same
/// as a missing argument.
pub async fn handle_analysis(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    debug!(stage = %AnalysisStage::Validating, "Analysis request received");

    let Json(body) = body.map_err(|rejection| {
        debug!("Rejected analysis body: {rejection}");
        AppError::Validation(INVALID_ARGUMENT_MESSAGE.to_string())
    })?;
    let request = AnalysisRequest::from_body(&body)?;

    let result = analyze_argument(state.llm.as_ref(), &request.argument).await?;

    Ok(Json(result))
}
