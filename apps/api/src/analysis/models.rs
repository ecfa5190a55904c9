use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Client-facing message for any malformed analysis request.
pub const INVALID_ARGUMENT_MESSAGE: &str = "Invalid input. Please provide a valid argument text.";

/// A validated analysis request. Only constructed through `from_body`,
/// so holding one means `argument` is non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub argument: String,
}

impl AnalysisRequest {
    /// Validates the inbound JSON body: `argument` must exist, be a string,
    /// and be non-empty after trimming. The argument is kept untrimmed.
    pub fn from_body(body: &Value) -> Result<Self, AppError> {
        match body.get("argument").and_then(Value::as_str) {
            Some(argument) if !argument.trim().is_empty() => Ok(Self {
                argument: argument.to_string(),
            }),
            _ => Err(AppError::Validation(INVALID_ARGUMENT_MESSAGE.to_string())),
        }
    }
}

/// The five-part analysis returned to the client, plus the echoed argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub original_argument: String,
    pub steelman_counter: String,
    pub weak_points: Vec<String>,
    pub misconceptions: Vec<String>,
    pub reinforcements: Vec<String>,
    pub opposing_responses: Vec<String>,
}
