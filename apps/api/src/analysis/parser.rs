//! Response Parser: turns the model's raw completion text into an `AnalysisResult`.
//!
//! The model is asked for a fixed schema but nothing it returns is trusted:
//! absent, `null`, or wrong-typed fields fall back to empty defaults, and
//! non-string array elements are dropped. Text that is not a JSON object
//! fails the whole analysis. There is no scraping of partial output.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

use crate::analysis::models::AnalysisResult;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("model output is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("model output is a JSON {0}, expected an object")]
    NotAnObject(&'static str),
}

/// The model's half of the result. Every field is optional on the wire.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelAnalysis {
    #[serde(default, deserialize_with = "de_string_or_empty")]
    steelman_counter: String,
    #[serde(default, deserialize_with = "de_string_list_or_empty")]
    weak_points: Vec<String>,
    #[serde(default, deserialize_with = "de_string_list_or_empty")]
    misconceptions: Vec<String>,
    #[serde(default, deserialize_with = "de_string_list_or_empty")]
    reinforcements: Vec<String>,
    #[serde(default, deserialize_with = "de_string_list_or_empty")]
    opposing_responses: Vec<String>,
}

/// Accepts a string; anything else (null, number, array, object) becomes `""`.
fn de_string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// Accepts an array, keeping its string elements in order.
/// A non-array value becomes an empty list.
fn de_string_list_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parses raw completion text into a full `AnalysisResult` for `original_argument`.
pub fn parse_analysis(original_argument: &str, raw: &str) -> Result<AnalysisResult, ParseError> {
    let value: Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(ParseError::NotAnObject(json_kind(&value)));
    }

    let parsed: ModelAnalysis = serde_json::from_value(value)?;

    Ok(AnalysisResult {
        original_argument: original_argument.to_string(),
        steelman_counter: parsed.steelman_counter,
        weak_points: parsed.weak_points,
        misconceptions: parsed.misconceptions,
        reinforcements: parsed.reinforcements,
        opposing_responses: parsed.opposing_responses,
    })
}
