//! Shape validation for API payloads.
//!
//! The payload is inspected as a raw [`serde_json::Value`] rather than
//! deserialized into a struct: the caller needs to distinguish "not a
//! mapping", "missing key", and "wrong type" from each other, and a single
//! derived deserialize error would collapse all three.

use serde_json::Value;

use crate::error::ResponseError;

/// Extract the submissions array from an API payload.
///
/// An empty array is a valid result; a payload without the `homeworks` key
/// is not, and is the observable signature of a broken API response.
pub fn extract_submissions(payload: &Value) -> Result<&Vec<Value>, ResponseError> {
    let object = payload
        .as_object()
        .ok_or_else(|| ResponseError::MalformedResponse {
            reason: format!("expected an object, got {}", json_type(payload)),
        })?;

    let homeworks = object
        .get("homeworks")
        .ok_or(ResponseError::MissingField { field: "homeworks" })?;

    match homeworks {
        Value::Array(items) => Ok(items),
        other => Err(ResponseError::MalformedResponse {
            reason: format!("\"homeworks\" must be an array, got {}", json_type(other)),
        }),
    }
}

/// The server clock reported in the payload, used to advance the poll cursor.
#[must_use]
pub fn current_date(payload: &Value) -> Option<i64> {
    payload.get("current_date").and_then(Value::as_i64)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
