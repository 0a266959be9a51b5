use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Validates raw model output and extracts the recommendations object.
///
/// Models frequently wrap their JSON answer in prose despite being told not
/// to, so after a failed whole-string parse we retry on the span between the
/// first `{` and the last `}`. A parse is accepted only when it yields a JSON
/// object whose `recommendations` field is present and non-empty; field names
/// and types inside the recommendations are trusted verbatim.
pub fn parse_recommendations(text: &str) -> AppResult<Value> {
    let parsed = serde_json::from_str::<Value>(text)
        .ok()
        .or_else(|| extract_embedded_object(text));

    match parsed {
        Some(value) if has_recommendations(&value) => Ok(value),
        Some(_) => Err(AppError::Parse(
            "missing or empty recommendations field".to_string(),
        )),
        None => Err(AppError::Parse("output is not valid JSON".to_string())),
    }
}

/// Parses the substring between the first `{` and the last `}`, if any.
fn extract_embedded_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

/// True when `value` is an object with a non-empty `recommendations` field.
///
/// Empty means absent, null, false, zero, or an empty string/array/object.
fn has_recommendations(value: &Value) -> bool {
    let Some(field) = value.as_object().and_then(|map| map.get("recommendations")) else {
        return false;
    };
    match field {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
