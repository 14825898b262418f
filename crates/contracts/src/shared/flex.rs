//! Lenient decoding for fields the API serves in several encodings.
//!
//! List-valued columns (`influencer_category`, `reference_images`) arrive
//! as a real JSON array, as a JSON-encoded string, as a double-encoded
//! string, or as a plain label. The decode chain here tries each shape in
//! order and never fails: an unparseable value degrades per the chosen
//! [`ListFallback`] instead of poisoning the record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// What to do with a string that looks like JSON but does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFallback {
    /// Keep the raw string as a single-element list.
    KeepRaw,
    /// Drop the value and yield an empty list.
    Drop,
}

/// Decodes a list-valued field from whatever shape it arrived in.
///
/// `null` yields an empty list, an array passes through with scalars
/// coerced to strings, a string goes through the JSON / double-JSON /
/// plain-label chain. Scalars outside a list become a one-element list.
pub fn decode_list(value: &Value, fallback: ListFallback) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().filter_map(scalar_to_string).collect(),
        Value::String(s) => decode_list_str(s, fallback),
        Value::Number(n) => vec![n.to_string()],
        Value::Bool(b) => vec![b.to_string()],
        Value::Object(_) => match fallback {
            ListFallback::KeepRaw => vec![value.to_string()],
            ListFallback::Drop => Vec::new(),
        },
    }
}

fn decode_list_str(raw: &str, fallback: ListFallback) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    if raw.starts_with('[') {
        return match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
            _ => unparseable(raw, fallback),
        };
    }
    if raw.starts_with('"') {
        // A JSON string wrapping the real payload: unwrap one level and
        // run the chain again. Each level strips two quote characters,
        // so the recursion is bounded by the input length.
        return match serde_json::from_str::<Value>(raw) {
            Ok(Value::String(inner)) => decode_list_str(&inner, fallback),
            _ => unparseable(raw, fallback),
        };
    }
    // A bare label such as "Fashion".
    vec![raw.to_string()]
}

fn unparseable(raw: &str, fallback: ListFallback) -> Vec<String> {
    match fallback {
        ListFallback::KeepRaw => vec![raw.to_string()],
        ListFallback::Drop => Vec::new(),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Serde adapter: list field that keeps an unparseable string as a label.
pub fn list_keep_raw<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .map(|v| decode_list(&v, ListFallback::KeepRaw))
        .unwrap_or_default())
}

/// Serde adapter: list field that drops anything unparseable.
pub fn list_drop_raw<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .map(|v| decode_list(&v, ListFallback::Drop))
        .unwrap_or_default())
}

/// Serde adapter: integer field that tolerates numeric strings and floats.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_i64))
}

/// Serde adapter: float field that tolerates numeric strings and integers.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64))
}

/// Serde adapter: boolean flag that tolerates the 0/1 integers MySQL-backed
/// endpoints serve, plus "true"/"1" strings. Missing and null are false.
pub fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().is_some_and(|v| match v {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "1"),
        _ => false,
    }))
}

fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    }
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
