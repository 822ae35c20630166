//! Recursive empty-value stripping for persistence-bound records.

use serde_json::Value;

/// Remove null, blank-string, empty-array and empty-object leaves, collapsing
/// parents that end up empty. Returns `None` when nothing remains, so the
/// persistence record never carries empty containers.
pub fn clean_value(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            if s.trim().is_empty() {
                None
            } else {
                Some(Value::String(s))
            }
        }
        Value::Array(items) => {
            let cleaned: Vec<Value> = items.into_iter().filter_map(clean_value).collect();
            if cleaned.is_empty() {
                None
            } else {
                Some(Value::Array(cleaned))
            }
        }
        Value::Object(entries) => {
            let cleaned: serde_json::Map<String, Value> = entries
                .into_iter()
                .filter_map(|(key, value)| clean_value(value).map(|v| (key, v)))
                .collect();
            if cleaned.is_empty() {
                None
            } else {
                Some(Value::Object(cleaned))
            }
        }
        // Numbers and booleans are never "empty"; false is a real answer.
        other => Some(other),
    }
}
