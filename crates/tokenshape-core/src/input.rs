//! Input ingestion - turns uploaded or pasted text into a raw configuration
//!
//! Never fails. Text that does not parse as JSON is wrapped as a single
//! field so the engine can still carry it through as residual content.

use serde_json::{Map, Value};

/// Parse `text` as JSON, or wrap it as `{ <raw_content_key>: text }`.
pub fn parse_raw_config(text: &str, raw_content_key: &str) -> Value {
    let trimmed = text.trim();
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(error = %err, "input is not valid JSON, wrapping as raw content");
            wrap_raw(trimmed, raw_content_key)
        }
    }
}

fn wrap_raw(text: &str, raw_content_key: &str) -> Value {
    let mut map = Map::new();
    if !text.is_empty() {
        map.insert(raw_content_key.to_string(), Value::String(text.to_string()));
    }
    Value::Object(map)
}
