//! Dotted path resolution over JSON objects

use serde_json::Value;

/// Resolve `path` (dot-separated keys) against `root`.
///
/// Returns `None` as soon as a segment is missing, maps to `null`, or the
/// current value is not an object. Arrays are never indexed into.
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        match current.as_object().and_then(|map| map.get(segment)) {
            Some(Value::Null) | None => return None,
            Some(next) => current = next,
        }
    }
    Some(current)
}
