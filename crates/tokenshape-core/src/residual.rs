//! Residual collection - the permissive merge step
//!
//! Every top-level input key that the mapping passes did not claim is copied
//! verbatim, so no top-level information is dropped. Existing keys always win.

use serde_json::Value;

use crate::mapper::FieldMapping;

/// Copy unclaimed, non-null top-level keys of `raw` into `mapping`.
///
/// Non-object inputs have no top-level keys and are left to the caller.
pub fn collect_residual(raw: &Value, mapping: &mut FieldMapping) {
    let Some(map) = raw.as_object() else {
        return;
    };
    let before = mapping.count;
    for (key, value) in map {
        if value.is_null() || mapping.contains(key) {
            continue;
        }
        mapping.assign(key, value.clone());
    }
    tracing::debug!(copied = mapping.count - before, "residual keys collected");
}
