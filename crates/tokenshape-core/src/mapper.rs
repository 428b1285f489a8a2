//! Field mapping - copies aliased source values onto canonical field names
//!
//! Two passes share one policy: for each canonical field, walk its alias list
//! in declared order and take the first candidate that resolves. Scalar
//! fields accept any non-null value; structured fields additionally require
//! the declared [`FieldShape`](crate::aliases::FieldShape).

use serde_json::{Map, Value};

use crate::aliases::{self, FieldAliases};
use crate::path::resolve;
use crate::variant::SchemaVariant;

/// Output key carrying the assigned variant's standard label
pub const VARIANT_TAG_KEY: &str = "standard";

/// Output key carrying the configuration richness tag
pub const RICHNESS_KEY: &str = "configMode";

/// Canonical output under construction plus its assignment tally
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMapping {
    pub canonical: Map<String, Value>,
    /// Number of assignments performed so far
    pub count: usize,
    /// Structured canonical fields that were populated, in merge order
    pub structured: Vec<&'static str>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `key` already holds a value
    pub fn contains(&self, key: &str) -> bool {
        self.canonical.contains_key(key)
    }

    /// Record one assignment
    pub fn assign(&mut self, key: &str, value: Value) {
        tracing::trace!(field = key, "assigned");
        self.canonical.insert(key.to_string(), value);
        self.count += 1;
    }

    /// Returns true if any structured field was populated
    pub fn has_structured(&self) -> bool {
        !self.structured.is_empty()
    }
}

/// Map scalar canonical fields from `raw`.
///
/// With a variant, only that variant's table is walked and the variant tag
/// is assigned first. Without one, all six tables are walked in priority
/// order and a field set by an earlier table is not revisited.
pub fn map_fields(raw: &Value, variant: Option<SchemaVariant>) -> FieldMapping {
    let mut mapping = FieldMapping::new();

    if let Some(v) = variant {
        mapping.assign(VARIANT_TAG_KEY, Value::String(v.label().to_string()));
    }

    for table in aliases::tables_for(variant) {
        map_scalar_fields(raw, table.scalar, &mut mapping);
    }

    tracing::debug!(count = mapping.count, "scalar fields mapped");
    mapping
}

/// First-match scalar mapping of `fields` against `root`.
///
/// Fields already present in `mapping` are left untouched, which lets the
/// same routine re-walk a narrowed root such as a properties object.
pub fn map_scalar_fields(root: &Value, fields: &[FieldAliases], mapping: &mut FieldMapping) {
    for field in fields {
        if mapping.contains(field.canonical) {
            continue;
        }
        if let Some(value) = field.aliases.iter().find_map(|alias| resolve(root, alias)) {
            mapping.assign(field.canonical, value.clone());
        }
    }
}

/// Merge structured canonical fields and flatten the properties object.
pub fn merge_complex_fields(raw: &Value, mapping: &mut FieldMapping, variant: Option<SchemaVariant>) {
    let tables = aliases::tables_for(variant);

    for table in &tables {
        for field in table.structured {
            if mapping.contains(field.canonical) {
                continue;
            }
            let found = field
                .aliases
                .iter()
                .filter_map(|alias| resolve(raw, alias))
                .find(|value| field.shape.matches(value));
            if let Some(value) = found {
                mapping.assign(field.canonical, value.clone());
                mapping.structured.push(field.canonical);
            }
        }
    }

    let canonical = match tables.first() {
        Some(table) => table.properties.canonical,
        None => return,
    };
    if mapping.contains(canonical) {
        return;
    }
    let properties = tables
        .iter()
        .flat_map(|table| table.properties.aliases.iter())
        .filter_map(|alias| resolve(raw, alias))
        .find(|value| value.is_object());

    if let Some(properties) = properties {
        mapping.assign(canonical, properties.clone());
        mapping.structured.push(canonical);
        for table in &tables {
            map_scalar_fields(properties, table.scalar, mapping);
        }
    }

    tracing::debug!(
        count = mapping.count,
        structured = mapping.structured.len(),
        "structured fields merged"
    );
}
