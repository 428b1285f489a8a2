//! Standard detection - infers which schema variant a configuration targets
//!
//! Resolution is ordered and first-match: explicit hint fields, then
//! signature keys, then structural keywords. Variants are always tried in
//! [`SchemaVariant::PRIORITY`] order; there is no scoring.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::aliases::{self, AliasTable};
use crate::variant::SchemaVariant;

/// Top-level keys that may name the standard explicitly, in lookup order
pub const HINT_FIELDS: [&str; 3] = ["standard", "tokenStandard", "type"];

/// Free-text fields scanned for signature keys
pub const TEXT_FIELDS: [&str; 3] = ["tokenType", "description", "category"];

/// How a variant was arrived at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// `standard` / `tokenStandard` / `type` named it
    ExplicitField,
    /// A signature key was present or mentioned
    AliasPattern,
    /// A behaviour keyword appeared somewhere in the input
    StructuralKeyword,
    /// Nothing matched; the caller's preselected variant was used
    Hint,
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DetectionMethod::ExplicitField => write!(f, "explicit field"),
            DetectionMethod::AliasPattern => write!(f, "alias pattern"),
            DetectionMethod::StructuralKeyword => write!(f, "structural keyword"),
            DetectionMethod::Hint => write!(f, "preselected standard"),
        }
    }
}

/// Outcome of a successful detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub variant: SchemaVariant,
    pub method: DetectionMethod,
}

/// Detect the schema variant of `raw`, or `None` if nothing matches.
pub fn detect(raw: &Value) -> Option<Detection> {
    let detection = detect_explicit(raw)
        .map(|variant| Detection {
            variant,
            method: DetectionMethod::ExplicitField,
        })
        .or_else(|| {
            detect_by_signature(raw).map(|variant| Detection {
                variant,
                method: DetectionMethod::AliasPattern,
            })
        })
        .or_else(|| {
            detect_by_keyword(raw).map(|variant| Detection {
                variant,
                method: DetectionMethod::StructuralKeyword,
            })
        });

    match &detection {
        Some(d) => tracing::debug!(standard = %d.variant, method = %d.method, "standard detected"),
        None => tracing::debug!("no standard detected"),
    }
    detection
}

/// Step 1: explicit hint fields
pub fn detect_explicit(raw: &Value) -> Option<SchemaVariant> {
    HINT_FIELDS
        .iter()
        .filter_map(|key| raw.get(*key).and_then(Value::as_str))
        .find_map(SchemaVariant::from_hint)
}

/// Step 2: signature keys present at the top level or mentioned in text fields
pub fn detect_by_signature(raw: &Value) -> Option<SchemaVariant> {
    let map = raw.as_object()?;
    let texts: Vec<String> = TEXT_FIELDS
        .iter()
        .filter_map(|key| map.get(*key).and_then(Value::as_str))
        .map(str::to_lowercase)
        .collect();

    aliases::tables()
        .find(|table| {
            table.signatures.iter().any(|signature| {
                if map.contains_key(*signature) {
                    tracing::trace!(standard = %table.variant, signature, "signature key present");
                    return true;
                }
                let needle = signature.to_lowercase();
                texts.iter().any(|text| text.contains(&needle))
            })
        })
        .map(|table| table.variant)
}

/// Step 3: behaviour keywords anywhere in the serialized input, keys included
pub fn detect_by_keyword(raw: &Value) -> Option<SchemaVariant> {
    let haystack = raw.to_string().to_lowercase();
    aliases::tables()
        .find(|table| has_keyword(table, &haystack))
        .map(|table| table.variant)
}

fn has_keyword(table: &AliasTable, haystack: &str) -> bool {
    table
        .keywords
        .iter()
        .any(|keyword| haystack.contains(&keyword.to_lowercase()))
}
