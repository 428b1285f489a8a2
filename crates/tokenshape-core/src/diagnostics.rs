//! Diagnostics - complexity estimate, advisory warnings, richness promotion
//!
//! Nothing here can fail a run. Warnings are plain text for the caller to
//! display; the normalized config is returned regardless.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::detector::{Detection, DetectionMethod};
use crate::mapper::{FieldMapping, RICHNESS_KEY};
use crate::variant::SchemaVariant;

/// Field count above which a configuration is always promoted to `max`
pub const DEFAULT_RICHNESS_THRESHOLD: usize = 10;

/// Structural complexity estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Complexity::Simple => write!(f, "simple"),
            Complexity::Medium => write!(f, "medium"),
            Complexity::Complex => write!(f, "complex"),
        }
    }
}

/// Configuration richness tag written under [`RICHNESS_KEY`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Richness {
    Min,
    Max,
}

impl Richness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Richness::Min => "min",
            Richness::Max => "max",
        }
    }
}

/// Advisory conditions noticed during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Input arrived as unparsed text wrapped under `key`
    RawUpload { key: String },
    /// Input was valid JSON but not an object
    NotAnObject { key: String },
    /// Input was empty or an empty object
    EmptyInput,
    /// No standard could be detected and none was preselected
    UndetectedStandard,
    /// The preselected standard disagrees with the detected one
    StandardMismatch {
        selected: SchemaVariant,
        detected: SchemaVariant,
    },
    /// A conventionally expected identity field is absent
    MissingField { field: &'static str },
    /// No metadata URI for a metadata-bearing standard
    MissingMetadataUri,
    /// An expected relational collection is absent or empty
    EmptyCollection { label: &'static str },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Warning::RawUpload { key } => write!(
                f,
                "Raw content upload detected: input was not valid JSON and was preserved under '{}'",
                key
            ),
            Warning::NotAnObject { key } => write!(
                f,
                "Degraded input: configuration is not a JSON object; any content was preserved under '{}'",
                key
            ),
            Warning::EmptyInput => write!(
                f,
                "Degraded input: configuration is empty; nothing could be detected or mapped"
            ),
            Warning::UndetectedStandard => write!(
                f,
                "Could not detect a token standard; fields were matched against all standards"
            ),
            Warning::StandardMismatch { selected, detected } => write!(
                f,
                "Selected standard {} differs from detected standard {}; using {}",
                selected, detected, detected
            ),
            Warning::MissingField { field } => write!(f, "No {} detected", field),
            Warning::MissingMetadataUri => write!(f, "No metadata URI detected"),
            Warning::EmptyCollection { label } => write!(f, "No {} detected", label),
        }
    }
}

/// Diagnostic report for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub fields_detected: usize,
    pub warnings: Vec<String>,
    pub structural_complexity: Complexity,
}

/// What the diagnostics step needs to know about the run
#[derive(Debug, Clone)]
pub struct DiagnosticContext<'a> {
    /// Variant the fields were mapped against
    pub variant: Option<SchemaVariant>,
    /// Detection outcome, if any
    pub detection: Option<Detection>,
    /// Variant the user had selected before uploading
    pub preselected: Option<SchemaVariant>,
    /// Key holding wrapped raw content
    pub raw_content_key: &'a str,
    pub richness_threshold: usize,
}

/// Build diagnostics and promote the richness tag on `mapping`.
pub fn build_diagnostics(raw: &Value, mapping: &mut FieldMapping, ctx: &DiagnosticContext) -> Diagnostics {
    let warnings = collect_warnings(raw, mapping, ctx);
    let structural_complexity = complexity(ctx.variant, mapping.count);
    let richness = promote_richness(mapping, ctx.richness_threshold);

    tracing::debug!(
        fields = mapping.count,
        warnings = warnings.len(),
        complexity = %structural_complexity,
        richness = richness.as_str(),
        "diagnostics built"
    );

    Diagnostics {
        fields_detected: mapping.count,
        warnings: warnings.iter().map(Warning::to_string).collect(),
        structural_complexity,
    }
}

/// Classify `fields_detected` using per-variant cut points
pub fn complexity(variant: Option<SchemaVariant>, fields_detected: usize) -> Complexity {
    let (simple_max, medium_max) = match variant {
        Some(SchemaVariant::Fungible) | None => (Some(5), 12),
        Some(SchemaVariant::UniqueAsset) | Some(SchemaVariant::MultiAsset) => (Some(6), 15),
        Some(SchemaVariant::SemiFungibleValue) | Some(SchemaVariant::YieldVault) => (Some(6), 14),
        Some(SchemaVariant::RegulatedSecurity) => (None, 15),
    };
    match simple_max {
        Some(max) if fields_detected <= max => Complexity::Simple,
        _ if fields_detected <= medium_max => Complexity::Medium,
        _ => Complexity::Complex,
    }
}

/// Set the richness tag; `max` overrides, `min` only fills an empty slot
pub fn promote_richness(mapping: &mut FieldMapping, threshold: usize) -> Richness {
    let richness = if mapping.count > threshold || mapping.has_structured() {
        Richness::Max
    } else {
        Richness::Min
    };
    match richness {
        Richness::Max => {
            mapping
                .canonical
                .insert(RICHNESS_KEY.to_string(), Value::String(richness.as_str().to_string()));
        }
        Richness::Min => {
            mapping
                .canonical
                .entry(RICHNESS_KEY)
                .or_insert_with(|| Value::String(richness.as_str().to_string()));
        }
    }
    richness
}

fn collect_warnings(raw: &Value, mapping: &FieldMapping, ctx: &DiagnosticContext) -> Vec<Warning> {
    let mut warnings = Vec::new();

    let Some(object) = raw.as_object() else {
        warnings.push(Warning::NotAnObject {
            key: ctx.raw_content_key.to_string(),
        });
        return warnings;
    };
    if object.is_empty() {
        warnings.push(Warning::EmptyInput);
        return warnings;
    }
    if object.contains_key(ctx.raw_content_key) && ctx.detection.is_none() {
        warnings.push(Warning::RawUpload {
            key: ctx.raw_content_key.to_string(),
        });
        return warnings;
    }

    if ctx.variant.is_none() {
        warnings.push(Warning::UndetectedStandard);
    }

    if let (Some(selected), Some(detection)) = (ctx.preselected, ctx.detection) {
        if detection.method != DetectionMethod::Hint && detection.variant != selected {
            warnings.push(Warning::StandardMismatch {
                selected,
                detected: detection.variant,
            });
        }
    }

    for &field in expected_identity(ctx.variant) {
        if !mapping.contains(field) {
            warnings.push(Warning::MissingField { field });
        }
    }

    if needs_metadata_uri(ctx.variant) && !mapping.contains("baseUri") {
        warnings.push(Warning::MissingMetadataUri);
    }

    if let Some((field, label)) = expected_collection(ctx.variant) {
        let populated = mapping
            .canonical
            .get(field)
            .and_then(Value::as_array)
            .is_some_and(|items| !items.is_empty());
        if !populated {
            warnings.push(Warning::EmptyCollection { label });
        }
    }

    warnings
}

fn expected_identity(variant: Option<SchemaVariant>) -> &'static [&'static str] {
    match variant {
        Some(SchemaVariant::Fungible)
        | Some(SchemaVariant::UniqueAsset)
        | Some(SchemaVariant::RegulatedSecurity)
        | Some(SchemaVariant::YieldVault) => &["name", "symbol"],
        Some(SchemaVariant::MultiAsset) | Some(SchemaVariant::SemiFungibleValue) | None => &["name"],
    }
}

fn needs_metadata_uri(variant: Option<SchemaVariant>) -> bool {
    matches!(
        variant,
        Some(SchemaVariant::UniqueAsset)
            | Some(SchemaVariant::MultiAsset)
            | Some(SchemaVariant::SemiFungibleValue)
    )
}

fn expected_collection(variant: Option<SchemaVariant>) -> Option<(&'static str, &'static str)> {
    match variant? {
        SchemaVariant::MultiAsset => Some(("tokenTypes", "token types")),
        SchemaVariant::SemiFungibleValue => Some(("slots", "slots")),
        SchemaVariant::RegulatedSecurity => Some(("partitions", "partitions")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx(variant: Option<SchemaVariant>) -> DiagnosticContext<'static> {
        DiagnosticContext {
            variant,
            detection: variant.map(|v| Detection {
                variant: v,
                method: DetectionMethod::AliasPattern,
            }),
            preselected: None,
            raw_content_key: "rawContent",
            richness_threshold: DEFAULT_RICHNESS_THRESHOLD,
        }
    }

    fn mapping_with(fields: &[(&str, Value)]) -> FieldMapping {
        let mut mapping = FieldMapping::new();
        for (k, v) in fields {
            mapping.assign(k, v.clone());
        }
        mapping
    }

    #[test]
    fn test_complexity_cut_points() {
        assert_eq!(complexity(Some(SchemaVariant::Fungible), 4), Complexity::Simple);
        assert_eq!(complexity(Some(SchemaVariant::Fungible), 6), Complexity::Medium);
        assert_eq!(complexity(Some(SchemaVariant::Fungible), 13), Complexity::Complex);
        assert_eq!(complexity(Some(SchemaVariant::UniqueAsset), 6), Complexity::Simple);
        assert_eq!(complexity(Some(SchemaVariant::YieldVault), 15), Complexity::Complex);
        assert_eq!(complexity(None, 0), Complexity::Simple);
    }

    #[test]
    fn test_security_never_simple() {
        assert_eq!(complexity(Some(SchemaVariant::RegulatedSecurity), 0), Complexity::Medium);
        assert_eq!(complexity(Some(SchemaVariant::RegulatedSecurity), 15), Complexity::Medium);
        assert_eq!(complexity(Some(SchemaVariant::RegulatedSecurity), 16), Complexity::Complex);
    }

    #[test]
    fn test_missing_name_only_for_sft() {
        let raw = json!({"baseUri": "ipfs://x", "slots": [{"slotId": "1"}]});
        let mut mapping = mapping_with(&[
            ("standard", json!("ERC-3525")),
            ("baseUri", json!("ipfs://x")),
            ("slots", json!([{"slotId": "1"}])),
        ]);
        let diag = build_diagnostics(&raw, &mut mapping, &ctx(Some(SchemaVariant::SemiFungibleValue)));
        assert_eq!(diag.warnings, vec!["No name detected".to_string()]);
    }

    #[test]
    fn test_empty_collection_warns() {
        let raw = json!({"tokenTypes": []});
        let mut mapping = mapping_with(&[("tokenTypes", json!([]))]);
        let diag = build_diagnostics(&raw, &mut mapping, &ctx(Some(SchemaVariant::MultiAsset)));
        assert!(diag.warnings.contains(&"No token types detected".to_string()));
        assert!(diag.warnings.contains(&"No metadata URI detected".to_string()));
    }

    #[test]
    fn test_raw_upload_warning_only() {
        let raw = json!({"rawContent": "not json at all"});
        let mut mapping = mapping_with(&[("rawContent", json!("not json at all"))]);
        let diag = build_diagnostics(&raw, &mut mapping, &ctx(None));
        assert_eq!(diag.warnings.len(), 1);
        assert!(diag.warnings[0].starts_with("Raw content upload"));
        assert_eq!(diag.fields_detected, 1);
    }

    #[test]
    fn test_not_an_object_warning() {
        let mut mapping = FieldMapping::new();
        let diag = build_diagnostics(&json!([1, 2]), &mut mapping, &ctx(None));
        assert!(diag.warnings[0].starts_with("Degraded input"));
    }

    #[test]
    fn test_empty_object_warning_only() {
        let mut mapping = FieldMapping::new();
        let diag = build_diagnostics(&json!({}), &mut mapping, &ctx(None));
        assert_eq!(diag.warnings.len(), 1);
        assert!(diag.warnings[0].starts_with("Degraded input"));
        assert_eq!(diag.fields_detected, 0);
    }

    #[test]
    fn test_mismatch_warning() {
        let raw = json!({"name": "A", "symbol": "A", "initialSupply": 1});
        let mut mapping = mapping_with(&[("name", json!("A")), ("symbol", json!("A"))]);
        let mut context = ctx(Some(SchemaVariant::Fungible));
        context.preselected = Some(SchemaVariant::UniqueAsset);
        let diag = build_diagnostics(&raw, &mut mapping, &context);
        assert_eq!(
            diag.warnings,
            vec!["Selected standard ERC-721 differs from detected standard ERC-20; using ERC-20".to_string()]
        );
    }

    #[test]
    fn test_no_mismatch_when_hint_used() {
        let raw = json!({"name": "A", "symbol": "A"});
        let mut mapping = mapping_with(&[("name", json!("A")), ("symbol", json!("A"))]);
        let context = DiagnosticContext {
            variant: Some(SchemaVariant::Fungible),
            detection: Some(Detection {
                variant: SchemaVariant::Fungible,
                method: DetectionMethod::Hint,
            }),
            preselected: Some(SchemaVariant::Fungible),
            raw_content_key: "rawContent",
            richness_threshold: DEFAULT_RICHNESS_THRESHOLD,
        };
        let diag = build_diagnostics(&raw, &mut mapping, &context);
        assert!(diag.warnings.is_empty());
    }

    #[test]
    fn test_richness_promotion() {
        let mut minimal = mapping_with(&[("name", json!("A"))]);
        assert_eq!(promote_richness(&mut minimal, 10), Richness::Min);
        assert_eq!(minimal.canonical[RICHNESS_KEY], "min");
        assert_eq!(minimal.count, 1, "richness tag is not counted");

        let mut structured = mapping_with(&[("slots", json!([]))]);
        structured.structured.push("slots");
        assert_eq!(promote_richness(&mut structured, 10), Richness::Max);
        assert_eq!(structured.canonical[RICHNESS_KEY], "max");

        let fields: Vec<(String, Value)> = (0..11).map(|i| (format!("f{}", i), json!(i))).collect();
        let mut many = FieldMapping::new();
        for (k, v) in fields {
            many.assign(&k, v);
        }
        assert_eq!(promote_richness(&mut many, 10), Richness::Max);
    }

    #[test]
    fn test_richness_min_keeps_existing_value() {
        let mut mapping = mapping_with(&[(RICHNESS_KEY, json!("max"))]);
        assert_eq!(promote_richness(&mut mapping, 10), Richness::Min);
        assert_eq!(mapping.canonical[RICHNESS_KEY], "max");
    }
}
