//! Normalization engine - runs one detection + mapping pass
//!
//! # Pipeline
//!
//! `raw → detect → map_fields → merge_complex_fields → collect_residual → build_diagnostics`
//!
//! # Guarantees
//!
//! - **Total**: every input yields a report, nothing panics or errors
//! - **Deterministic**: same input and options produce the same report
//! - **Lossless**: every non-null top-level input key survives

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::config::EngineOptions;
use crate::detector::{self, Detection, DetectionMethod};
use crate::diagnostics::{self, DiagnosticContext, Diagnostics};
use crate::input;
use crate::mapper::{self, FieldMapping};
use crate::residual;
use crate::variant::SchemaVariant;
use crate::Result;

/// Everything a run hands back to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationReport {
    pub normalized_config: Map<String, Value>,
    pub detected_variant: Option<SchemaVariant>,
    pub detection_method: Option<DetectionMethod>,
    #[serde(flatten)]
    pub diagnostics: Diagnostics,
}

impl NormalizationReport {
    /// Warnings produced by the run
    pub fn warnings(&self) -> &[String] {
        &self.diagnostics.warnings
    }

    /// Number of assignments performed
    pub fn fields_detected(&self) -> usize {
        self.diagnostics.fields_detected
    }

    /// SHA-256 hex digest of the normalized config's compact serialization
    pub fn digest(&self) -> String {
        let canonical = Value::Object(self.normalized_config.clone()).to_string();
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Pretty JSON of the whole report
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Normalize an already parsed configuration.
pub fn normalize_config(raw: &Value, options: &EngineOptions) -> NormalizationReport {
    let key = options.raw_content_key.as_str();

    let (mapping, detection) = if raw.is_object() {
        let detection = detector::detect(raw).or_else(|| {
            if is_raw_upload(raw, key) {
                return None;
            }
            options.preferred_standard.map(|variant| Detection {
                variant,
                method: DetectionMethod::Hint,
            })
        });
        let variant = detection.map(|d| d.variant);

        let mut mapping = mapper::map_fields(raw, variant);
        mapper::merge_complex_fields(raw, &mut mapping, variant);
        residual::collect_residual(raw, &mut mapping);
        (mapping, detection)
    } else {
        (degraded_mapping(raw, key), None)
    };

    finish(raw, mapping, detection, options)
}

/// Normalize pasted or uploaded text; malformed text is wrapped first.
pub fn normalize_text(text: &str, options: &EngineOptions) -> NormalizationReport {
    let raw = input::parse_raw_config(text, &options.raw_content_key);
    normalize_config(&raw, options)
}

/// Normalize with only a preselected standard as option.
pub fn normalize_with_hint(raw: &Value, hint: Option<SchemaVariant>) -> NormalizationReport {
    let options = EngineOptions::default().with_preferred_standard(hint);
    normalize_config(raw, &options)
}

/// An object whose only key is the raw-content wrapper
fn is_raw_upload(raw: &Value, key: &str) -> bool {
    raw.as_object()
        .is_some_and(|map| map.len() == 1 && map.contains_key(key))
}

fn degraded_mapping(raw: &Value, key: &str) -> FieldMapping {
    tracing::debug!("input is not an object, degrading");
    let mut mapping = FieldMapping::new();
    if !raw.is_null() {
        mapping.assign(key, raw.clone());
    }
    mapping
}

fn finish(
    raw: &Value,
    mut mapping: FieldMapping,
    detection: Option<Detection>,
    options: &EngineOptions,
) -> NormalizationReport {
    let ctx = DiagnosticContext {
        variant: detection.map(|d| d.variant),
        detection,
        preselected: options.preferred_standard,
        raw_content_key: &options.raw_content_key,
        richness_threshold: options.richness_threshold,
    };
    let diagnostics = diagnostics::build_diagnostics(raw, &mut mapping, &ctx);

    NormalizationReport {
        normalized_config: mapping.canonical,
        detected_variant: detection.map(|d| d.variant),
        detection_method: detection.map(|d| d.method),
        diagnostics,
    }
}
