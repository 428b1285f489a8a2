//! JavaScript/TypeScript bindings for the token configuration normalizer
//!
//! Thin wrapper around `tokenshape-core` compiled to WebAssembly.
//! ZERO logic here - all behavior from the canonical Rust implementation.

use wasm_bindgen::prelude::*;

use tokenshape_core::{EngineOptions, SchemaVariant};

fn options_for(standard: Option<String>) -> Result<EngineOptions, JsError> {
    let preferred = match standard.as_deref() {
        Some(s) if !s.trim().is_empty() => Some(
            s.parse::<SchemaVariant>()
                .map_err(|e| JsError::new(&e.to_string()))?,
        ),
        _ => None,
    };
    Ok(EngineOptions::default().with_preferred_standard(preferred))
}

/// Normalize uploaded or pasted configuration text.
///
/// Never fails on malformed input: unparseable text is preserved under
/// `rawContent` and reported as a warning.
///
/// @param text - raw configuration text (JSON or anything else)
/// @param standard - previously selected standard, e.g. "ERC-721"
/// @returns JSON string: { normalizedConfig, detectedVariant, warnings, fieldsDetected, structuralComplexity }
/// @throws Error only if `standard` is not a recognized standard name
#[wasm_bindgen]
pub fn normalize(text: &str, standard: Option<String>) -> Result<String, JsError> {
    let options = options_for(standard)?;
    let report = tokenshape_core::normalize_text(text, &options);
    report
        .to_json_pretty()
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Detect the token standard of a configuration.
///
/// @param text - raw configuration text
/// @returns standard label such as "ERC-1155", or undefined
#[wasm_bindgen(js_name = "detectStandard")]
pub fn detect_standard(text: &str) -> Option<String> {
    let raw = tokenshape_core::input::parse_raw_config(text, tokenshape_core::config::DEFAULT_RAW_CONTENT_KEY);
    tokenshape_core::detect(&raw).map(|d| d.variant.label().to_string())
}

/// SHA-256 digest of the normalized configuration.
///
/// @param text - raw configuration text
/// @param standard - previously selected standard, e.g. "ERC-721"
/// @returns Hex-encoded SHA-256 hash string
/// @throws Error only if `standard` is not a recognized standard name
#[wasm_bindgen]
pub fn digest(text: &str, standard: Option<String>) -> Result<String, JsError> {
    let options = options_for(standard)?;
    Ok(tokenshape_core::normalize_text(text, &options).digest())
}
