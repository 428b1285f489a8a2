//! Tokenshape Core - token configuration normalizer
//!
//! Takes loosely structured JSON describing a token configuration and
//! normalizes it toward one of six canonical schemas without ever rejecting
//! the input.
//!
//! # Architecture
//!
//! ```text
//! RawConfig → Detector → (variant) → Mapper → Merger → Residual → Diagnostics
//!                                        ↑        ↑
//!                                   Alias tables (static data)
//! ```
//!
//! # Guarantees
//!
//! - **Total**: normalization has no error path; problems become warnings
//! - **Deterministic**: same input always produces identical output
//! - **Lossless**: every non-null top-level key reaches the output
//! - **First match**: earlier aliases and higher-priority variants win
//!
//! # Example
//!
//! ```
//! use tokenshape_core::{normalize_config, EngineOptions, SchemaVariant};
//!
//! let raw = serde_json::json!({"name": "Foo", "symbol": "FOO", "initialSupply": "1000"});
//! let report = normalize_config(&raw, &EngineOptions::default());
//! assert_eq!(report.detected_variant, Some(SchemaVariant::Fungible));
//! assert_eq!(report.fields_detected(), 4);
//! ```

pub mod aliases;
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod input;
pub mod mapper;
pub mod path;
pub mod residual;
pub mod variant;

pub use config::EngineOptions;
pub use detector::{detect, Detection, DetectionMethod};
pub use diagnostics::{Complexity, Diagnostics, Richness};
pub use engine::{normalize_config, normalize_text, normalize_with_hint, NormalizationReport};
pub use error::{Error, Result};
pub use variant::SchemaVariant;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_send_sync() {
        assert_send_sync::<NormalizationReport>();
        assert_send_sync::<EngineOptions>();
        assert_send_sync::<&'static aliases::AliasTable>();
    }

    #[test]
    fn test_concurrent_runs_are_independent() {
        let raw = json!({"name": "Par", "symbol": "PAR", "tokenTypes": [{"id": 1}]});
        let expected = normalize_config(&raw, &EngineOptions::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let raw = raw.clone();
                std::thread::spawn(move || normalize_config(&raw, &EngineOptions::default()))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_report_roundtrip_through_json() {
        let report = normalize_text(r#"{"standard": "ERC-3525", "slots": []}"#, &EngineOptions::default());
        let json = report.to_json_pretty().unwrap();
        let back: NormalizationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
