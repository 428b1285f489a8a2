//! Engine options
//!
//! Options can be built in code or loaded from TOML:
//!
//! ```toml
//! richness_threshold = 12
//! preferred_standard = "ERC-721"
//! raw_content_key = "rawContent"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagnostics::DEFAULT_RICHNESS_THRESHOLD;
use crate::variant::SchemaVariant;
use crate::Result;

/// Default key used to wrap unparseable input text
pub const DEFAULT_RAW_CONTENT_KEY: &str = "rawContent";

/// Tunables for a normalization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineOptions {
    /// Field count above which the richness tag is promoted to `max`
    pub richness_threshold: usize,
    /// Previously selected standard, used when detection finds nothing
    pub preferred_standard: Option<SchemaVariant>,
    /// Key under which raw, unparsed input is preserved
    pub raw_content_key: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            richness_threshold: DEFAULT_RICHNESS_THRESHOLD,
            preferred_standard: None,
            raw_content_key: DEFAULT_RAW_CONTENT_KEY.to_string(),
        }
    }
}

impl EngineOptions {
    /// Parse options from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: EngineOptions = toml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Builder-style override of the preferred standard
    pub fn with_preferred_standard(mut self, standard: Option<SchemaVariant>) -> Self {
        if standard.is_some() {
            self.preferred_standard = standard;
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.raw_content_key.trim().is_empty() {
            return Err(crate::Error::Config(
                "raw_content_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
