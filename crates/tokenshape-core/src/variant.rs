//! Schema variants - the six canonical token configuration shapes
//!
//! Each variant is identified by its standard label (`ERC-20`, `ERC-721`, …).
//! The declaration order of [`SchemaVariant::PRIORITY`] is the tie-break used
//! throughout detection and variant-less mapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six target schemas a configuration can normalize toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SchemaVariant {
    /// Fungible token (ERC-20)
    #[serde(rename = "ERC-20")]
    Fungible,
    /// Unique asset / NFT collection (ERC-721)
    #[serde(rename = "ERC-721")]
    UniqueAsset,
    /// Multi-asset token (ERC-1155)
    #[serde(rename = "ERC-1155")]
    MultiAsset,
    /// Regulated security token (ERC-1400)
    #[serde(rename = "ERC-1400")]
    RegulatedSecurity,
    /// Semi-fungible value token (ERC-3525)
    #[serde(rename = "ERC-3525")]
    SemiFungibleValue,
    /// Tokenized yield vault (ERC-4626)
    #[serde(rename = "ERC-4626")]
    YieldVault,
}

impl SchemaVariant {
    /// All variants in detection priority order.
    ///
    /// More specialized standards come first so that overlapping signature
    /// keys (e.g. `baseUri` appearing in an ERC-3525 configuration) resolve
    /// to the narrower variant.
    pub const PRIORITY: [SchemaVariant; 6] = [
        SchemaVariant::RegulatedSecurity,
        SchemaVariant::SemiFungibleValue,
        SchemaVariant::YieldVault,
        SchemaVariant::MultiAsset,
        SchemaVariant::UniqueAsset,
        SchemaVariant::Fungible,
    ];

    /// Standard label, e.g. `"ERC-20"`
    pub fn label(&self) -> &'static str {
        match self {
            SchemaVariant::Fungible => "ERC-20",
            SchemaVariant::UniqueAsset => "ERC-721",
            SchemaVariant::MultiAsset => "ERC-1155",
            SchemaVariant::RegulatedSecurity => "ERC-1400",
            SchemaVariant::SemiFungibleValue => "ERC-3525",
            SchemaVariant::YieldVault => "ERC-4626",
        }
    }

    /// Human-readable kind, e.g. `"fungible"`
    pub fn kind(&self) -> &'static str {
        match self {
            SchemaVariant::Fungible => "fungible",
            SchemaVariant::UniqueAsset => "unique-asset",
            SchemaVariant::MultiAsset => "multi-asset",
            SchemaVariant::RegulatedSecurity => "regulated-security",
            SchemaVariant::SemiFungibleValue => "semi-fungible-value",
            SchemaVariant::YieldVault => "yield-vault",
        }
    }

    /// Look up a free-form standard name (`"erc_721"`, `"NFT"`, `"Vault"`).
    ///
    /// The input is uppercased and stripped of `-`, `_` and spaces before
    /// matching against the synonym table.
    pub fn from_hint(raw: &str) -> Option<SchemaVariant> {
        let key: String = raw
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_uppercase();

        HINT_SYNONYMS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, variant)| *variant)
    }
}

/// Normalized hint literal → variant
const HINT_SYNONYMS: &[(&str, SchemaVariant)] = &[
    ("ERC20", SchemaVariant::Fungible),
    ("FUNGIBLE", SchemaVariant::Fungible),
    ("FUNGIBLETOKEN", SchemaVariant::Fungible),
    ("TOKEN", SchemaVariant::Fungible),
    ("ERC721", SchemaVariant::UniqueAsset),
    ("NFT", SchemaVariant::UniqueAsset),
    ("NONFUNGIBLE", SchemaVariant::UniqueAsset),
    ("UNIQUEASSET", SchemaVariant::UniqueAsset),
    ("COLLECTIBLE", SchemaVariant::UniqueAsset),
    ("ERC1155", SchemaVariant::MultiAsset),
    ("MULTITOKEN", SchemaVariant::MultiAsset),
    ("MULTIASSET", SchemaVariant::MultiAsset),
    ("GAMING", SchemaVariant::MultiAsset),
    ("ERC1400", SchemaVariant::RegulatedSecurity),
    ("SECURITY", SchemaVariant::RegulatedSecurity),
    ("SECURITYTOKEN", SchemaVariant::RegulatedSecurity),
    ("REGULATEDSECURITY", SchemaVariant::RegulatedSecurity),
    ("ERC3525", SchemaVariant::SemiFungibleValue),
    ("SEMIFUNGIBLE", SchemaVariant::SemiFungibleValue),
    ("SEMIFUNGIBLEVALUE", SchemaVariant::SemiFungibleValue),
    ("SFT", SchemaVariant::SemiFungibleValue),
    ("ERC4626", SchemaVariant::YieldVault),
    ("VAULT", SchemaVariant::YieldVault),
    ("YIELDVAULT", SchemaVariant::YieldVault),
    ("TOKENIZEDVAULT", SchemaVariant::YieldVault),
];

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SchemaVariant {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        SchemaVariant::from_hint(s)
            .ok_or_else(|| crate::Error::Config(format!("unknown token standard '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hint_canonical_labels() {
        for variant in SchemaVariant::PRIORITY {
            assert_eq!(SchemaVariant::from_hint(variant.label()), Some(variant));
        }
    }

    #[test]
    fn test_from_hint_strips_separators_and_case() {
        assert_eq!(SchemaVariant::from_hint("erc_721"), Some(SchemaVariant::UniqueAsset));
        assert_eq!(SchemaVariant::from_hint("Erc 1155"), Some(SchemaVariant::MultiAsset));
        assert_eq!(SchemaVariant::from_hint("nft"), Some(SchemaVariant::UniqueAsset));
        assert_eq!(SchemaVariant::from_hint("Vault"), Some(SchemaVariant::YieldVault));
        assert_eq!(
            SchemaVariant::from_hint("security-token"),
            Some(SchemaVariant::RegulatedSecurity)
        );
    }

    #[test]
    fn test_from_hint_unknown() {
        assert_eq!(SchemaVariant::from_hint("ERC-777"), None);
        assert_eq!(SchemaVariant::from_hint(""), None);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&SchemaVariant::SemiFungibleValue).unwrap();
        assert_eq!(json, "\"ERC-3525\"");
        let back: SchemaVariant = serde_json::from_str("\"ERC-4626\"").unwrap();
        assert_eq!(back, SchemaVariant::YieldVault);
    }

    #[test]
    fn test_from_str_reports_config_error() {
        let err = "bogus".parse::<SchemaVariant>().unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }
}
