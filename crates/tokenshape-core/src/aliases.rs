//! Alias tables - canonical field names and their accepted source keys
//!
//! Pure data. Every list is ordered from most to least authoritative: the
//! mapper takes the first alias that resolves and ignores the rest. Aliases
//! may be dotted paths (`tokenomics.initialSupply`). The same source key
//! appearing under several variants is intentional.

use crate::variant::SchemaVariant;

/// A scalar canonical field and its ordered source-key candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAliases {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

/// Expected runtime shape of a structured canonical field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    Object,
    Array,
}

impl FieldShape {
    /// Returns true if `value` has this shape. Arrays are not objects.
    pub fn matches(&self, value: &serde_json::Value) -> bool {
        match self {
            FieldShape::Object => value.is_object(),
            FieldShape::Array => value.is_array(),
        }
    }
}

/// A structured (object or array valued) canonical field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredField {
    pub canonical: &'static str,
    pub shape: FieldShape,
    pub aliases: &'static [&'static str],
}

/// Everything the engine knows about one schema variant
#[derive(Debug)]
pub struct AliasTable {
    pub variant: SchemaVariant,
    /// Scalar canonical fields, in mapping order
    pub scalar: &'static [FieldAliases],
    /// Structured canonical fields, in merge order
    pub structured: &'static [StructuredField],
    /// Object bundling scalar fields under one namespace
    pub properties: FieldAliases,
    /// Distinctive top-level keys used for alias-pattern detection
    pub signatures: &'static [&'static str],
    /// Behaviour-indicating keys used for the structural fallback
    pub keywords: &'static [&'static str],
}

impl AliasTable {
    /// Scalar alias list for `canonical`, if this variant declares it
    pub fn scalar_field(&self, canonical: &str) -> Option<&FieldAliases> {
        self.scalar.iter().find(|f| f.canonical == canonical)
    }

    /// Structured field declaration for `canonical`
    pub fn structured_field(&self, canonical: &str) -> Option<&StructuredField> {
        self.structured.iter().find(|f| f.canonical == canonical)
    }
}

const fn field(canonical: &'static str, aliases: &'static [&'static str]) -> FieldAliases {
    FieldAliases { canonical, aliases }
}

const fn object(canonical: &'static str, aliases: &'static [&'static str]) -> StructuredField {
    StructuredField {
        canonical,
        shape: FieldShape::Object,
        aliases,
    }
}

const fn array(canonical: &'static str, aliases: &'static [&'static str]) -> StructuredField {
    StructuredField {
        canonical,
        shape: FieldShape::Array,
        aliases,
    }
}

// ── Shared alias lists ─────────────────────────────────────

const NAME: &[&str] = &[
    "name",
    "tokenName",
    "token_name",
    "displayName",
    "title",
    "token.name",
    "metadata.name",
    "details.name",
    "basicInfo.name",
];

const SYMBOL: &[&str] = &[
    "symbol",
    "tokenSymbol",
    "token_symbol",
    "ticker",
    "token.symbol",
    "metadata.symbol",
    "details.symbol",
    "basicInfo.symbol",
];

const DESCRIPTION: &[&str] = &[
    "description",
    "desc",
    "summary",
    "about",
    "token.description",
    "metadata.description",
    "details.description",
];

const DECIMALS: &[&str] = &[
    "decimals",
    "decimal",
    "tokenDecimals",
    "token_decimals",
    "precision",
    "token.decimals",
    "tokenomics.decimals",
];

const OWNER: &[&str] = &[
    "ownerAddress",
    "owner",
    "owner_address",
    "admin",
    "adminAddress",
    "deployer",
    "creator",
    "roles.owner",
];

const BASE_URI: &[&str] = &[
    "baseUri",
    "baseURI",
    "base_uri",
    "baseUrl",
    "metadataUri",
    "metadataURI",
    "metadata_uri",
    "uri",
    "tokenURI",
    "metadata.baseUri",
    "metadata.uri",
];

const CONTRACT_URI: &[&str] = &["contractUri", "contractURI", "contract_uri", "collectionUri"];

const HAS_ROYALTY: &[&str] = &[
    "hasRoyalty",
    "has_royalty",
    "royaltyEnabled",
    "royaltiesEnabled",
    "royalty",
    "royalties.enabled",
];

const ROYALTY_PERCENTAGE: &[&str] = &[
    "royaltyPercentage",
    "royalty_percentage",
    "royaltyPercent",
    "royaltyBps",
    "royalties.percentage",
    "royalty.percentage",
    "royaltyConfig.percentage",
];

const ROYALTY_RECEIVER: &[&str] = &[
    "royaltyReceiver",
    "royalty_receiver",
    "royaltyRecipient",
    "royaltyAddress",
    "royalties.receiver",
    "royalty.receiver",
    "royaltyConfig.receiver",
];

const IS_BURNABLE: &[&str] = &[
    "isBurnable",
    "burnable",
    "is_burnable",
    "canBurn",
    "burnEnabled",
    "features.burnable",
];

const IS_PAUSABLE: &[&str] = &[
    "isPausable",
    "pausable",
    "is_pausable",
    "canPause",
    "features.pausable",
];

const IS_MINTABLE: &[&str] = &[
    "isMintable",
    "mintable",
    "is_mintable",
    "canMint",
    "mintingEnabled",
    "features.mintable",
];

const INITIAL_SUPPLY: &[&str] = &[
    "initialSupply",
    "initial_supply",
    "supply",
    "totalSupply",
    "total_supply",
    "tokenomics.initialSupply",
    "tokenomics.supply",
    "supply.initial",
];

const CAP: &[&str] = &[
    "cap",
    "maxSupply",
    "max_supply",
    "supplyCap",
    "supply_cap",
    "tokenomics.maxSupply",
    "tokenomics.cap",
];

const ACCESS_CONTROL: &[&str] = &[
    "accessControl",
    "access_control",
    "accessModel",
    "roleModel",
    "permissions.model",
];

const FEE_CONFIG: &[&str] = &[
    "feeConfig",
    "fee_config",
    "fees",
    "feeStructure",
    "transferFees",
    "tokenomics.fees",
];

const GOVERNANCE_CONFIG: &[&str] = &[
    "governanceConfig",
    "governance_config",
    "governance",
    "dao",
    "voting",
];

const WHITELIST_CONFIG: &[&str] = &[
    "whitelistConfig",
    "whitelist_config",
    "whitelist",
    "allowlist",
    "allowList",
];

// ── ERC-20 ────────────────────────────────────────────────

static FUNGIBLE: AliasTable = AliasTable {
    variant: SchemaVariant::Fungible,
    scalar: &[
        field("name", NAME),
        field("symbol", SYMBOL),
        field("description", DESCRIPTION),
        field("decimals", DECIMALS),
        field("initialSupply", INITIAL_SUPPLY),
        field("cap", CAP),
        field("isMintable", IS_MINTABLE),
        field("isBurnable", IS_BURNABLE),
        field("isPausable", IS_PAUSABLE),
        field("accessControl", ACCESS_CONTROL),
        field("ownerAddress", OWNER),
        field(
            "permit",
            &["permit", "supportsPermit", "eip2612", "gaslessApprovals"],
        ),
        field("votes", &["votes", "hasVotes", "votingEnabled", "snapshot"]),
        field(
            "tokenType",
            &["tokenType", "token_type", "erc20Type", "utilityType"],
        ),
        field(
            "website",
            &["website", "externalUrl", "external_url", "homepage", "links.website"],
        ),
        field(
            "logoUri",
            &["logoUri", "logoURI", "logo", "image", "icon", "metadata.image"],
        ),
    ],
    structured: &[
        object("feeConfig", FEE_CONFIG),
        object("governanceConfig", GOVERNANCE_CONFIG),
        object("whitelistConfig", WHITELIST_CONFIG),
        array(
            "allocations",
            &[
                "allocations",
                "distribution",
                "tokenAllocations",
                "token_allocations",
                "tokenomics.allocations",
                "tokenomics.distribution",
            ],
        ),
        array(
            "vestingSchedules",
            &["vestingSchedules", "vesting_schedules", "vesting", "tokenomics.vesting"],
        ),
    ],
    properties: field(
        "properties",
        &["properties", "erc20Properties", "tokenProperties", "token_properties", "tokenConfig"],
    ),
    signatures: &["initialSupply", "initial_supply", "erc20Properties", "supplyCap"],
    keywords: &["allowance", "transferFrom", "totalSupply", "decimals", "increaseAllowance"],
};

// ── ERC-721 ───────────────────────────────────────────────

static UNIQUE_ASSET: AliasTable = AliasTable {
    variant: SchemaVariant::UniqueAsset,
    scalar: &[
        field("name", NAME),
        field("symbol", SYMBOL),
        field("description", DESCRIPTION),
        field("baseUri", BASE_URI),
        field("contractUri", CONTRACT_URI),
        field(
            "maxSupply",
            &[
                "maxSupply",
                "max_supply",
                "maxTokens",
                "collectionSize",
                "supply",
                "totalSupply",
            ],
        ),
        field(
            "metadataStorage",
            &["metadataStorage", "metadata_storage", "storage", "storageType", "metadata.storage"],
        ),
        field("hasRoyalty", HAS_ROYALTY),
        field("royaltyPercentage", ROYALTY_PERCENTAGE),
        field("royaltyReceiver", ROYALTY_RECEIVER),
        field(
            "isRevealable",
            &["isRevealable", "revealable", "delayedReveal", "reveal.enabled"],
        ),
        field(
            "placeholderUri",
            &["placeholderUri", "placeholderURI", "preRevealUri", "hiddenUri", "reveal.placeholderUri"],
        ),
        field(
            "mintPrice",
            &["mintPrice", "mint_price", "price", "publicPrice", "sale.price"],
        ),
        field("isBurnable", IS_BURNABLE),
        field("isPausable", IS_PAUSABLE),
        field(
            "isEnumerable",
            &["isEnumerable", "enumerable", "enumerableSupply"],
        ),
        field("accessControl", ACCESS_CONTROL),
        field("ownerAddress", OWNER),
        field(
            "externalUrl",
            &["externalUrl", "external_url", "website", "homepage"],
        ),
    ],
    structured: &[
        array(
            "attributes",
            &["attributes", "traits", "attributeList", "metadata.attributes", "metadata.traits"],
        ),
        array(
            "mintPhases",
            &["mintPhases", "mint_phases", "phases", "salePhases", "sale.phases"],
        ),
        object("royaltyConfig", &["royaltyConfig", "royalties", "royalty"]),
        object("whitelistConfig", WHITELIST_CONFIG),
        object("revealConfig", &["revealConfig", "reveal", "reveal_config"]),
    ],
    properties: field(
        "properties",
        &["properties", "erc721Properties", "nftProperties", "collectionProperties", "collection"],
    ),
    signatures: &["baseUri", "baseURI", "maxTokens", "erc721Properties", "nftProperties", "isRevealable"],
    keywords: &["ownerOf", "tokenURI", "safeTransferFrom", "setApprovalForAll", "collection"],
};

// ── ERC-1155 ──────────────────────────────────────────────

static MULTI_ASSET: AliasTable = AliasTable {
    variant: SchemaVariant::MultiAsset,
    scalar: &[
        field("name", NAME),
        field("symbol", SYMBOL),
        field("description", DESCRIPTION),
        field("baseUri", BASE_URI),
        field("contractUri", CONTRACT_URI),
        field(
            "batchMinting",
            &["batchMinting", "batch_minting", "batchMint", "enableBatchMint", "features.batchMinting"],
        ),
        field(
            "supplyTracking",
            &["supplyTracking", "supply_tracking", "trackSupply", "features.supplyTracking"],
        ),
        field(
            "isTransferable",
            &["isTransferable", "transferable", "transfersEnabled", "features.transferable"],
        ),
        field("hasRoyalty", HAS_ROYALTY),
        field("royaltyPercentage", ROYALTY_PERCENTAGE),
        field("royaltyReceiver", ROYALTY_RECEIVER),
        field(
            "containerEnabled",
            &["containerEnabled", "bundlesEnabled", "bundleSupport"],
        ),
        field("isBurnable", IS_BURNABLE),
        field("isPausable", IS_PAUSABLE),
        field("accessControl", ACCESS_CONTROL),
        field("ownerAddress", OWNER),
    ],
    structured: &[
        array(
            "tokenTypes",
            &["tokenTypes", "token_types", "types", "tokens", "items", "assets", "collection.tokenTypes"],
        ),
        array("bundles", &["bundles", "containers", "bundleDefinitions"]),
        object("royaltyConfig", &["royaltyConfig", "royalties", "royalty"]),
        object("craftingConfig", &["craftingConfig", "crafting", "recipes"]),
    ],
    properties: field(
        "properties",
        &["properties", "erc1155Properties", "multiTokenProperties", "collectionProperties"],
    ),
    signatures: &["tokenTypes", "token_types", "batchMinting", "erc1155Properties", "supplyTracking"],
    keywords: &["balanceOfBatch", "safeBatchTransferFrom", "TransferBatch", "mintBatch"],
};

// ── ERC-1400 ──────────────────────────────────────────────

static REGULATED_SECURITY: AliasTable = AliasTable {
    variant: SchemaVariant::RegulatedSecurity,
    scalar: &[
        field("name", NAME),
        field("symbol", SYMBOL),
        field("description", DESCRIPTION),
        field("decimals", DECIMALS),
        field("initialSupply", INITIAL_SUPPLY),
        field("cap", CAP),
        field(
            "issuingEntityName",
            &["issuingEntityName", "issuerName", "issuer_name", "issuer.name", "issuer"],
        ),
        field(
            "issuingEntityLei",
            &["issuingEntityLei", "issuerLei", "lei", "issuer.lei"],
        ),
        field(
            "issuingJurisdiction",
            &["issuingJurisdiction", "jurisdiction", "issuer.jurisdiction", "compliance.jurisdiction"],
        ),
        field(
            "securityType",
            &["securityType", "security_type", "instrumentType", "assetClass"],
        ),
        field(
            "regulationType",
            &["regulationType", "regulation", "exemption", "offeringType", "compliance.regulation"],
        ),
        field("isIssuable", &["isIssuable", "issuable", "canIssue"]),
        field(
            "isControllable",
            &["isControllable", "controllable", "forcedTransfers", "controllerEnabled"],
        ),
        field(
            "kycRequired",
            &["kycRequired", "kyc_required", "requireKyc", "requiresKyc", "compliance.kycRequired", "kyc.required"],
        ),
        field(
            "whitelistEnabled",
            &["whitelistEnabled", "whitelist_enabled", "requireWhitelist", "compliance.whitelistEnabled"],
        ),
        field(
            "documentUri",
            &["documentUri", "documentURI", "prospectusUri", "offeringDocument", "legal.documentUri"],
        ),
        field(
            "transferRestrictions",
            &["transferRestrictions", "restrictTransfers", "transfer_restrictions"],
        ),
        field("isPausable", IS_PAUSABLE),
        field("ownerAddress", OWNER),
    ],
    structured: &[
        array(
            "partitions",
            &["partitions", "partitionConfig", "tranches", "shareClasses", "classes"],
        ),
        array(
            "controllers",
            &["controllers", "controllerAddresses", "controller_addresses", "operators"],
        ),
        array(
            "documents",
            &["documents", "legalDocuments", "legal_documents", "legal.documents"],
        ),
        object(
            "complianceConfig",
            &["complianceConfig", "compliance_config", "compliance", "complianceRules"],
        ),
        object("corporateActions", &["corporateActions", "corporate_actions", "actions"]),
    ],
    properties: field(
        "properties",
        &["properties", "erc1400Properties", "securityProperties", "security_properties", "securityConfig"],
    ),
    signatures: &[
        "partitions",
        "defaultPartitions",
        "controllers",
        "isControllable",
        "issuingJurisdiction",
        "erc1400Properties",
        "securityType",
    ],
    keywords: &[
        "canTransferByPartition",
        "issueByPartition",
        "redeemByPartition",
        "controllerTransfer",
        "operatorTransferByPartition",
    ],
};

// ── ERC-3525 ──────────────────────────────────────────────

static SEMI_FUNGIBLE_VALUE: AliasTable = AliasTable {
    variant: SchemaVariant::SemiFungibleValue,
    scalar: &[
        field("name", NAME),
        field("symbol", SYMBOL),
        field("description", DESCRIPTION),
        field(
            "valueDecimals",
            &["valueDecimals", "value_decimals", "decimals", "valuePrecision"],
        ),
        field("baseUri", BASE_URI),
        field("contractUri", CONTRACT_URI),
        field(
            "slotType",
            &["slotType", "slot_type", "slotKind", "slotCategory"],
        ),
        field(
            "allowsSlotEnumeration",
            &["allowsSlotEnumeration", "slotEnumeration", "enumerableSlots"],
        ),
        field(
            "valueTransfersEnabled",
            &["valueTransfersEnabled", "valueTransfers", "allowValueTransfer"],
        ),
        field(
            "fractionalOwnership",
            &["fractionalOwnership", "fractional", "fractionalizable"],
        ),
        field("hasRoyalty", HAS_ROYALTY),
        field("royaltyPercentage", ROYALTY_PERCENTAGE),
        field("royaltyReceiver", ROYALTY_RECEIVER),
        field("isBurnable", IS_BURNABLE),
        field("accessControl", ACCESS_CONTROL),
        field("ownerAddress", OWNER),
    ],
    structured: &[
        array(
            "slots",
            &["slots", "slotConfigs", "slot_configs", "slotDefinitions", "slotConfig"],
        ),
        array(
            "allocations",
            &["allocations", "valueAllocations", "value_allocations"],
        ),
        array(
            "paymentSchedules",
            &["paymentSchedules", "payment_schedules", "schedules", "couponSchedule"],
        ),
        object(
            "valueAdjustments",
            &["valueAdjustments", "value_adjustments", "adjustments"],
        ),
    ],
    properties: field(
        "properties",
        &["properties", "erc3525Properties", "sftProperties", "semiFungibleProperties"],
    ),
    signatures: &["slots", "valueDecimals", "slotType", "slotConfigs", "erc3525Properties"],
    keywords: &["slotOf", "transferValue", "approveValue", "balanceOfSlot", "slotURI"],
};

// ── ERC-4626 ──────────────────────────────────────────────

static YIELD_VAULT: AliasTable = AliasTable {
    variant: SchemaVariant::YieldVault,
    scalar: &[
        field("name", NAME),
        field("symbol", SYMBOL),
        field("description", DESCRIPTION),
        field("decimals", DECIMALS),
        field(
            "assetAddress",
            &[
                "assetAddress",
                "asset_address",
                "underlyingAsset",
                "underlying_asset",
                "asset.address",
                "underlying.address",
                "asset",
            ],
        ),
        field(
            "assetName",
            &["assetName", "asset_name", "asset.name", "underlying.name"],
        ),
        field(
            "assetSymbol",
            &["assetSymbol", "asset_symbol", "asset.symbol", "underlying.symbol"],
        ),
        field(
            "assetDecimals",
            &["assetDecimals", "asset_decimals", "asset.decimals", "underlying.decimals"],
        ),
        field(
            "vaultType",
            &["vaultType", "vault_type", "vaultKind"],
        ),
        field(
            "vaultStrategy",
            &["vaultStrategy", "vault_strategy", "yieldStrategy", "strategy"],
        ),
        field(
            "depositLimit",
            &["depositLimit", "deposit_limit", "maxDeposit", "limits.deposit", "deposit.limit"],
        ),
        field(
            "withdrawalLimit",
            &["withdrawalLimit", "withdrawal_limit", "maxWithdraw", "limits.withdrawal"],
        ),
        field(
            "minDeposit",
            &["minDeposit", "min_deposit", "minimumDeposit", "limits.minDeposit"],
        ),
        field(
            "managementFee",
            &["managementFee", "management_fee", "fees.management", "feeConfig.managementFee"],
        ),
        field(
            "performanceFee",
            &["performanceFee", "performance_fee", "fees.performance", "feeConfig.performanceFee"],
        ),
        field("isPausable", IS_PAUSABLE),
        field("accessControl", ACCESS_CONTROL),
        field("ownerAddress", OWNER),
    ],
    structured: &[
        object(
            "strategyConfig",
            &["strategyConfig", "strategy_config", "strategy", "yieldStrategy"],
        ),
        object("feeConfig", FEE_CONFIG),
        array(
            "strategies",
            &["strategies", "strategyList", "strategy_list", "yieldSources"],
        ),
        array(
            "assetAllocations",
            &["assetAllocations", "asset_allocations", "allocations"],
        ),
    ],
    properties: field(
        "properties",
        &["properties", "erc4626Properties", "vaultProperties", "vault_properties", "vaultConfig"],
    ),
    signatures: &[
        "assetAddress",
        "underlyingAsset",
        "vaultStrategy",
        "depositLimit",
        "erc4626Properties",
        "vaultProperties",
    ],
    keywords: &["convertToShares", "convertToAssets", "previewDeposit", "previewRedeem", "maxWithdraw"],
};

/// Alias table for `variant`
pub fn table(variant: SchemaVariant) -> &'static AliasTable {
    match variant {
        SchemaVariant::Fungible => &FUNGIBLE,
        SchemaVariant::UniqueAsset => &UNIQUE_ASSET,
        SchemaVariant::MultiAsset => &MULTI_ASSET,
        SchemaVariant::RegulatedSecurity => &REGULATED_SECURITY,
        SchemaVariant::SemiFungibleValue => &SEMI_FUNGIBLE_VALUE,
        SchemaVariant::YieldVault => &YIELD_VAULT,
    }
}

/// All alias tables in detection priority order
pub fn tables() -> impl Iterator<Item = &'static AliasTable> {
    SchemaVariant::PRIORITY.into_iter().map(table)
}

/// Tables to walk for a run: the chosen variant's, or all of them
pub fn tables_for(variant: Option<SchemaVariant>) -> Vec<&'static AliasTable> {
    match variant {
        Some(v) => vec![table(v)],
        None => tables().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_every_variant_has_identity_fields() {
        for t in tables() {
            assert!(t.scalar_field("name").is_some(), "{} lacks name", t.variant);
            assert!(t.scalar_field("symbol").is_some(), "{} lacks symbol", t.variant);
        }
    }

    #[test]
    fn test_canonical_names_unique_per_table() {
        for t in tables() {
            let mut seen = BTreeSet::new();
            for f in t.scalar {
                assert!(seen.insert(f.canonical), "{} duplicates {}", t.variant, f.canonical);
            }
            for f in t.structured {
                assert!(seen.insert(f.canonical), "{} duplicates {}", t.variant, f.canonical);
            }
            assert!(seen.insert(t.properties.canonical));
        }
    }

    #[test]
    fn test_aliases_non_empty_and_canonical_first() {
        for t in tables() {
            for f in t.scalar {
                assert!(!f.aliases.is_empty());
            }
            for f in t.structured {
                assert_eq!(f.aliases[0], f.canonical, "{}.{}", t.variant, f.canonical);
            }
            assert!(!t.signatures.is_empty());
            assert!(!t.keywords.is_empty());
        }
    }

    #[test]
    fn test_has_royalty_precedes_royalty() {
        let pos = |a: &str| HAS_ROYALTY.iter().position(|x| *x == a).unwrap();
        assert!(pos("hasRoyalty") < pos("royalty"));
    }

    #[test]
    fn test_tables_follow_priority_order() {
        let order: Vec<SchemaVariant> = tables().map(|t| t.variant).collect();
        assert_eq!(order, SchemaVariant::PRIORITY.to_vec());
        assert_eq!(tables_for(Some(SchemaVariant::YieldVault)).len(), 1);
        assert_eq!(tables_for(None).len(), 6);
    }

    #[test]
    fn test_shape_matches() {
        assert!(FieldShape::Object.matches(&serde_json::json!({})));
        assert!(!FieldShape::Object.matches(&serde_json::json!([])));
        assert!(FieldShape::Array.matches(&serde_json::json!([])));
        assert!(!FieldShape::Array.matches(&serde_json::json!("x")));
    }
}
