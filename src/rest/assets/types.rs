//! Types for asset endpoints.

use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::empty_string_as_none;

/// Asset type string used for fiat currencies.
pub const FIAT_ASSET_TYPE: &str = "FIAT";

/// An asset supported by the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Asset ID (e.g., "BTC", "USDC_ETH")
    pub id: String,
    /// Display name
    pub name: String,
    /// Asset type (e.g., "BASE_ASSET", "ERC20", "FIAT")
    #[serde(rename = "type")]
    pub asset_type: String,
    /// Token contract address, for tokens
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub contract_address: Option<String>,
    /// ID of the chain's native asset
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub native_asset: Option<String>,
    /// Number of decimal places
    #[serde(default)]
    pub decimals: Option<u32>,
}

impl Asset {
    /// Check if this is a fiat currency.
    pub fn is_fiat(&self) -> bool {
        self.asset_type == FIAT_ASSET_TYPE
    }
}
