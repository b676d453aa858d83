//! Types for fiat account endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::serde_helpers::empty_string_as_none;

/// A fiat account connected to the workspace.
#[derive(Debug, Clone, Deserialize)]
pub struct FiatAccount {
    /// Fiat account ID
    pub id: String,
    /// Account type (e.g., "BLINC_ACCOUNT")
    #[serde(rename = "type")]
    pub account_type: String,
    /// Display name
    pub name: String,
    /// Account address or number
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub address: Option<String>,
    /// Per-currency balances
    #[serde(default)]
    pub assets: Vec<FiatAsset>,
}

/// Balance of one currency in a fiat account.
#[derive(Debug, Clone, Deserialize)]
pub struct FiatAsset {
    /// Currency asset ID
    pub id: String,
    /// Balance
    pub balance: Decimal,
}
