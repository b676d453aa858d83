//! Types for whitelisted wallet endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::WalletAssetStatus;
use crate::types::serde_helpers::{empty_string_as_none, optional_decimal};

/// An internal wallet: a whitelisted address owned by the workspace.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalWallet {
    /// Wallet ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Caller-supplied reference ID
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub customer_ref_id: Option<String>,
    /// Whitelisted assets
    #[serde(default)]
    pub assets: Vec<InternalWalletAsset>,
}

/// An asset address inside an internal wallet.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalWalletAsset {
    /// Asset ID
    pub id: String,
    /// Balance, when the platform tracks it
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub balance: Option<Decimal>,
    /// Locked amount
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub locked_amount: Option<Decimal>,
    /// Whitelisting status
    pub status: WalletAssetStatus,
    /// When the address became usable
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub activation_time: Option<String>,
    /// Address
    pub address: String,
    /// Destination tag / memo
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub tag: Option<String>,
}

/// Request for creating an internal wallet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInternalWalletRequest {
    /// Display name
    pub name: String,
    /// Caller-supplied reference ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref_id: Option<String>,
}

impl CreateInternalWalletRequest {
    /// Create a request for a wallet called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            customer_ref_id: None,
        }
    }

    /// Attach a customer reference ID.
    pub fn customer_ref_id(mut self, customer_ref_id: impl Into<String>) -> Self {
        self.customer_ref_id = Some(customer_ref_id.into());
        self
    }
}

/// An external wallet: a whitelisted third-party address.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalWallet {
    /// Wallet ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Caller-supplied reference ID
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub customer_ref_id: Option<String>,
    /// Whitelisted assets
    #[serde(default)]
    pub assets: Vec<ExternalWalletAsset>,
}

/// An asset address inside an external wallet.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalWalletAsset {
    /// Asset ID
    pub id: String,
    /// Whitelisting status
    pub status: WalletAssetStatus,
    /// When the address became usable
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub activation_time: Option<String>,
    /// Address
    pub address: String,
    /// Destination tag / memo
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub tag: Option<String>,
}
