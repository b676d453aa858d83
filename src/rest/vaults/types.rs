//! Types for vault endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::endpoints::DEFAULT_PAGE_SIZE;
use crate::rest::pagination::{Page, PageShape};
use crate::types::serde_helpers::{empty_string_as_none, optional_decimal};

/// Request for listing vault accounts.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultAccountsRequest {
    /// Only accounts whose name starts with this prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_prefix: Option<String>,
    /// Only accounts whose name ends with this suffix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_suffix: Option<String>,
    /// Only accounts holding this asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    /// Only accounts holding at least this much (in USD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount_threshold: Option<Decimal>,
    /// Page size (default 200)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl VaultAccountsRequest {
    pub(crate) fn page_size(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

/// One page of `/v1/vault/accounts_paged`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultAccountsPage {
    /// Accounts on this page
    #[serde(default)]
    pub accounts: Vec<VaultAccount>,
    /// Raw cursors
    #[serde(default)]
    pub paging: Paging,
    /// Pointer to the previous page
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub previous_url: Option<String>,
    /// Pointer to the next page
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub next_url: Option<String>,
}

impl PageShape for VaultAccountsPage {
    type Item = VaultAccount;

    fn into_page(self, _next_page_header: Option<String>) -> Page<VaultAccount> {
        Page {
            items: self.accounts,
            next: self.next_url,
        }
    }
}

/// Cursor values of a paged vault listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Paging {
    /// Cursor for the previous page
    #[serde(default)]
    pub before: Option<String>,
    /// Cursor for the next page
    #[serde(default)]
    pub after: Option<String>,
}

/// A vault account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultAccount {
    /// Vault account ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Whether the account is hidden in the console
    #[serde(rename = "hiddenOnUI", default)]
    pub hidden_on_ui: bool,
    /// Caller-supplied reference ID
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub customer_ref_id: Option<String>,
    /// Whether the gas station auto-fuels this account
    #[serde(default)]
    pub auto_fuel: bool,
    /// Per-asset balances
    #[serde(default)]
    pub assets: Vec<VaultAsset>,
}

/// Balance of one asset inside a vault account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultAsset {
    /// Asset ID
    pub id: String,
    /// Total balance
    pub total: Decimal,
    /// Balance available to spend
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub available: Option<Decimal>,
    /// Balance in pending transactions
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub pending: Option<Decimal>,
    /// Balance frozen by AML policy
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub frozen: Option<Decimal>,
    /// Balance locked by the platform
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub locked_amount: Option<Decimal>,
}

/// Balance of one asset summed across all vault accounts.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetInformation {
    /// Asset ID
    pub id: String,
    /// Total balance
    pub total: Decimal,
    /// Balance available to spend
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub available: Option<Decimal>,
    /// Balance in pending transactions
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub pending: Option<Decimal>,
}

/// Request for creating an asset wallet inside a vault account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalletInVault {
    /// Vault account to add the wallet to
    pub vault_account_id: String,
    /// Asset of the new wallet
    pub asset_id: String,
    /// Address for EOS-style chains
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eos_account_name: Option<String>,
}

impl CreateWalletInVault {
    /// Create a request for `asset_id` in `vault_account_id`.
    pub fn new(vault_account_id: impl Into<String>, asset_id: impl Into<String>) -> Self {
        Self {
            vault_account_id: vault_account_id.into(),
            asset_id: asset_id.into(),
            eos_account_name: None,
        }
    }
}

/// Response of creating a vault asset wallet.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVaultAssetResponse {
    /// Vault asset ID
    pub id: String,
    /// Deposit address
    pub address: String,
    /// Legacy-format address (BTC/BCH)
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub legacy_address: Option<String>,
    /// Destination tag / memo
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub tag: Option<String>,
}
