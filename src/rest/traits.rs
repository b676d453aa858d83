//! Trait definition for the Fireblocks REST API client.
//!
//! [`FireblocksApi`] abstracts every resource operation so callers can swap
//! in a mock or wrap the client in a decorator.
//!
//! # Example
//!
//! ```rust,no_run
//! use fireblocks_api_client::FireblocksError;
//! use fireblocks_api_client::rest::FireblocksApi;
//!
//! async fn fiat_total<C: FireblocksApi>(client: &C) -> Result<usize, FireblocksError> {
//!     let accounts = client.list_fiat_accounts().await?;
//!     Ok(accounts.iter().map(|account| account.assets.len()).sum())
//! }
//! ```

use std::future::Future;

use crate::error::FireblocksError;
use crate::rest::assets::Asset;
use crate::rest::fiat_accounts::FiatAccount;
use crate::rest::transactions::{
    CreateTransactionRequest, CreateTransactionResponse, Transaction, TransactionHistoryRequest,
    TransferPeerPathResponseV1, TransferPeerPathResponseV2,
};
use crate::rest::vaults::{
    AssetInformation, CreateVaultAssetResponse, CreateWalletInVault, VaultAccount,
    VaultAccountsRequest,
};
use crate::rest::wallets::{CreateInternalWalletRequest, ExternalWallet, InternalWallet};

/// Trait defining all Fireblocks REST API operations.
///
/// All methods are async and return `Result<T, FireblocksError>`.
pub trait FireblocksApi: Send + Sync {
    // ========== Assets ==========

    /// Get all assets supported by the workspace.
    fn get_supported_assets(
        &self,
    ) -> impl Future<Output = Result<Vec<Asset>, FireblocksError>> + Send;

    /// Get the supported fiat assets.
    fn get_fiat_assets(&self) -> impl Future<Output = Result<Vec<Asset>, FireblocksError>> + Send;

    /// Get the IDs of the supported fiat assets.
    fn get_fiat_asset_ids(
        &self,
    ) -> impl Future<Output = Result<Vec<String>, FireblocksError>> + Send;

    // ========== Vaults ==========

    /// List every vault account, walking all pages.
    fn list_vault_accounts(
        &self,
        request: Option<&VaultAccountsRequest>,
    ) -> impl Future<Output = Result<Vec<VaultAccount>, FireblocksError>> + Send;

    /// Get a single vault account.
    fn retrieve_vault_account(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<VaultAccount, FireblocksError>> + Send;

    /// Create a wallet for an asset inside a vault account.
    fn create_wallet_in_vault(
        &self,
        request: &CreateWalletInVault,
    ) -> impl Future<Output = Result<CreateVaultAssetResponse, FireblocksError>> + Send;

    /// Get balances per asset across all vault accounts.
    fn get_balance_by_asset(
        &self,
    ) -> impl Future<Output = Result<Vec<AssetInformation>, FireblocksError>> + Send;

    // ========== Wallets ==========

    /// List internal wallets.
    fn list_internal_wallets(
        &self,
    ) -> impl Future<Output = Result<Vec<InternalWallet>, FireblocksError>> + Send;

    /// Create an internal wallet.
    fn create_internal_wallet(
        &self,
        request: &CreateInternalWalletRequest,
    ) -> impl Future<Output = Result<InternalWallet, FireblocksError>> + Send;

    /// List external wallets.
    fn list_external_wallets(
        &self,
    ) -> impl Future<Output = Result<Vec<ExternalWallet>, FireblocksError>> + Send;

    // ========== Fiat accounts ==========

    /// List fiat accounts.
    fn list_fiat_accounts(
        &self,
    ) -> impl Future<Output = Result<Vec<FiatAccount>, FireblocksError>> + Send;

    /// Get a single fiat account.
    fn retrieve_fiat_account(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<FiatAccount, FireblocksError>> + Send;

    // ========== Transactions ==========

    /// List transactions, walking all pages.
    fn list_transactions(
        &self,
        request: &TransactionHistoryRequest,
    ) -> impl Future<
        Output = Result<Vec<Transaction<TransferPeerPathResponseV1>>, FireblocksError>,
    > + Send;

    /// Get a single transaction.
    fn get_transaction_by_id(
        &self,
        id: &str,
    ) -> impl Future<
        Output = Result<Transaction<TransferPeerPathResponseV2>, FireblocksError>,
    > + Send;

    /// Submit a new transaction.
    fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> impl Future<Output = Result<CreateTransactionResponse, FireblocksError>> + Send;
}
