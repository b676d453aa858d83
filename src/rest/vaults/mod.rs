//! Vault endpoints.

mod types;

pub use types::*;

use crate::error::{FireblocksError, ResultExt};
use crate::rest::FireblocksClient;
use crate::rest::client::resource_path;
use crate::rest::endpoints::vaults;

impl FireblocksClient {
    /// List every vault account, walking all pages.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use fireblocks_api_client::rest::FireblocksClient;
    /// use fireblocks_api_client::rest::vaults::VaultAccountsRequest;
    ///
    /// # async fn run(client: FireblocksClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let request = VaultAccountsRequest {
    ///     asset_id: Some("BTC".to_string()),
    ///     ..Default::default()
    /// };
    /// let accounts = client.list_vault_accounts(Some(&request)).await?;
    /// println!("{} accounts hold BTC", accounts.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_vault_accounts(
        &self,
        request: Option<&VaultAccountsRequest>,
    ) -> Result<Vec<VaultAccount>, FireblocksError> {
        let default_request = VaultAccountsRequest::default();
        let request = request.unwrap_or(&default_request);

        self.collect_all::<VaultAccountsPage, _>(
            vaults::VAULT_ACCOUNTS_PAGED,
            request,
            request.page_size(),
        )
        .await
        .context("list vault accounts")
    }

    /// Get a single vault account.
    pub async fn retrieve_vault_account(&self, id: &str) -> Result<VaultAccount, FireblocksError> {
        let path = resource_path(vaults::VAULT_ACCOUNTS, &[id])?;
        self.get(&path)
            .await
            .with_context(|| format!("retrieve vault account {id}"))
    }

    /// Create a wallet for an asset inside a vault account.
    pub async fn create_wallet_in_vault(
        &self,
        request: &CreateWalletInVault,
    ) -> Result<CreateVaultAssetResponse, FireblocksError> {
        let path = resource_path(
            vaults::VAULT_ACCOUNTS,
            &[request.vault_account_id.as_str(), request.asset_id.as_str()],
        )?;
        self.post(&path, request).await.with_context(|| {
            format!(
                "create {} wallet in vault {}",
                request.asset_id, request.vault_account_id
            )
        })
    }

    /// Get balances per asset, summed across all vault accounts.
    pub async fn get_balance_by_asset(&self) -> Result<Vec<AssetInformation>, FireblocksError> {
        self.get(vaults::VAULT_ASSETS)
            .await
            .context("list balance by asset")
    }
}
