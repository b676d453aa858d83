//! Internal and external wallet endpoints.

mod types;

pub use types::*;

use crate::error::{FireblocksError, ResultExt};
use crate::rest::FireblocksClient;
use crate::rest::endpoints::wallets;

impl FireblocksClient {
    /// List internal wallets.
    pub async fn list_internal_wallets(&self) -> Result<Vec<InternalWallet>, FireblocksError> {
        self.get(wallets::INTERNAL_WALLETS)
            .await
            .context("list internal wallets")
    }

    /// Create an internal wallet.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use fireblocks_api_client::rest::FireblocksClient;
    /// use fireblocks_api_client::rest::wallets::CreateInternalWalletRequest;
    ///
    /// # async fn run(client: FireblocksClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let request = CreateInternalWalletRequest::new("Treasury").customer_ref_id("acct-42");
    /// let wallet = client.create_internal_wallet(&request).await?;
    /// println!("created {}", wallet.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_internal_wallet(
        &self,
        request: &CreateInternalWalletRequest,
    ) -> Result<InternalWallet, FireblocksError> {
        self.post(wallets::INTERNAL_WALLETS, request)
            .await
            .with_context(|| format!("create internal wallet {:?}", request.name))
    }

    /// List external wallets.
    pub async fn list_external_wallets(&self) -> Result<Vec<ExternalWallet>, FireblocksError> {
        self.get(wallets::EXTERNAL_WALLETS)
            .await
            .context("list external wallets")
    }
}
