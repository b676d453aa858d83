//! Asset endpoints.

mod types;

pub use types::*;

use crate::error::{FireblocksError, ResultExt};
use crate::rest::FireblocksClient;
use crate::rest::endpoints::assets;

impl FireblocksClient {
    /// Get all assets supported by the workspace.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use fireblocks_api_client::rest::FireblocksClient;
    ///
    /// # async fn run(client: FireblocksClient) -> Result<(), Box<dyn std::error::Error>> {
    /// for asset in client.get_supported_assets().await? {
    ///     println!("{} ({})", asset.id, asset.asset_type);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_supported_assets(&self) -> Result<Vec<Asset>, FireblocksError> {
        self.get(assets::SUPPORTED_ASSETS)
            .await
            .context("list supported assets")
    }

    /// Get the supported assets that are fiat currencies.
    pub async fn get_fiat_assets(&self) -> Result<Vec<Asset>, FireblocksError> {
        let assets = self.get_supported_assets().await.context("list fiat assets")?;
        Ok(assets.into_iter().filter(Asset::is_fiat).collect())
    }

    /// Get the IDs of the supported fiat currencies.
    pub async fn get_fiat_asset_ids(&self) -> Result<Vec<String>, FireblocksError> {
        let assets = self.get_fiat_assets().await?;
        Ok(assets.into_iter().map(|asset| asset.id).collect())
    }
}
