//! Fiat account endpoints.

mod types;

pub use types::*;

use crate::error::{FireblocksError, ResultExt};
use crate::rest::FireblocksClient;
use crate::rest::client::resource_path;
use crate::rest::endpoints::fiat_accounts;

impl FireblocksClient {
    /// List fiat accounts.
    pub async fn list_fiat_accounts(&self) -> Result<Vec<FiatAccount>, FireblocksError> {
        self.get(fiat_accounts::FIAT_ACCOUNTS)
            .await
            .context("list fiat accounts")
    }

    /// Get a single fiat account.
    pub async fn retrieve_fiat_account(&self, id: &str) -> Result<FiatAccount, FireblocksError> {
        let path = resource_path(fiat_accounts::FIAT_ACCOUNTS, &[id])?;
        self.get(&path)
            .await
            .with_context(|| format!("retrieve fiat account {id}"))
    }
}
