//! Transaction endpoints.

mod types;

pub use types::*;

use crate::error::{FireblocksError, ResultExt};
use crate::rest::client::resource_path;
use crate::rest::endpoints::transactions;
use crate::rest::{FireblocksClient, HeaderPaged};

impl FireblocksClient {
    /// List transactions matching `request`, walking all pages.
    ///
    /// History records carry [`TransferPeerPathResponseV1`] paths.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use fireblocks_api_client::rest::FireblocksClient;
    /// use fireblocks_api_client::rest::transactions::TransactionHistoryRequest;
    /// use time::{Duration, OffsetDateTime};
    ///
    /// # async fn run(client: FireblocksClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let now = OffsetDateTime::now_utc();
    /// let request = TransactionHistoryRequest::between(now - Duration::days(1), now);
    /// for tx in client.list_transactions(&request).await? {
    ///     println!("{} {} {} {}", tx.id, tx.asset_id, tx.amount, tx.status);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_transactions(
        &self,
        request: &TransactionHistoryRequest,
    ) -> Result<Vec<Transaction<TransferPeerPathResponseV1>>, FireblocksError> {
        self.collect_all::<HeaderPaged<Transaction<TransferPeerPathResponseV1>>, _>(
            transactions::TRANSACTIONS,
            request,
            request.page_size(),
        )
        .await
        .context("list transactions")
    }

    /// Get a single transaction, with [`TransferPeerPathResponseV2`] paths.
    pub async fn get_transaction_by_id(
        &self,
        id: &str,
    ) -> Result<Transaction<TransferPeerPathResponseV2>, FireblocksError> {
        let path = resource_path(transactions::TRANSACTIONS, &[id])?;
        self.get(&path)
            .await
            .with_context(|| format!("get transaction {id}"))
    }

    /// Submit a new transaction.
    pub async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<CreateTransactionResponse, FireblocksError> {
        self.post(transactions::TRANSACTIONS, request)
            .await
            .with_context(|| {
                format!(
                    "create {} {} transaction",
                    request.amount, request.asset_id
                )
            })
    }
}
