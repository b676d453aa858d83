//! Fireblocks REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Method;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::{API_KEY_HEADER, Credentials, CredentialsProvider, StaticCredentials, sign_request};
use crate::error::{ApiError, FireblocksError, TransportError};
use crate::rest::assets::Asset;
use crate::rest::context::CallContext;
use crate::rest::endpoints::{FIREBLOCKS_BASE_URL, NEXT_PAGE_HEADER};
use crate::rest::fiat_accounts::FiatAccount;
use crate::rest::traits::FireblocksApi;
use crate::rest::transactions::{
    CreateTransactionRequest, CreateTransactionResponse, Transaction, TransactionHistoryRequest,
    TransferPeerPathResponseV1, TransferPeerPathResponseV2,
};
use crate::rest::vaults::{
    AssetInformation, CreateVaultAssetResponse, CreateWalletInVault, VaultAccount,
    VaultAccountsRequest,
};
use crate::rest::wallets::{CreateInternalWalletRequest, ExternalWallet, InternalWallet};

/// The Fireblocks REST API client.
///
/// Every request is signed with a fresh RS256 bearer token bound to its URI
/// and body. The client is cheap to clone and safe to share across tasks;
/// clones share the connection pool and the credential's nonce clock.
///
/// # Example
///
/// ```rust,no_run
/// use fireblocks_api_client::rest::FireblocksClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pem = std::fs::read_to_string("fireblocks_secret.key")?;
///     let client = FireblocksClient::new("my-api-key", &pem)?;
///
///     for account in client.list_vault_accounts(None).await? {
///         println!("{}: {}", account.id, account.name);
///     }
///
///     Ok(())
/// }
/// ```
///
/// With a custom credentials provider and base URL:
///
/// ```rust,no_run
/// use fireblocks_api_client::auth::EnvCredentials;
/// use fireblocks_api_client::rest::{FireblocksClient, FIREBLOCKS_SANDBOX_URL};
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = FireblocksClient::builder()
///         .base_url(FIREBLOCKS_SANDBOX_URL)
///         .credentials(Arc::new(EnvCredentials::from_env()?))
///         .build()?;
///
///     let balances = client.get_balance_by_asset().await?;
///     println!("{balances:?}");
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct FireblocksClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Arc<dyn CredentialsProvider>,
    context: CallContext,
}

/// A successful response as returned by the transport.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Response body bytes
    pub body: Vec<u8>,
    /// Value of the `next-page` header, if present
    pub next_page: Option<String>,
}

impl FireblocksClient {
    /// Create a client for the production API from an API key and PEM key.
    ///
    /// Fails with a configuration error if the key does not parse; no network
    /// activity happens here.
    pub fn new(api_key: impl Into<String>, private_key_pem: &str) -> Result<Self, FireblocksError> {
        let credentials = StaticCredentials::new(api_key, private_key_pem)?;
        Self::builder().credentials(Arc::new(credentials)).build()
    }

    /// Create a new client builder.
    pub fn builder() -> FireblocksClientBuilder {
        FireblocksClientBuilder::new()
    }

    /// A clone of this client whose calls honor `context`.
    pub fn with_context(&self, context: CallContext) -> Self {
        Self {
            context,
            ..self.clone()
        }
    }

    /// The base URL every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credentials used to sign requests.
    pub fn credentials(&self) -> &Credentials {
        self.credentials.get_credentials()
    }

    /// Sign and send one request, returning the raw body on a 2xx status.
    ///
    /// `path` is the path and query only. It is parsed against the base URL
    /// once, and the resulting path and query are both signed and sent, so
    /// the `uri` claim always matches the request line. A body, when
    /// present, is sent as JSON and hashed into the token exactly as sent.
    /// Non-success statuses become [`FireblocksError::Api`] with the raw
    /// body; failures without a response become
    /// [`FireblocksError::Transport`]. Never retries.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, FireblocksError> {
        if !path.starts_with('/') {
            return Err(FireblocksError::Encode(format!(
                "request path must start with '/', got {path:?}"
            )));
        }

        let url = Url::parse(&format!("{}{}", self.base_url, path))?;
        let path = wire_path(&url);
        let auth = sign_request(self.credentials(), &method, &path, body.as_deref())?;

        tracing::debug!(%method, path = %path, has_body = body.is_some(), "sending signed request");

        let mut request = self
            .http_client
            .request(method, url)
            .header(API_KEY_HEADER, auth.api_key)
            .header(AUTHORIZATION, auth.authorization);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let (status, next_page, body) = self
            .context
            .run(async move {
                let response = request.send().await?;
                let status = response.status();
                let next_page = response
                    .headers()
                    .get(NEXT_PAGE_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_owned);
                let body = response.bytes().await?;
                Ok::<_, TransportError>((status, next_page, body))
            })
            .await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), path = %path, "request rejected by server");
            return Err(FireblocksError::Api(ApiError::new(status.as_u16(), body.to_vec())));
        }

        Ok(RawResponse {
            body: body.to_vec(),
            next_page,
        })
    }

    /// Make a signed GET request and decode the JSON response.
    pub(crate) async fn get<T>(&self, path: &str) -> Result<T, FireblocksError>
    where
        T: DeserializeOwned,
    {
        let response = self.execute(Method::GET, path, None).await?;
        decode(&response.body)
    }

    /// Make a signed POST request with a JSON body and decode the response.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, FireblocksError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body).map_err(|e| FireblocksError::Encode(e.to_string()))?;
        let response = self.execute(Method::POST, path, Some(body)).await?;
        decode(&response.body)
    }
}

/// Path and query of `url` as they appear on the request line.
fn wire_path(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

/// Append percent-encoded `segments` to the endpoint path `base`.
///
/// Each segment stays a single path segment: `/`, `?`, `#` and spaces are
/// escaped. Empty, `.` and `..` segments are refused.
pub(crate) fn resource_path(base: &str, segments: &[&str]) -> Result<String, FireblocksError> {
    if let Some(bad) = segments
        .iter()
        .find(|segment| matches!(**segment, "" | "." | ".."))
    {
        return Err(FireblocksError::Encode(format!(
            "invalid path segment {bad:?} for {base}"
        )));
    }

    let mut url = Url::parse("http://localhost")?;
    url.set_path(base);
    url.path_segments_mut()
        .map_err(|()| FireblocksError::Encode(format!("cannot extend path {base}")))?
        .extend(segments);
    Ok(url.path().to_string())
}

/// Decode a JSON response body, keeping the body on failure.
pub(crate) fn decode<T>(body: &[u8]) -> Result<T, FireblocksError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|e| FireblocksError::decode(e, body))
}

impl std::fmt::Debug for FireblocksClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FireblocksClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.credentials().api_key)
            .field("context", &self.context)
            .finish()
    }
}

/// Builder for [`FireblocksClient`].
pub struct FireblocksClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl FireblocksClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: FIREBLOCKS_BASE_URL.to_string(),
            credentials: None,
            user_agent: None,
            timeout: None,
            http_client: None,
        }
    }

    /// Set the base URL (useful for the sandbox or a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider used to sign requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a default timeout for every network call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxies, TLS roots, pools).
    ///
    /// The user agent setting is ignored when a client is supplied.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    ///
    /// Fails with a configuration error when no credentials were supplied.
    pub fn build(self) -> Result<FireblocksClient, FireblocksError> {
        let credentials = self
            .credentials
            .ok_or_else(|| FireblocksError::configuration("credentials are required"))?;

        let reqwest_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut headers = HeaderMap::new();
                let user_agent = self.user_agent.unwrap_or_else(|| {
                    format!("fireblocks-api-client/{}", env!("CARGO_PKG_VERSION"))
                });
                let header_value = HeaderValue::from_str(&user_agent)
                    .unwrap_or_else(|_| HeaderValue::from_static("fireblocks-api-client"));
                headers.insert(USER_AGENT, header_value);

                reqwest::Client::builder()
                    .default_headers(headers)
                    .build()
                    .map_err(|e| {
                        FireblocksError::configuration_with("failed to build HTTP client", e)
                    })?
            }
        };

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let mut context = CallContext::new();
        if let Some(timeout) = self.timeout {
            context = context.with_timeout(timeout);
        }

        Ok(FireblocksClient {
            http_client: client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            credentials,
            context,
        })
    }
}

impl Default for FireblocksClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// FireblocksApi trait implementation.

impl FireblocksApi for FireblocksClient {
    // ========== Assets ==========

    async fn get_supported_assets(&self) -> Result<Vec<Asset>, FireblocksError> {
        FireblocksClient::get_supported_assets(self).await
    }

    async fn get_fiat_assets(&self) -> Result<Vec<Asset>, FireblocksError> {
        FireblocksClient::get_fiat_assets(self).await
    }

    async fn get_fiat_asset_ids(&self) -> Result<Vec<String>, FireblocksError> {
        FireblocksClient::get_fiat_asset_ids(self).await
    }

    // ========== Vaults ==========

    async fn list_vault_accounts(
        &self,
        request: Option<&VaultAccountsRequest>,
    ) -> Result<Vec<VaultAccount>, FireblocksError> {
        FireblocksClient::list_vault_accounts(self, request).await
    }

    async fn retrieve_vault_account(&self, id: &str) -> Result<VaultAccount, FireblocksError> {
        FireblocksClient::retrieve_vault_account(self, id).await
    }

    async fn create_wallet_in_vault(
        &self,
        request: &CreateWalletInVault,
    ) -> Result<CreateVaultAssetResponse, FireblocksError> {
        FireblocksClient::create_wallet_in_vault(self, request).await
    }

    async fn get_balance_by_asset(&self) -> Result<Vec<AssetInformation>, FireblocksError> {
        FireblocksClient::get_balance_by_asset(self).await
    }

    // ========== Wallets ==========

    async fn list_internal_wallets(&self) -> Result<Vec<InternalWallet>, FireblocksError> {
        FireblocksClient::list_internal_wallets(self).await
    }

    async fn create_internal_wallet(
        &self,
        request: &CreateInternalWalletRequest,
    ) -> Result<InternalWallet, FireblocksError> {
        FireblocksClient::create_internal_wallet(self, request).await
    }

    async fn list_external_wallets(&self) -> Result<Vec<ExternalWallet>, FireblocksError> {
        FireblocksClient::list_external_wallets(self).await
    }

    // ========== Fiat accounts ==========

    async fn list_fiat_accounts(&self) -> Result<Vec<FiatAccount>, FireblocksError> {
        FireblocksClient::list_fiat_accounts(self).await
    }

    async fn retrieve_fiat_account(&self, id: &str) -> Result<FiatAccount, FireblocksError> {
        FireblocksClient::retrieve_fiat_account(self, id).await
    }

    // ========== Transactions ==========

    async fn list_transactions(
        &self,
        request: &TransactionHistoryRequest,
    ) -> Result<Vec<Transaction<TransferPeerPathResponseV1>>, FireblocksError> {
        FireblocksClient::list_transactions(self, request).await
    }

    async fn get_transaction_by_id(
        &self,
        id: &str,
    ) -> Result<Transaction<TransferPeerPathResponseV2>, FireblocksError> {
        FireblocksClient::get_transaction_by_id(self, id).await
    }

    async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<CreateTransactionResponse, FireblocksError> {
        FireblocksClient::create_transaction(self, request).await
    }
}
