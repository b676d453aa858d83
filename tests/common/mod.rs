#![allow(dead_code)]

use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use wiremock::{Match, MockServer, Request};

use fireblocks_api_client::auth::{Claims, StaticCredentials};
use fireblocks_api_client::rest::FireblocksClient;

pub const TEST_API_KEY: &str = "test_key";
pub const TEST_PRIVATE_KEY: &str = include_str!("../fixtures/test_private_key.pem");
pub const TEST_PRIVATE_KEY_PKCS1: &str = include_str!("../fixtures/test_private_key_pkcs1.pem");
pub const TEST_PUBLIC_KEY: &str = include_str!("../fixtures/test_public_key.pem");
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Route library logs to the test output; set `RUST_LOG=debug` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn build_client(server: &MockServer) -> FireblocksClient {
    init_tracing();
    let credentials = StaticCredentials::new(TEST_API_KEY, TEST_PRIVATE_KEY).unwrap();
    FireblocksClient::builder()
        .base_url(server.uri())
        .credentials(Arc::new(credentials))
        .build()
        .unwrap()
}

/// Verify the bearer token of a received request and return its claims.
pub fn claims_of(request: &Request) -> Claims {
    let authorization = request
        .headers
        .get("authorization")
        .expect("authorization header")
        .to_str()
        .unwrap();
    let token = authorization.strip_prefix("Bearer ").expect("bearer scheme");
    let key = DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap();
    jsonwebtoken::decode::<Claims>(token, &key, &Validation::new(Algorithm::RS256))
        .unwrap()
        .claims
}

/// Path and query of a received request, as it appeared on the wire.
pub fn path_and_query(request: &Request) -> String {
    match request.url.query() {
        Some(query) => format!("{}?{}", request.url.path(), query),
        None => request.url.path().to_string(),
    }
}

/// Matches requests that do not carry the given query parameter.
pub struct QueryParamMissing(pub &'static str);

impl Match for QueryParamMissing {
    fn matches(&self, request: &Request) -> bool {
        !request.url.query_pairs().any(|(key, _)| key == self.0)
    }
}

pub fn transaction_json(index: usize) -> serde_json::Value {
    let created_at = 1_700_000_000_000_i64 + index as i64;
    serde_json::json!({
        "id": format!("tx-{index}"),
        "assetId": "BTC",
        "source": {"type": "VAULT_ACCOUNT", "id": "0", "subType": "", "name": "Main"},
        "destination": {"type": "EXTERNAL_WALLET", "id": "w-1", "subType": "Whitelisted"},
        "amount": "0.001",
        "networkFee": 0.0001,
        "serviceFee": "",
        "createdAt": created_at,
        "status": "COMPLETED",
        "destinationAddress": "bc1qexample"
    })
}

pub fn transactions_json(range: std::ops::Range<usize>) -> serde_json::Value {
    serde_json::Value::Array(range.map(transaction_json).collect())
}

pub fn vault_account_json(index: usize) -> serde_json::Value {
    serde_json::json!({
        "id": index.to_string(),
        "name": format!("Vault {index}"),
        "hiddenOnUI": false,
        "autoFuel": false,
        "assets": [{"id": "ETH", "total": "1.5", "available": "1.5", "pending": "0", "lockedAmount": "0"}]
    })
}

pub fn vault_accounts_json(range: std::ops::Range<usize>) -> serde_json::Value {
    serde_json::Value::Array(range.map(vault_account_json).collect())
}
