mod common;

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fireblocks_api_client::auth::StaticCredentials;
use fireblocks_api_client::error::{FireblocksError, TransportError};
use fireblocks_api_client::rest::transactions::TransactionHistoryRequest;
use fireblocks_api_client::rest::vaults::CreateWalletInVault;
use fireblocks_api_client::rest::wallets::CreateInternalWalletRequest;
use fireblocks_api_client::rest::{CallContext, FireblocksApi, FireblocksClient};
use fireblocks_api_client::types::{PeerType, TransactionStatus, WalletAssetStatus};

use common::{TEST_API_KEY, TEST_PRIVATE_KEY, build_client};

#[tokio::test]
async fn test_get_supported_and_fiat_assets() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {"id": "BTC", "name": "Bitcoin", "type": "BASE_ASSET", "contractAddress": "", "nativeAsset": "BTC", "decimals": 8},
        {"id": "USD", "name": "US Dollar", "type": "FIAT", "contractAddress": "", "nativeAsset": ""},
        {"id": "EUR", "name": "Euro", "type": "FIAT"}
    ]);

    Mock::given(method("GET"))
        .and(path("/v1/supported_assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(3)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let assets = client.get_supported_assets().await.unwrap();
    assert_eq!(assets.len(), 3);
    assert_eq!(assets[0].decimals, Some(8));
    assert!(assets[0].contract_address.is_none());

    let fiat = client.get_fiat_assets().await.unwrap();
    assert_eq!(fiat.len(), 2);

    let ids = client.get_fiat_asset_ids().await.unwrap();
    assert_eq!(ids, vec!["USD".to_string(), "EUR".to_string()]);
}

#[tokio::test]
async fn test_retrieve_vault_account() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/vault/accounts/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::vault_account_json(7)))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let account = client.retrieve_vault_account("7").await.unwrap();
    assert_eq!(account.id, "7");
    assert_eq!(account.assets[0].id, "ETH");
    assert_eq!(account.assets[0].available, Some("1.5".parse().unwrap()));
}

#[tokio::test]
async fn test_create_wallet_in_vault() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/vault/accounts/3/ETH"))
        .and(body_json(serde_json::json!({"vaultAccountId": "3", "assetId": "ETH"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "ETH",
            "address": "0x1234",
            "legacyAddress": "",
            "tag": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let created = client
        .create_wallet_in_vault(&CreateWalletInVault::new("3", "ETH"))
        .await
        .unwrap();
    assert_eq!(created.address, "0x1234");
    assert!(created.legacy_address.is_none());
    assert!(created.tag.is_none());
}

#[tokio::test]
async fn test_get_balance_by_asset() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/vault/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "BTC", "total": "2.5", "available": "2", "pending": "0.5"},
            {"id": "ETH", "total": 10}
        ])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let balances = client.get_balance_by_asset().await.unwrap();
    assert_eq!(balances[0].total, "2.5".parse().unwrap());
    assert_eq!(balances[0].pending, Some("0.5".parse().unwrap()));
    assert_eq!(balances[1].total, Decimal::from(10));
    assert!(balances[1].available.is_none());
}

#[tokio::test]
async fn test_wallet_operations() {
    let server = MockServer::start().await;
    let internal = serde_json::json!({
        "id": "iw-1",
        "name": "Treasury",
        "customerRefId": "acct-42",
        "assets": [{
            "id": "BTC",
            "balance": "0.1",
            "lockedAmount": "",
            "status": "APPROVED",
            "activationTime": "2024-01-01T00:00:00.000Z",
            "address": "bc1qtreasury",
            "tag": ""
        }]
    });

    Mock::given(method("GET"))
        .and(path("/v1/internal_wallets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([internal])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/internal_wallets"))
        .and(body_json(serde_json::json!({"name": "Treasury", "customerRefId": "acct-42"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(internal.clone()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/external_wallets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": "ew-1",
            "name": "Exchange deposit",
            "assets": [{"id": "ETH", "status": "WAITING_FOR_APPROVAL", "address": "0xdead", "tag": "7"}]
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);

    let wallets = client.list_internal_wallets().await.unwrap();
    assert_eq!(wallets[0].assets[0].balance, Some("0.1".parse().unwrap()));
    assert!(wallets[0].assets[0].locked_amount.is_none());
    assert_eq!(wallets[0].assets[0].status, WalletAssetStatus::Approved);
    assert!(wallets[0].assets[0].tag.is_none());

    let request = CreateInternalWalletRequest::new("Treasury").customer_ref_id("acct-42");
    let created = client.create_internal_wallet(&request).await.unwrap();
    assert_eq!(created.customer_ref_id.as_deref(), Some("acct-42"));

    let external = client.list_external_wallets().await.unwrap();
    assert_eq!(external[0].assets[0].status, WalletAssetStatus::WaitingForApproval);
    assert_eq!(external[0].assets[0].tag.as_deref(), Some("7"));
}

#[tokio::test]
async fn test_fiat_account_operations() {
    let server = MockServer::start().await;
    let account = serde_json::json!({
        "id": "fa-1",
        "type": "BLINC_ACCOUNT",
        "name": "Operating",
        "address": "",
        "assets": [{"id": "USD", "balance": "1500.25"}]
    });

    Mock::given(method("GET"))
        .and(path("/v1/fiat_accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([account.clone()])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/fiat_accounts/fa-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let accounts = client.list_fiat_accounts().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert!(accounts[0].address.is_none());

    let account = client.retrieve_fiat_account("fa-1").await.unwrap();
    assert_eq!(account.account_type, "BLINC_ACCOUNT");
    assert_eq!(account.assets[0].balance, "1500.25".parse().unwrap());
}

#[tokio::test]
async fn test_get_transaction_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/transactions/tx-5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::transaction_json(5)))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let tx = client.get_transaction_by_id("tx-5").await.unwrap();
    assert_eq!(tx.status, TransactionStatus::Completed);
    assert_eq!(tx.destination.peer_type, PeerType::ExternalWallet);
    assert_eq!(tx.destination.sub_type.as_deref(), Some("Whitelisted"));
    assert!(tx.source.sub_type.is_none());
    assert_eq!(tx.network_fee, Some("0.0001".parse().unwrap()));
    assert!(tx.service_fee.is_none());
}

#[tokio::test]
async fn test_transfer_path_shape_follows_endpoint() {
    let server = MockServer::start().await;
    let mut record = common::transaction_json(7);
    record["destination"] = serde_json::json!({"type": "EXTERNAL_WALLET", "id": "w-1"});
    let page = serde_json::json!([record.clone()]);

    Mock::given(method("GET"))
        .and(path("/v1/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/transactions/tx-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let history = client
        .list_transactions(&TransactionHistoryRequest::default())
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].destination.id.as_deref(), Some("w-1"));

    let err = client.get_transaction_by_id("tx-7").await.unwrap_err();
    assert!(err.is_decode(), "{err:?}");
}

#[tokio::test]
async fn test_rate_limited_keeps_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/supported_assets"))
        .respond_with(ResponseTemplate::new(429).set_body_string(r#"{"message":"rate limited"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_supported_assets().await.unwrap_err();

    let api = err.api_error().expect("api error");
    assert_eq!(api.status, 429);
    assert_eq!(api.body, br#"{"message":"rate limited"}"#);
    assert!(api.is_rate_limited());
    assert_eq!(api.platform_error().unwrap().message, "rate limited");
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_non_utf8_error_body_is_kept_verbatim() {
    let server = MockServer::start().await;
    let raw = vec![0xff, 0xfe, b'x'];

    Mock::given(method("GET"))
        .and(path("/v1/supported_assets"))
        .respond_with(ResponseTemplate::new(500).set_body_bytes(raw.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_supported_assets().await.unwrap_err();

    let api = err.api_error().expect("api error");
    assert_eq!(api.status, 500);
    assert_eq!(api.body, raw);
    assert!(api.platform_error().is_none());
    assert!(api.is_server_error());
}

#[tokio::test]
async fn test_unparseable_base_url_is_url_error() {
    let credentials = StaticCredentials::new(TEST_API_KEY, TEST_PRIVATE_KEY).unwrap();
    let client = FireblocksClient::builder()
        .base_url("not a url")
        .credentials(Arc::new(credentials))
        .build()
        .unwrap();

    let err = client.get_supported_assets().await.unwrap_err();
    assert!(matches!(err.root(), FireblocksError::Url(_)), "{err:?}");
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_not_found_has_operation_context() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/vault/accounts/999"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"{"message":"Vault account not found","code":1001}"#,
        ))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.retrieve_vault_account("999").await.unwrap_err();

    match &err {
        FireblocksError::Context { context, .. } => assert_eq!(context, "retrieve vault account 999"),
        other => panic!("expected context error, got {other:?}"),
    }
    let api = err.api_error().unwrap();
    assert!(api.is_not_found());
    assert_eq!(api.platform_error().unwrap().code, Some(1001));
}

#[tokio::test]
async fn test_unexpected_shape_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/supported_assets"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"not":"a list"}"#))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_supported_assets().await.unwrap_err();

    assert!(err.is_decode());
    match err.root() {
        FireblocksError::Decode { body, .. } => assert_eq!(body, r#"{"not":"a list"}"#),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/vault/assets"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = build_client(&server)
        .with_context(CallContext::new().with_timeout(Duration::from_millis(50)));
    let err = client.get_balance_by_asset().await.unwrap_err();

    assert!(err.is_transport());
    assert!(matches!(err.transport_error(), Some(TransportError::TimedOut(_))));
}

#[tokio::test]
async fn test_cancellation_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/internal_wallets"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    let client = build_client(&server).with_context(CallContext::new().with_cancellation(token.clone()));

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let err = client.list_internal_wallets().await.unwrap_err();
    canceller.await.unwrap();

    assert!(err.transport_error().is_some_and(TransportError::is_cancellation));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = FireblocksClient::builder()
        .base_url("http://127.0.0.1:1")
        .credentials(Arc::new(StaticCredentials::new(TEST_API_KEY, TEST_PRIVATE_KEY).unwrap()))
        .build()
        .unwrap();

    let err = client.list_fiat_accounts().await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.api_error().is_none());
}

async fn count_fiat_accounts<C: FireblocksApi>(client: &C) -> usize {
    client.list_fiat_accounts().await.unwrap().len()
}

#[tokio::test]
async fn test_trait_dispatch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/fiat_accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert_eq!(count_fiat_accounts(&client).await, 0);
}
