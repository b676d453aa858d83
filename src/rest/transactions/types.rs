//! Types for transaction endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::rest::endpoints::DEFAULT_PAGE_SIZE;
use crate::types::serde_helpers::{empty_string_as_none, optional_decimal};
use crate::types::{PeerType, TransactionStatus};

/// Source of a new transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferPeerPath {
    /// Peer type
    #[serde(rename = "type")]
    pub peer_type: PeerType,
    /// Peer ID (e.g., the vault account ID)
    pub id: String,
}

impl TransferPeerPath {
    /// A vault account source.
    pub fn vault_account(id: impl Into<String>) -> Self {
        Self {
            peer_type: PeerType::VaultAccount,
            id: id.into(),
        }
    }
}

/// Destination of a new transaction.
///
/// Either `id` names a known peer, or `one_time_address` carries a raw
/// address with `peer_type` set to [`PeerType::OneTimeAddress`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationTransferPeerPath {
    /// Peer type
    #[serde(rename = "type")]
    pub peer_type: PeerType,
    /// Peer ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Raw destination address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_address: Option<OneTimeAddress>,
}

impl DestinationTransferPeerPath {
    /// A known peer such as a vault account or whitelisted wallet.
    pub fn peer(peer_type: PeerType, id: impl Into<String>) -> Self {
        Self {
            peer_type,
            id: Some(id.into()),
            one_time_address: None,
        }
    }

    /// A non-whitelisted address.
    pub fn one_time_address(address: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            peer_type: PeerType::OneTimeAddress,
            id: None,
            one_time_address: Some(OneTimeAddress {
                address: address.into(),
                tag,
            }),
        }
    }
}

/// A raw destination address with an optional tag / memo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OneTimeAddress {
    /// Address
    pub address: String,
    /// Destination tag / memo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Request for creating a transaction.
///
/// # Example
///
/// ```rust
/// use fireblocks_api_client::rest::transactions::{
///     CreateTransactionRequest, DestinationTransferPeerPath, TransferPeerPath,
/// };
/// use fireblocks_api_client::types::PeerType;
/// use rust_decimal::Decimal;
///
/// let request = CreateTransactionRequest::new(
///     "BTC",
///     Decimal::new(15, 1),
///     TransferPeerPath::vault_account("0"),
///     DestinationTransferPeerPath::peer(PeerType::InternalWallet, "wallet-1"),
/// )
/// .note("cold storage top-up");
///
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["amount"], "1.5");
/// assert_eq!(json["destination"]["type"], "INTERNAL_WALLET");
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    /// Asset ID
    pub asset_id: String,
    /// Amount, sent as a decimal string
    pub amount: Decimal,
    /// Where the funds come from
    pub source: TransferPeerPath,
    /// Where the funds go
    pub destination: DestinationTransferPeerPath,
    /// Free-text note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Caller-chosen idempotency ID
    #[serde(rename = "externalTxId", skip_serializing_if = "Option::is_none")]
    pub external_tx_id: Option<String>,
}

impl CreateTransactionRequest {
    /// Create a transfer request.
    pub fn new(
        asset_id: impl Into<String>,
        amount: Decimal,
        source: TransferPeerPath,
        destination: DestinationTransferPeerPath,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            amount,
            source,
            destination,
            note: None,
            external_tx_id: None,
        }
    }

    /// Attach a note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Attach an external ID; the platform rejects a second transaction with
    /// the same one.
    pub fn external_tx_id(mut self, external_tx_id: impl Into<String>) -> Self {
        self.external_tx_id = Some(external_tx_id.into());
        self
    }
}

/// Response from creating a transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransactionResponse {
    /// Transaction ID
    pub id: String,
    /// Initial status
    pub status: TransactionStatus,
}

/// Source or destination of a transaction in the history listing.
///
/// History pages use the older record shape, which has no `subType`; one is
/// ignored if present.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferPeerPathResponseV1 {
    /// Peer type
    #[serde(rename = "type")]
    pub peer_type: PeerType,
    /// Peer ID
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub id: Option<String>,
    /// Peer display name
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub name: Option<String>,
}

/// Source or destination of a transaction fetched by ID.
///
/// The `subType` key must be present; an empty value reads as `None`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferPeerPathResponseV2 {
    /// Peer type
    #[serde(rename = "type")]
    pub peer_type: PeerType,
    /// Peer ID
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub id: Option<String>,
    /// Peer sub-type (e.g., the exchange name)
    #[serde(deserialize_with = "empty_string_as_none::deserialize")]
    pub sub_type: Option<String>,
    /// Peer display name
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub name: Option<String>,
}

/// A transaction record.
///
/// `P` is the transfer-path shape of the endpoint the record came from:
/// [`TransferPeerPathResponseV1`] for the history listing and
/// [`TransferPeerPathResponseV2`] for single lookups.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction<P = TransferPeerPathResponseV2> {
    /// Transaction ID
    pub id: String,
    /// Asset ID
    pub asset_id: String,
    /// Source
    pub source: P,
    /// Destination
    pub destination: P,
    /// Requested amount
    pub amount: Decimal,
    /// Network fee, once known
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub network_fee: Option<Decimal>,
    /// Service fee, once known
    #[serde(deserialize_with = "optional_decimal::deserialize", default)]
    pub service_fee: Option<Decimal>,
    /// Creation time in Unix milliseconds
    pub created_at: i64,
    /// Last update time in Unix milliseconds
    #[serde(default)]
    pub last_updated: Option<i64>,
    /// Current status
    pub status: TransactionStatus,
    /// Destination address
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub destination_address: Option<String>,
    /// Destination tag / memo
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub destination_tag: Option<String>,
    /// On-chain hash
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub tx_hash: Option<String>,
    /// Note attached at creation
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub note: Option<String>,
}

impl<P> Transaction<P> {
    /// Creation time as a timestamp, if representable.
    pub fn created_at_time(&self) -> Option<OffsetDateTime> {
        millis_to_datetime(self.created_at)
    }
}

fn millis_to_datetime(millis: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
}

fn datetime_to_millis(at: OffsetDateTime) -> i64 {
    (at.unix_timestamp_nanos() / 1_000_000) as i64
}

/// Request for the transaction history.
///
/// Timestamps are Unix milliseconds.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHistoryRequest {
    /// Only transactions created after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<i64>,
    /// Only transactions created before this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<i64>,
    /// Only transactions in this status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    /// Comma-separated asset IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<String>,
    /// Only transactions from this peer type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<PeerType>,
    /// Only transactions from this peer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Only transactions to this peer type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_type: Option<PeerType>,
    /// Only transactions to this peer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_id: Option<String>,
    /// Page size (default 200)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl TransactionHistoryRequest {
    /// Transactions created between `start` and `end`.
    pub fn between(start: OffsetDateTime, end: OffsetDateTime) -> Self {
        Self {
            after: Some(datetime_to_millis(start)),
            before: Some(datetime_to_millis(end)),
            ..Default::default()
        }
    }

    /// Restrict to one status.
    pub fn status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub(crate) fn page_size(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
