//! Common domain types for the Fireblocks API.

use serde::{Deserialize, Serialize};

/// Kind of endpoint on either side of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeerType {
    /// A vault account in the workspace
    VaultAccount,
    /// A connected exchange account
    ExchangeAccount,
    /// A whitelisted internal wallet
    InternalWallet,
    /// A whitelisted external wallet
    ExternalWallet,
    /// A one-time (non-whitelisted) address
    OneTimeAddress,
    /// A network connection with another workspace
    NetworkConnection,
    /// A connected fiat account
    FiatAccount,
    /// Compound protocol
    Compound,
    /// The gas station
    GasStation,
    /// An end-user wallet
    EndUserWallet,
    /// A smart contract
    Contract,
    /// Any peer type this library does not know yet
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for PeerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PeerType::VaultAccount => "VAULT_ACCOUNT",
            PeerType::ExchangeAccount => "EXCHANGE_ACCOUNT",
            PeerType::InternalWallet => "INTERNAL_WALLET",
            PeerType::ExternalWallet => "EXTERNAL_WALLET",
            PeerType::OneTimeAddress => "ONE_TIME_ADDRESS",
            PeerType::NetworkConnection => "NETWORK_CONNECTION",
            PeerType::FiatAccount => "FIAT_ACCOUNT",
            PeerType::Compound => "COMPOUND",
            PeerType::GasStation => "GAS_STATION",
            PeerType::EndUserWallet => "END_USER_WALLET",
            PeerType::Contract => "CONTRACT",
            PeerType::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

/// Lifecycle status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Submitted to the platform
    Submitted,
    /// Waiting behind other transactions
    Queued,
    /// Waiting for AML screening
    PendingAmlScreening,
    /// Waiting for enrichment
    PendingEnrichment,
    /// Waiting for policy authorization
    PendingAuthorization,
    /// Waiting for signers
    PendingSignature,
    /// Waiting for manual approval at a third party
    #[serde(rename = "PENDING_3RD_PARTY_MANUAL_APPROVAL")]
    Pending3rdPartyManualApproval,
    /// Waiting for a third party
    #[serde(rename = "PENDING_3RD_PARTY")]
    Pending3rdParty,
    /// Signed, being broadcast
    Broadcasting,
    /// On chain, waiting for confirmations
    Confirming,
    /// Finished successfully
    Completed,
    /// Partially finished
    PartiallyCompleted,
    /// Being cancelled
    Cancelling,
    /// Cancelled
    Cancelled,
    /// Rejected by policy or a signer
    Rejected,
    /// Blocked by policy
    Blocked,
    /// Failed
    Failed,
    /// Timed out
    Timeout,
    /// Any status this library does not know yet
    #[serde(other)]
    Unknown,
}

impl TransactionStatus {
    /// Check if the transaction can no longer change state.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Completed
                | TransactionStatus::Cancelled
                | TransactionStatus::Rejected
                | TransactionStatus::Blocked
                | TransactionStatus::Failed
                | TransactionStatus::Timeout
        )
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TransactionStatus::Submitted => "SUBMITTED",
            TransactionStatus::Queued => "QUEUED",
            TransactionStatus::PendingAmlScreening => "PENDING_AML_SCREENING",
            TransactionStatus::PendingEnrichment => "PENDING_ENRICHMENT",
            TransactionStatus::PendingAuthorization => "PENDING_AUTHORIZATION",
            TransactionStatus::PendingSignature => "PENDING_SIGNATURE",
            TransactionStatus::Pending3rdPartyManualApproval => "PENDING_3RD_PARTY_MANUAL_APPROVAL",
            TransactionStatus::Pending3rdParty => "PENDING_3RD_PARTY",
            TransactionStatus::Broadcasting => "BROADCASTING",
            TransactionStatus::Confirming => "CONFIRMING",
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::PartiallyCompleted => "PARTIALLY_COMPLETED",
            TransactionStatus::Cancelling => "CANCELLING",
            TransactionStatus::Cancelled => "CANCELLED",
            TransactionStatus::Rejected => "REJECTED",
            TransactionStatus::Blocked => "BLOCKED",
            TransactionStatus::Failed => "FAILED",
            TransactionStatus::Timeout => "TIMEOUT",
            TransactionStatus::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

/// Approval status of a whitelisted wallet asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletAssetStatus {
    /// Awaiting approval
    WaitingForApproval,
    /// Approved and usable
    Approved,
    /// Cancelled
    Cancelled,
    /// Rejected
    Rejected,
    /// Failed
    Failed,
    /// Any status this library does not know yet
    #[serde(other)]
    Unknown,
}
