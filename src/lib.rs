//! # Fireblocks Client
//!
//! An async Rust client library for the Fireblocks custody REST API.
//!
//! ## Features
//!
//! - RS256 JWT request signing with per-credential monotonic nonces
//! - Transparent pagination over body-cursor and header-cursor list endpoints
//! - Per-call cancellation and timeouts
//! - Strong typing for all request/response types
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fireblocks_api_client::rest::FireblocksClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pem = std::fs::read_to_string("fireblocks_secret.key")?;
//!     let client = FireblocksClient::new("my-api-key", &pem)?;
//!
//!     let balances = client.get_balance_by_asset().await?;
//!     println!("Balances: {:?}", balances);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, FireblocksError, ResultExt, TransportError};
pub use rest::{CallContext, FireblocksApi, FireblocksClient};
pub use types::common::{PeerType, TransactionStatus};

/// Result type alias using FireblocksError
pub type Result<T> = std::result::Result<T, FireblocksError>;
