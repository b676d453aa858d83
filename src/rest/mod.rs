//! Fireblocks REST API client.
//!
//! Every request is signed with an RS256 bearer token; list endpoints are
//! walked page by page and returned as one collection.
//!
//! # Trait-based API
//!
//! The [`FireblocksApi`] trait abstracts all resource operations, enabling
//! mock implementations in callers' tests:
//!
//! ```rust,no_run
//! use fireblocks_api_client::rest::FireblocksApi;
//!
//! async fn vault_count<C: FireblocksApi>(client: &C) -> Result<usize, fireblocks_api_client::FireblocksError> {
//!     Ok(client.list_vault_accounts(None).await?.len())
//! }
//! ```

mod client;
mod context;
mod endpoints;
mod pagination;
mod traits;

pub mod assets;
pub mod fiat_accounts;
pub mod transactions;
pub mod vaults;
pub mod wallets;

pub use client::{FireblocksClient, FireblocksClientBuilder, RawResponse};
pub use context::CallContext;
pub use endpoints::{DEFAULT_PAGE_SIZE, FIREBLOCKS_BASE_URL, FIREBLOCKS_SANDBOX_URL, NEXT_PAGE_HEADER};
pub use pagination::{HeaderPaged, Page, PageShape, normalize_cursor};
pub use traits::FireblocksApi;
