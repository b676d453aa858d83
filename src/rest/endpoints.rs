//! Fireblocks REST API endpoint constants.

/// Base URL for the Fireblocks REST API.
pub const FIREBLOCKS_BASE_URL: &str = "https://api.fireblocks.io";

/// Base URL for the Fireblocks sandbox workspace.
pub const FIREBLOCKS_SANDBOX_URL: &str = "https://sandbox-api.fireblocks.io";

/// Response header carrying the next-page pointer on header-paged lists.
pub const NEXT_PAGE_HEADER: &str = "next-page";

/// Default page size for paged list endpoints.
pub const DEFAULT_PAGE_SIZE: usize = 200;

/// Asset endpoints.
pub mod assets {
    /// List assets supported by the workspace.
    pub const SUPPORTED_ASSETS: &str = "/v1/supported_assets";
}

/// Vault endpoints.
pub mod vaults {
    /// List vault accounts, paged.
    pub const VAULT_ACCOUNTS_PAGED: &str = "/v1/vault/accounts_paged";
    /// Vault accounts (append `/{id}` or `/{id}/{assetId}`).
    pub const VAULT_ACCOUNTS: &str = "/v1/vault/accounts";
    /// Balances aggregated per asset across all vaults.
    pub const VAULT_ASSETS: &str = "/v1/vault/assets";
}

/// Wallet endpoints.
pub mod wallets {
    /// Internal (whitelisted, own) wallets.
    pub const INTERNAL_WALLETS: &str = "/v1/internal_wallets";
    /// External (whitelisted, third-party) wallets.
    pub const EXTERNAL_WALLETS: &str = "/v1/external_wallets";
}

/// Fiat account endpoints.
pub mod fiat_accounts {
    /// Fiat accounts (append `/{id}` for one).
    pub const FIAT_ACCOUNTS: &str = "/v1/fiat_accounts";
}

/// Transaction endpoints.
pub mod transactions {
    /// Transactions (append `/{id}` for one).
    pub const TRANSACTIONS: &str = "/v1/transactions";
}
