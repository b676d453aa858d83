//! Authentication module for the Fireblocks API.
//!
//! This module provides:
//! - Credential management with an RSA key parsed once at construction
//! - A per-credential nonce clock for replay protection
//! - RS256 bearer token generation bound to each request's URI and body

pub(crate) mod credentials;
mod nonce;
mod signature;

pub use credentials::{
    API_KEY_VAR, Credentials, CredentialsProvider, EnvCredentials, PRIVATE_KEY_PATH_VAR,
    PRIVATE_KEY_VAR, StaticCredentials,
};
pub use nonce::{NonceClock, NonceStamp};
pub use signature::{
    API_KEY_HEADER, AuthHeaders, Claims, TOKEN_LIFETIME_SECS, body_hash, sign_request,
};
