//! RS256 bearer token generation for Fireblocks API authentication.
//!
//! Every request carries a freshly signed JWT whose claims bind it to the
//! request:
//!
//! ```text
//! {
//!   "uri":      <path and query, no host>,
//!   "nonce":    <unix nanoseconds, strictly increasing>,
//!   "iat":      <unix seconds>,
//!   "exp":      iat + 55,
//!   "sub":      <api key>,
//!   "bodyHash": hex(SHA256(body or ""))
//! }
//! ```
//!
//! The token is sent as `Authorization: Bearer <jwt>` next to `X-API-Key`.

use jsonwebtoken::{Algorithm, Header};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::auth::{Credentials, NonceStamp};
use crate::error::FireblocksError;

/// Header carrying the API key identifier.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Lifetime of a signed token, in seconds.
pub const TOKEN_LIFETIME_SECS: u64 = 55;

/// Claims embedded in every bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Path and query of the request
    pub uri: String,
    /// Replay-protection nonce (unix nanoseconds)
    pub nonce: u64,
    /// Issued-at (unix seconds)
    pub iat: u64,
    /// Expiry (unix seconds)
    pub exp: u64,
    /// The API key
    pub sub: String,
    /// Hex SHA-256 of the request body
    #[serde(rename = "bodyHash")]
    pub body_hash: String,
}

impl Claims {
    fn new(uri: &str, stamp: NonceStamp, api_key: &str, body_hash: String) -> Self {
        Self {
            uri: uri.to_string(),
            nonce: stamp.nonce,
            iat: stamp.issued_at,
            exp: stamp.issued_at + TOKEN_LIFETIME_SECS,
            sub: api_key.to_string(),
            body_hash,
        }
    }
}

/// Authentication headers for one request.
#[derive(Clone)]
pub struct AuthHeaders {
    /// Value for `X-API-Key`
    pub api_key: String,
    /// Value for `Authorization` (`Bearer <jwt>`)
    pub authorization: String,
}

impl std::fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthHeaders")
            .field("api_key", &self.api_key)
            .field("authorization", &"Bearer [REDACTED]")
            .finish()
    }
}

impl AuthHeaders {
    /// The bare JWT, without the `Bearer ` prefix.
    pub fn token(&self) -> &str {
        self.authorization
            .strip_prefix("Bearer ")
            .unwrap_or(&self.authorization)
    }
}

/// Hex-encoded SHA-256 of a request body.
pub fn body_hash(body: &[u8]) -> String {
    format!("{:x}", Sha256::digest(body))
}

/// Sign a request for the Fireblocks API.
///
/// # Arguments
///
/// * `credentials` - API credentials holding the RSA key and nonce clock
/// * `method` - HTTP method of the request; it is not part of the claims
/// * `uri` - The path and query of the request (e.g., "/v1/vault/assets")
/// * `body` - The exact body bytes that will be sent, if any
///
/// # Example
///
/// ```rust,no_run
/// use fireblocks_api_client::auth::{Credentials, sign_request};
/// use reqwest::Method;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pem = std::fs::read_to_string("fireblocks_secret.key")?;
/// let credentials = Credentials::from_pem("api_key", &pem)?;
/// let headers = sign_request(&credentials, &Method::GET, "/v1/supported_assets", None)?;
/// println!("{}", headers.api_key);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    method: &Method,
    uri: &str,
    body: Option<&[u8]>,
) -> Result<AuthHeaders, FireblocksError> {
    if !uri.starts_with('/') {
        return Err(FireblocksError::Encode(format!(
            "request URI must be a path without host, got {uri:?}"
        )));
    }

    let body_hash = body_hash(body.unwrap_or_default());

    // Only the clock read is serialized; RSA signing runs unlocked.
    let stamp = credentials.nonce_clock().next_stamp();
    let claims = Claims::new(uri, stamp, &credentials.api_key, body_hash);

    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::RS256),
        &claims,
        credentials.signing_key(),
    )?;
    tracing::trace!(%method, uri, nonce = claims.nonce, "signed request");

    Ok(AuthHeaders {
        api_key: credentials.api_key.clone(),
        authorization: format!("Bearer {token}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credentials::tests::TEST_PRIVATE_KEY;
    use jsonwebtoken::{DecodingKey, Validation, decode, decode_header};

    const TEST_PUBLIC_KEY: &str = include_str!("../../tests/fixtures/test_public_key.pem");
    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn credentials() -> Credentials {
        Credentials::from_pem("test_key", TEST_PRIVATE_KEY).unwrap()
    }

    fn claims_of(headers: &AuthHeaders) -> Claims {
        let key = DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap();
        decode::<Claims>(headers.token(), &key, &Validation::new(Algorithm::RS256))
            .unwrap()
            .claims
    }

    #[test]
    fn test_token_verifies_with_public_key() {
        let headers = sign_request(&credentials(), &Method::GET, "/v1/vault/assets", None).unwrap();
        assert_eq!(headers.api_key, "test_key");
        assert!(headers.authorization.starts_with("Bearer "));

        let header = decode_header(headers.token()).unwrap();
        assert_eq!(header.alg, Algorithm::RS256);

        let claims = claims_of(&headers);
        assert_eq!(claims.uri, "/v1/vault/assets");
        assert_eq!(claims.sub, "test_key");
        assert_eq!(claims.body_hash, EMPTY_SHA256);
    }

    #[test]
    fn test_expiry_window() {
        let headers =
            sign_request(&credentials(), &Method::POST, "/v1/transactions", Some(b"{}")).unwrap();
        let claims = claims_of(&headers);
        assert_eq!(claims.exp - claims.iat, TOKEN_LIFETIME_SECS);
        assert_eq!(claims.iat, claims.nonce / 1_000_000_000);
    }

    #[test]
    fn test_body_hash_deterministic() {
        let body = br#"{"assetId":"BTC","amount":"1"}"#;
        assert_eq!(body_hash(body), body_hash(body));
        assert_ne!(body_hash(body), body_hash(br#"{"assetId":"ETH","amount":"1"}"#));
        assert_eq!(body_hash(b""), EMPTY_SHA256);
    }

    #[test]
    fn test_body_hash_claim_tracks_body() {
        let creds = credentials();
        let post = |body: &[u8]| {
            claims_of(&sign_request(&creds, &Method::POST, "/v1/transactions", Some(body)).unwrap())
        };
        let a = post(br#"{"a":1}"#);
        let b = post(br#"{"a":2}"#);
        let again = post(br#"{"a":1}"#);

        assert_ne!(a.body_hash, b.body_hash);
        assert_eq!(a.body_hash, again.body_hash);
        assert!(again.nonce > a.nonce);
    }

    #[test]
    fn test_method_does_not_change_claims() {
        let creds = credentials();
        let get = claims_of(&sign_request(&creds, &Method::GET, "/v1/x", None).unwrap());
        let delete = claims_of(&sign_request(&creds, &Method::DELETE, "/v1/x", None).unwrap());
        assert_eq!(get.uri, delete.uri);
        assert_eq!(get.body_hash, delete.body_hash);
        assert!(delete.nonce > get.nonce);
    }

    #[test]
    fn test_rejects_absolute_uri() {
        let err = sign_request(&credentials(), &Method::GET, "https://api.fireblocks.io/v1/x", None)
            .unwrap_err();
        assert!(matches!(err, FireblocksError::Encode(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let headers = sign_request(&credentials(), &Method::GET, "/v1/vault/assets", None).unwrap();
        let debug_str = format!("{:?}", headers);
        assert!(!debug_str.contains(headers.token()));
    }
}
