//! Credential management for Fireblocks API authentication.

use std::path::Path;
use std::sync::Arc;

use jsonwebtoken::EncodingKey;
use rsa::RsaPrivateKey;
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::traits::PublicKeyParts;
use secrecy::{ExposeSecret, SecretString};

use crate::auth::NonceClock;
use crate::error::FireblocksError;

/// Default environment variable holding the API key identifier.
pub const API_KEY_VAR: &str = "FIREBLOCKS_API_KEY";
/// Default environment variable holding the PEM-encoded private key.
pub const PRIVATE_KEY_VAR: &str = "FIREBLOCKS_PRIVATE_KEY";
/// Default environment variable holding a path to the PEM-encoded private key.
pub const PRIVATE_KEY_PATH_VAR: &str = "FIREBLOCKS_PRIVATE_KEY_PATH";

// RS256 signing refuses moduli below 2048 bits.
const MIN_KEY_BYTES: usize = 256;

/// API credentials: the key identifier and the parsed RSA signing key.
///
/// The key is parsed once, at construction. Clones share the same nonce
/// clock, so they count as one credential holder.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier, sent as `X-API-Key` and the `sub` claim)
    pub api_key: String,
    signing_key: EncodingKey,
    nonce_clock: Arc<NonceClock>,
}

impl Credentials {
    /// Parse credentials from an API key and a PKCS#8 PEM private key.
    ///
    /// The PEM block must be labelled `PRIVATE KEY` and hold an RSA key of at
    /// least 2048 bits; anything else is a configuration error.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use fireblocks_api_client::auth::Credentials;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let pem = std::fs::read_to_string("fireblocks_secret.key")?;
    /// let credentials = Credentials::from_pem("my-api-key", &pem)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_pem(
        api_key: impl Into<String>,
        private_key_pem: &str,
    ) -> Result<Self, FireblocksError> {
        let private_key = RsaPrivateKey::from_pkcs8_pem(private_key_pem).map_err(|e| {
            FireblocksError::configuration_with("private key is not a valid PKCS#8 RSA PEM", e)
        })?;

        if private_key.size() < MIN_KEY_BYTES {
            return Err(FireblocksError::configuration(format!(
                "RSA private key is {} bits, at least 2048 required",
                private_key.size() * 8
            )));
        }

        let der = private_key.to_pkcs1_der().map_err(|e| {
            FireblocksError::configuration_with("failed to re-encode RSA private key", e)
        })?;

        Ok(Self {
            api_key: api_key.into(),
            signing_key: EncodingKey::from_rsa_der(der.as_bytes()),
            nonce_clock: Arc::new(NonceClock::new()),
        })
    }

    /// Parse credentials from a PEM held in a [`SecretString`].
    pub fn from_secret_pem(
        api_key: impl Into<String>,
        private_key_pem: &SecretString,
    ) -> Result<Self, FireblocksError> {
        Self::from_pem(api_key, private_key_pem.expose_secret())
    }

    pub(crate) fn signing_key(&self) -> &EncodingKey {
        &self.signing_key
    }

    pub(crate) fn nonce_clock(&self) -> &NonceClock {
        &self.nonce_clock
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider from a key and PEM.
    pub fn new(
        api_key: impl Into<String>,
        private_key_pem: &str,
    ) -> Result<Self, FireblocksError> {
        Ok(Self {
            credentials: Credentials::from_pem(api_key, private_key_pem)?,
        })
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Credentials {
    fn get_credentials(&self) -> &Credentials {
        self
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads the key from `FIREBLOCKS_API_KEY` and the PEM from
/// `FIREBLOCKS_PRIVATE_KEY`, falling back to the file named by
/// `FIREBLOCKS_PRIVATE_KEY_PATH`.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    pub fn from_env() -> Result<Self, FireblocksError> {
        Self::from_env_vars(API_KEY_VAR, PRIVATE_KEY_VAR, PRIVATE_KEY_PATH_VAR)
    }

    /// Create credentials from custom environment variable names.
    pub fn from_env_vars(
        key_var: &str,
        pem_var: &str,
        path_var: &str,
    ) -> Result<Self, FireblocksError> {
        let api_key = std::env::var(key_var).map_err(|_| {
            FireblocksError::configuration(format!("environment variable {key_var} not set"))
        })?;

        let pem = match std::env::var(pem_var) {
            Ok(pem) => SecretString::from(pem),
            Err(_) => {
                let path = std::env::var(path_var).map_err(|_| {
                    FireblocksError::configuration(format!(
                        "neither {pem_var} nor {path_var} is set"
                    ))
                })?;
                read_pem_file(Path::new(&path))?
            }
        };

        Ok(Self {
            credentials: Credentials::from_secret_pem(api_key, &pem)?,
        })
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if the API key variable is not set.
    pub fn try_from_env() -> Option<Result<Self, FireblocksError>> {
        std::env::var(API_KEY_VAR).ok()?;
        Some(Self::from_env())
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

fn read_pem_file(path: &Path) -> Result<SecretString, FireblocksError> {
    std::fs::read_to_string(path)
        .map(SecretString::from)
        .map_err(|e| {
            FireblocksError::configuration_with(
                format!("failed to read private key from {}", path.display()),
                e,
            )
        })
}
