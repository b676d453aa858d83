//! Error types for the Fireblocks client library.

use std::borrow::Cow;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// The main error type for all Fireblocks client operations.
#[derive(Error, Debug)]
pub enum FireblocksError {
    /// The client could not be built (bad private key, missing credentials).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What was wrong with the configuration
        message: String,
        /// Underlying parse failure, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The bearer token could not be signed
    #[error("Failed to sign request: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// No server response is available (network failure, cancellation, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-success status
    #[error("Fireblocks API error: {0}")]
    Api(ApiError),

    /// The response body did not match the expected JSON shape
    #[error("Failed to decode response: {source}")]
    Decode {
        /// The JSON error
        #[source]
        source: serde_json::Error,
        /// The raw response body
        body: String,
    },

    /// A request body or query could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// An error from a lower layer, tagged with the operation that hit it
    #[error("{context}: {source}")]
    Context {
        /// Operation description, e.g. `"retrieve vault account 7"`
        context: String,
        /// The wrapped error
        #[source]
        source: Box<FireblocksError>,
    },
}

impl FireblocksError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn configuration_with<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub(crate) fn decode(source: serde_json::Error, body: &[u8]) -> Self {
        Self::Decode {
            source,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// Wrap this error with operation-identifying context.
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any context layers.
    pub fn root(&self) -> &FireblocksError {
        let mut current = self;
        while let FireblocksError::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// The API error at the root of this error, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self.root() {
            FireblocksError::Api(api) => Some(api),
            _ => None,
        }
    }

    /// The transport error at the root of this error, if any.
    pub fn transport_error(&self) -> Option<&TransportError> {
        match self.root() {
            FireblocksError::Transport(err) => Some(err),
            _ => None,
        }
    }

    /// Check if no server response was obtained.
    pub fn is_transport(&self) -> bool {
        self.transport_error().is_some()
    }

    /// Check if the response body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self.root(), FireblocksError::Decode { .. })
    }

    /// Check if the client configuration was rejected.
    pub fn is_configuration(&self) -> bool {
        matches!(self.root(), FireblocksError::Configuration { .. })
    }

    /// Check if the token signing step failed.
    pub fn is_signing(&self) -> bool {
        matches!(self.root(), FireblocksError::Signing(_))
    }
}

/// Extension for attaching operation context to fallible results.
pub trait ResultExt<T> {
    /// Wrap the error (if any) with `context`.
    fn context(self, context: impl Into<String>) -> Result<T, FireblocksError>;

    /// Like [`ResultExt::context`], but only builds the message on failure.
    fn with_context<F, S>(self, f: F) -> Result<T, FireblocksError>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> ResultExt<T> for Result<T, FireblocksError> {
    fn context(self, context: impl Into<String>) -> Result<T, FireblocksError> {
        self.map_err(|e| e.context(context))
    }

    fn with_context<F, S>(self, f: F) -> Result<T, FireblocksError>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| e.context(f()))
    }
}

/// Failures where no interpretable server response exists.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request could not be sent (DNS, connect, TLS, reset)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest_middleware::Error),

    /// The response body could not be read
    #[error("Failed to read response body: {0}")]
    Body(#[from] reqwest::Error),

    /// The caller's cancellation token fired
    #[error("Request cancelled")]
    Cancelled,

    /// The per-call timeout elapsed
    #[error("Request timed out after {0:?}")]
    TimedOut(Duration),
}

impl TransportError {
    /// Check if this error came from the caller cancelling or timing out.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, TransportError::Cancelled | TransportError::TimedOut(_))
    }
}

/// A well-formed non-success response from the Fireblocks API.
///
/// The body is kept byte for byte; the platform does not guarantee a JSON
/// shape, or even UTF-8, for every error status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

/// The error payload Fireblocks usually returns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlatformError {
    /// Human-readable error message
    pub message: String,
    /// Numeric platform error code
    #[serde(default)]
    pub code: Option<i64>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.text())
    }
}

impl ApiError {
    /// Create a new API error from a status and raw body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Try to decode the body as the platform's `{"message", "code"}` payload.
    pub fn platform_error(&self) -> Option<PlatformError> {
        serde_json::from_slice(&self.body).ok()
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }

    /// Check if the credentials were rejected.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401 || self.status == 403
    }

    /// Check if the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if the platform failed internally.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}
