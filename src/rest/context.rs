//! Per-call cancellation and timeout.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::TransportError;

/// Cancellation and timeout applied to every network call a client makes.
///
/// Bind one to a client with [`FireblocksClient::with_context`]; the bound
/// clone shares the connection pool and credentials of the original.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use fireblocks_api_client::rest::{CallContext, FireblocksClient};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn run(client: FireblocksClient) -> Result<(), Box<dyn std::error::Error>> {
/// let token = CancellationToken::new();
/// let scoped = client.with_context(
///     CallContext::new()
///         .with_timeout(Duration::from_secs(10))
///         .with_cancellation(token.clone()),
/// );
///
/// let assets = scoped.get_supported_assets().await?;
/// # Ok(())
/// # }
/// ```
///
/// [`FireblocksClient::with_context`]: crate::rest::FireblocksClient::with_context
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    timeout: Option<Duration>,
    cancellation: Option<CancellationToken>,
}

impl CallContext {
    /// A context with no timeout and no cancellation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort each network call that takes longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Abort in-flight calls once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// The per-call timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The cancellation token, if any.
    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    /// Drive `call`, racing it against the timeout and the cancellation token.
    pub(crate) async fn run<F, T>(&self, call: F) -> Result<T, TransportError>
    where
        F: Future<Output = Result<T, TransportError>>,
    {
        let bounded = async {
            match self.timeout {
                Some(limit) => match tokio::time::timeout(limit, call).await {
                    Ok(result) => result,
                    Err(_) => Err(TransportError::TimedOut(limit)),
                },
                None => call.await,
            }
        };

        match &self.cancellation {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(TransportError::Cancelled),
                    result = bounded => result,
                }
            }
            None => bounded.await,
        }
    }
}
