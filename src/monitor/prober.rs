//! Lightweight URL accessibility probe.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

/// Default per-probe timeout, matching the monitor's classification rule
/// that a slow origin counts as unreachable.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Existence check against a URL.
///
/// Implementations must fold every failure mode into the boolean result;
/// a probe never errors. The monitor scheduler is the only caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Prober: Send + Sync {
    /// Returns `true` if the URL currently looks reachable.
    async fn probe(&self, url: &str) -> bool;
}

/// HTTP HEAD prober backed by reqwest.
///
/// Sends a HEAD request (headers only, no body transfer) with a hard
/// timeout. Redirects are not followed so a 3xx answer is classified on
/// its own status rather than on wherever it points. Any response is
/// dropped before returning, releasing the connection.
///
/// # Classification
///
/// - Status in `[200, 400)` → accessible
/// - Any other status, transport error, or timeout → inaccessible
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    /// Creates a prober with [`DEFAULT_PROBE_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS backend fails to
    /// initialize.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_timeout(DEFAULT_PROBE_TIMEOUT)
    }

    /// Creates a prober with a custom timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS backend fails to
    /// initialize.
    pub fn with_timeout(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!(url, status, "probe completed");
                is_accessible_status(status)
            }
            Err(e) => {
                debug!(url, error = %e, "probe failed");
                false
            }
        }
    }
}

/// Applies the accessibility classification rule to a raw status code.
fn is_accessible_status(status: u16) -> bool {
    (200..400).contains(&status)
}
