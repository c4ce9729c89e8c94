//! Minimal page fetcher returning a document as trimmed lines.
//!
//! One GET per call, no retries, no custom redirect policy: any transport
//! failure or non-success status is a typed [`FetchError`] for the caller
//! to surface. The body is split on line boundaries with each line
//! whitespace-trimmed, order preserved, which is the shape the analyzer
//! consumes.
//!
//! Observability: structured `tracing` events are emitted for request
//! start, failures, and completion (status, duration, line count).
//!
//! Example (no_run):
//! ```rust
//! # async fn demo() -> Result<(), burrow_http::FetchError> {
//! let client = burrow_http::PageClient::new()?;
//! let lines = client.fetch_lines("https://example.com/").await?;
//! # let _ = lines; Ok(()) }
//! ```

use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("request build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned error {0}")]
    Status(StatusCode),
}

/// HTTP client handing back response bodies as ordered, trimmed lines.
#[derive(Clone)]
pub struct PageClient {
    inner: Client,
    pub default_timeout: Duration,
}

impl PageClient {
    /// Construct a client with a 5s connect timeout and a 15s request
    /// timeout.
    ///
    /// ```no_run
    /// use burrow_http::{FetchError, PageClient};
    /// use std::time::Duration;
    ///
    /// let client = PageClient::new()?;
    /// assert_eq!(client.default_timeout, Duration::from_secs(15));
    /// # Ok::<(), FetchError>(())
    /// ```
    pub fn new() -> Result<Self, FetchError> {
        let inner = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| FetchError::Build(e.to_string()))?;
        Ok(Self {
            inner,
            default_timeout: Duration::from_secs(15),
        })
    }

    /// Override the default request timeout returned by [`PageClient::new`].
    ///
    /// ```no_run
    /// use burrow_http::{FetchError, PageClient};
    /// use std::time::Duration;
    ///
    /// let client = PageClient::new()?.with_timeout(Duration::from_secs(2));
    /// assert_eq!(client.default_timeout, Duration::from_secs(2));
    /// # Ok::<(), FetchError>(())
    /// ```
    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.default_timeout = dur;
        self
    }

    /// GET `url` and return its body as trimmed lines in document order.
    ///
    /// The address is validated before any request goes out. A non-success
    /// status is [`FetchError::Status`]; send and body-read failures are
    /// [`FetchError::Network`]. There is exactly one attempt per call.
    pub async fn fetch_lines(&self, url: &str) -> Result<Vec<String>, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::Url(e.to_string()))?;

        tracing::debug!(
            host_path = %format!("{}{}", url.domain().unwrap_or("-"), url.path()),
            timeout_ms = self.default_timeout.as_millis() as u64,
            "fetch.start"
        );

        let t0 = std::time::Instant::now();
        let resp = self
            .inner
            .get(url.clone())
            .timeout(self.default_timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(message = %e, "fetch.network_error.send");
                FetchError::Network(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, "fetch.error_status");
            return Err(FetchError::Status(status));
        }

        let body = resp.text().await.map_err(|e| {
            tracing::warn!(message = %e, "fetch.network_error.body");
            FetchError::Network(e.to_string())
        })?;

        let lines: Vec<String> = body.lines().map(|l| l.trim().to_string()).collect();
        tracing::debug!(
            %status,
            duration_ms = t0.elapsed().as_millis() as u64,
            line_count = lines.len(),
            "fetch.done"
        );
        Ok(lines)
    }
}
