//! Retrieving manifest JSON from a URL or a local file.
//!
//! The pipeline only needs "give me the JSON document at this location", so
//! that capability is the [`JsonFetcher`] trait. [`HttpFetcher`] is the real
//! implementation:
//!
//! - `http://` and `https://` locations are requested with `reqwest`. A
//!   non-success status is an error carrying the raw response body text.
//!   Connection failures and timeouts are retried with exponential backoff;
//!   status errors are not.
//! - `file://` URLs and anything else are treated as local paths and read with
//!   `tokio::fs`.

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::future::Future;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tokio_retry::RetryIf;
use tokio_retry::strategy::ExponentialBackoff;
use tracing::debug;

use crate::config::GlobalConfig;
use crate::constants::{
    DEFAULT_FETCH_RETRIES, DEFAULT_FETCH_TIMEOUT_SECS, DIRECT_SCHEMES, MAX_BACKOFF_DELAY_MS,
    STARTING_BACKOFF_DELAY_MS,
};

/// Why a manifest could not be retrieved.
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("{location} responded with HTTP {status}: {body}")]
    Status {
        /// Requested location
        location: String,
        /// HTTP status code
        status: u16,
        /// Raw response body text
        body: String,
    },

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("request to {location} failed: {reason}")]
    Transport {
        /// Requested location
        location: String,
        /// Underlying transport error
        reason: String,
    },

    /// The response body is not valid JSON.
    #[error("{location} did not return valid JSON: {reason}")]
    Decode {
        /// Requested location
        location: String,
        /// Decoder error
        reason: String,
    },

    /// A local manifest file could not be read.
    #[error("failed to read {location}: {reason}")]
    Io {
        /// Path that was read
        location: String,
        /// Underlying I/O error
        reason: String,
    },
}

impl FetchError {
    /// The location the failed request was for.
    pub fn location(&self) -> &str {
        match self {
            Self::Status {
                location,
                ..
            }
            | Self::Transport {
                location,
                ..
            }
            | Self::Decode {
                location,
                ..
            }
            | Self::Io {
                location,
                ..
            } => location,
        }
    }
}

/// Anything that can turn a location into a decoded JSON document.
pub trait JsonFetcher {
    /// Retrieve and decode the JSON document at `location`.
    fn fetch_json(&self, location: &str) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// Returns true for locations that must be fetched over HTTP.
pub fn is_remote(location: &str) -> bool {
    DIRECT_SCHEMES.iter().any(|scheme| location.starts_with(scheme))
}

/// [`JsonFetcher`] backed by `reqwest` and the local filesystem.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    retries: usize,
}

impl HttpFetcher {
    /// Create a fetcher with a per-request timeout and a retry budget for
    /// connection-level failures.
    pub fn new(timeout: Duration, retries: usize) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport {
                location: String::new(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            retries,
        })
    }

    /// Create a fetcher with the default timeout and retry budget.
    pub fn new_default() -> Result<Self, FetchError> {
        Self::new(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS), DEFAULT_FETCH_RETRIES)
    }

    /// Create a fetcher using the timeout and retry settings from `config`.
    pub fn from_config(config: &GlobalConfig) -> Result<Self, FetchError> {
        Self::new(Duration::from_secs(config.fetch_timeout_secs), config.fetch_retries)
    }

    async fn fetch_remote(&self, url: &str) -> Result<Value, FetchError> {
        let strategy = ExponentialBackoff::from_millis(STARTING_BACKOFF_DELAY_MS)
            .factor(2)
            .max_delay(Duration::from_millis(MAX_BACKOFF_DELAY_MS))
            .take(self.retries);

        let response = RetryIf::spawn(
            strategy,
            || {
                debug!("GET {url}");
                self.client.get(url).header(CONTENT_TYPE, "application/json").send()
            },
            |e: &reqwest::Error| {
                let retry = e.is_connect() || e.is_timeout();
                if retry {
                    debug!("Retrying {url} after transport error: {e}");
                }
                retry
            },
        )
        .await
        .map_err(|e| FetchError::Transport {
            location: url.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                location: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                FetchError::Decode {
                    location: url.to_string(),
                    reason: e.to_string(),
                }
            } else {
                FetchError::Transport {
                    location: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })
    }
}

impl JsonFetcher for HttpFetcher {
    async fn fetch_json(&self, location: &str) -> Result<Value, FetchError> {
        if is_remote(location) {
            self.fetch_remote(location).await
        } else {
            fetch_local(location).await
        }
    }
}

/// Read and decode a manifest from disk. Accepts `file://` URLs.
pub async fn fetch_local(location: &str) -> Result<Value, FetchError> {
    let path = Path::new(location.strip_prefix("file://").unwrap_or(location));
    debug!("Reading manifest from {}", path.display());

    let content = tokio::fs::read_to_string(path).await.map_err(|e| FetchError::Io {
        location: location.to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| FetchError::Decode {
        location: location.to_string(),
        reason: e.to_string(),
    })
}
