//! Test utilities for emojipack
//!
//! Helpers shared by unit tests and (through the `test-utils` feature)
//! integration tests:
//! - [`init_test_logging`] wires `tracing` output into the test harness
//! - [`StaticFetcher`] serves canned manifests without touching the network
//!
//! # Example
//!
//! ```rust,no_run
//! use emojipack::pack::PackLoader;
//! use emojipack::registry::PackRegistry;
//! use emojipack::test_utils::StaticFetcher;
//! use serde_json::json;
//!
//! # async fn example() {
//! let fetcher = StaticFetcher::new().with_document(
//!     "https://example.com/pack.json",
//!     json!([{"name": "a", "reference": "https://x/a.png"}]),
//! );
//! let loader = PackLoader::new(PackRegistry::builtin(), fetcher);
//! let set = loader.build_emoji_set("https://example.com/pack.json").await.unwrap();
//! assert_eq!(set.len(), 1);
//! # }
//! ```

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, Once};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::fetch::{FetchError, JsonFetcher};

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. Uses `level` if given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// In-memory [`JsonFetcher`].
///
/// Unknown locations answer like a server would: HTTP 404 with a `Not Found`
/// body. Every requested location is recorded.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    responses: HashMap<String, Result<Value, FetchError>>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `document` at `location`.
    #[must_use]
    pub fn with_document(mut self, location: impl Into<String>, document: Value) -> Self {
        self.responses.insert(location.into(), Ok(document));
        self
    }

    /// Fail requests for `location` with `error`.
    #[must_use]
    pub fn with_failure(mut self, location: impl Into<String>, error: FetchError) -> Self {
        self.responses.insert(location.into(), Err(error));
        self
    }

    /// Locations requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|requests| requests.clone()).unwrap_or_default()
    }
}

impl JsonFetcher for StaticFetcher {
    async fn fetch_json(&self, location: &str) -> Result<Value, FetchError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(location.to_string());
        }

        self.responses.get(location).cloned().unwrap_or_else(|| {
            Err(FetchError::Status {
                location: location.to_string(),
                status: 404,
                body: "Not Found".to_string(),
            })
        })
    }
}
