//! Pipeline entry point: location in, resolved [`EmojiSet`] out.

use serde_json::Value;
use tracing::{debug, info};

use super::{EmojiSet, ResolveFailure, json_type_name, reduce, resolve_with_report, validate_all};
use crate::core::EmojiPackError;
use crate::fetch::JsonFetcher;
use crate::registry::PackRegistry;

/// Everything a single pipeline run produced.
#[derive(Debug, Clone)]
pub struct LoadedPack {
    /// Location as requested (pack name, `default`, or URL)
    pub location: String,
    /// Manifest location that was actually fetched
    pub endpoint: String,
    /// The resolved set
    pub set: EmojiSet,
    /// Number of elements in the manifest list
    pub total_records: usize,
    /// Elements dropped by validation
    pub dropped_records: usize,
    /// Entries dropped by alias resolution
    pub failures: Vec<ResolveFailure>,
}

/// Builds emoji sets from pack names or manifest URLs.
///
/// Holds the registry used to turn pack names into manifest locations and the
/// fetcher used to retrieve them. Every call runs the whole pipeline from
/// scratch; nothing is cached between calls.
///
/// # Examples
///
/// ```rust,no_run
/// use emojipack::fetch::HttpFetcher;
/// use emojipack::pack::PackLoader;
/// use emojipack::registry::PackRegistry;
///
/// # async fn example() -> anyhow::Result<()> {
/// let loader = PackLoader::new(PackRegistry::builtin(), HttpFetcher::new_default()?);
/// let set = loader.build_emoji_set("default").await?;
/// println!("{} emoji", set.len());
/// # Ok(())
/// # }
/// ```
pub struct PackLoader<F> {
    registry: PackRegistry,
    fetcher: F,
}

impl<F: JsonFetcher> PackLoader<F> {
    pub fn new(registry: PackRegistry, fetcher: F) -> Self {
        Self {
            registry,
            fetcher,
        }
    }

    pub fn registry(&self) -> &PackRegistry {
        &self.registry
    }

    /// Fetch, validate, reduce, and resolve the pack at `location`.
    ///
    /// # Errors
    ///
    /// - [`EmojiPackError::InvalidLocation`] if `location` is neither a
    ///   registered pack name nor an absolute `http(s)://` URL
    /// - [`EmojiPackError::UpstreamFetchError`] if the fetcher fails
    /// - [`EmojiPackError::MalformedManifest`] if the document is not a list
    pub async fn build_emoji_set(&self, location: &str) -> Result<EmojiSet, EmojiPackError> {
        Ok(self.load(location).await?.set)
    }

    /// Like [`Self::build_emoji_set`], but keeps the run's statistics and
    /// per-entry diagnostics.
    pub async fn load(&self, location: &str) -> Result<LoadedPack, EmojiPackError> {
        let endpoint = self.registry.endpoint(location)?;

        info!("Fetching emoji pack {location}: {endpoint}");
        let document = self.fetcher.fetch_json(&endpoint).await.map_err(|source| {
            EmojiPackError::UpstreamFetchError {
                endpoint: endpoint.clone(),
                source,
            }
        })?;

        let records = match document {
            Value::Array(records) => records,
            other => {
                return Err(EmojiPackError::MalformedManifest {
                    endpoint,
                    found: json_type_name(&other).to_string(),
                });
            }
        };

        let validated = validate_all(&records);
        let reduced = reduce(validated.items);
        let resolution = resolve_with_report(&reduced);

        debug!(
            "Pack {location}: {} records, {} dropped, {} unresolved, {} emoji",
            records.len(),
            validated.dropped,
            resolution.failures.len(),
            resolution.set.len()
        );

        Ok(LoadedPack {
            location: location.to_string(),
            endpoint,
            set: resolution.set,
            total_records: records.len(),
            dropped_records: validated.dropped,
            failures: resolution.failures,
        })
    }
}
