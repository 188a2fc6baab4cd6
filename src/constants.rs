//! Global constants used throughout the emojipack codebase.
//!
//! Reference prefixes, registry keywords, and the timeout and retry
//! parameters used by the manifest fetcher live here so they are easy to find.

/// Prefix marking a reference as an alias of another entry in the same pack.
///
/// The remainder of the string after the prefix is the name of the target
/// entry, taken verbatim (no trimming, case-sensitive).
pub const ALIAS_PREFIX: &str = "alias:";

/// URL schemes that make a reference directly usable.
pub const DIRECT_SCHEMES: &[&str] = &["http://", "https://"];

/// Keyword that resolves to the registry's default pack.
pub const DEFAULT_PACK_KEYWORD: &str = "default";

/// Name of the pack selected by the `default` keyword when no configuration
/// overrides it.
pub const BUILTIN_DEFAULT_PACK: &str = "epk-emoji-store";

/// Manifest location of the built-in `epk-emoji-store` pack.
pub const BUILTIN_DEFAULT_PACK_URL: &str =
    "https://storage.googleapis.com/epk-emoji-store/index.json";

/// Default timeout for a single manifest request (30 seconds).
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Default number of retries for connection-level fetch failures.
///
/// HTTP status errors are never retried; the upstream answered.
pub const DEFAULT_FETCH_RETRIES: usize = 2;

/// Starting delay for exponential backoff between fetch retries (100ms).
pub const STARTING_BACKOFF_DELAY_MS: u64 = 100;

/// Maximum backoff delay between fetch retries (2 seconds).
pub const MAX_BACKOFF_DELAY_MS: u64 = 2_000;

/// Maximum Levenshtein distance, as a percentage of the requested name's
/// length, for a registered pack to be offered as a suggestion.
pub const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "EMOJIPACK_CONFIG";
