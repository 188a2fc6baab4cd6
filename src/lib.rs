//! emojipack - emoji pack manifest pipeline
//!
//! Turns a third-party emoji pack manifest (a JSON list of records) into a
//! clean mapping from emoji name to image reference, where every reference
//! is a direct `http(s)://` URL.
//!
//! # Architecture Overview
//!
//! A pack location goes through four stages:
//! - **Fetch**: the location is turned into a manifest endpoint by the
//!   [`registry`] and the document is retrieved by a [`fetch::JsonFetcher`]
//! - **Validate**: list elements that are not well-formed records are dropped
//! - **Reduce**: records are folded into an [`pack::EmojiSet`]; the last
//!   record with a given name wins
//! - **Resolve**: `alias:<name>` references are replaced by the direct
//!   reference at the end of the chain; cyclic or dangling aliases are removed
//!
//! Only three failures abort a run: an unknown location, a failed fetch, and
//! a manifest that is not a list. Everything else degrades per entry.
//!
//! # Core Modules
//!
//! - [`pack`] - The pipeline stages and [`pack::PackLoader`], its entry point
//! - [`fetch`] - Manifest retrieval over HTTP(S) or from local files
//! - [`registry`] - Named packs and the `default` keyword
//! - [`config`] - User configuration (`~/.emojipack/config.toml`)
//! - [`core`] - Error types and user-facing error formatting
//! - [`cli`] - Command-line interface
//!
//! # Manifest Format
//!
//! ```json
//! [
//!   { "name": "party", "reference": "https://cdn.example.com/party.png" },
//!   { "name": "tada", "reference": "alias:party", "backupReference": "https://cdn.example.com/tada.png" }
//! ]
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! # List registered packs
//! emojipack packs
//!
//! # Print the resolved set of the default pack
//! emojipack fetch default
//!
//! # Check a pack before publishing it
//! emojipack validate https://example.com/pack.json --strict
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod fetch;
pub mod pack;
pub mod registry;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
