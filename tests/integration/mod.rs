//! Integration test suite for emojipack
//!
//! End-to-end tests that run the `emojipack` binary against pack manifests
//! written to a temporary directory, or served from a loopback HTTP listener.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **packs**: Pack listing and config handling
//! - **fetch**: Building and printing resolved emoji sets
//! - **validate**: Validation reports and `--strict`

#[path = "../common/mod.rs"]
mod common;

mod fetch;
mod packs;
mod validate;
