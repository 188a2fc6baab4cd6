//! Core types for emojipack
//!
//! This module holds the error handling shared by the pipeline and the CLI:
//! - **Strongly-typed errors** ([`EmojiPackError`]) for precise handling in code
//!   and distinct mapping of transport, shape, and location failures
//! - **User-friendly contexts** ([`ErrorContext`]) with actionable suggestions
//!   for CLI users, built by [`user_friendly_error`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use emojipack::core::{EmojiPackError, user_friendly_error};
//! use anyhow::Result;
//!
//! fn example_operation() -> Result<String> {
//!     Err(EmojiPackError::ConfigError {
//!         message: "default pack is not registered".to_string(),
//!     }
//!     .into())
//! }
//!
//! if let Err(e) = example_operation() {
//!     user_friendly_error(e).display();
//! }
//! ```

pub mod error;
mod error_formatting;

pub use error::{EmojiPackError, ErrorContext};
pub use error_formatting::{create_error_context, user_friendly_error};
