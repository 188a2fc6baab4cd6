//! Error handling for emojipack
//!
//! This module provides the typed error returned by the pack pipeline and the
//! user-facing [`ErrorContext`] wrapper used by the CLI. The error system is
//! designed around two principles:
//! 1. **Strongly-typed errors** so callers (a route layer, the CLI) can map
//!    each fatal failure to a distinct response
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Error Categories
//!
//! Only failures that abort a whole pipeline run are errors:
//! - **Location**: [`EmojiPackError::InvalidLocation`]
//! - **Transport**: [`EmojiPackError::UpstreamFetchError`]
//! - **Shape**: [`EmojiPackError::MalformedManifest`]
//! - **Configuration**: [`EmojiPackError::ConfigError`]
//!
//! Malformed individual records and unresolvable aliases are recovered inside
//! the pipeline and never surface here; see [`crate::pack`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use emojipack::core::{EmojiPackError, ErrorContext};
//!
//! let error = EmojiPackError::MalformedManifest {
//!     endpoint: "https://example.com/pack.json".to_string(),
//!     found: "object".to_string(),
//! };
//! let context = ErrorContext::new(error)
//!     .with_suggestion("Point emojipack at a JSON array of emoji records");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::fetch::FetchError;

/// The main error type for emoji pack operations.
///
/// Each variant is fatal to a single pipeline run: no partial
/// [`EmojiSet`](crate::pack::EmojiSet) is produced when one of these is
/// returned.
#[derive(Error, Debug, Clone)]
pub enum EmojiPackError {
    /// The requested location is neither a registered pack name nor an
    /// absolute `http(s)://` URL.
    ///
    /// # Fields
    /// - `location`: The location as given by the caller
    /// - `suggestions`: Registered pack names that are close to `location`
    #[error("'{location}' is not a registered emoji pack or an absolute http(s) URL")]
    InvalidLocation {
        /// The location as given by the caller
        location: String,
        /// Registered pack names similar to the requested one
        suggestions: Vec<String>,
    },

    /// The fetcher failed to retrieve or decode the manifest.
    ///
    /// The underlying [`FetchError`] carries the HTTP status and raw body
    /// text for non-success responses.
    #[error("Failed to fetch emoji pack manifest from {endpoint}")]
    UpstreamFetchError {
        /// The resolved manifest location that was requested
        endpoint: String,
        /// What went wrong while fetching
        #[source]
        source: FetchError,
    },

    /// The manifest decoded fine but is not a JSON array.
    #[error("Invalid manifest at {endpoint}: expected a JSON array, found {found}")]
    MalformedManifest {
        /// The manifest location
        endpoint: String,
        /// JSON type of the document that was returned instead
        found: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Anything else, already formatted for display.
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

/// Error context wrapper that provides user-friendly error information
///
/// `ErrorContext` wraps an [`EmojiPackError`] and adds optional suggestions
/// and details. This is how the CLI presents errors to users.
///
/// # Display Format
///
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context about the error in yellow (optional)
/// 3. **Suggestion**: Actionable steps to resolve the issue in green (optional)
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: EmojiPackError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: EmojiPackError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    ///
    /// Suggestions should be actionable steps the user can take. They are
    /// displayed in green in the terminal.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}
