//! Error formatting utilities for emojipack
//!
//! This module converts internal errors into clear, actionable messages for
//! CLI users.

use super::*;
use crate::fetch::FetchError;

/// Keywords that indicate network-related errors
const NETWORK_ERROR_KEYWORDS: &[&str] = &["network", "connection", "timed out", "dns"];

/// Keywords that indicate permission-related errors
const PERMISSION_ERROR_KEYWORDS: &[&str] = &["permission", "denied", "access"];

/// Convert any error into a user-friendly format with contextual suggestions
///
/// The error chain is walked looking for an [`EmojiPackError`] (which may be
/// wrapped by `anyhow` context) or a bare [`FetchError`]. Anything else falls
/// back to keyword matching on the rendered message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let mut current_error: &dyn std::error::Error = error.as_ref();
    loop {
        if let Some(pack_error) = current_error.downcast_ref::<EmojiPackError>() {
            return create_error_context(pack_error);
        }

        if let Some(fetch_error) = current_error.downcast_ref::<FetchError>() {
            return create_error_context(&EmojiPackError::UpstreamFetchError {
                endpoint: fetch_error.location().to_string(),
                source: fetch_error.clone(),
            });
        }

        if let Some(toml_error) = current_error.downcast_ref::<toml::de::Error>() {
            return ErrorContext::new(EmojiPackError::ConfigError {
                message: format!("{error:#}"),
            })
            .with_suggestion("Check the syntax of your emojipack config file - TOML format must be valid")
            .with_details(toml_error.message().to_string());
        }

        match current_error.source() {
            Some(source) => current_error = source,
            None => break,
        }
    }

    let error_msg = format!("{error:#}");
    let lowered = error_msg.to_lowercase();

    if NETWORK_ERROR_KEYWORDS.iter().any(|&keyword| lowered.contains(keyword)) {
        return ErrorContext::new(EmojiPackError::Other {
            message: error_msg,
        })
        .with_suggestion("Check your internet connection and try again");
    }

    if PERMISSION_ERROR_KEYWORDS.iter().any(|&keyword| lowered.contains(keyword)) {
        return ErrorContext::new(EmojiPackError::Other {
            message: error_msg,
        })
        .with_suggestion("Check file permissions and try running with appropriate privileges");
    }

    ErrorContext::new(EmojiPackError::Other {
        message: error_msg,
    })
}

/// Build the [`ErrorContext`] for a typed pipeline error.
pub fn create_error_context(error: &EmojiPackError) -> ErrorContext {
    match error {
        EmojiPackError::InvalidLocation {
            suggestions,
            ..
        } => {
            let context = ErrorContext::new(error.clone()).with_details(
                "A location must be a registered pack name, 'default', or an absolute http:// or https:// URL",
            );
            if suggestions.is_empty() {
                context.with_suggestion("Run 'emojipack packs' to list the registered packs")
            } else {
                let quoted: Vec<String> = suggestions.iter().map(|s| format!("'{s}'")).collect();
                context.with_suggestion(format!("Did you mean {}?", quoted.join(" or ")))
            }
        }
        EmojiPackError::UpstreamFetchError {
            source,
            ..
        } => {
            let suggestion = match source {
                FetchError::Status {
                    status: 404,
                    ..
                } => "Check that the manifest URL is correct",
                FetchError::Status {
                    status,
                    ..
                } if *status >= 500 => "The pack host is having trouble; try again later",
                FetchError::Status {
                    ..
                } => "Check that the manifest is publicly readable",
                FetchError::Transport {
                    ..
                } => "Check your internet connection and try again",
                FetchError::Decode {
                    ..
                } => "The location did not return JSON; check that it points at a manifest file",
                FetchError::Io {
                    ..
                } => "Check that the manifest file exists and is readable",
            };
            ErrorContext::new(error.clone())
                .with_details(source.to_string())
                .with_suggestion(suggestion)
        }
        EmojiPackError::MalformedManifest {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion(
                "Emoji pack manifests must be a JSON array of {\"name\", \"reference\"} records",
            ),
        EmojiPackError::ConfigError {
            ..
        } => ErrorContext::new(error.clone()).with_suggestion(format!(
            "Check your emojipack config file (set {} or pass --config to use another one)",
            crate::constants::CONFIG_PATH_ENV
        )),
        EmojiPackError::Other {
            ..
        } => ErrorContext::new(error.clone()),
    }
}
