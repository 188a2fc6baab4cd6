//! emojipack CLI entry point
//!
//! Handles command-line argument parsing, error display, and command
//! execution. Commands:
//! - `packs` - List registered emoji packs
//! - `fetch` - Print the resolved emoji set for a pack
//! - `validate` - Report dropped records and unresolved aliases

use anyhow::Result;
use clap::Parser;
use emojipack::cli;
use emojipack::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            user_friendly_error(e).display();
            std::process::exit(1);
        }
    }
}
