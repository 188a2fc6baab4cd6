//! Configuration for emojipack.
//!
//! There is a single, optional, user-level TOML file; see [`GlobalConfig`].

mod global;

pub use global::GlobalConfig;
