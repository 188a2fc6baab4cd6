//! Common test utilities for emojipack integration tests
//!
//! Every [`TestProject`] owns a temporary directory holding its config file
//! and pack manifests, so tests never read the developer's own
//! `~/.emojipack/config.toml`.

// Not every helper is used by every test module
#![allow(dead_code)]

use anyhow::{Context, Result};
use emojipack::config::GlobalConfig;
use serde_json::Value;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread;
use tempfile::TempDir;

/// Test project with an isolated config file and pack directory
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    root: PathBuf,
    config_path: PathBuf,
    packs_dir: PathBuf,
}

impl TestProject {
    /// Create a new test project. No config file is written yet.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().to_path_buf();
        let config_path = root.join("config.toml");
        let packs_dir = root.join("packs");

        fs::create_dir_all(&packs_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            root,
            config_path,
            packs_dir,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write a pack manifest and return its path
    pub fn write_pack(&self, name: &str, document: &Value) -> Result<PathBuf> {
        let path = self.packs_dir.join(format!("{name}.json"));
        fs::write(&path, serde_json::to_string_pretty(document)?)
            .with_context(|| format!("Failed to write pack {}", path.display()))?;
        Ok(path)
    }

    /// Write raw text as a pack manifest and return its path
    pub fn write_raw_pack(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.packs_dir.join(format!("{name}.json"));
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write `config` as the project's config file
    pub fn write_config(&self, config: &GlobalConfig) -> Result<()> {
        let content = toml::to_string(config).context("Failed to serialize config")?;
        self.write_raw_config(&content)
    }

    pub fn write_raw_config(&self, content: &str) -> Result<()> {
        fs::write(&self.config_path, content).context("Failed to write config")
    }

    /// Register `packs` in the config file, optionally choosing the default
    pub fn register_packs(&self, packs: &[(&str, &str)], default_pack: Option<&str>) -> Result<()> {
        let mut config = GlobalConfig {
            default_pack: default_pack.map(str::to_string),
            fetch_timeout_secs: 5,
            fetch_retries: 0,
            ..GlobalConfig::default()
        };
        for (name, location) in packs {
            config.packs.insert((*name).to_string(), (*location).to_string());
        }
        self.write_config(&config)
    }

    /// Build an `emojipack` command bound to this project's config
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("emojipack").unwrap();
        cmd.current_dir(&self.root)
            .env("EMOJIPACK_CONFIG", &self.config_path)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        for proxy in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"]
        {
            cmd.env_remove(proxy);
        }
        cmd
    }

    /// Run `emojipack` with the given arguments and capture its output
    pub fn run_emojipack(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = self.command().args(args).output().context("Failed to run emojipack")?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

/// Command output helper
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Assert the command succeeded
    pub fn assert_success(&self) -> &Self {
        assert!(self.success, "Command failed with code {:?}\nStderr: {}", self.code, self.stderr);
        self
    }

    /// Assert the command failed
    pub fn assert_failure(&self) -> &Self {
        assert!(!self.success, "Command unexpectedly succeeded\nStdout: {}", self.stdout);
        self
    }

    /// Assert stdout contains the given text
    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Expected stdout to contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }

    /// Assert stderr contains the given text
    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "Expected stderr to contain '{}'\nActual stderr: {}",
            text,
            self.stderr
        );
        self
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON: {e}\n{}", self.stdout))
    }
}

/// Serve a single HTTP response on a loopback port and return its URL.
///
/// The listener thread answers the first request and exits.
pub fn serve_once(status: u16, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while let Ok(n) = stream.read(&mut buf) {
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}/pack.json")
}
