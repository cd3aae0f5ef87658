//! Configuration management for hookwatch.
//!
//! Loads configuration from ${HOOKWATCH_HOME}/config.toml with sensible
//! defaults. A missing file is not an error; a present but malformed file is.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Viewer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Events endpoint polled by the viewer.
    pub endpoint: String,
    /// Poll period in milliseconds.
    pub poll_interval_ms: u64,
}

impl Config {
    /// Endpoint used when neither config nor flags provide one.
    pub const DEFAULT_ENDPOINT: &'static str = "http://localhost:8000/events";
    /// Default poll period in milliseconds.
    pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

    /// Loads configuration from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a config file from the default template.
    ///
    /// Fails if the file already exists (no silent overwrite).
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// The poll period as a `Duration`.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Parses and validates the configured endpoint.
    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.endpoint)
            .with_context(|| format!("invalid endpoint URL '{}'", self.endpoint))
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            poll_interval_ms: Self::DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

/// Commented template for new config files.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for hookwatch files.
    //!
    //! HOOKWATCH_HOME resolution order:
    //! 1. HOOKWATCH_HOME environment variable (if set)
    //! 2. ~/.config/hookwatch (default)

    use std::path::PathBuf;

    /// Returns the hookwatch home directory.
    ///
    /// Checks HOOKWATCH_HOME env var first, falls back to ~/.config/hookwatch
    pub fn hookwatch_home() -> PathBuf {
        if let Ok(home) = std::env::var("HOOKWATCH_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("hookwatch"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        hookwatch_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        hookwatch_home().join("logs")
    }
}
