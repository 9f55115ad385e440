//! Configuration management for SecondServe.
//!
//! Loads configuration from ${SECONDSERVE_HOME}/config.toml with sensible
//! defaults. The backend base URL is a configurable option, never a
//! hardcoded deployment host.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Policy for surfacing failures of periodic background refresh.
///
/// The initial load of a screen always reports its errors; this controls
/// what happens when a later automatic poll fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RefreshFailurePolicy {
    /// Only the initial load alerts; background poll failures are logged.
    #[default]
    InitialOnly,
    /// Every refresh failure alerts the user.
    Always,
    /// No refresh failure ever alerts, including the initial load.
    Never,
}

impl RefreshFailurePolicy {
    /// Returns whether a failure should be surfaced to the user.
    pub fn should_alert(self, initial_load: bool) -> bool {
        match self {
            RefreshFailurePolicy::InitialOnly => initial_load,
            RefreshFailurePolicy::Always => true,
            RefreshFailurePolicy::Never => false,
        }
    }
}

pub mod paths {
    //! Path resolution for SecondServe configuration.
    //!
    //! SECONDSERVE_HOME resolution order:
    //! 1. SECONDSERVE_HOME environment variable (if set)
    //! 2. ~/.config/secondserve (default)

    use std::path::PathBuf;

    /// Returns the SecondServe home directory.
    pub fn secondserve_home() -> PathBuf {
        if let Ok(home) = std::env::var("SECONDSERVE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("secondserve"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        secondserve_home().join("config.toml")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend base URL.
    pub base_url: String,

    /// HTTP request timeout in seconds (0 disables).
    pub request_timeout_secs: u32,

    /// Interval for periodic screen refresh in seconds.
    pub refresh_interval_secs: u32,

    /// When refresh failures are surfaced to the user.
    pub alert_on_refresh_failure: RefreshFailurePolicy,
}

impl Config {
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
    const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 30;
    const DEFAULT_REFRESH_INTERVAL_SECS: u32 = 30;

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
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

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        let contents =
            toml::to_string_pretty(&Config::default()).context("Failed to serialize defaults")?;
        Self::write_config(path, &contents)
    }

    /// Saves only the base_url field to a specific config file path.
    ///
    /// Creates the file if it doesn't exist. Preserves existing fields and
    /// comments using toml_edit.
    pub fn save_base_url_to(path: &Path, base_url: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            toml::to_string_pretty(&Config::default()).context("Failed to serialize defaults")?
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        doc["base_url"] = value(base_url);

        Self::write_config(path, &doc.to_string())
    }

    /// Resolves the effective base URL with precedence: env > config > default.
    ///
    /// The SECONDSERVE_BASE_URL environment variable wins so a deployment can
    /// be repointed without touching the config file.
    pub fn resolve_base_url(&self) -> Result<String> {
        if let Ok(env_url) = std::env::var("SECONDSERVE_BASE_URL") {
            let trimmed = env_url.trim();
            if !trimmed.is_empty() {
                validate_url(trimmed)?;
                return Ok(trimmed.trim_end_matches('/').to_string());
            }
        }

        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            return Ok(Self::DEFAULT_BASE_URL.to_string());
        }
        validate_url(trimmed)?;
        Ok(trimmed.trim_end_matches('/').to_string())
    }

    /// Returns the request timeout, `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(u64::from(self.request_timeout_secs)))
        }
    }

    /// Returns the periodic refresh interval.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.refresh_interval_secs))
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
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
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
            refresh_interval_secs: Self::DEFAULT_REFRESH_INTERVAL_SECS,
            alert_on_refresh_failure: RefreshFailurePolicy::default(),
        }
    }
}

/// Validates that a URL is well-formed.
fn validate_url(url: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid base URL: {url}"))?;
    Ok(())
}
