//! # Configuration Management
//!
//! Loads the optional `config.toml` from the platform configuration directory
//! and layers environment overrides on top of it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::consts::{DEFAULT_API_URL, ENV_API_URL, ENV_NETRC};
use crate::creds::netrc::get_netrc_path;

/// Configuration directories for gh-scaffold
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance
  pub fn new() -> Result<Self> {
    let proj_dirs =
      ProjectDirs::from("eddieland", "", "gh-scaffold").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Get the config directory
  pub fn config_dir(&self) -> &PathBuf {
    &self.config_dir
  }

  /// Get the path to the configuration file
  pub fn config_path(&self) -> PathBuf {
    self.config_dir.join("config.toml")
  }

  /// Load the configuration file, falling back to defaults when it is absent
  pub fn load_config(&self) -> Result<ScaffoldConfig> {
    ScaffoldConfig::load_from(&self.config_path())
  }
}

/// User-level settings for gh-scaffold
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
  /// Base URL of the GitHub REST API
  pub api_url: Option<String>,
  /// Location of the netrc file holding the GitHub token
  pub netrc_path: Option<PathBuf>,
  /// Account used when none is passed on the command line
  pub default_account: Option<String>,
}

impl ScaffoldConfig {
  /// Load configuration from `path`, returning defaults if it does not exist
  pub fn load_from(path: &Path) -> Result<Self> {
    if !path.exists() {
      debug!("No configuration file at {}, using defaults", path.display());
      return Ok(Self::default());
    }

    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: Self =
      toml::from_str(&content).with_context(|| format!("Failed to parse config from {}", path.display()))?;

    debug!("Loaded configuration from {}", path.display());
    Ok(config)
  }

  /// Apply environment overrides from the process environment
  pub fn with_env_overrides(self) -> Self {
    self.with_overrides(|key| std::env::var(key).ok())
  }

  /// Apply overrides using `lookup` to read variables
  pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
    if let Some(api_url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
      debug!("Using GitHub API URL from {ENV_API_URL}");
      self.api_url = Some(api_url);
    }
    if let Some(netrc) = lookup(ENV_NETRC).filter(|v| !v.trim().is_empty()) {
      debug!("Using netrc path from {ENV_NETRC}");
      self.netrc_path = Some(PathBuf::from(netrc));
    }
    self
  }

  /// The validated GitHub API base URL, without a trailing slash
  pub fn api_url(&self) -> Result<String> {
    let raw = self.api_url.as_deref().unwrap_or(DEFAULT_API_URL).trim();
    let url = Url::parse(raw).with_context(|| format!("Invalid GitHub API URL: '{raw}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
      return Err(anyhow::anyhow!("GitHub API URL must use http or https: '{raw}'"));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
  }

  /// The netrc file to read, defaulting to `~/.netrc`
  pub fn netrc_path(&self) -> Result<PathBuf> {
    match &self.netrc_path {
      Some(path) => Ok(path.clone()),
      None => {
        let base_dirs = BaseDirs::new().context("Could not determine the home directory")?;
        Ok(get_netrc_path(base_dirs.home_dir()))
      }
    }
  }
}
