//! # Settings Scaffolding
//!
//! Produces the declarative `.github/settings.yml` file describing the
//! desired repository metadata. The document extends the organization-wide
//! `.github` settings template and only overrides repository fields.

use std::future::Future;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::consts::{SETTINGS_DIR, SETTINGS_EXTENDS, SETTINGS_FILE};
use crate::visibility::Visibility;

/// Root of the settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsDocument {
  #[serde(rename = "_extends")]
  pub extends: String,
  pub repository: RepositorySettings,
}

/// Repository block of the settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySettings {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub homepage: Option<String>,
  pub private: bool,
  pub topics: String,
}

/// Input to [`scaffold_settings`]
#[derive(Debug, Clone, Default)]
pub struct SettingsOptions {
  pub project_root: PathBuf,
  pub project_name: String,
  pub description: Option<String>,
  pub homepage: Option<String>,
  pub topics: Vec<String>,
  pub visibility: Option<Visibility>,
}

impl SettingsDocument {
  /// Build the document for the given project
  pub fn from_options(options: &SettingsOptions) -> Self {
    Self {
      extends: SETTINGS_EXTENDS.to_string(),
      repository: RepositorySettings {
        name: options.project_name.clone(),
        description: options.description.clone(),
        homepage: options.homepage.clone(),
        private: Visibility::settings_private(options.visibility.as_ref()),
        topics: options.topics.join(", "),
      },
    }
  }
}

/// Path of the settings file inside `project_root`
pub fn settings_path(project_root: &Path) -> PathBuf {
  project_root.join(SETTINGS_DIR).join(SETTINGS_FILE)
}

/// Serializes values as YAML files
pub trait YamlWriter {
  /// Write `value` to `path`, replacing any existing file
  fn write_yaml<T: Serialize + Sync>(&self, path: &Path, value: &T) -> impl Future<Output = Result<()>> + Send;
}

/// Writes YAML to the local filesystem, creating parent directories
#[derive(Debug, Clone, Copy, Default)]
pub struct FsYamlWriter;

impl YamlWriter for FsYamlWriter {
  async fn write_yaml<T: Serialize + Sync>(&self, path: &Path, value: &T) -> Result<()> {
    let yaml = serde_yaml::to_string(value).context("Failed to serialize settings to YAML")?;

    if let Some(parent) = path.parent() {
      tokio::fs::create_dir_all(parent)
        .await
        .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    tokio::fs::write(path, yaml)
      .await
      .with_context(|| format!("Failed to write {}", path.display()))?;

    debug!("Wrote {}", path.display());
    Ok(())
  }
}

/// Write `<project_root>/.github/settings.yml` for the project.
///
/// Returns the path that was written.
pub async fn scaffold_settings<W: YamlWriter>(options: &SettingsOptions, writer: &W) -> Result<PathBuf> {
  let path = settings_path(&options.project_root);
  let document = SettingsDocument::from_options(options);

  writer.write_yaml(&path, &document).await?;
  info!("Scaffolded repository settings at {}", path.display());

  Ok(path)
}
