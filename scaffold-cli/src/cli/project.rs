//! Arguments shared by every command that writes a settings file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use scaffold_core::{SettingsOptions, Visibility};

/// Describes the project being scaffolded
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
  /// Root directory of the project
  #[arg(long, value_name = "DIR", default_value = ".")]
  pub project_root: PathBuf,

  /// Repository name (defaults to the project directory name)
  #[arg(long, value_name = "NAME")]
  pub name: Option<String>,

  /// Short description of the repository
  #[arg(long)]
  pub description: Option<String>,

  /// Homepage URL of the repository
  #[arg(long, value_name = "URL")]
  pub homepage: Option<String>,

  /// Repository visibility, `Public` or `Private`
  #[arg(long, value_name = "VISIBILITY")]
  pub visibility: Option<Visibility>,

  /// Repository topic (repeat or separate with commas)
  #[arg(long = "topic", value_name = "TOPIC", value_delimiter = ',')]
  pub topics: Vec<String>,
}

impl ProjectArgs {
  /// The explicit name, or the final component of the project root
  pub fn project_name(&self) -> Result<String> {
    if let Some(name) = &self.name {
      return Ok(name.clone());
    }

    let root = self
      .project_root
      .canonicalize()
      .with_context(|| format!("Failed to resolve project root {}", self.project_root.display()))?;

    root
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .with_context(|| format!("Cannot derive a repository name from {}; pass --name", root.display()))
  }

  pub fn settings_options(&self) -> Result<SettingsOptions> {
    Ok(SettingsOptions {
      project_root: self.project_root.clone(),
      project_name: self.project_name()?,
      description: self.description.clone(),
      homepage: self.homepage.clone(),
      topics: self.topics.clone(),
      visibility: self.visibility.clone(),
    })
  }
}
