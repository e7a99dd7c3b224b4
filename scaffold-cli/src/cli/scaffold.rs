//! # Scaffold Command
//!
//! Creates the GitHub repository when needed and writes the project's
//! settings file.

use anyhow::Result;
use clap::Args;
use scaffold_core::{FsYamlWriter, ScaffoldConfig, ScaffoldError, format_url, print_success, print_warning};
use tokio::runtime::Runtime;

use super::project::ProjectArgs;
use crate::clients::github_client;
use crate::scaffold::{ScaffoldOptions, scaffold};

/// Arguments for the scaffold command
#[derive(Args, Debug, Clone)]
pub struct ScaffoldArgs {
  #[command(flatten)]
  pub project: ProjectArgs,

  /// Account that owns the repository, your login or an organization
  #[arg(long, value_name = "ACCOUNT")]
  pub account: Option<String>,

  /// Project type, e.g. `JavaScript`
  #[arg(long, value_name = "TYPE")]
  pub project_type: Option<String>,
}

impl ScaffoldArgs {
  fn into_options(self, config: &ScaffoldConfig) -> Result<ScaffoldOptions> {
    let account = self
      .account
      .or_else(|| config.default_account.clone())
      .ok_or(ScaffoldError::MissingAccount)?;

    Ok(ScaffoldOptions {
      name: self.project.project_name()?,
      project_root: self.project.project_root,
      account,
      description: self.project.description,
      homepage: self.project.homepage,
      project_type: self.project_type,
      visibility: self.project.visibility,
      topics: self.project.topics,
    })
  }
}

/// Handle the scaffold command
pub fn handle_scaffold_command(args: ScaffoldArgs, config: &ScaffoldConfig) -> Result<()> {
  let options = args.into_options(config)?;
  let client = github_client(config)?;

  if client.is_none() {
    print_warning(&format!(
      "No GitHub token found in {}; only the settings file will be written",
      config.netrc_path()?.display()
    ));
  }

  // Create a runtime for async operations
  let rt = Runtime::new()?;
  let result = rt.block_on(scaffold(&options, &FsYamlWriter, client.as_ref()))?;

  if let Some(repository) = &result.repository {
    print_success(&format!("Repository {} is ready", format_url(&repository.html_url)));
    println!("  SSH: {}", repository.ssh_url);
    println!("  URL: {}", repository.html_url);
  }
  print_success(&format!("Wrote {}", result.settings_path.display()));

  Ok(())
}
