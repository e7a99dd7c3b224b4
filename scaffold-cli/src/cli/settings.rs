//! # Settings Command
//!
//! Writes `.github/settings.yml` without contacting GitHub.

use anyhow::Result;
use clap::Args;
use scaffold_core::{FsYamlWriter, print_success, scaffold_settings};
use tokio::runtime::Runtime;

use super::project::ProjectArgs;

/// Arguments for the settings command
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
  #[command(flatten)]
  pub project: ProjectArgs,
}

/// Handle the settings command
pub fn handle_settings_command(args: SettingsArgs) -> Result<()> {
  let options = args.project.settings_options()?;

  let rt = Runtime::new()?;
  let path = rt.block_on(scaffold_settings(&options, &FsYamlWriter))?;

  print_success(&format!("Wrote {}", path.display()));
  Ok(())
}
