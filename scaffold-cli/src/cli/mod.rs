//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for gh-scaffold.

mod check;
mod project;
mod scaffold;
mod settings;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use scaffold_core::{ColorMode, ConfigDirs, ScaffoldConfig};

/// Top-level CLI command for gh-scaffold
#[derive(Parser)]
#[command(name = "gh-scaffold")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Create a GitHub repository and scaffold its settings file")]
#[command(
  long_about = "gh-scaffold makes sure a GitHub repository exists for your project and writes\n\
        a .github/settings.yml describing how the repository should be configured.\n\n\
        The GitHub token is read from the `login` of the `machine api.github.com`\n\
        entry in your .netrc file."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Read configuration from this file instead of the default location
  #[arg(long, value_name = "PATH", global = true)]
  pub config: Option<PathBuf>,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for gh-scaffold
#[derive(Subcommand)]
pub enum Commands {
  /// Create the GitHub repository and write its settings file
  #[command(long_about = "Ensure the GitHub repository exists and write .github/settings.yml.\n\n\
            The repository is created in the given account when it does not exist yet;\n\
            an existing repository is left untouched and its URLs are reported. The\n\
            account must be your own login or one of your organizations. Without a\n\
            GitHub token only the settings file is written.")]
  Scaffold(scaffold::ScaffoldArgs),

  /// Only write the settings file
  #[command(long_about = "Write .github/settings.yml for the project without contacting GitHub.")]
  Settings(settings::SettingsArgs),

  /// Verify the GitHub token in your .netrc
  #[command(long_about = "Verify that the token stored for machine api.github.com works.\n\n\
            Fetches the authenticated user and prints the login on success.")]
  Check,
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  match cli.command {
    Commands::Scaffold(args) => scaffold::handle_scaffold_command(args, &load_config(cli.config.as_deref())?),
    Commands::Settings(args) => settings::handle_settings_command(args),
    Commands::Check => check::handle_check_command(&load_config(cli.config.as_deref())?),
  }
}

/// Load configuration from `path` or the default location, then apply
/// environment overrides
fn load_config(path: Option<&Path>) -> Result<ScaffoldConfig> {
  let config = match path {
    Some(path) if !path.exists() => {
      return Err(anyhow::anyhow!("Configuration file {} does not exist", path.display()));
    }
    Some(path) => ScaffoldConfig::load_from(path)?,
    None => ConfigDirs::new()?.load_config()?,
  };

  Ok(config.with_env_overrides())
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_missing_explicit_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = load_config(Some(&temp_dir.path().join("nope.toml"))).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
  }

  #[test]
  fn test_explicit_config_is_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "default_account = \"acme\"\n").unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.default_account.as_deref(), Some("acme"));
  }
}
