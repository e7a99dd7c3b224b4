//! # gh-scaffold Core Library
//!
//! Shared building blocks for gh-scaffold: netrc credential discovery,
//! configuration loading, terminal output helpers, and the settings
//! scaffolder that produces `.github/settings.yml` for a project.

pub mod config;
pub mod consts;
pub mod creds;
pub mod error;
pub mod output;
pub mod settings;
pub mod visibility;

// Re-export main types for the GitHub client and the CLI
pub use config::{ConfigDirs, ScaffoldConfig};
pub use creds::{CredentialResolver, NetrcEntry, NetrcResolver};
pub use creds::netrc::Netrc;
pub use error::ScaffoldError;
pub use output::{ColorMode, format_name, format_url, print_info, print_success, print_warning};
pub use settings::{FsYamlWriter, RepositorySettings, SettingsDocument, SettingsOptions, YamlWriter, scaffold_settings};
pub use visibility::Visibility;
