//! # Client Creation
//!
//! Builds the credential resolver and GitHub client from the loaded
//! configuration.

use anyhow::{Context, Result};
use scaffold_core::{NetrcResolver, ScaffoldConfig};
use scaffold_gh::{GitHubClient, github_client_from_credentials};
use tracing::debug;

/// Creates the netrc resolver selected by the configuration
pub fn netrc_resolver(config: &ScaffoldConfig) -> Result<NetrcResolver> {
  let resolver = NetrcResolver::new(config.netrc_path().context("Failed to locate the netrc file")?);
  debug!("Reading credentials from {}", resolver.path().display());
  Ok(resolver)
}

/// Creates a GitHub client from netrc credentials, or `None` without a token
pub fn github_client(config: &ScaffoldConfig) -> Result<Option<GitHubClient>> {
  let resolver = netrc_resolver(config)?;
  let api_url = config.api_url()?;

  github_client_from_credentials(&resolver, &api_url).context("Failed to create GitHub client")
}

#[cfg(test)]
mod tests {
  use scaffold_test_utils::NetrcGuard;

  use super::*;

  #[test]
  fn test_github_client_uses_configured_netrc_and_api_url() -> Result<()> {
    let guard = NetrcGuard::with_github_token("gh-token");
    let config = ScaffoldConfig {
      api_url: Some("http://127.0.0.1:9/".to_string()),
      netrc_path: Some(guard.netrc_path().to_path_buf()),
      default_account: None,
    };

    let client = github_client(&config)?.expect("client should be created");
    assert_eq!(client.base_url(), "http://127.0.0.1:9");
    Ok(())
  }

  #[test]
  fn test_no_client_when_netrc_is_missing() -> Result<()> {
    let guard = NetrcGuard::new("");
    let config = ScaffoldConfig {
      netrc_path: Some(guard.home_dir().join("missing-netrc")),
      ..Default::default()
    };

    assert!(github_client(&config)?.is_none());
    Ok(())
  }
}
