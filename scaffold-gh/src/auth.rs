//! Authentication helpers for the GitHub client.
//!
//! Builds ready-to-use clients from the token stored under
//! `machine api.github.com` in the user's netrc. A missing token is not an
//! error: callers receive `None` and decide whether to continue without
//! GitHub.

use anyhow::{Context, Result};
use scaffold_core::consts::GITHUB_API_HOST;
use scaffold_core::creds::CredentialResolver;
use tracing::debug;

use crate::client::GitHubClient;
use crate::models::GitHubAuth;

/// Look up the GitHub API token: the `login` of the `api.github.com` entry,
/// or of the `default` block when no such machine is listed
pub fn get_github_token<R: CredentialResolver + ?Sized>(resolver: &R) -> Result<Option<String>> {
  let netrc = resolver.resolve().context("Failed to read GitHub credentials")?;

  Ok(
    netrc
      .entry_for(GITHUB_API_HOST)
      .and_then(|entry| entry.login.clone())
      .filter(|token| !token.is_empty()),
  )
}

/// Creates an authenticated GitHub client for `base_url`, or `None` when no
/// token is configured
pub fn github_client_from_credentials<R: CredentialResolver + ?Sized>(
  resolver: &R,
  base_url: &str,
) -> Result<Option<GitHubClient>> {
  match get_github_token(resolver)? {
    Some(token) => {
      debug!("Found GitHub token for {GITHUB_API_HOST}");
      Ok(Some(GitHubClient::with_base_url(GitHubAuth { token }, base_url)))
    }
    None => {
      debug!("No GitHub token found for {GITHUB_API_HOST}");
      Ok(None)
    }
  }
}
