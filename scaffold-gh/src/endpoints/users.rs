use anyhow::{Context, Result};
use reqwest::Method;
use tracing::instrument;

use crate::client::{GitHubClient, parse_response};
use crate::models::GitHubUser;

impl GitHubClient {
  /// Get the current authenticated user
  #[instrument(skip(self), level = "debug")]
  pub async fn get_current_user(&self) -> Result<GitHubUser> {
    let response = self
      .request(Method::GET, "/user")
      .send()
      .await
      .context("Failed to fetch GitHub user")?;

    parse_response(response, "user").await
  }
}
