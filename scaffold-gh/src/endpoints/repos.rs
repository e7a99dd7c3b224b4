//! # GitHub Repository Endpoints
//!
//! Listing, fetching, and creating repositories for users and organizations.

use anyhow::{Context, Result};
use reqwest::Method;
use tracing::instrument;

use crate::client::{GitHubClient, parse_response};
use crate::models::{CreateRepositoryParams, GitHubRepository};

impl GitHubClient {
  /// List public repositories owned by `user`
  #[instrument(skip(self), level = "debug")]
  pub async fn list_repositories_for_user(&self, user: &str) -> Result<Vec<GitHubRepository>> {
    self
      .get_all_pages(&format!("/users/{user}/repos"), "repositories")
      .await
  }

  /// List repositories owned by the organization `org`
  #[instrument(skip(self), level = "debug")]
  pub async fn list_repositories_for_org(&self, org: &str) -> Result<Vec<GitHubRepository>> {
    self
      .get_all_pages(&format!("/orgs/{org}/repos"), "repositories")
      .await
  }

  /// Get a single repository
  #[instrument(skip(self), level = "debug")]
  pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<GitHubRepository> {
    let response = self
      .request(Method::GET, &format!("/repos/{owner}/{repo}"))
      .send()
      .await
      .with_context(|| format!("Failed to fetch repository {owner}/{repo}"))?;

    parse_response(response, "repository").await
  }

  /// Create a repository owned by the authenticated user
  #[instrument(skip(self), level = "debug")]
  pub async fn create_repository_for_authenticated_user(
    &self,
    params: &CreateRepositoryParams,
  ) -> Result<GitHubRepository> {
    let response = self
      .request(Method::POST, "/user/repos")
      .json(params)
      .send()
      .await
      .with_context(|| format!("Failed to create repository {}", params.name))?;

    parse_response(response, "repository").await
  }

  /// Create a repository in the organization `org`
  #[instrument(skip(self), level = "debug")]
  pub async fn create_repository_in_org(&self, org: &str, params: &CreateRepositoryParams) -> Result<GitHubRepository> {
    let response = self
      .request(Method::POST, &format!("/orgs/{org}/repos"))
      .json(params)
      .send()
      .await
      .with_context(|| format!("Failed to create repository {org}/{}", params.name))?;

    parse_response(response, "repository").await
  }
}
