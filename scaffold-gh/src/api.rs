//! The slice of the GitHub API the repository creator depends on.
//!
//! [`GitHubClient`] implements it over HTTP; tests substitute in-memory fakes.

use std::future::Future;

use anyhow::Result;

use crate::client::GitHubClient;
use crate::models::{CreateRepositoryParams, GitHubOrganization, GitHubRepository, GitHubUser};

/// GitHub operations used to find or create a repository
pub trait RepositoryApi {
  /// `GET /user`
  fn authenticated_user(&self) -> impl Future<Output = Result<GitHubUser>> + Send;

  /// `GET /user/orgs`
  fn organizations_for_authenticated_user(&self) -> impl Future<Output = Result<Vec<GitHubOrganization>>> + Send;

  /// `GET /users/{user}/repos`
  fn repositories_for_user(&self, user: &str) -> impl Future<Output = Result<Vec<GitHubRepository>>> + Send;

  /// `GET /orgs/{org}/repos`
  fn repositories_for_org(&self, org: &str) -> impl Future<Output = Result<Vec<GitHubRepository>>> + Send;

  /// `GET /repos/{owner}/{repo}`
  fn repository(&self, owner: &str, repo: &str) -> impl Future<Output = Result<GitHubRepository>> + Send;

  /// `POST /user/repos`
  fn create_for_authenticated_user(
    &self,
    params: &CreateRepositoryParams,
  ) -> impl Future<Output = Result<GitHubRepository>> + Send;

  /// `POST /orgs/{org}/repos`
  fn create_in_org(
    &self,
    org: &str,
    params: &CreateRepositoryParams,
  ) -> impl Future<Output = Result<GitHubRepository>> + Send;
}

impl RepositoryApi for GitHubClient {
  async fn authenticated_user(&self) -> Result<GitHubUser> {
    self.get_current_user().await
  }

  async fn organizations_for_authenticated_user(&self) -> Result<Vec<GitHubOrganization>> {
    self.list_organizations_for_authenticated_user().await
  }

  async fn repositories_for_user(&self, user: &str) -> Result<Vec<GitHubRepository>> {
    self.list_repositories_for_user(user).await
  }

  async fn repositories_for_org(&self, org: &str) -> Result<Vec<GitHubRepository>> {
    self.list_repositories_for_org(org).await
  }

  async fn repository(&self, owner: &str, repo: &str) -> Result<GitHubRepository> {
    self.get_repository(owner, repo).await
  }

  async fn create_for_authenticated_user(&self, params: &CreateRepositoryParams) -> Result<GitHubRepository> {
    self.create_repository_for_authenticated_user(params).await
  }

  async fn create_in_org(&self, org: &str, params: &CreateRepositoryParams) -> Result<GitHubRepository> {
    self.create_repository_in_org(org, params).await
  }
}
