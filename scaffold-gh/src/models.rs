use serde::{Deserialize, Serialize};

/// Represents GitHub authentication credentials
#[derive(Clone)]
pub struct GitHubAuth {
  pub token: String,
}

/// Represents a GitHub user
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
  pub login: String,
  pub id: u64,
  pub name: Option<String>,
}

/// An organization the authenticated user belongs to
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubOrganization {
  pub login: String,
  pub id: u64,
}

/// Represents a GitHub repository
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepository {
  pub name: String,
  pub full_name: Option<String>,
  #[serde(default)]
  pub private: bool,
  pub ssh_url: String,
  pub html_url: String,
}

/// Request body for the repository creation endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRepositoryParams {
  pub name: String,
  pub private: bool,
}

/// Connection URLs of a created or existing repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryUrls {
  pub ssh_url: String,
  pub html_url: String,
}

impl From<GitHubRepository> for RepositoryUrls {
  fn from(repository: GitHubRepository) -> Self {
    Self {
      ssh_url: repository.ssh_url,
      html_url: repository.html_url,
    }
  }
}
