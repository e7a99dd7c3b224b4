//! # GitHub API Client
//!
//! GitHub REST API integration for gh-scaffold: authenticated client
//! construction from netrc credentials, the user, organization, and repository
//! endpoints, and the repository creator that ties them together.

pub mod api;
pub mod auth;
pub mod client;
pub mod consts;
pub mod create;
pub mod endpoints;
pub mod models;

// Re-export the client
pub use api::RepositoryApi;
pub use auth::{get_github_token, github_client_from_credentials};
pub use client::GitHubClient;
pub use create::{Account, AccountKind, create_repository, repository_is_in_list, resolve_account};
// Re-export models
pub use models::{
  CreateRepositoryParams, GitHubAuth, GitHubOrganization, GitHubRepository, GitHubUser, RepositoryUrls,
};
