//! # Repository Creation
//!
//! Ensures a repository exists for a user or organization account, creating
//! it only when the account's listing does not already contain it.

use anyhow::Result;
use scaffold_core::{ScaffoldError, Visibility};
use tracing::{debug, info};

use crate::api::RepositoryApi;
use crate::models::{CreateRepositoryParams, GitHubRepository, RepositoryUrls};

/// Whether an account is the authenticated user or one of their organizations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
  User,
  Organization,
}

/// An account the authenticated user may create repositories in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
  pub name: String,
  pub kind: AccountKind,
}

/// Whether a repository called `name` appears in `repositories`
pub fn repository_is_in_list(name: &str, repositories: &[GitHubRepository]) -> bool {
  repositories.iter().any(|repository| repository.name == name)
}

/// Resolve `account` against the authenticated user and their organizations.
///
/// # Errors
///
/// Returns [`ScaffoldError::Unauthorized`] when `account` is neither the
/// authenticated login nor one of their organizations.
pub async fn resolve_account<A: RepositoryApi>(account: &str, api: &A) -> Result<Account> {
  let user = api.authenticated_user().await?;

  if user.login == account {
    debug!("Account {account} is the authenticated user");
    return Ok(Account {
      name: account.to_string(),
      kind: AccountKind::User,
    });
  }

  let organizations = api.organizations_for_authenticated_user().await?;
  if organizations.iter().any(|org| org.login == account) {
    debug!("Account {account} is an organization of {}", user.login);
    return Ok(Account {
      name: account.to_string(),
      kind: AccountKind::Organization,
    });
  }

  Err(
    ScaffoldError::Unauthorized {
      login: user.login,
      account: account.to_string(),
    }
    .into(),
  )
}

/// Find or create the repository `name` in `account`.
///
/// An existing repository is fetched and returned untouched; otherwise it is
/// created, private only when `visibility` is explicitly `Private`.
pub async fn create_repository<A: RepositoryApi>(
  name: &str,
  account: &str,
  visibility: Option<&Visibility>,
  api: &A,
) -> Result<RepositoryUrls> {
  let account = resolve_account(account, api).await?;

  let existing = match account.kind {
    AccountKind::User => api.repositories_for_user(&account.name).await?,
    AccountKind::Organization => api.repositories_for_org(&account.name).await?,
  };

  if repository_is_in_list(name, &existing) {
    info!("Repository {}/{name} already exists, skipping creation", account.name);
    let repository = api.repository(&account.name, name).await?;
    return Ok(repository.into());
  }

  let params = CreateRepositoryParams {
    name: name.to_string(),
    private: Visibility::creates_private_repository(visibility),
  };

  let created = match account.kind {
    AccountKind::User => api.create_for_authenticated_user(&params).await?,
    AccountKind::Organization => api.create_in_org(&account.name, &params).await?,
  };
  info!(
    "Created {} repository {}/{name}",
    if params.private { "private" } else { "public" },
    account.name
  );

  Ok(created.into())
}
