use anyhow::Result;
use tracing::instrument;

use crate::client::GitHubClient;
use crate::models::GitHubOrganization;

impl GitHubClient {
  /// List the organizations the authenticated user is a member of
  #[instrument(skip(self), level = "debug")]
  pub async fn list_organizations_for_authenticated_user(&self) -> Result<Vec<GitHubOrganization>> {
    self.get_all_pages("/user/orgs", "organizations").await
  }
}
