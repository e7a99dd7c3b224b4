//! # Scaffold Orchestration
//!
//! Ties the repository creator and the settings scaffolder together for a
//! single project. Neither step consumes the other's output.

use std::path::PathBuf;

use anyhow::Result;
use scaffold_core::{SettingsOptions, Visibility, YamlWriter, scaffold_settings};
use scaffold_gh::{RepositoryApi, RepositoryUrls, create_repository};
use tracing::{debug, warn};

/// Everything needed to scaffold one project
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
  pub project_root: PathBuf,
  pub name: String,
  pub account: String,
  pub description: Option<String>,
  pub homepage: Option<String>,
  pub project_type: Option<String>,
  pub visibility: Option<Visibility>,
  pub topics: Vec<String>,
}

impl ScaffoldOptions {
  /// The subset of options the settings scaffolder consumes
  pub fn settings_options(&self) -> SettingsOptions {
    SettingsOptions {
      project_root: self.project_root.clone(),
      project_name: self.name.clone(),
      description: self.description.clone(),
      homepage: self.homepage.clone(),
      topics: self.topics.clone(),
      visibility: self.visibility.clone(),
    }
  }
}

/// Outcome of [`scaffold`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldResult {
  /// Where the settings file was written
  pub settings_path: PathBuf,
  /// Repository URLs, absent when no GitHub client was available
  pub repository: Option<RepositoryUrls>,
}

/// Ensure the repository exists and write its settings file.
///
/// The repository step runs first so an unauthorized account fails before
/// anything is written locally. Without a client the repository step is
/// skipped and only the settings file is produced.
pub async fn scaffold<W: YamlWriter, A: RepositoryApi>(
  options: &ScaffoldOptions,
  writer: &W,
  client: Option<&A>,
) -> Result<ScaffoldResult> {
  if let Some(project_type) = &options.project_type {
    debug!("Scaffolding {project_type} project {}", options.name);
  }

  let repository = match client {
    Some(client) => Some(
      create_repository(
        &options.name,
        &options.account,
        options.visibility.as_ref(),
        client,
      )
      .await?,
    ),
    None => {
      warn!("No GitHub client available, skipping repository creation");
      None
    }
  };

  let settings_path = scaffold_settings(&options.settings_options(), writer).await?;

  Ok(ScaffoldResult {
    settings_path,
    repository,
  })
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use scaffold_core::{FsYamlWriter, ScaffoldError};
  use serde::Serialize;
  use scaffold_gh::{GitHubAuth, GitHubClient};
  use scaffold_test_utils::GitHubMock;
  use tempfile::TempDir;

  use super::*;

  const TOKEN: &str = "skdfjahdgakalkfjdlkf";

  fn options(project_root: &TempDir, account: &str, visibility: Option<Visibility>) -> ScaffoldOptions {
    ScaffoldOptions {
      project_root: project_root.path().to_path_buf(),
      name: "project".to_string(),
      account: account.to_string(),
      description: Some("a project".to_string()),
      homepage: Some("https://example.com".to_string()),
      project_type: Some("JavaScript".to_string()),
      visibility,
      topics: vec!["rust".to_string(), "cli".to_string()],
    }
  }

  fn client_for(github: &GitHubMock) -> GitHubClient {
    GitHubClient::with_base_url(
      GitHubAuth {
        token: TOKEN.to_string(),
      },
      &github.uri(),
    )
  }

  /// Rejects every write
  struct FailingYamlWriter;

  impl YamlWriter for FailingYamlWriter {
    async fn write_yaml<T: Serialize + Sync>(&self, path: &Path, _value: &T) -> Result<()> {
      Err(anyhow::anyhow!("disk full writing {}", path.display()))
    }
  }

  fn read_settings(result: &ScaffoldResult) -> serde_yaml::Value {
    let content = std::fs::read_to_string(&result.settings_path).unwrap();
    serde_yaml::from_str(&content).unwrap()
  }

  #[test]
  fn test_settings_options_subset() {
    let project_root = TempDir::new().unwrap();
    let settings = options(&project_root, "octocat", Some(Visibility::Public)).settings_options();

    assert_eq!(settings.project_root, project_root.path());
    assert_eq!(settings.project_name, "project");
    assert_eq!(settings.topics, vec!["rust", "cli"]);
    assert_eq!(settings.visibility, Some(Visibility::Public));
  }

  #[tokio::test]
  async fn test_settings_file_is_produced_and_repository_is_created() -> Result<()> {
    let project_root = TempDir::new()?;
    let github = GitHubMock::start(TOKEN).await;
    github.authenticated_user("octocat").await;
    github.user_repositories("octocat", &[]).await;
    github
      .create_for_user("project", false, "git@github.com:octocat/project.git", "https://github.com/octocat/project")
      .await;
    let client = client_for(&github);

    let result = scaffold(
      &options(&project_root, "octocat", Some(Visibility::Public)),
      &FsYamlWriter,
      Some(&client),
    )
    .await?;

    assert_eq!(
      result.repository,
      Some(RepositoryUrls {
        ssh_url: "git@github.com:octocat/project.git".to_string(),
        html_url: "https://github.com/octocat/project".to_string(),
      })
    );
    let settings = read_settings(&result);
    assert_eq!(settings["repository"]["name"], serde_yaml::Value::from("project"));
    assert_eq!(settings["repository"]["topics"], serde_yaml::Value::from("rust, cli"));
    assert_eq!(settings["repository"]["private"], serde_yaml::Value::from(false));
    Ok(())
  }

  #[tokio::test]
  async fn test_no_repository_details_without_client() -> Result<()> {
    let project_root = TempDir::new()?;

    let result = scaffold(&options(&project_root, "octocat", None), &FsYamlWriter, None::<&GitHubClient>).await?;

    assert_eq!(result.repository, None);
    assert_eq!(result.settings_path, project_root.path().join(".github/settings.yml"));
    assert_eq!(read_settings(&result)["repository"]["private"], serde_yaml::Value::from(true));
    Ok(())
  }

  #[tokio::test]
  async fn test_settings_write_failure_is_returned() -> Result<()> {
    let project_root = TempDir::new()?;

    let err = scaffold(
      &options(&project_root, "octocat", None),
      &FailingYamlWriter,
      None::<&GitHubClient>,
    )
    .await
    .unwrap_err();

    assert!(err.to_string().starts_with("disk full writing"));
    assert!(err.to_string().ends_with("settings.yml"));
    Ok(())
  }

  #[tokio::test]
  async fn test_unauthorized_account_writes_nothing() -> Result<()> {
    let project_root = TempDir::new()?;
    let github = GitHubMock::start(TOKEN).await;
    github.authenticated_user("octocat").await;
    github.organizations(&["other-org"]).await;
    github.no_repository_created().await;
    let client = client_for(&github);

    let err = scaffold(
      &options(&project_root, "acme", Some(Visibility::Private)),
      &FsYamlWriter,
      Some(&client),
    )
    .await
    .unwrap_err();

    assert!(matches!(
      err.downcast_ref::<ScaffoldError>(),
      Some(ScaffoldError::Unauthorized { .. })
    ));
    assert!(!project_root.path().join(".github").exists());
    Ok(())
  }
}
