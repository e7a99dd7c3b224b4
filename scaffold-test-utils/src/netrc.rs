use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Content of a netrc file holding only a GitHub API token
pub fn github_token_netrc(token: &str) -> String {
  format!("machine api.github.com\n  login {token}\n")
}

/// RAII guard for test .netrc files
///
/// Creates a temporary home directory containing a `.netrc` with the given
/// content. The directory and file are removed when the guard is dropped.
/// Callers pass [`NetrcGuard::netrc_path`] to the code under test instead of
/// mutating `HOME`, so tests can run in parallel.
pub struct NetrcGuard {
  temp_dir: TempDir,
  netrc_path: PathBuf,
}

impl NetrcGuard {
  /// Create a new NetrcGuard with the given content
  pub fn new(content: &str) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let netrc_path = temp_dir.path().join(".netrc");

    fs::write(&netrc_path, content).expect("Failed to write test .netrc");

    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;
      fs::set_permissions(&netrc_path, fs::Permissions::from_mode(0o600)).expect("Failed to secure test .netrc");
    }

    Self { temp_dir, netrc_path }
  }

  /// Create a guard whose netrc carries a GitHub API token
  pub fn with_github_token(token: &str) -> Self {
    Self::new(&github_token_netrc(token))
  }

  /// Get the path to the .netrc file
  pub fn netrc_path(&self) -> &Path {
    &self.netrc_path
  }

  /// Get the path to the temporary home directory
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }
}
