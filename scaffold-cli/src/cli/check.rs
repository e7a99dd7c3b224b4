//! # Check Command
//!
//! Verifies the GitHub token stored in the netrc file.

use anyhow::{Result, anyhow};
use scaffold_core::{ScaffoldConfig, format_name, print_info, print_success};
use tokio::runtime::Runtime;

use crate::clients::github_client;

/// Handle the check command
pub fn handle_check_command(config: &ScaffoldConfig) -> Result<()> {
  let Some(client) = github_client(config)? else {
    return Err(anyhow!(
      "No GitHub token found. Add `machine api.github.com login <token>` to {}",
      config.netrc_path()?.display()
    ));
  };

  // Create a runtime for async operations
  let rt = Runtime::new()?;

  if !rt.block_on(client.test_connection())? {
    return Err(anyhow!("Authentication failed. Please check your GitHub credentials."));
  }

  let user = rt.block_on(client.get_current_user())?;
  print_success("Successfully authenticated with GitHub");

  print_info("GitHub User Information:");
  println!("  Username: {}", format_name(&user.login));
  if let Some(name) = user.name {
    println!("  Name: {name}");
  }
  println!("  User ID: {}", user.id);

  Ok(())
}
