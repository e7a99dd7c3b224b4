//! Parsing of `.netrc` credential files.
//!
//! Both the single-line (`machine host login user password pass`) and the
//! multi-line layouts are accepted, as are `default` blocks, `#` comment lines
//! and `macdef` bodies (skipped up to the next blank line).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::NetrcEntry;

/// Parsed contents of a netrc file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Netrc {
  machines: BTreeMap<String, NetrcEntry>,
  default: Option<NetrcEntry>,
}

impl Netrc {
  /// Entry recorded for `host`, if any
  pub fn machine(&self, host: &str) -> Option<&NetrcEntry> {
    self.machines.get(host)
  }

  /// Entry of the `default` block, if the file has one
  pub fn default_entry(&self) -> Option<&NetrcEntry> {
    self.default.as_ref()
  }

  /// Entry used for `host`: its `machine` block, else the `default` block
  pub fn entry_for(&self, host: &str) -> Option<&NetrcEntry> {
    self.machine(host).or_else(|| self.default_entry())
  }

  /// True when the file declared neither machines nor a default block
  pub fn is_empty(&self) -> bool {
    self.machines.is_empty() && self.default.is_none()
  }

  fn finish(&mut self, block: Option<(Block, NetrcEntry)>) {
    match block {
      // netrc consumers use the first matching block
      Some((Block::Machine(host), entry)) => {
        self.machines.entry(host).or_insert(entry);
      }
      Some((Block::Default, entry)) => {
        self.default.get_or_insert(entry);
      }
      None => {}
    }
  }
}

enum Block {
  Machine(String),
  Default,
}

/// Returns the path to the `.netrc` file for the provided home directory.
///
/// ```
/// use std::path::Path;
/// use scaffold_core::creds::netrc::get_netrc_path;
///
/// let path = get_netrc_path(Path::new("/home/user"));
/// assert_eq!(path, Path::new("/home/user/.netrc"));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Parses netrc content into a host → entry mapping.
///
/// Unknown tokens are ignored and keywords without a value are dropped, so a
/// malformed file degrades to fewer entries instead of an error.
pub fn parse_netrc(content: &str) -> Netrc {
  let mut netrc = Netrc::default();
  let mut current: Option<(Block, NetrcEntry)> = None;
  let mut in_macdef = false;

  for line in content.lines() {
    if in_macdef {
      if line.trim().is_empty() {
        in_macdef = false;
      }
      continue;
    }

    if line.trim_start().starts_with('#') {
      continue;
    }

    let mut tokens = line.split_whitespace();
    while let Some(token) = tokens.next() {
      match token {
        "machine" => {
          if let Some(host) = tokens.next() {
            netrc.finish(current.take());
            current = Some((Block::Machine(host.to_string()), NetrcEntry::default()));
          }
        }
        "default" => {
          netrc.finish(current.take());
          current = Some((Block::Default, NetrcEntry::default()));
        }
        "login" | "password" | "account" => {
          let value = tokens.next().map(str::to_string);
          if let (Some(value), Some((_, entry))) = (value, current.as_mut()) {
            match token {
              "login" => entry.login = Some(value),
              "password" => entry.password = Some(value),
              _ => entry.account = Some(value),
            }
          }
        }
        "macdef" => {
          in_macdef = true;
          break;
        }
        _ => {}
      }
    }
  }

  netrc.finish(current.take());
  netrc
}

/// Reads and parses the netrc file at `path`.
///
/// A missing file is not an error: it yields an empty [`Netrc`].
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_netrc_file(path: &Path) -> Result<Netrc> {
  if !path.exists() {
    debug!("No netrc file at {}", path.display());
    return Ok(Netrc::default());
  }

  warn_if_insecure(path);

  let content =
    std::fs::read_to_string(path).with_context(|| format!("Failed to read netrc file {}", path.display()))?;
  let netrc = parse_netrc(&content);
  debug!("Loaded {} netrc machine entries from {}", netrc.machines.len(), path.display());

  Ok(netrc)
}

#[cfg(unix)]
fn warn_if_insecure(path: &Path) {
  use std::os::unix::fs::PermissionsExt;

  if let Ok(metadata) = std::fs::metadata(path)
    && metadata.permissions().mode() & 0o077 != 0
  {
    warn!(
      "{} is readable by other users; consider running `chmod 600` on it",
      path.display()
    );
  }
}

#[cfg(not(unix))]
fn warn_if_insecure(_path: &Path) {}

#[cfg(test)]
mod tests {
  use scaffold_test_utils::NetrcGuard;

  use super::*;

  #[test]
  fn test_parse_token_only_entry() {
    let netrc = parse_netrc("machine api.github.com\n  login skdfjahdgakalkfjdlkf");

    let entry = netrc.machine("api.github.com").unwrap();
    assert_eq!(entry.login.as_deref(), Some("skdfjahdgakalkfjdlkf"));
    assert_eq!(entry.password, None);
  }

  #[test]
  fn test_parse_multiple_machines() {
    let content = r#"machine example.com
  login user1
  password pass1

machine api.github.com
  login gh-token

machine atlassian.com
  login user3
  password pass3
  account team
"#;

    let netrc = parse_netrc(content);

    assert_eq!(netrc.machine("example.com").unwrap().password.as_deref(), Some("pass1"));
    assert_eq!(netrc.machine("api.github.com").unwrap().login.as_deref(), Some("gh-token"));
    assert_eq!(netrc.machine("atlassian.com").unwrap().account.as_deref(), Some("team"));
  }

  #[test]
  fn test_parse_single_line_and_mixed_formats() {
    let content = r#"machine example.com login user1 password pass1
machine github.com
  login user2
  password pass2
machine atlassian.com login user3
  password pass3
"#;

    let netrc = parse_netrc(content);

    assert_eq!(netrc.machine("example.com").unwrap().login.as_deref(), Some("user1"));
    assert_eq!(netrc.machine("github.com").unwrap().password.as_deref(), Some("pass2"));
    assert_eq!(netrc.machine("atlassian.com").unwrap().password.as_deref(), Some("pass3"));
  }

  #[test]
  fn test_first_duplicate_machine_wins() {
    let content = "machine api.github.com login first\nmachine api.github.com login second\n";

    let netrc = parse_netrc(content);
    assert_eq!(netrc.machine("api.github.com").unwrap().login.as_deref(), Some("first"));
  }

  #[test]
  fn test_default_block_does_not_leak_into_machines() {
    let content = "machine example.com login user1\ndefault login anonymous password guest\n";

    let netrc = parse_netrc(content);

    assert_eq!(netrc.machine("example.com").unwrap().password, None);
    let default = netrc.default_entry().unwrap();
    assert_eq!(default.login.as_deref(), Some("anonymous"));
    assert_eq!(default.password.as_deref(), Some("guest"));
  }

  #[test]
  fn test_entry_for_falls_back_to_default_block() {
    let netrc = parse_netrc("machine example.com login user1\ndefault login anonymous\n");

    assert_eq!(netrc.entry_for("example.com").unwrap().login.as_deref(), Some("user1"));
    assert_eq!(netrc.entry_for("api.github.com").unwrap().login.as_deref(), Some("anonymous"));
    assert_eq!(parse_netrc("machine example.com login user1\n").entry_for("api.github.com"), None);
  }

  #[test]
  fn test_comments_and_macdef_are_skipped() {
    let content = r#"# personal tokens
machine example.com
  login user1
  # password is elsewhere
macdef init
  machine evil.com login nope

machine api.github.com
  login gh-token
"#;

    let netrc = parse_netrc(content);

    assert!(netrc.machine("evil.com").is_none());
    assert_eq!(netrc.machine("example.com").unwrap().password, None);
    assert_eq!(netrc.machine("api.github.com").unwrap().login.as_deref(), Some("gh-token"));
  }

  #[test]
  fn test_keyword_without_value_is_ignored() {
    let netrc = parse_netrc("machine example.com login");

    assert_eq!(netrc.machine("example.com"), Some(&NetrcEntry::default()));
  }

  #[test]
  fn test_values_before_any_machine_are_ignored() {
    let netrc = parse_netrc("login stray\nmachine example.com login user1\n");

    assert_eq!(netrc, parse_netrc("machine example.com login user1\n"));
  }

  #[test]
  fn test_parse_empty_content() {
    assert!(parse_netrc("").is_empty());
  }

  #[test]
  fn test_read_netrc_file_missing_is_empty() {
    let guard = NetrcGuard::new("");

    let netrc = read_netrc_file(&guard.home_dir().join("missing")).unwrap();
    assert!(netrc.is_empty());
  }

  #[test]
  fn test_read_netrc_file() {
    let guard = NetrcGuard::new("machine api.github.com\n  login gh-token\n");

    let netrc = read_netrc_file(guard.netrc_path()).unwrap();
    assert_eq!(netrc.machine("api.github.com").unwrap().login.as_deref(), Some("gh-token"));
  }
}
