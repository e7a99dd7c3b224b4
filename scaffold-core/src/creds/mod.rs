//! # Credential Management
//!
//! Discovery of API tokens from the user's `.netrc` file. Consumers depend on
//! the [`CredentialResolver`] trait so tests can hand in a canned credential
//! set instead of touching the filesystem.

pub mod netrc;

use std::path::{Path, PathBuf};

use anyhow::Result;

use self::netrc::{Netrc, read_netrc_file};

/// Values recorded for a single `machine` (or `default`) block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetrcEntry {
  pub login: Option<String>,
  pub password: Option<String>,
  pub account: Option<String>,
}

/// Source of per-host credentials
pub trait CredentialResolver {
  /// Read the full host → entry mapping. An absent store yields an empty
  /// mapping rather than an error.
  fn resolve(&self) -> Result<Netrc>;
}

/// Resolves credentials from a `.netrc` file on disk
#[derive(Debug, Clone)]
pub struct NetrcResolver {
  path: PathBuf,
}

impl NetrcResolver {
  /// Read credentials from an explicit netrc path
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// Location of the netrc file this resolver reads
  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl CredentialResolver for NetrcResolver {
  fn resolve(&self) -> Result<Netrc> {
    read_netrc_file(&self.path)
  }
}
