//! Typed errors surfaced by scaffolding operations.
//!
//! Transport and filesystem failures travel as plain [`anyhow::Error`]s; the
//! variants here are the conditions callers may want to match on via
//! `downcast_ref`.

use thiserror::Error;

/// Errors raised by gh-scaffold itself rather than by a collaborator
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaffoldError {
  /// The requested account is neither the authenticated user nor one of
  /// their organizations
  #[error("User {login} does not have access to create a repository in the {account} account.")]
  Unauthorized { login: String, account: String },
  /// No account was given on the command line or in the configuration
  #[error("No account specified. Pass --account or set `default_account` in the configuration file.")]
  MissingAccount,
}
