//! # GitHub API Endpoints
//!
//! Endpoint implementations for the GitHub API resources gh-scaffold uses:
//! the authenticated user, their organizations, and repositories.

pub mod orgs;
pub mod repos;
pub mod users;
