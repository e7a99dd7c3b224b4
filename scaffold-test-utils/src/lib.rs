//! Test utilities shared across the gh-scaffold workspace
//!
//! This crate provides common testing infrastructure including:
//! - Temporary `.netrc` files ([`NetrcGuard`])
//! - A mock GitHub REST API ([`GitHubMock`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod github;
pub mod netrc;

// Re-export commonly used items
pub use github::GitHubMock;
pub use netrc::NetrcGuard;
