//! Constants for the scaffold-gh client

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!("gh-scaffold/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Page size requested from listing endpoints (the API maximum)
pub const PER_PAGE: usize = 100;
