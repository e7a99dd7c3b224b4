//! Constants shared across the gh-scaffold crates

/// Base URL for the official SaaS GitHub API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Host whose netrc entry carries the GitHub token
pub const GITHUB_API_HOST: &str = "api.github.com";

/// Environment variable overriding the GitHub API base URL
pub const ENV_API_URL: &str = "GH_SCAFFOLD_API_URL";

/// Environment variable overriding the netrc location
pub const ENV_NETRC: &str = "GH_SCAFFOLD_NETRC";

/// Settings template every generated settings file extends
pub const SETTINGS_EXTENDS: &str = ".github";

/// Directory (relative to the project root) holding the settings file
pub const SETTINGS_DIR: &str = ".github";

/// File name of the generated settings file
pub const SETTINGS_FILE: &str = "settings.yml";
