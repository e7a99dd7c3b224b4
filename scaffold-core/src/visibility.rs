//! Repository visibility as requested by the caller.
//!
//! Values other than `Public` and `Private` are kept verbatim instead of being
//! rejected. Repository creation and settings generation interpret them
//! differently: creation only goes private for an explicit `Private`, while
//! the settings file only goes public for an explicit `Public`.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Requested visibility of the GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
  Public,
  Private,
  /// Any other value, preserved as given
  Other(String),
}

impl Visibility {
  /// Whether repository creation should request a private repository.
  ///
  /// Only an explicit `Private` does; unset and unrecognized values create a
  /// public repository.
  pub fn creates_private_repository(visibility: Option<&Self>) -> bool {
    matches!(visibility, Some(Self::Private))
  }

  /// Whether the settings file should mark the repository as private.
  ///
  /// Only an explicit `Public` does not; unset and unrecognized values are
  /// treated as private.
  pub fn settings_private(visibility: Option<&Self>) -> bool {
    !matches!(visibility, Some(Self::Public))
  }
}

impl From<&str> for Visibility {
  fn from(value: &str) -> Self {
    match value {
      "Public" => Self::Public,
      "Private" => Self::Private,
      other => Self::Other(other.to_string()),
    }
  }
}

impl FromStr for Visibility {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self::from(s))
  }
}

impl fmt::Display for Visibility {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Public => f.write_str("Public"),
      Self::Private => f.write_str("Private"),
      Self::Other(value) => f.write_str(value),
    }
  }
}
