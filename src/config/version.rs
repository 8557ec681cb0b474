//! Linode API version definitions.
//!
//! Every request path carries a single version segment (e.g. `/v4/regions`).
//! This module provides the [`ApiVersion`] enum naming that segment.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Linode API version segment.
///
/// # Example
///
/// ```rust
/// use linode_api::ApiVersion;
///
/// let version: ApiVersion = "v4beta".parse().unwrap();
/// assert_eq!(version, ApiVersion::V4Beta);
/// assert_eq!(ApiVersion::latest().to_string(), "v4");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// The stable v4 API.
    #[default]
    V4,
    /// The v4 beta API, exposing features ahead of general availability.
    V4Beta,
}

impl ApiVersion {
    /// Returns the current stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V4
    }

    /// Returns `true` unless this is the beta channel.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::V4)
    }

    /// Returns the path segment for this version.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V4 => "v4",
            Self::V4Beta => "v4beta",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v4" => Ok(Self::V4),
            "v4beta" => Ok(Self::V4Beta),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}
