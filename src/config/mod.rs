//! Configuration types for the Linode API client.
//!
//! # Overview
//!
//! - [`LinodeConfig`]: settings shared by every request a client makes
//! - [`LinodeConfigBuilder`]: builder for [`LinodeConfig`]
//! - [`ApiToken`]: the bearer credential, masked in debug output
//! - [`BaseUrl`]: validated API root
//! - [`ApiVersion`]: the version path segment
//!
//! # Example
//!
//! ```rust
//! use linode_api::{LinodeConfig, ApiToken, ApiVersion};
//!
//! let config = LinodeConfig::builder()
//!     .token(ApiToken::new("my-token").unwrap())
//!     .api_version(ApiVersion::V4)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiToken, BaseUrl};
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for a [`LinodeClient`](crate::LinodeClient).
///
/// `LinodeConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct LinodeConfig {
    token: ApiToken,
    base_url: BaseUrl,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl LinodeConfig {
    /// Creates a new builder for constructing a `LinodeConfig`.
    #[must_use]
    pub fn builder() -> LinodeConfigBuilder {
        LinodeConfigBuilder::new()
    }

    /// Returns the bearer credential.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the transport timeout, if configured.
    ///
    /// The client never enforces a timeout on its own; this value is handed
    /// to the underlying HTTP transport.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify LinodeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LinodeConfig>();
};

/// Builder for constructing [`LinodeConfig`] instances.
///
/// `token` is required. Defaults:
///
/// - `base_url`: `https://api.linode.com`
/// - `api_version`: [`ApiVersion::V4`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (transport default)
#[derive(Debug, Default)]
pub struct LinodeConfigBuilder {
    token: Option<ApiToken>,
    base_url: Option<BaseUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl LinodeConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bearer credential (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the timeout passed to the HTTP transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`LinodeConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `token` is not set.
    pub fn build(self) -> Result<LinodeConfig, ConfigError> {
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        Ok(LinodeConfig {
            token,
            base_url: self.base_url.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_token() {
        let result = LinodeConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "token" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = LinodeConfig::builder()
            .token(ApiToken::new("token").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://api.linode.com");
        assert_eq!(config.api_version(), ApiVersion::V4);
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = LinodeConfig::builder()
            .token(ApiToken::new("token").unwrap())
            .base_url(BaseUrl::new("http://localhost:4010").unwrap())
            .api_version(ApiVersion::V4Beta)
            .user_agent_prefix("MyTool/2.1")
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://localhost:4010");
        assert_eq!(config.api_version(), ApiVersion::V4Beta);
        assert_eq!(config.user_agent_prefix(), Some("MyTool/2.1"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = LinodeConfig::builder()
            .token(ApiToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("LinodeConfig"));
        assert!(!debug_str.contains("very-secret"));
    }
}
