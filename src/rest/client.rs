//! The Linode resource client.
//!
//! [`LinodeClient`] is the entry point for resource operations. Operations
//! are grouped by resource and reached through short-lived handles:
//!
//! ```rust,no_run
//! use linode_api::{ApiToken, LinodeClient, LinodeConfig, Params};
//!
//! let config = LinodeConfig::builder()
//!     .token(ApiToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//! let client = LinodeClient::new(&config).unwrap();
//!
//! let instance = client.instances().create(
//!     "us-east",
//!     "g6-nanode-1",
//!     "linode/debian12",
//!     "s3cure-r00t-pass",
//!     Params::new().set("label", "web-1"),
//! )?;
//! client.instances().boot(123, Params::new())?;
//! let disks = client.disks(123).list()?;
//! # Ok::<(), linode_api::LinodeError>(())
//! ```

use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::{
    HttpClient, HttpError, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
};
use crate::config::LinodeConfig;
use crate::rest::catalog::Catalog;
use crate::rest::errors::LinodeError;
use crate::rest::normalize::{normalize, Outcome};
use crate::rest::path::ResourcePath;
use crate::rest::resources::{Backups, Configs, Disks, Firewalls, Images, Instances, Ips, Kernels};

/// Synchronous client for the Linode API.
///
/// Every operation makes exactly one HTTP call (instance creation also reads
/// the catalogs first), passes the decoded body through
/// [`normalize()`](crate::rest::normalize()), and returns the result.
///
/// # Thread Safety
///
/// `LinodeClient` is `Send + Sync` and cheap to clone. Clones share the
/// transport.
#[derive(Clone, Debug)]
pub struct LinodeClient {
    http_client: HttpClient,
}

// Verify LinodeClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LinodeClient>();
};

impl LinodeClient {
    /// Creates a client that talks to the network through `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns [`LinodeError::TransportFailed`] if the HTTP client cannot be
    /// initialized.
    pub fn new(config: &LinodeConfig) -> Result<Self, LinodeError> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client over a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: &LinodeConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            http_client: HttpClient::new(config, transport),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Compute instances.
    #[must_use]
    pub const fn instances(&self) -> Instances<'_> {
        Instances::new(self)
    }

    /// Backups of one instance.
    #[must_use]
    pub fn backups(&self, linode_id: impl Display) -> Backups<'_> {
        Backups::new(self, linode_id.to_string())
    }

    /// Configuration profiles of one instance.
    #[must_use]
    pub fn configs(&self, linode_id: impl Display) -> Configs<'_> {
        Configs::new(self, linode_id.to_string())
    }

    /// Disks of one instance.
    #[must_use]
    pub fn disks(&self, linode_id: impl Display) -> Disks<'_> {
        Disks::new(self, linode_id.to_string())
    }

    /// IP addresses of one instance.
    #[must_use]
    pub fn ips(&self, linode_id: impl Display) -> Ips<'_> {
        Ips::new(self, linode_id.to_string())
    }

    /// Images, public and private.
    #[must_use]
    pub const fn images(&self) -> Images<'_> {
        Images::new(self)
    }

    /// Kernels.
    #[must_use]
    pub const fn kernels(&self) -> Kernels<'_> {
        Kernels::new(self)
    }

    /// Cloud firewalls.
    #[must_use]
    pub const fn firewalls(&self) -> Firewalls<'_> {
        Firewalls::new(self)
    }

    /// Region, plan type, and image id lookups.
    #[must_use]
    pub const fn catalog(&self) -> Catalog<'_> {
        Catalog::new(self)
    }

    /// Calls an endpoint with the bearer credential and normalizes the body.
    ///
    /// POST and PUT endpoints called without a body send `{}`.
    pub(crate) fn call(
        &self,
        path: &ResourcePath,
        ids: &[(&str, &dyn Display)],
        body: Option<Value>,
    ) -> Result<Outcome, LinodeError> {
        let response = self.send(path, ids, body, true)?;
        normalize(response.body)
    }

    /// Calls an endpoint and returns the raw response.
    pub(crate) fn send(
        &self,
        path: &ResourcePath,
        ids: &[(&str, &dyn Display)],
        body: Option<Value>,
        authenticated: bool,
    ) -> Result<HttpResponse, LinodeError> {
        self.dispatch(path, path.resolve(ids), body, authenticated)
    }

    /// Reads one page of a list endpoint that takes no ids. Pages count
    /// from 1.
    pub(crate) fn send_page(
        &self,
        path: &ResourcePath,
        page: u64,
        authenticated: bool,
    ) -> Result<HttpResponse, LinodeError> {
        let resolved = format!("{}?page={page}", path.resolve(&[]));
        self.dispatch(path, resolved, None, authenticated)
    }

    fn dispatch(
        &self,
        path: &ResourcePath,
        resolved: String,
        body: Option<Value>,
        authenticated: bool,
    ) -> Result<HttpResponse, LinodeError> {
        let mut builder = HttpRequest::builder(path.http_method, resolved);
        let body = body.or_else(|| {
            path.http_method
                .has_body()
                .then(|| Value::Object(serde_json::Map::new()))
        });
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if !authenticated {
            builder = builder.unauthenticated();
        }
        let request = builder.build().map_err(HttpError::from)?;

        tracing::debug!(operation = path.operation, "Dispatching Linode operation");

        Ok(self.http_client.request(request)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use crate::config::ApiToken;
    use crate::testing::{client_with, RecordingTransport};
    use serde_json::json;

    const BOOT: ResourcePath = ResourcePath::new(
        HttpMethod::Post,
        "instances.boot",
        "linode/instances/{linode_id}/boot",
    );

    #[test]
    fn test_new_builds_reqwest_client() {
        let config = LinodeConfig::builder()
            .token(ApiToken::new("test-token").unwrap())
            .build()
            .unwrap();
        assert!(LinodeClient::new(&config).is_ok());
    }

    #[test]
    fn test_call_supplies_empty_body_for_post() {
        let transport = RecordingTransport::shared();
        let client = client_with(transport.clone());

        let outcome = client.call(&BOOT, &[("linode_id", &7)], None).unwrap();

        assert!(outcome.is_success());
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].url, "https://api.linode.com/v4/linode/instances/7/boot");
        assert_eq!(calls[0].body, Some(json!({})));
    }

    #[test]
    fn test_call_normalizes_error_body() {
        let transport = RecordingTransport::shared();
        transport.respond_with_status(
            HttpMethod::Post,
            "linode/instances/7/boot",
            400,
            json!({"errors": [{"reason": "Linode busy."}]}),
        );
        let client = client_with(transport);

        let error = client.call(&BOOT, &[("linode_id", &7)], None).unwrap_err();
        assert_eq!(error.reasons(), vec!["Linode busy."]);
    }

    #[test]
    fn test_send_unauthenticated_omits_bearer() {
        const REGIONS: ResourcePath =
            ResourcePath::new(HttpMethod::Get, "catalog.regions", "regions");
        let transport = RecordingTransport::shared();
        let client = client_with(transport.clone());

        client.send(&REGIONS, &[], None, false).unwrap();

        let calls = transport.calls();
        assert!(!calls[0].headers.contains_key("Authorization"));
        assert_eq!(calls[0].body, None);
    }

    #[test]
    fn test_clones_share_transport() {
        let transport = RecordingTransport::shared();
        let client = client_with(transport.clone());
        let clone = client.clone();

        client.call(&BOOT, &[("linode_id", &1)], None).unwrap();
        clone.call(&BOOT, &[("linode_id", &2)], None).unwrap();

        assert_eq!(transport.calls_with(HttpMethod::Post), 2);
    }
}
