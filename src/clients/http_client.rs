//! HTTP client for Linode API communication.
//!
//! This module provides the [`HttpClient`] type, which turns an
//! [`HttpRequest`] into a full URL plus headers and hands it to the
//! configured [`HttpTransport`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::HttpTransport;
use crate::config::{ApiToken, LinodeConfig};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Linode API.
///
/// The client handles:
/// - URL construction from the base URL and API version segment
/// - Default headers (`User-Agent`, `Accept`)
/// - Attaching `Authorization: Bearer <token>` to authenticated requests
///
/// It performs exactly one transport call per request and never retries.
/// Non-2xx responses are returned as `Ok`; the caller interprets the body.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone.
#[derive(Clone, Debug)]
pub struct HttpClient {
    transport: Arc<dyn HttpTransport>,
    /// Base URI (e.g., `https://api.linode.com`).
    base_uri: String,
    /// Base path (e.g., `/v4`).
    base_path: String,
    token: ApiToken,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from configuration and a transport.
    #[must_use]
    pub fn new(config: &LinodeConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}linode-api-rust v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            transport,
            base_uri: config.base_url().as_ref().to_string(),
            base_path: format!("/{}", config.api_version()),
            token: config.token().clone(),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    ///
    /// The `Authorization` header is added per request and is not included.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request path resolves to.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            path.trim_start_matches('/')
        )
    }

    /// Sends an HTTP request to the Linode API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The transport could not complete the exchange (`Network`)
    /// - The response body is not JSON (`MalformedBody`)
    pub fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if request.authenticated {
            headers.insert("Authorization".to_string(), self.token.bearer());
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            authenticated = request.authenticated,
            "Sending Linode API request"
        );

        let response =
            self.transport
                .execute(request.http_method, &url, &headers, request.body.as_ref())?;

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = response.code,
            "Received Linode API response"
        );

        if let Some(limit) = response.rate_limit {
            if limit.is_exhausted() {
                tracing::warn!(
                    "Linode API rate limit of {} requests exhausted after request to {}",
                    limit.limit,
                    request.path
                );
            }
        }

        Ok(response)
    }
}
