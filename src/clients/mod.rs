//! HTTP client types for Linode API communication.
//!
//! This module provides the HTTP layer underneath the resource client:
//!
//! - [`HttpClient`]: resolves request paths against the versioned API root,
//!   attaches default and bearer headers, and calls the transport once
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a decoded response, with [`RateLimit`] information
//! - [`HttpMethod`]: GET, POST, PUT, DELETE
//! - [`HttpTransport`]: the network seam, implemented by [`ReqwestTransport`]
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use linode_api::{ApiToken, LinodeConfig};
//! use linode_api::clients::{HttpClient, HttpMethod, HttpRequest, ReqwestTransport};
//!
//! let config = LinodeConfig::builder()
//!     .token(ApiToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//! let transport = Arc::new(ReqwestTransport::new(config.timeout()).unwrap());
//! let client = HttpClient::new(&config, transport);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "linode/instances")
//!     .build()
//!     .unwrap();
//! let response = client.request(request).unwrap();
//! println!("HTTP {}: {}", response.code, response.body);
//! ```
//!
//! # Retry Behavior
//!
//! None. Each request is sent exactly once; transport failures surface as
//! [`HttpError`] and API-reported failures are left in the response body.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};
pub use transport::{HttpTransport, ReqwestTransport};
