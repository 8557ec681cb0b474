//! # Linode API Rust Client
//!
//! A synchronous client for the Linode v4 REST API: compute instances and
//! their backups, configuration profiles, disks, and IP addresses, plus
//! images, kernels, firewalls, and the provider catalogs.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`LinodeConfig`] and [`LinodeConfigBuilder`]
//! - A resource client, [`LinodeClient`], with grouped operation handles
//! - A response normalizer that turns every API answer into an [`Outcome`]
//!   or a [`LinodeError`]
//! - Optional request fields via [`Params`]
//! - A blocking HTTP layer with a replaceable transport
//!
//! ## Quick Start
//!
//! ```rust
//! use linode_api::{ApiToken, ApiVersion, LinodeConfig};
//!
//! let config = LinodeConfig::builder()
//!     .token(ApiToken::new("your-personal-access-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,no_run
//! use linode_api::{ApiToken, LinodeClient, LinodeConfig, LinodeError, Outcome, Params};
//!
//! let config = LinodeConfig::builder()
//!     .token(ApiToken::new("your-personal-access-token").unwrap())
//!     .build()
//!     .unwrap();
//! let client = LinodeClient::new(&config)?;
//!
//! // Payload-returning operations hand back the decoded JSON unchanged
//! if let Outcome::Payload(instances) = client.instances().list()? {
//!     println!("{}", instances["results"]);
//! }
//!
//! // Operations the API answers with `{}` return `Outcome::Success`
//! client.instances().shutdown(123)?;
//!
//! // API-reported failures carry every reason in order
//! match client.instances().update(123, Params::new().set("label", "web-1")) {
//!     Err(LinodeError::RequestFailed(e)) => eprintln!("{e}"),
//!     other => println!("{other:?}"),
//! }
//! # Ok::<(), LinodeError>(())
//! ```
//!
//! ## Logging
//!
//! Requests, responses, catalog lookups, and rejected create arguments are
//! reported through [`tracing`] at debug level; an exhausted rate limit is
//! reported at warn level. The crate never installs a subscriber, and the
//! API token is never logged.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Blocking**: One network call per operation, on the calling thread, never retried

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

#[cfg(test)]
pub(crate) mod testing;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, ApiVersion, BaseUrl, LinodeConfig, LinodeConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpTransport, InvalidHttpRequestError, RateLimit, ReqwestTransport,
};

// Re-export resource client types
pub use rest::{
    normalize, ApiErrorDetail, LinodeClient, LinodeError, Outcome, Params, RequestFailedError,
};
