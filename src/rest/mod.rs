//! Linode resource client.
//!
//! This module sits on top of [`clients`](crate::clients) and provides:
//!
//! - **[`LinodeClient`]**: the entry point, handing out per-resource handles
//! - **[`normalize`]**: the single rule set that classifies response bodies
//! - **[`Params`]**: optional request fields, with falsy values dropped from
//!   assembled bodies
//! - **Path building**: [`ResourcePath`] endpoint descriptions and
//!   [`build_path`] template interpolation
//! - **[`LinodeError`]**: validation, API-reported, and transport failures
//!
//! # Example
//!
//! ```rust,no_run
//! use linode_api::{ApiToken, LinodeClient, LinodeConfig, LinodeError, Params};
//!
//! let config = LinodeConfig::builder()
//!     .token(ApiToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//! let client = LinodeClient::new(&config)?;
//!
//! match client.instances().create("mars-1", "g6-nanode-1", "linode/debian12", "pw", Params::new()) {
//!     Err(LinodeError::ValidationFailed { field, value }) => {
//!         eprintln!("{field} '{value}' is not offered");
//!     }
//!     other => println!("{other:?}"),
//! }
//! # Ok::<(), LinodeError>(())
//! ```

mod catalog;
mod client;
mod errors;
mod normalize;
mod params;
mod path;
pub mod resources;

pub use catalog::Catalog;
pub use client::LinodeClient;
pub use errors::{ApiErrorDetail, LinodeError, RequestFailedError};
pub use normalize::{normalize, Outcome};
pub use params::{is_falsy, Params};
pub use path::{build_path, ResourcePath};
