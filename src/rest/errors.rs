//! Error types for resource operations.
//!
//! Every operation on a [`LinodeClient`](crate::LinodeClient) fails with a
//! [`LinodeError`], which has exactly three kinds:
//!
//! - [`LinodeError::ValidationFailed`]: a region, plan type, or image is not in
//!   the provider catalog; raised before any mutating call
//! - [`LinodeError::RequestFailed`]: the API answered with one or more error
//!   reasons
//! - [`LinodeError::TransportFailed`]: the HTTP exchange itself failed
//!
//! # Example
//!
//! ```rust,ignore
//! use linode_api::LinodeError;
//!
//! match client.instances().delete(12345) {
//!     Ok(outcome) => println!("deleted: {outcome:?}"),
//!     Err(LinodeError::RequestFailed(e)) => {
//!         for reason in e.reasons() {
//!             eprintln!("{reason}");
//!         }
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::HttpError;

/// One entry of the `errors` list in a Linode API response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Human-readable reason reported by the API.
    pub reason: String,
    /// The request field the reason refers to, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiErrorDetail {
    /// Creates a detail with no field.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            field: None,
        }
    }
}

/// The API reported failure for a request.
///
/// Holds every reported entry in response order. The display form has one
/// reason per line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestFailedError {
    /// Reported entries, in response order.
    pub errors: Vec<ApiErrorDetail>,
}

impl RequestFailedError {
    /// Returns the reported reasons in response order.
    #[must_use]
    pub fn reasons(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.reason.as_str()).collect()
    }
}

impl fmt::Display for RequestFailedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("Linode API request failed without a reason");
        }
        f.write_str(&self.reasons().join("\n"))
    }
}

impl std::error::Error for RequestFailedError {}

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum LinodeError {
    /// A create argument is not in the provider catalog.
    #[error("{} '{value}' not found or not available.", capitalize(.field))]
    ValidationFailed {
        /// The argument that failed (`"region"`, `"type"`, or `"image"`).
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The API returned one or more error reasons.
    #[error(transparent)]
    RequestFailed(#[from] RequestFailedError),

    /// The HTTP exchange could not complete or returned an unusable body.
    #[error(transparent)]
    TransportFailed(#[from] HttpError),
}

impl LinodeError {
    /// Returns the API-reported reasons, or an empty list for other kinds.
    #[must_use]
    pub fn reasons(&self) -> Vec<&str> {
        match self {
            Self::RequestFailed(e) => e.reasons(),
            _ => Vec::new(),
        }
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
