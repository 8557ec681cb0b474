//! HTTP-level error types.
//!
//! These errors describe failures of the HTTP exchange itself, as opposed to
//! errors the Linode API reports inside a well-formed response body:
//!
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified transport error (network, validation, decoding)
//!
//! # Example
//!
//! ```rust,ignore
//! use linode_api::clients::HttpError;
//!
//! match client.request(request) {
//!     Ok(response) => println!("HTTP {}", response.code),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::MalformedBody { code, .. }) => println!("Bad body with HTTP {code}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// # Example
///
/// ```rust
/// use linode_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that must not carry a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error, including transport timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the JSON shape the client expected.
    #[error("Malformed response body (HTTP {code}): {source}")]
    MalformedBody {
        /// The HTTP status code of the response.
        code: u16,
        /// The underlying decoding error.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use put without specifying data.");
    }

    #[test]
    fn test_invalid_request_error_unexpected_body() {
        let error = InvalidHttpRequestError::UnexpectedBody {
            method: "get".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot send a body with get.");
    }

    #[test]
    fn test_malformed_body_error_includes_status() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = HttpError::MalformedBody { code: 502, source };
        let message = error.to_string();
        assert!(message.contains("Malformed response body"));
        assert!(message.contains("502"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_from_invalid_request_conversion() {
        let error: HttpError = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        }
        .into();
        assert!(matches!(error, HttpError::InvalidRequest(_)));
    }
}
