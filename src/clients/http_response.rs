//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimit`]
//! information Linode reports in response headers.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-RateLimit-*` headers.
///
/// # Example
///
/// ```rust
/// use linode_api::clients::RateLimit;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-ratelimit-limit".to_string(), vec!["800".to_string()]);
/// headers.insert("x-ratelimit-remaining".to_string(), vec!["799".to_string()]);
/// headers.insert("x-ratelimit-reset".to_string(), vec!["1700000000".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.limit, 800);
/// assert_eq!(limit.remaining, 799);
/// assert_eq!(limit.reset, Some(1_700_000_000));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed in the current window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
    /// Unix timestamp at which the window resets, when reported.
    pub reset: Option<u64>,
}

impl RateLimit {
    /// Parses rate limit headers from a lower-cased header map.
    ///
    /// Returns `None` unless both the limit and remaining headers parse.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let first = |name: &str| headers.get(name).and_then(|values| values.first());

        let limit = first("x-ratelimit-limit")?.trim().parse().ok()?;
        let remaining = first("x-ratelimit-remaining")?.trim().parse().ok()?;
        let reset = first("x-ratelimit-reset").and_then(|value| value.trim().parse().ok());

        Some(Self {
            limit,
            remaining,
            reset,
        })
    }

    /// Returns `true` when no requests remain in the current window.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// An HTTP response from the Linode API.
///
/// The body is always decoded JSON; an empty body is represented as `{}`.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers with lower-cased names (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded response body.
    pub body: serde_json::Value,
    /// Rate limit information, if reported.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing rate limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);
        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
