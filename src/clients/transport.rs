//! The HTTP transport seam.
//!
//! [`HttpTransport`] is the only place the client touches the network. The
//! default implementation, [`ReqwestTransport`], wraps a blocking `reqwest`
//! client. Tests substitute an in-process implementation that records calls.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::HttpResponse;

/// Executes a single HTTP exchange and returns the decoded response.
///
/// Implementations must not retry, and must report non-2xx responses as
/// `Ok`; deciding what a response means is the caller's job.
pub trait HttpTransport: fmt::Debug + Send + Sync {
    /// Sends one request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the exchange could not complete and
    /// [`HttpError::MalformedBody`] if the response body is not JSON.
    fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<&serde_json::Value>,
    ) -> Result<HttpResponse, HttpError>;
}

/// [`HttpTransport`] backed by `reqwest::blocking`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Creates a transport, applying `timeout` to every request when set.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying client cannot be
    /// created (e.g. TLS initialization failure).
    pub fn new(timeout: Option<Duration>) -> Result<Self, HttpError> {
        let mut builder = reqwest::blocking::Client::builder().use_rustls_tls();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<&serde_json::Value>,
    ) -> Result<HttpResponse, HttpError> {
        let mut req_builder = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send()?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text()?;
        let body = decode_body(code, &body_text)?;

        Ok(HttpResponse::new(code, res_headers, body))
    }
}

/// Decodes a response body, treating an empty body as `{}`.
pub(crate) fn decode_body(code: u16, text: &str) -> Result<serde_json::Value, HttpError> {
    if text.trim().is_empty() {
        return Ok(serde_json::json!({}));
    }
    serde_json::from_str(text).map_err(|source| HttpError::MalformedBody { code, source })
}
