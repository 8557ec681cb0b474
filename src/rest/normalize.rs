//! Response normalization.
//!
//! Every decoded Linode API body passes through [`normalize`] exactly once.
//! The first matching rule wins:
//!
//! 1. An `errors` key means the API reported failure
//! 2. An empty object means the operation succeeded with nothing to return
//! 3. Anything else is handed back unchanged

use serde_json::Value;

use crate::rest::errors::{ApiErrorDetail, LinodeError, RequestFailedError};

/// The successful result of a resource operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The API returned an empty object.
    Success,
    /// The API returned data, passed through unchanged.
    Payload(Value),
}

impl Outcome {
    /// Returns `true` for [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns the payload, if any.
    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        match self {
            Self::Success => None,
            Self::Payload(value) => Some(value),
        }
    }

    /// Consumes the outcome and returns the payload, if any.
    #[must_use]
    pub fn into_payload(self) -> Option<Value> {
        match self {
            Self::Success => None,
            Self::Payload(value) => Some(value),
        }
    }
}

/// Classifies a decoded response body.
///
/// # Errors
///
/// Returns [`LinodeError::RequestFailed`] when the body is an object with an
/// `errors` key. The key decides on its own: an empty or non-list value still
/// fails.
pub fn normalize(body: Value) -> Result<Outcome, LinodeError> {
    if let Some(errors) = body.get("errors") {
        return Err(RequestFailedError {
            errors: error_details(errors),
        }
        .into());
    }

    match &body {
        Value::Object(map) if map.is_empty() => Ok(Outcome::Success),
        _ => Ok(Outcome::Payload(body)),
    }
}

fn error_details(errors: &Value) -> Vec<ApiErrorDetail> {
    match errors {
        Value::Array(items) => items.iter().map(error_detail).collect(),
        Value::Null => Vec::new(),
        other => vec![error_detail(other)],
    }
}

fn error_detail(item: &Value) -> ApiErrorDetail {
    let reason = match item {
        Value::String(reason) => reason.clone(),
        Value::Object(entry) => entry
            .get("reason")
            .and_then(Value::as_str)
            .map_or_else(|| item.to_string(), str::to_string),
        other => other.to_string(),
    };
    let field = item
        .get("field")
        .and_then(Value::as_str)
        .map(str::to_string);

    ApiErrorDetail { reason, field }
}
