//! Optional request fields.
//!
//! Linode endpoints accept many optional fields. [`Params`] carries them as an
//! ordered list of `(name, value)` pairs, and turns them into a request body
//! in one of two ways:
//!
//! - [`Params::merge_into`] overlays them on the operation's required fields,
//!   skipping falsy values. Create-style operations use it.
//! - [`Params::into_body`] sends them exactly as given. Update operations use
//!   it so that `false` and `0` can be set explicitly.
//!
//! # Example
//!
//! ```rust
//! use linode_api::Params;
//! use serde_json::{json, Map};
//!
//! let params = Params::new()
//!     .set("label", "web-1")
//!     .set("backups_enabled", false)
//!     .set("tags", vec!["prod"]);
//!
//! let mut required = Map::new();
//! required.insert("region".to_string(), json!("us-east"));
//!
//! assert_eq!(
//!     params.merge_into(required),
//!     json!({"region": "us-east", "label": "web-1", "tags": ["prod"]})
//! );
//! ```

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered bag of optional request fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    fields: Vec<(String, Value)>,
}

impl Params {
    /// Creates an empty bag.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Builds a bag from any value that serializes to a JSON object.
    ///
    /// Field order follows the serialized object.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` fails to serialize or is not an object.
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(map.into_iter().collect()),
            _ => Err(serde_json::Error::custom(
                "optional fields must serialize to a JSON object",
            )),
        }
    }

    /// Adds a field, returning the bag.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a field. A field already present keeps its position and takes
    /// the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Overlays the truthy fields on `required` and returns the body.
    ///
    /// Falsy values (`null`, `false`, `0`, `""`, `[]`, `{}`) are skipped. A
    /// truthy field with the name of a required field replaces it.
    #[must_use]
    pub fn merge_into(&self, mut required: Map<String, Value>) -> Value {
        for (name, value) in &self.fields {
            if !is_falsy(value) {
                required.insert(name.clone(), value.clone());
            }
        }
        Value::Object(required)
    }

    /// Returns every field unchanged as a JSON object.
    #[must_use]
    pub fn into_body(self) -> Value {
        Value::Object(self.fields.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

/// Returns `true` for values that are left out of assembled bodies.
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Builds a required-field map from `(name, value)` pairs.
pub(crate) fn required<const N: usize>(fields: [(&str, Value); N]) -> Map<String, Value> {
    fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_values() {
        for value in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!([]),
            json!({}),
        ] {
            assert!(is_falsy(&value), "{value} should be falsy");
        }
        for value in [json!(true), json!(1), json!(-1), json!(0.5), json!("0"), json!([0])] {
            assert!(!is_falsy(&value), "{value} should be truthy");
        }
    }

    #[test]
    fn test_merge_into_drops_falsy_fields() {
        let params = Params::new()
            .set("label", "web-1")
            .set("swap_size", 0)
            .set("backups_enabled", false)
            .set("tags", Vec::<String>::new())
            .set("group", "");

        let body = params.merge_into(required([("region", json!("us-east"))]));
        assert_eq!(body, json!({"region": "us-east", "label": "web-1"}));
    }

    #[test]
    fn test_merge_into_truthy_field_overrides_required() {
        let params = Params::new().set("region", "eu-west");
        let body = params.merge_into(required([("region", json!("us-east"))]));
        assert_eq!(body, json!({"region": "eu-west"}));
    }

    #[test]
    fn test_merge_into_falsy_field_keeps_required() {
        let params = Params::new().set("region", "");
        let body = params.merge_into(required([("region", json!("us-east"))]));
        assert_eq!(body, json!({"region": "us-east"}));
    }

    #[test]
    fn test_into_body_keeps_falsy_fields() {
        let body = Params::new()
            .set("label", "web-1")
            .set("watchdog_enabled", false)
            .into_body();
        assert_eq!(body, json!({"label": "web-1", "watchdog_enabled": false}));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = Params::new().set("a", 1).set("b", 2);
        params.insert("a", 3);

        let fields: Vec<_> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(fields, vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&json!(3)));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_from_iterator() {
        let params: Params = [("label", json!("db")), ("booted", json!(true))]
            .into_iter()
            .collect();
        assert_eq!(params.get("booted"), Some(&json!(true)));
        assert!(!params.is_empty());
    }

    #[test]
    fn test_from_serializable_struct() {
        #[derive(Serialize)]
        struct RebootOptions {
            config_id: u64,
        }

        let params = Params::from_serializable(&RebootOptions { config_id: 7 }).unwrap();
        assert_eq!(params.get("config_id"), Some(&json!(7)));
    }

    #[test]
    fn test_from_serializable_rejects_non_object() {
        assert!(Params::from_serializable(&vec![1, 2]).is_err());
    }
}
