//! Generic attribute container shared by every resource type

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Canonical storage key: surrounding whitespace and a symbol-style leading
/// `:` are dropped, so `"state"`, `":state"` and `" state"` all land on the
/// same entry.
pub fn normalize_key(key: &str) -> String {
    let key = key.trim();
    key.strip_prefix(':').unwrap_or(key).to_string()
}

/// Raw attribute bag for one API entity.
///
/// Every input key is kept, declared or not; values are stored untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DialpadObject {
    attributes: Map<String, Value>,
}

impl DialpadObject {
    pub fn new<I, K>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let attributes = attributes
            .into_iter()
            .map(|(key, value)| (normalize_key(key.as_ref()), value))
            .collect();
        Self { attributes }
    }

    /// Build from a response body. Anything but a JSON object yields an
    /// empty bag (e.g. the empty text of a 204).
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::new(map),
            _ => Self::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn into_attributes(self) -> Map<String, Value> {
        self.attributes
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl From<Map<String, Value>> for DialpadObject {
    fn from(map: Map<String, Value>) -> Self {
        Self::new(map)
    }
}

/// Render an identifier-like value as a string: ids arrive as JSON strings
/// or numbers depending on the endpoint.
pub fn value_as_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A typed API entity backed by a [`DialpadObject`].
///
/// Implementors are generated by `define_resource!`, which supplies the
/// declared attribute set, the endpoint path and one accessor per attribute.
pub trait Resource: Sized + Send + Sync {
    /// Type name used in error messages, e.g. `"CallCenter"`
    const NAME: &'static str;
    /// Collection path relative to the API base URL, e.g. `"callcenters"`
    const PATH: &'static str;
    /// Declared attributes, in definition order
    const ATTRIBUTES: &'static [&'static str];

    /// Declared attributes as a set for O(1) membership checks
    fn attribute_set() -> &'static HashSet<&'static str>;

    fn from_object(object: DialpadObject) -> Self;

    fn object(&self) -> &DialpadObject;

    /// Construct from a raw key/value map
    fn new<I, K>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        Self::from_object(DialpadObject::new(attributes))
    }

    /// Construct from a parsed response body
    fn from_value(value: Value) -> Self {
        Self::from_object(DialpadObject::from_value(value))
    }

    /// Whether `name` is a declared attribute of this type
    fn responds_to(name: &str) -> bool {
        Self::attribute_set().contains(name)
    }

    /// Read a declared attribute by name.
    ///
    /// Returns `Ok(None)` when the attribute is declared but was never
    /// supplied, and [`Error::UnknownAttribute`] when it is not declared.
    fn attribute(&self, name: &str) -> Result<Option<&Value>> {
        if Self::responds_to(name) {
            Ok(self.object().get(name))
        } else {
            Err(Error::UnknownAttribute {
                resource: Self::NAME,
                attribute: name.to_string(),
            })
        }
    }

    /// Every stored attribute, declared or not
    fn attributes(&self) -> &Map<String, Value> {
        self.object().attributes()
    }

    /// The entity's `id`, as a string
    fn resource_id(&self) -> Option<String> {
        self.object().get("id").and_then(value_as_id)
    }

    /// The stored attributes as a JSON object
    fn to_value(&self) -> Value {
        Value::Object(self.attributes().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("state"), "state");
        assert_eq!(normalize_key(":state"), "state");
        assert_eq!(normalize_key(" state "), "state");
    }

    #[test]
    fn test_mixed_key_forms_share_storage() {
        let object = DialpadObject::new(vec![
            (":call_id".to_string(), json!(1)),
            ("direction".to_string(), json!("outbound")),
        ]);
        assert_eq!(object.get("call_id"), Some(&json!(1)));
        assert_eq!(object.get("direction"), Some(&json!("outbound")));
    }

    #[test]
    fn test_from_non_object_is_empty() {
        assert!(DialpadObject::from_value(Value::Null).is_empty());
        assert!(DialpadObject::from_value(json!([1, 2])).is_empty());
    }

    #[test]
    fn test_values_untouched() {
        let nested = json!({"max_hold_count": "50", "flags": [true, null]});
        let object = DialpadObject::new([("hold_queue", nested.clone())]);
        assert_eq!(object.get("hold_queue"), Some(&nested));
    }

    #[test]
    fn test_value_as_id() {
        assert_eq!(value_as_id(&json!("abc")), Some("abc".to_string()));
        assert_eq!(value_as_id(&json!(5780678246121472u64)), Some("5780678246121472".to_string()));
        assert_eq!(value_as_id(&Value::Null), None);
    }
}
