//! Required input checks
//!
//! These run before any request is built, so a failure here never touches
//! the network.

use crate::error::RequiredAttributeError;
use serde_json::{Map, Value};

/// Whether a value counts as absent: `null` or a blank string.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Fail when a single identifier is absent or blank.
pub fn require_one(
    resource: &'static str,
    value: Option<&str>,
    label: &str,
) -> Result<(), RequiredAttributeError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(RequiredAttributeError::single(resource, label)),
    }
}

/// Fail when any of `required` is absent, `null` or blank in `attributes`.
///
/// All missing names are collected in the order given, never just the first.
pub fn require_all(
    resource: &'static str,
    attributes: &Map<String, Value>,
    required: &[&str],
) -> Result<(), RequiredAttributeError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|name| attributes.get(**name).map(is_blank).unwrap_or(true))
        .map(|name| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(RequiredAttributeError::many(resource, missing))
    }
}
