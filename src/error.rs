//! Error types
//!
//! Every fallible operation in the crate returns [`Result`]. The variants
//! separate local validation failures (raised before any request is sent)
//! from API failures (the server answered with an unusable status) and
//! transport failures (no usable answer at all).

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// A required identifier or field was absent or blank.
///
/// `resource` names the type that ran the check (e.g. `"Contact"`), which is
/// how callers tell a contact validation failure from a user one. The display
/// message is only the aggregated list of missing names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequiredAttributeError {
    pub resource: &'static str,
    pub missing: Vec<String>,
    message: String,
}

impl RequiredAttributeError {
    /// A single missing identifier, e.g. the `ID` of a retrieve call
    pub fn single(resource: &'static str, label: &str) -> Self {
        Self {
            resource,
            missing: vec![label.to_string()],
            message: format!("Missing required attribute: {}", label),
        }
    }

    /// A set of missing fields, reported together in caller order
    pub fn many(resource: &'static str, missing: Vec<String>) -> Self {
        let message = format!("Missing required attributes: {}", missing.join(", "));
        Self {
            resource,
            missing,
            message,
        }
    }

    /// The human readable message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors returned by the Dialpad client
#[derive(Debug, Error)]
pub enum Error {
    /// Required input missing; no request was sent.
    #[error(transparent)]
    Validation(#[from] RequiredAttributeError),

    /// The API answered with a status the operation treats as failure.
    #[error("{status} - {body}")]
    Api { status: u16, body: String },

    /// Connection, timeout or body read failure from the HTTP client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Read of an attribute the resource type does not declare.
    #[error("undefined attribute `{attribute}` for {resource}")]
    UnknownAttribute {
        resource: &'static str,
        attribute: String,
    },

    /// The resource type has no such operation.
    #[error("{resource} does not support `{operation}`")]
    UnsupportedOperation {
        resource: String,
        operation: String,
    },

    /// List parameters that cannot be expressed as a query string.
    #[error("invalid query parameters: {0}")]
    InvalidQuery(String),

    /// Invalid client configuration (bad base URL, client builder failure).
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status carried by an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for failures raised before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_message() {
        let err = RequiredAttributeError::single("Call", "ID");
        assert_eq!(err.to_string(), "Missing required attribute: ID");
        assert_eq!(err.resource, "Call");
    }

    #[test]
    fn test_many_message_joins_in_order() {
        let err = RequiredAttributeError::many(
            "Contact",
            vec!["first_name".to_string(), "last_name".to_string()],
        );
        assert_eq!(
            err.to_string(),
            "Missing required attributes: first_name, last_name"
        );
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: Error = RequiredAttributeError::single("User", "ID").into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Missing required attribute: ID");
    }

    #[test]
    fn test_api_error_format() {
        let err = Error::Api {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "404 - Not Found");
        assert_eq!(err.status(), Some(404));
    }
}
