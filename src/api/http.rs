//! HTTP utilities for Dialpad REST API calls

use crate::error::{Error, Result};
use reqwest::{Client, Method};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| c.is_control(), "")
}

/// Parsed response payload
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Payload parsed as JSON
    Json(Value),
    /// Empty or non-JSON payload, kept verbatim
    Text(String),
}

impl ResponseBody {
    /// Parse a raw payload. Never fails: anything that is not JSON stays text.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return ResponseBody::Text(raw.to_string());
        }
        match serde_json::from_str(raw) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(raw.to_string()),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(v) => Some(v),
            ResponseBody::Text(_) => None,
        }
    }

    /// The JSON value, or `Null` for a text payload
    pub fn into_json(self) -> Value {
        match self {
            ResponseBody::Json(v) => v,
            ResponseBody::Text(_) => Value::Null,
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseBody::Json(v) => write!(f, "{}", v),
            ResponseBody::Text(s) => f.write_str(s),
        }
    }
}

/// Normalized `(status, body)` view of an HTTP response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
    raw: String,
}

impl ApiResponse {
    pub fn new(status: u16, raw: String) -> Self {
        Self {
            status,
            body: ResponseBody::parse(&raw),
            raw,
        }
    }

    /// The payload exactly as received
    pub fn text(&self) -> &str {
        &self.raw
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn the response into an API error carrying status and raw body
    pub fn into_error(self) -> Error {
        Error::Api {
            status: self.status,
            body: self.raw,
        }
    }

    /// Pass 2xx responses through, fail on anything else
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(self.into_error())
        }
    }
}

/// HTTP client wrapper for Dialpad API calls
#[derive(Clone)]
pub struct DialpadHttpClient {
    client: Client,
}

impl DialpadHttpClient {
    /// Create a new HTTP client
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Send one request and normalize the response.
    ///
    /// Non-success statuses are not errors here; the caller decides what a
    /// given status means for its operation.
    pub async fn execute(
        &self,
        method: Method,
        url: &str,
        token: Option<&str>,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), url);

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let raw = response.text().await?;

        let response = ApiResponse::new(status, raw);
        if !response.is_success() {
            // Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::warn!(
                "API error: {} {} -> {} - {}",
                method,
                url,
                status,
                sanitize_for_log(response.text())
            );
        }

        Ok(response)
    }
}

/// Append query parameters to a URL.
///
/// Scalars become `key=value` and arrays of scalars repeat the key. Nested
/// objects use brackets (`filter[state]=active`), objects inside arrays
/// `key[][field]`. Nulls and empty containers are sent as a bare key.
/// A null `params` adds nothing; any other non-object is rejected.
pub fn add_query_params(url: &str, params: &Value) -> Result<String> {
    let map = match params {
        Value::Null => return Ok(url.to_string()),
        Value::Object(map) => map,
        other => {
            return Err(Error::InvalidQuery(format!(
                "expected an object, got {}",
                other
            )))
        },
    };

    let mut query_parts: Vec<String> = Vec::new();
    for (key, value) in map {
        encode_query_value(key, value, &mut query_parts);
    }

    Ok(if query_parts.is_empty() {
        url.to_string()
    } else if url.contains('?') {
        format!("{}&{}", url, query_parts.join("&"))
    } else {
        format!("{}?{}", url, query_parts.join("&"))
    })
}

fn encode_query_value(key: &str, value: &Value, parts: &mut Vec<String>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (field, nested) in map {
                encode_query_value(&format!("{}[{}]", key, field), nested, parts);
            }
        },
        Value::Array(arr) if !arr.is_empty() => {
            for item in arr {
                match item {
                    Value::Object(_) | Value::Array(_) => {
                        encode_query_value(&format!("{}[]", key), item, parts)
                    },
                    scalar => encode_query_value(key, scalar, parts),
                }
            }
        },
        Value::String(s) => push_pair(key, s, parts),
        Value::Number(n) => push_pair(key, &n.to_string(), parts),
        Value::Bool(b) => push_pair(key, &b.to_string(), parts),
        _ => parts.push(urlencoding::encode(key).into_owned()),
    }
}

fn push_pair(key: &str, value: &str, parts: &mut Vec<String>) {
    parts.push(format!(
        "{}={}",
        urlencoding::encode(key),
        urlencoding::encode(value)
    ));
}
