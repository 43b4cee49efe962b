//! Resource Fetcher
//!
//! Turns list-endpoint responses into typed pages. Every resource type's
//! `list` goes through [`fetch_page`]; none parses list bodies itself.

use super::object::{value_as_id, Resource};
use crate::api::{ApiResponse, DialpadClient, ResponseBody};
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// Query parameter the API reads the continuation cursor from
pub const CURSOR_PARAM: &str = "cursor";

/// One page of a list endpoint.
///
/// `cursor` is `None` when the response carries no cursor; `items` is empty,
/// never missing, when the response carries no items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub cursor: Option<String>,
    pub items: Vec<T>,
}

impl<T: Resource> Page<T> {
    /// Build a page from a list body. Never fails on missing fields.
    ///
    /// Numeric cursors are carried as their decimal string.
    pub fn from_body(body: &Value) -> Self {
        let cursor = body.get("cursor").and_then(value_as_id);

        let items = extract_items(body).into_iter().map(T::from_value).collect();

        Self { cursor, items }
    }

    pub fn from_response(response: &ApiResponse) -> Self {
        match &response.body {
            ResponseBody::Json(body) => Self::from_body(body),
            ResponseBody::Text(_) => Self::empty(),
        }
    }
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            cursor: None,
            items: Vec::new(),
        }
    }

    /// Whether the server handed back a cursor for a further page
    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// `items` array of a list body; absent, null or non-array yields nothing
fn extract_items(body: &Value) -> Vec<Value> {
    body.get("items")
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default()
}

/// Fetch one page of `T` with caller-supplied query parameters.
///
/// Exactly one request is made; following the cursor is up to the caller.
pub async fn fetch_page<T: Resource>(client: &DialpadClient, params: &Value) -> Result<Page<T>> {
    let response = client.get(T::PATH, params).await?.error_for_status()?;
    let page = Page::from_response(&response);

    tracing::debug!(
        "{}: fetched {} items (more: {})",
        T::NAME,
        page.len(),
        page.has_more()
    );

    Ok(page)
}

/// Query parameters for the page after `page`, starting from `params`.
///
/// Returns `None` when `page` carried no cursor.
pub fn next_page_params<T>(params: &Value, page: &Page<T>) -> Option<Value> {
    let cursor = page.cursor.as_ref()?;
    let mut next = match params {
        Value::Object(map) => map.clone(),
        _ => serde_json::Map::new(),
    };
    next.insert(CURSOR_PARAM.to_string(), Value::String(cursor.clone()));
    Some(Value::Object(next))
}
