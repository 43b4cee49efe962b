//! Resource abstraction layer
//!
//! Every Dialpad entity is represented the same way: a [`DialpadObject`]
//! attribute bag wrapped in a type that declares which attributes callers may
//! read. Operations are shared, not reimplemented per type.
//!
//! # Architecture
//!
//! - [`object`] - The attribute bag and the [`Resource`] trait
//! - [`ops`] - Retrieve/list/create/update/destroy, opted into per type
//! - [`fetcher`] - List responses to [`Page`]s
//! - [`registry`] - Name-keyed resource definitions
//! - [`dispatch`] - Runs a registry action against the API
//!
//! # Example
//!
//! ```ignore
//! use dialpad::prelude::*;
//! use serde_json::json;
//!
//! async fn first_page(client: &DialpadClient) -> dialpad::Result<()> {
//!     let page = User::list(client, &json!({"state": "active"})).await?;
//!     for user in &page.items {
//!         println!("{:?}", user.display_name());
//!     }
//!     if let Some(cursor) = page.cursor {
//!         let _next = User::list(client, &json!({"state": "active", "cursor": cursor})).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod dispatch;
pub mod fetcher;
pub(crate) mod macros;
pub mod object;
pub mod ops;
pub mod registry;

pub use dispatch::{execute_action, ActionRequest};
pub use fetcher::{fetch_page, next_page_params, Page};
pub use object::{DialpadObject, Resource};
pub use ops::{Create, Destroy, List, Retrieve, Update};
pub use registry::{get_all_resource_keys, get_resource, Action, ResourceDef};
