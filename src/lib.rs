//! Typed client for the Dialpad REST API.
//!
//! Calls, users, contacts, call centers, departments, webhooks, websockets
//! and event subscriptions are exposed as resource types sharing one HTTP transport,
//! one attribute model and one pagination contract.
//!
//! ```ignore
//! use dialpad::prelude::*;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> dialpad::Result<()> {
//!     let client = DialpadClient::new(ClientConfig::from_env())?;
//!
//!     let center = CallCenter::retrieve(&client, "123").await?;
//!     println!("{:?}", center.hold_queue());
//!
//!     let contact = Contact::create(&client, json!({"first_name": "John", "last_name": "Doe"})).await?;
//!     contact.delete(&client).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod resource;
pub mod resources;
pub mod validation;

pub use api::{client, configure, ApiResponse, ClientConfig, DialpadClient, ResponseBody};
pub use error::{Error, RequiredAttributeError, Result};
pub use resource::{DialpadObject, Page, Resource};
pub use resources::{
    Call, CallCenter, CallEventSubscription, Contact, ContactEventSubscription, Department, User,
    Webhook, Websocket,
};

/// Everything needed to call resource operations
pub mod prelude {
    pub use crate::api::{ClientConfig, DialpadClient};
    pub use crate::error::{Error, Result};
    pub use crate::resource::{Create, Destroy, List, Page, Resource, Retrieve, Update};
    pub use crate::resources::*;
}
