//! Dialpad API transport
//!
//! This module provides the single point of HTTP access used by every
//! resource type: configuration, authenticated requests and response
//! normalization.
//!
//! # Module Structure
//!
//! - [`client`] - Dialpad client and its connection settings
//! - [`http`] - HTTP utilities for REST API calls
//!
//! A process-wide default client is available through [`client()`] and can be
//! replaced with [`configure`]. Code that prefers explicit wiring can build a
//! [`DialpadClient`] and pass it around instead.
//!
//! # Example
//!
//! ```ignore
//! use dialpad::{ClientConfig, DialpadClient, User};
//!
//! async fn example() -> dialpad::Result<()> {
//!     let client = DialpadClient::new(ClientConfig::default().with_token("..."))?;
//!     let user = User::retrieve(&client, "1111222233334444").await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod http;

pub use client::{ClientConfig, DialpadClient};
pub use http::{ApiResponse, ResponseBody};

use crate::error::Result;
use std::sync::{Arc, OnceLock, RwLock};

/// Process-wide default client, built lazily from the environment
static DEFAULT_CLIENT: OnceLock<RwLock<Option<Arc<DialpadClient>>>> = OnceLock::new();

fn default_slot() -> &'static RwLock<Option<Arc<DialpadClient>>> {
    DEFAULT_CLIENT.get_or_init(|| RwLock::new(None))
}

/// Get the process-wide client, creating it from the environment on first use
pub fn client() -> Result<Arc<DialpadClient>> {
    {
        let slot = default_slot().read().unwrap_or_else(|e| e.into_inner());
        if let Some(client) = slot.as_ref() {
            return Ok(Arc::clone(client));
        }
    }

    let mut slot = default_slot().write().unwrap_or_else(|e| e.into_inner());
    if let Some(client) = slot.as_ref() {
        return Ok(Arc::clone(client));
    }

    let client = Arc::new(DialpadClient::from_env()?);
    *slot = Some(Arc::clone(&client));
    Ok(client)
}

/// Replace the process-wide client.
///
/// The new base URL and token are swapped in together; a concurrent
/// [`client()`] sees either the old pair or the new one.
pub fn configure(config: ClientConfig) -> Result<()> {
    let client = Arc::new(DialpadClient::new(config)?);
    tracing::info!("Configured default client for {}", client.config().base_url);

    let mut slot = default_slot().write().unwrap_or_else(|e| e.into_inner());
    *slot = Some(client);
    Ok(())
}
