//! Websockets
//!
//! The websocket counterpart of a webhook: event subscriptions may deliver to
//! either. Only the registration is modeled; the stream itself is not opened.

use crate::resource::macros::define_resource;
use crate::resource::ops::{Create, Destroy, List, Retrieve, Update};

define_resource! {
    /// A registered websocket endpoint. `websocket_url` is where the client
    /// connects; `signature` mirrors the webhook's signing settings.
    Websocket,
    path = "websockets",
    attributes = [id, signature, websocket_url],
}

impl Retrieve for Websocket {}
impl List for Websocket {}
impl Update for Websocket {}
impl Destroy for Websocket {}

// The API fills in the URL; a body may carry only an optional signing secret.
impl Create for Websocket {
    const REQUIRED_ATTRIBUTES: &'static [&'static str] = &[];
}
