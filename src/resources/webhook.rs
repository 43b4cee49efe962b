//! Webhooks
//!
//! Only the webhook's metadata is modeled; signature verification of
//! incoming events is left to the receiver.

use crate::resource::macros::define_resource;
use crate::resource::ops::{Create, Destroy, List, Retrieve, Update};

define_resource! {
    /// A registered webhook endpoint. `signature` carries the signing
    /// algorithm, secret and type as returned by the API.
    Webhook,
    path = "webhooks",
    attributes = [hook_url, id, signature],
}

impl Retrieve for Webhook {}
impl List for Webhook {}
impl Update for Webhook {}
impl Destroy for Webhook {}

impl Create for Webhook {
    const REQUIRED_ATTRIBUTES: &'static [&'static str] = &["hook_url"];
}
