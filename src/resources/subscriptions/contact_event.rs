use crate::resource::macros::define_resource;
use crate::resource::ops::{Create, Destroy, List, Retrieve, Update};

define_resource! {
    /// Subscription to contact change events
    ContactEventSubscription,
    path = "subscriptions/contact",
    attributes = [contact_type, enabled, id, webhook, websocket],
}

impl Retrieve for ContactEventSubscription {}
impl List for ContactEventSubscription {}
impl Update for ContactEventSubscription {}
impl Destroy for ContactEventSubscription {}

impl Create for ContactEventSubscription {
    const REQUIRED_ATTRIBUTES: &'static [&'static str] = &["webhook_id"];
}
