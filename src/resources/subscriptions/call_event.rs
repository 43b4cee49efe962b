use crate::resource::macros::define_resource;
use crate::resource::ops::{Create, Destroy, List, Retrieve, Update};

define_resource! {
    /// Subscription to call state events
    CallEventSubscription,
    path = "subscriptions/call",
    attributes = [call_states, enabled, group_calls_only, id, webhook, websocket],
}

impl Retrieve for CallEventSubscription {}
impl List for CallEventSubscription {}
impl Update for CallEventSubscription {}
impl Destroy for CallEventSubscription {}

impl Create for CallEventSubscription {
    const REQUIRED_ATTRIBUTES: &'static [&'static str] = &["webhook_id"];
}
