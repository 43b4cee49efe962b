//! Event subscriptions
//!
//! A subscription routes call or contact events to a webhook or websocket.
//! Responses carry either a `webhook` or a `websocket` object.

mod call_event;
mod contact_event;

pub use call_event::CallEventSubscription;
pub use contact_event::ContactEventSubscription;
