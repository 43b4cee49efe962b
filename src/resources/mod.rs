//! Resource types
//!
//! One module per API resource. Each type is generated by
//! `define_resource!` and opts into the operations its endpoint supports.

mod call;
mod call_center;
mod contact;
mod department;
pub mod subscriptions;
mod user;
mod webhook;
mod websocket;

pub use call::Call;
pub use call_center::CallCenter;
pub use contact::Contact;
pub use department::Department;
pub use subscriptions::{CallEventSubscription, ContactEventSubscription};
pub use user::User;
pub use webhook::Webhook;
pub use websocket::Websocket;
