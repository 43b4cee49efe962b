//! Resource Registry
//!
//! Name-keyed definitions of every resource type: endpoint path, declared
//! attributes, supported actions and the fields each write action requires.
//! The command line tool resolves user input through this table.

use super::object::Resource;
use super::ops::Create;
use crate::resources::{
    Call, CallCenter, CallEventSubscription, Contact, ContactEventSubscription, Department, User,
    Webhook, Websocket,
};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// An operation a resource type may support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    List,
    Get,
    Create,
    Update,
    Delete,
    /// Calls only
    Hangup,
    /// Contacts only: create-or-replace keyed by `uid`
    Upsert,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::List,
        Action::Get,
        Action::Create,
        Action::Update,
        Action::Delete,
        Action::Hangup,
        Action::Upsert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Get => "get",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Hangup => "hangup",
            Action::Upsert => "upsert",
        }
    }

    /// Whether the action addresses one entity by id
    pub fn needs_id(self) -> bool {
        matches!(
            self,
            Action::Get | Action::Update | Action::Delete | Action::Hangup
        )
    }

    /// Whether the action sends a JSON body
    pub fn needs_body(self) -> bool {
        matches!(self, Action::Create | Action::Update | Action::Upsert)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown action: {}", s))
    }
}

const CRUD: &[Action] = &[
    Action::List,
    Action::Get,
    Action::Create,
    Action::Update,
    Action::Delete,
];

/// Resource definition
#[derive(Debug, Clone)]
pub struct ResourceDef {
    /// Registry key, e.g. `call-events`
    pub key: &'static str,
    /// Rust type name, e.g. `CallEventSubscription`
    pub type_name: &'static str,
    pub display_name: &'static str,
    pub path: &'static str,
    pub attributes: &'static [&'static str],
    pub actions: Vec<Action>,
    /// Required body fields per write action
    pub required: HashMap<Action, &'static [&'static str]>,
}

impl ResourceDef {
    fn of<T: Resource>(key: &'static str, display_name: &'static str, actions: &[Action]) -> Self {
        Self {
            key,
            type_name: T::NAME,
            display_name,
            path: T::PATH,
            attributes: T::ATTRIBUTES,
            actions: actions.to_vec(),
            required: HashMap::new(),
        }
    }

    fn creatable<T: Create>(key: &'static str, display_name: &'static str, actions: &[Action]) -> Self {
        let mut def = Self::of::<T>(key, display_name, actions);
        def.required.insert(Action::Create, T::REQUIRED_ATTRIBUTES);
        def
    }

    fn with_required(mut self, action: Action, fields: &'static [&'static str]) -> Self {
        self.required.insert(action, fields);
        self
    }

    pub fn supports(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    /// Required body fields for `action` (empty when none)
    pub fn required_for(&self, action: Action) -> &'static [&'static str] {
        self.required.get(&action).copied().unwrap_or(&[])
    }
}

/// Global registry
static REGISTRY: OnceLock<HashMap<&'static str, ResourceDef>> = OnceLock::new();

/// Get the resource registry (built on first access)
pub fn get_registry() -> &'static HashMap<&'static str, ResourceDef> {
    REGISTRY.get_or_init(|| {
        let defs = [
            ResourceDef::of::<Call>("calls", "Calls", &[Action::List, Action::Get, Action::Hangup]),
            ResourceDef::creatable::<CallCenter>("callcenters", "Call Centers", CRUD),
            ResourceDef::creatable::<Contact>("contacts", "Contacts", &[
                Action::List,
                Action::Get,
                Action::Create,
                Action::Update,
                Action::Delete,
                Action::Upsert,
            ])
            .with_required(Action::Upsert, Contact::UPSERT_REQUIRED_ATTRIBUTES),
            ResourceDef::creatable::<Department>("departments", "Departments", CRUD),
            ResourceDef::creatable::<User>("users", "Users", CRUD),
            ResourceDef::creatable::<Webhook>("webhooks", "Webhooks", CRUD),
            ResourceDef::creatable::<Websocket>("websockets", "Websockets", CRUD),
            ResourceDef::creatable::<CallEventSubscription>(
                "call-events",
                "Call Event Subscriptions",
                CRUD,
            ),
            ResourceDef::creatable::<ContactEventSubscription>(
                "contact-events",
                "Contact Event Subscriptions",
                CRUD,
            ),
        ];

        defs.into_iter().map(|def| (def.key, def)).collect()
    })
}

/// Get a resource definition by key
pub fn get_resource(key: &str) -> Option<&'static ResourceDef> {
    get_registry().get(key)
}

/// Get all resource keys, sorted
pub fn get_all_resource_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = get_registry().keys().copied().collect();
    keys.sort_unstable();
    keys
}
