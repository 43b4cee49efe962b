//! Action Dispatch
//!
//! Maps a registry key plus an [`Action`] to the typed operation behind it and
//! renders the result as JSON. Used by the command line tool.

use super::fetcher::Page;
use super::object::Resource;
use super::ops::{Create, Destroy, List, Retrieve, Update};
use super::registry::{get_resource, Action};
use crate::api::DialpadClient;
use crate::error::{Error, Result};
use crate::resources::{
    Call, CallCenter, CallEventSubscription, Contact, ContactEventSubscription, Department, User,
    Webhook, Websocket,
};
use serde_json::{json, Value};

/// Inputs for one dispatched action
#[derive(Debug, Clone, Default)]
pub struct ActionRequest {
    pub id: Option<String>,
    /// JSON body for write actions
    pub body: Value,
    /// Query parameters for `list`
    pub params: Value,
}

impl ActionRequest {
    fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}

/// Execute an action on a resource type
pub async fn execute_action(
    client: &DialpadClient,
    resource_key: &str,
    action: Action,
    request: ActionRequest,
) -> Result<Value> {
    let Some(def) = get_resource(resource_key) else {
        return Err(unsupported(resource_key, action));
    };
    if !def.supports(action) {
        return Err(unsupported(def.type_name, action));
    }

    tracing::info!("execute_action: resource={}, action={}", resource_key, action);

    match resource_key {
        "calls" => execute_call_action(client, action, request).await,
        "contacts" if action == Action::Upsert => {
            let contact = Contact::create_or_update(client, request.body).await?;
            Ok(contact.to_value())
        },
        "contacts" => execute_crud::<Contact>(client, action, request).await,
        "callcenters" => execute_crud::<CallCenter>(client, action, request).await,
        "departments" => execute_crud::<Department>(client, action, request).await,
        "users" => execute_crud::<User>(client, action, request).await,
        "webhooks" => execute_crud::<Webhook>(client, action, request).await,
        "websockets" => execute_crud::<Websocket>(client, action, request).await,
        "call-events" => execute_crud::<CallEventSubscription>(client, action, request).await,
        "contact-events" => execute_crud::<ContactEventSubscription>(client, action, request).await,
        _ => Err(unsupported(resource_key, action)),
    }
}

async fn execute_call_action(
    client: &DialpadClient,
    action: Action,
    request: ActionRequest,
) -> Result<Value> {
    match action {
        Action::List => Ok(page_to_value(Call::list(client, &request.params).await?)),
        Action::Get => Ok(Call::retrieve(client, request.id()).await?.to_value()),
        Action::Hangup => {
            Call::hangup(client, request.id()).await?;
            Ok(json!({ "id": request.id(), "hung_up": true }))
        },
        other => Err(unsupported(Call::NAME, other)),
    }
}

async fn execute_crud<T>(client: &DialpadClient, action: Action, request: ActionRequest) -> Result<Value>
where
    T: Retrieve + List + Create + Update + Destroy,
{
    let resource = match action {
        Action::List => return Ok(page_to_value(T::list(client, &request.params).await?)),
        Action::Get => T::retrieve(client, request.id()).await?,
        Action::Create => T::create(client, request.body).await?,
        Action::Update => T::update(client, request.id(), request.body.clone()).await?,
        Action::Delete => T::destroy(client, request.id()).await?,
        other => return Err(unsupported(T::NAME, other)),
    };
    Ok(resource.to_value())
}

fn page_to_value<T: Resource>(page: Page<T>) -> Value {
    json!({
        "cursor": page.cursor,
        "items": page.items.iter().map(Resource::to_value).collect::<Vec<_>>(),
    })
}

fn unsupported(resource: &str, action: Action) -> Error {
    Error::UnsupportedOperation {
        resource: resource.to_string(),
        operation: action.to_string(),
    }
}
