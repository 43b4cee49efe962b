//! CRUD operations shared by resource types.
//!
//! Each operation is a trait with a provided implementation; a resource type
//! opts in by implementing the trait (`impl Retrieve for User {}`), so the set
//! of traits a type implements is exactly the set of operations its endpoint
//! supports.

use super::fetcher::{fetch_page, Page};
use super::object::Resource;
use crate::api::{ApiResponse, DialpadClient};
use crate::error::{RequiredAttributeError, Result};
use crate::validation::{require_all, require_one};
use serde_json::{Map, Value};
use std::future::Future;

/// Label used when an entity id is missing
pub const ID_LABEL: &str = "ID";

/// `<collection>/<id>` with the id percent-encoded as one path segment
pub fn member_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, urlencoding::encode(id))
}

/// Attributes of a write body, for required-field checks. A non-object body
/// has no attributes.
fn body_attributes(body: &Value) -> Map<String, Value> {
    body.as_object().cloned().unwrap_or_default()
}

/// Wrap a successful single-entity response, fail on a non-2xx status
pub(crate) fn into_resource<T: Resource>(response: ApiResponse) -> Result<T> {
    let response = response.error_for_status()?;
    Ok(T::from_value(response.body.into_json()))
}

/// GET `<path>/<id>`
pub trait Retrieve: Resource {
    fn retrieve(client: &DialpadClient, id: &str) -> impl Future<Output = Result<Self>> + Send {
        async move {
            require_one(Self::NAME, Some(id), ID_LABEL)?;
            let response = client.get(&member_path(Self::PATH, id), &Value::Null).await?;
            into_resource(response)
        }
    }
}

/// GET `<path>` with query parameters passed through untouched
pub trait List: Resource {
    fn list(client: &DialpadClient, params: &Value) -> impl Future<Output = Result<Page<Self>>> + Send {
        fetch_page::<Self>(client, params)
    }
}

/// POST `<path>` after checking the type's required fields
pub trait Create: Resource {
    /// Fields that must be present and non-blank in a create body
    const REQUIRED_ATTRIBUTES: &'static [&'static str];

    fn create(client: &DialpadClient, attributes: Value) -> impl Future<Output = Result<Self>> + Send {
        async move {
            require_all(Self::NAME, &body_attributes(&attributes), Self::REQUIRED_ATTRIBUTES)?;
            let response = client.post(Self::PATH, Some(&attributes)).await?;
            into_resource(response)
        }
    }
}

/// PATCH `<path>/<id>`; the body itself is not validated
pub trait Update: Resource {
    fn update(
        client: &DialpadClient,
        id: &str,
        attributes: Value,
    ) -> impl Future<Output = Result<Self>> + Send {
        async move {
            require_one(Self::NAME, Some(id), ID_LABEL)?;
            let response = client
                .patch(&member_path(Self::PATH, id), Some(&attributes))
                .await?;
            into_resource(response)
        }
    }

    /// Update this entity by its own `id`.
    ///
    /// The receiver is left as is; the returned instance reflects the server.
    fn patch(&self, client: &DialpadClient, attributes: Value) -> impl Future<Output = Result<Self>> + Send {
        let id = self.resource_id();
        async move {
            let id = id.ok_or_else(|| RequiredAttributeError::single(Self::NAME, ID_LABEL))?;
            Self::update(client, &id, attributes).await
        }
    }
}

/// DELETE `<path>/<id>`, returning the server's echo of the entity
pub trait Destroy: Resource {
    fn destroy(client: &DialpadClient, id: &str) -> impl Future<Output = Result<Self>> + Send {
        async move {
            require_one(Self::NAME, Some(id), ID_LABEL)?;
            let response = client.delete(&member_path(Self::PATH, id)).await?;
            into_resource(response)
        }
    }

    /// Destroy this entity by its own `id`
    fn delete(&self, client: &DialpadClient) -> impl Future<Output = Result<Self>> + Send {
        let id = self.resource_id();
        async move {
            let id = id.ok_or_else(|| RequiredAttributeError::single(Self::NAME, ID_LABEL))?;
            Self::destroy(client, &id).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ClientConfig;
    use crate::resources::Contact;
    use serde_json::json;

    // Points at a closed port; validation must fail before any connection.
    fn offline_client() -> DialpadClient {
        DialpadClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap()
    }

    #[test]
    fn test_member_path_encodes_id() {
        assert_eq!(member_path("contacts", "123"), "contacts/123");
        assert_eq!(member_path("contacts", "a/b c"), "contacts/a%2Fb%20c");
    }

    #[tokio::test]
    async fn test_retrieve_blank_id_fails_before_request() {
        let err = Contact::retrieve(&offline_client(), "").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Missing required attribute: ID");
    }

    #[tokio::test]
    async fn test_create_lists_missing_fields() {
        let err = Contact::create(&offline_client(), json!({"first_name": "John"}))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required attributes: last_name");
    }

    #[tokio::test]
    async fn test_instance_update_without_id() {
        let contact = Contact::new([("first_name", json!("John"))]);
        let err = contact
            .patch(&offline_client(), json!({"last_name": "Doe"}))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required attribute: ID");
    }

    #[tokio::test]
    async fn test_instance_destroy_without_id() {
        let contact = Contact::new(Map::new());
        let err = contact.delete(&offline_client()).await.unwrap_err();
        assert!(err.is_validation());
    }
}
