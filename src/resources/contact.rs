//! Contacts

use crate::api::DialpadClient;
use crate::error::Result;
use crate::resource::macros::define_resource;
use crate::resource::ops::{into_resource, Create, Destroy, List, Retrieve, Update};
use crate::resource::Resource;
use crate::validation::require_all;
use serde_json::Value;

define_resource! {
    /// A shared or local contact
    Contact,
    path = "contacts",
    attributes = [
        company_name,
        display_name,
        emails,
        extension,
        first_name,
        id,
        job_title,
        last_name,
        owner_id,
        phones,
        primary_email,
        primary_phone,
        trunk_group,
        r#type = "type",
        urls,
    ],
}

impl Contact {
    /// Fields required by [`Contact::create_or_update`]
    pub const UPSERT_REQUIRED_ATTRIBUTES: &'static [&'static str] =
        &["first_name", "last_name", "uid"];

    /// Whether the contact has been saved (carries a non-blank `id`)
    pub fn is_persisted(&self) -> bool {
        self.resource_id()
            .map(|id| !id.trim().is_empty())
            .unwrap_or(false)
    }

    /// Create a contact, or replace the one with the same external `uid`.
    ///
    /// Issued as PUT on the collection.
    pub async fn create_or_update(client: &DialpadClient, attributes: Value) -> Result<Self> {
        let fields = attributes.as_object().cloned().unwrap_or_default();
        require_all(Self::NAME, &fields, Self::UPSERT_REQUIRED_ATTRIBUTES)?;

        let response = client.put(Self::PATH, Some(&attributes)).await?;
        into_resource(response)
    }
}

impl Retrieve for Contact {}
impl List for Contact {}
impl Update for Contact {}
impl Destroy for Contact {}

impl Create for Contact {
    const REQUIRED_ATTRIBUTES: &'static [&'static str] = &["first_name", "last_name"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_attribute() {
        let contact = Contact::new([("type", json!("shared"))]);
        assert_eq!(contact.r#type(), Some(&json!("shared")));
        assert_eq!(contact.attribute("type").unwrap(), Some(&json!("shared")));
    }

    #[test]
    fn test_is_persisted() {
        assert!(Contact::new([("id", json!("123"))]).is_persisted());
        assert!(Contact::new([("id", json!(123))]).is_persisted());
        assert!(!Contact::new([("id", json!(""))]).is_persisted());
        assert!(!Contact::new([("first_name", json!("John"))]).is_persisted());
    }

    #[test]
    fn test_undeclared_attribute_fails() {
        let contact = Contact::new([("first_name", json!("John"))]);
        assert!(Contact::responds_to("first_name"));
        assert!(!Contact::responds_to("undefined_attribute"));
        assert!(contact.attribute("undefined_attribute").is_err());
    }
}
