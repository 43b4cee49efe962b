//! `define_resource!` generates a resource type from its declared attributes.
//!
//! ```ignore
//! define_resource! {
//!     /// A webhook
//!     Webhook, path = "webhooks", attributes = [hook_url, id, signature]
//! }
//! ```
//!
//! Attributes whose API name is a Rust keyword take an explicit key:
//! `r#type = "type"`.

macro_rules! attribute_key {
    ($attr:ident) => {
        stringify!($attr)
    };
    ($attr:ident, $key:literal) => {
        $key
    };
}

macro_rules! define_resource {
    (
        $(#[$meta:meta])*
        $name:ident,
        path = $path:literal,
        attributes = [ $($attr:ident $(= $key:literal)?),* $(,)? ] $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        #[serde(transparent)]
        pub struct $name($crate::resource::DialpadObject);

        impl $crate::resource::Resource for $name {
            const NAME: &'static str = stringify!($name);
            const PATH: &'static str = $path;
            const ATTRIBUTES: &'static [&'static str] = &[
                $($crate::resource::macros::attribute_key!($attr $(, $key)?)),*
            ];

            fn attribute_set() -> &'static ::std::collections::HashSet<&'static str> {
                static SET: ::std::sync::OnceLock<::std::collections::HashSet<&'static str>> =
                    ::std::sync::OnceLock::new();
                SET.get_or_init(|| Self::ATTRIBUTES.iter().copied().collect())
            }

            fn from_object(object: $crate::resource::DialpadObject) -> Self {
                Self(object)
            }

            fn object(&self) -> &$crate::resource::DialpadObject {
                &self.0
            }
        }

        impl $name {
            $(
                pub fn $attr(&self) -> Option<&::serde_json::Value> {
                    self.0.get($crate::resource::macros::attribute_key!($attr $(, $key)?))
                }
            )*
        }
    };
}

pub(crate) use attribute_key;
pub(crate) use define_resource;
