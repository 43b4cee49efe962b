//! Property-based tests using proptest
//!
//! These tests check the attribute model, the pagination adapter and the
//! required-field checks against randomized inputs.

use dialpad::prelude::*;
use dialpad::validation::{require_all, require_one};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// Arbitrary JSON values, nested a few levels deep
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[ -~]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// A subset of `T`'s declared attributes with arbitrary values. Keys are
/// randomly written symbol-style (`:name`) or plain.
fn arb_declared<T: Resource>() -> impl Strategy<Value = Vec<(String, bool, Value)>> {
    prop::sample::subsequence(T::ATTRIBUTES.to_vec(), 0..=T::ATTRIBUTES.len())
        .prop_flat_map(|names| {
            let n = names.len();
            (
                Just(names),
                prop::collection::vec(any::<bool>(), n),
                prop::collection::vec(arb_json(), n),
            )
        })
        .prop_map(|(names, symbolic, values)| {
            names
                .into_iter()
                .zip(symbolic)
                .zip(values)
                .map(|((name, sym), value)| (name.to_string(), sym, value))
                .collect()
        })
}

fn check_declared_round_trip<T: Resource>(entries: &[(String, bool, Value)]) -> std::result::Result<(), TestCaseError> {
    let raw: Vec<(String, Value)> = entries
        .iter()
        .map(|(name, sym, value)| {
            let key = if *sym { format!(":{}", name) } else { name.clone() };
            (key, value.clone())
        })
        .collect();

    let resource = T::new(raw);

    for (name, _, value) in entries {
        prop_assert_eq!(resource.attribute(name).unwrap(), Some(value));
    }
    for name in T::ATTRIBUTES {
        if !entries.iter().any(|(n, _, _)| n == name) {
            prop_assert_eq!(resource.attribute(name).unwrap(), None);
        }
    }
    Ok(())
}

fn check_undeclared_fails<T: Resource>(name: &str) -> std::result::Result<(), TestCaseError> {
    prop_assume!(!T::responds_to(name));
    let resource = T::new([(name, json!("x"))]);

    // Stored, but not readable through the typed surface
    prop_assert!(resource.attributes().contains_key(name));
    let is_unknown = matches!(resource.attribute(name), Err(Error::UnknownAttribute { .. }));
    prop_assert!(is_unknown);
    Ok(())
}

proptest! {
    #[test]
    fn declared_attributes_read_back_call(entries in arb_declared::<Call>()) {
        check_declared_round_trip::<Call>(&entries)?;
    }

    #[test]
    fn declared_attributes_read_back_call_center(entries in arb_declared::<CallCenter>()) {
        check_declared_round_trip::<CallCenter>(&entries)?;
    }

    #[test]
    fn declared_attributes_read_back_contact(entries in arb_declared::<Contact>()) {
        check_declared_round_trip::<Contact>(&entries)?;
    }

    #[test]
    fn declared_attributes_read_back_department(entries in arb_declared::<Department>()) {
        check_declared_round_trip::<Department>(&entries)?;
    }

    #[test]
    fn declared_attributes_read_back_user(entries in arb_declared::<User>()) {
        check_declared_round_trip::<User>(&entries)?;
    }

    #[test]
    fn declared_attributes_read_back_webhook(entries in arb_declared::<Webhook>()) {
        check_declared_round_trip::<Webhook>(&entries)?;
    }

    #[test]
    fn declared_attributes_read_back_websocket(entries in arb_declared::<Websocket>()) {
        check_declared_round_trip::<Websocket>(&entries)?;
    }

    #[test]
    fn declared_attributes_read_back_subscriptions(
        call in arb_declared::<CallEventSubscription>(),
        contact in arb_declared::<ContactEventSubscription>(),
    ) {
        check_declared_round_trip::<CallEventSubscription>(&call)?;
        check_declared_round_trip::<ContactEventSubscription>(&contact)?;
    }

    #[test]
    fn undeclared_attributes_fail(name in "[a-z_]{1,24}") {
        check_undeclared_fails::<Call>(&name)?;
        check_undeclared_fails::<Contact>(&name)?;
        check_undeclared_fails::<User>(&name)?;
        check_undeclared_fails::<Webhook>(&name)?;
        check_undeclared_fails::<Websocket>(&name)?;
    }

    /// Items are never missing, cursor is present only when supplied
    #[test]
    fn page_tolerates_any_shape(
        cursor in prop::option::of("[a-zA-Z0-9]{1,16}"),
        items in prop::option::of(prop::option::of(prop::collection::vec(arb_json(), 0..8))),
    ) {
        let mut body = Map::new();
        if let Some(c) = &cursor {
            body.insert("cursor".to_string(), json!(c));
        }
        // None: field absent; Some(None): explicit null; Some(Some(v)): array
        let expected_len = match &items {
            None => 0,
            Some(None) => {
                body.insert("items".to_string(), Value::Null);
                0
            },
            Some(Some(values)) => {
                body.insert("items".to_string(), Value::Array(values.clone()));
                values.len()
            },
        };

        let page: Page<Webhook> = Page::from_body(&Value::Object(body));
        prop_assert_eq!(page.cursor, cursor);
        prop_assert_eq!(page.items.len(), expected_len);
    }

    /// Item order and content survive wrapping
    #[test]
    fn page_preserves_item_order(ids in prop::collection::vec("[0-9]{1,16}", 0..10)) {
        let items: Vec<Value> = ids.iter().map(|id| json!({"id": id})).collect();
        let page: Page<User> = Page::from_body(&json!({"items": items}));

        let read: Vec<Option<String>> = page.items.iter().map(|u| u.resource_id()).collect();
        let expected: Vec<Option<String>> = ids.into_iter().map(Some).collect();
        prop_assert_eq!(read, expected);
    }

    /// Every missing name is reported, in the order requested
    #[test]
    fn require_all_reports_exactly_the_missing(
        present in prop::collection::btree_map("[a-e]", prop_oneof![
            Just(Value::Null),
            Just(json!("")),
            Just(json!("  ")),
            "[a-z]{1,4}".prop_map(Value::String),
            any::<i32>().prop_map(|n| json!(n)),
        ], 0..5),
        required in prop::collection::vec("[a-e]", 0..5),
    ) {
        let attributes: Map<String, Value> = present.clone().into_iter().collect();
        let required_refs: Vec<&str> = required.iter().map(String::as_str).collect();

        let expected_missing: Vec<String> = required
            .iter()
            .filter(|name| match present.get(*name) {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.trim().is_empty(),
                Some(_) => false,
            })
            .cloned()
            .collect();

        match require_all("Test", &attributes, &required_refs) {
            Ok(()) => prop_assert!(expected_missing.is_empty()),
            Err(err) => {
                prop_assert_eq!(
                    err.to_string(),
                    format!("Missing required attributes: {}", expected_missing.join(", "))
                );
                prop_assert_eq!(err.missing, expected_missing);
            },
        }
    }

    #[test]
    fn require_one_rejects_only_blank(value in "[ \t]{0,4}|[a-z0-9]{1,8}") {
        let result = require_one("Test", Some(&value), "ID");
        prop_assert_eq!(result.is_ok(), !value.trim().is_empty());
    }
}
