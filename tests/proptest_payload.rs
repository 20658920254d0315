//! Property-based tests for request-body assembly
//!
//! These tests verify the presence rule that every mutating endpoint
//! relies on: a field appears in the outgoing body exactly when the
//! caller supplied it, regardless of whether the supplied value is empty.

use proptest::prelude::*;
use resman::Payload;
use serde_json::{json, Value};

/// Generate an arbitrary JSON scalar or small structure
fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 _-]{0,20}".prop_map(Value::from),
        prop::collection::vec("[a-z]{0,8}".prop_map(Value::from), 0..4)
            .prop_map(Value::from),
    ]
}

/// Generate a camelCase-ish field name
fn arb_key() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,15}"
}

/// Generate a set of optional fields, some supplied and some absent
fn arb_opt_fields() -> impl Strategy<Value = Vec<(String, Option<Value>)>> {
    prop::collection::vec((arb_key(), prop::option::of(arb_value())), 0..8)
}

fn build(fields: &[(String, Option<Value>)]) -> Value {
    let mut payload = Payload::new();
    for (key, value) in fields {
        payload = payload.opt(key, value.clone());
    }
    payload.into_value()
}

proptest! {
    /// Absent options never produce a key
    #[test]
    fn none_never_yields_a_key(fields in arb_opt_fields()) {
        let body = build(&fields);
        let object = body.as_object().unwrap();

        for (key, value) in &fields {
            if value.is_none() && fields.iter().all(|(k, v)| k != key || v.is_none()) {
                prop_assert!(!object.contains_key(key));
            }
        }
    }

    /// Supplied options always produce a key holding the supplied value,
    /// including empty strings and empty lists
    #[test]
    fn some_always_yields_the_key(
        key in arb_key(),
        value in arb_value(),
        others in arb_opt_fields(),
    ) {
        let mut payload = Payload::new();
        for (k, v) in &others {
            if k != &key {
                payload = payload.opt(k, v.clone());
            }
        }
        let body = payload.opt(&key, Some(value.clone())).into_value();

        prop_assert_eq!(body.get(&key), Some(&value));
    }

    /// The body holds exactly the supplied keys, nothing more
    #[test]
    fn key_count_matches_supplied_fields(fields in arb_opt_fields()) {
        let body = build(&fields);
        let object = body.as_object().unwrap();

        let supplied: std::collections::HashSet<&String> = fields
            .iter()
            .filter(|(_, v)| v.is_some())
            .map(|(k, _)| k)
            .collect();

        prop_assert_eq!(object.len(), supplied.len());
        for key in supplied {
            prop_assert!(object.contains_key(key));
        }
    }

    /// Required fields survive alongside any combination of optionals
    #[test]
    fn required_fields_are_always_present(fields in arb_opt_fields()) {
        let mut payload = Payload::new().field("resourceTypeId", "rt1").field("isDraft", false);
        for (key, value) in &fields {
            if key != "resourceTypeId" && key != "isDraft" {
                payload = payload.opt(key, value.clone());
            }
        }
        let body = payload.into_value();

        prop_assert_eq!(body.get("resourceTypeId"), Some(&json!("rt1")));
        prop_assert_eq!(body.get("isDraft"), Some(&json!(false)));
    }
}
