//! Request-body assembly
//!
//! All mutating endpoints share the same payload convention: required
//! fields are always serialized, optional fields are serialized only when
//! the caller supplied them. Presence (`Some`) is the inclusion signal,
//! never emptiness - `Some("")` and `Some(vec![])` go on the wire, `None`
//! is omitted so the server leaves the field unchanged.

use serde::Serialize;
use serde_json::{Map, Value};

/// Builder for JSON request bodies with presence-based optional fields
#[derive(Debug, Clone, Default)]
pub struct Payload {
    map: Map<String, Value>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required field. Serialization failures collapse to `Null`
    /// rather than panicking; all field types used by this crate are
    /// infallible to serialize.
    pub fn field(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.map.insert(key.to_string(), value);
        self
    }

    /// Add an optional field, included only when `value` is `Some`
    pub fn opt(self, key: &str, value: Option<impl Serialize>) -> Self {
        match value {
            Some(v) => self.field(key, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.map)
    }

    /// Flatten fields into text parts for a multipart form.
    ///
    /// String fields are sent as-is; everything else is sent as its JSON
    /// encoding, matching what the server expects alongside a `file` part.
    pub fn into_form_fields(self) -> Vec<(String, String)> {
        self.map
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn omitted_optionals_are_absent() {
        let body = Payload::new()
            .field("keyName", "env")
            .opt("description", None::<&str>)
            .opt("values", None::<Vec<Value>>)
            .into_value();

        assert_eq!(body, json!({"keyName": "env"}));
    }

    #[test]
    fn empty_values_are_still_sent_when_supplied() {
        let body = Payload::new()
            .opt("description", Some(""))
            .opt("values", Some(Vec::<Value>::new()))
            .into_value();

        assert_eq!(body, json!({"description": "", "values": []}));
    }

    #[test]
    fn form_fields_keep_strings_raw_and_json_encode_the_rest() {
        let fields = Payload::new()
            .field("name", "ssh-checkout")
            .field("checkinTimeLimit", 60)
            .field("variables", json!([{"k": "v"}]))
            .into_form_fields();

        // Keys come out in the map's sorted order, not insertion order
        assert_eq!(
            fields,
            vec![
                ("checkinTimeLimit".to_string(), "60".to_string()),
                ("name".to_string(), "ssh-checkout".to_string()),
                ("variables".to_string(), r#"[{"k":"v"}]"#.to_string()),
            ]
        );
    }

    #[test]
    fn no_fields_yields_empty_object() {
        let payload = Payload::new()
            .opt("name", None::<&str>)
            .opt("description", None::<&str>);

        assert!(payload.is_empty());
        assert_eq!(payload.into_value(), json!({}));
    }
}
