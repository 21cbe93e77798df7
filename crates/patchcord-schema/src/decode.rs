//! Generic table-driven payload decoder.
//!
//! Decoding walks a shape's field list against a raw JSON object. Unknown
//! keys are dropped with a debug-level diagnostic, absent fields take their
//! declared default, and nested shapes recurse. The only fatal condition is
//! a scalar where the table demands a collection.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::field::{Field, FieldDefault, FieldKind};
use crate::registry::registry;
use crate::shapes::ShapeId;

/// Decoder failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The payload for a shape was not a JSON object.
    #[error("shape {shape:?} expects an object payload")]
    ExpectedObject {
        /// Shape being decoded.
        shape: ShapeId,
    },
    /// A field declared as a collection carried a scalar.
    #[error("shape {shape:?} field `{field}` expects {expected}")]
    ExpectedCollection {
        /// Shape being decoded.
        shape: ShapeId,
        /// Offending field name.
        field: &'static str,
        /// What the table demands, for example "a sequence".
        expected: &'static str,
    },
}

/// A decoded value: scalars and loosely-typed payloads keep their raw JSON,
/// records and collections are walked recursively.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    /// Explicit null or an absent field with a null default.
    Null,
    /// A primitive carried through from the payload.
    Scalar(Value),
    /// A decoded record.
    Record(Record),
    /// A decoded homogeneous sequence.
    List(Vec<DecodedValue>),
    /// A decoded homogeneous mapping.
    Map(BTreeMap<String, DecodedValue>),
    /// Raw payload for unions and pass-through shapes.
    Raw(Value),
}

impl DecodedValue {
    /// Whether this value is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The nested record, if this value holds one.
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// The integer scalar, if this value holds one.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Scalar(value) => value.as_i64(),
            _ => None,
        }
    }

    /// The string scalar, if this value holds one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => value.as_str(),
            _ => None,
        }
    }

    /// The boolean scalar, if this value holds one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Scalar(value) => value.as_bool(),
            _ => None,
        }
    }

    /// The list elements, if this value holds a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[DecodedValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

/// A payload decoded against one shape's field table.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    shape: ShapeId,
    fields: BTreeMap<&'static str, DecodedValue>,
}

impl Record {
    /// The shape this record was decoded as.
    #[must_use]
    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    /// Look up a decoded field by name. Every declared field is present;
    /// `None` means the name is not in the shape's table.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DecodedValue> {
        self.fields.get(name)
    }

    /// Iterate over all decoded fields.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &DecodedValue)> + '_ {
        self.fields.iter().map(|(name, value)| (*name, value))
    }
}

/// Decode a raw payload against a shape.
///
/// # Errors
///
/// Returns an error when a non-pass-through shape receives a non-object
/// payload, or when a field declared as a sequence or mapping carries a
/// scalar.
pub fn decode(shape: ShapeId, data: &Value) -> Result<DecodedValue, DecodeError> {
    if shape.is_passthrough() {
        return Ok(DecodedValue::Raw(data.clone()));
    }
    let Some(object) = data.as_object() else {
        return Err(DecodeError::ExpectedObject { shape });
    };

    let table = registry().fields(shape);
    for key in object.keys() {
        if !table.iter().any(|field| field.name == key) {
            debug!(shape = ?shape, key = %key, "dropping unknown payload key");
        }
    }

    let mut fields = BTreeMap::new();
    for field in table {
        let value = match object.get(field.name) {
            None => default_value(field),
            Some(Value::Null) => DecodedValue::Null,
            Some(raw) => decode_field(shape, field.name, field.kind, raw)?,
        };
        fields.insert(field.name, value);
    }
    Ok(DecodedValue::Record(Record { shape, fields }))
}

fn default_value(field: &Field) -> DecodedValue {
    match field.default {
        FieldDefault::Null => DecodedValue::Null,
        FieldDefault::Bool(value) => DecodedValue::Scalar(Value::Bool(value)),
    }
}

fn decode_field(
    shape: ShapeId,
    name: &'static str,
    kind: FieldKind,
    raw: &Value,
) -> Result<DecodedValue, DecodeError> {
    match kind {
        FieldKind::Int | FieldKind::Str | FieldKind::Bool | FieldKind::Float => {
            Ok(DecodedValue::Scalar(raw.clone()))
        }
        FieldKind::Union => Ok(DecodedValue::Raw(raw.clone())),
        FieldKind::Shape(nested) => decode(nested, raw),
        FieldKind::SelfRef => decode(shape, raw),
        FieldKind::List(elem) => {
            let Some(items) = raw.as_array() else {
                return Err(DecodeError::ExpectedCollection {
                    shape,
                    field: name,
                    expected: "a sequence",
                });
            };
            items
                .iter()
                .map(|item| decode_field(shape, name, *elem, item))
                .collect::<Result<Vec<_>, _>>()
                .map(DecodedValue::List)
        }
        FieldKind::Map(value_kind) => {
            let Some(entries) = raw.as_object() else {
                return Err(DecodeError::ExpectedCollection {
                    shape,
                    field: name,
                    expected: "a mapping",
                });
            };
            entries
                .iter()
                .map(|(key, item)| {
                    decode_field(shape, name, *value_kind, item)
                        .map(|decoded| (key.clone(), decoded))
                })
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(DecodedValue::Map)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_absent_fields_default_to_null() {
        let decoded = decode(ShapeId::User, &json!({"id": 7})).unwrap();
        let record = decoded.as_record().unwrap();

        assert_eq!(record.get("id").unwrap().as_i64(), Some(7));
        assert!(record.get("username").unwrap().is_null());
        assert_eq!(record.get("no_such_field"), None);
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let decoded = decode(ShapeId::User, &json!({"id": 7, "surprise": true})).unwrap();
        let record = decoded.as_record().unwrap();

        assert_eq!(record.get("surprise"), None);
        assert_eq!(record.fields().count(), registry().fields(ShapeId::User).len());
    }

    #[test]
    fn test_boolean_default_applied() {
        let decoded = decode(ShapeId::UnavailableGuild, &json!({"id": 1})).unwrap();
        let record = decoded.as_record().unwrap();
        assert_eq!(record.get("unavailable").unwrap().as_bool(), Some(true));
    }

    #[test]
    fn test_explicit_null_beats_default() {
        let decoded =
            decode(ShapeId::UnavailableGuild, &json!({"id": 1, "unavailable": null})).unwrap();
        let record = decoded.as_record().unwrap();
        assert!(record.get("unavailable").unwrap().is_null());
    }

    #[test]
    fn test_nested_shape_decodes_recursively() {
        let payload = json!({
            "user": {"id": 3, "username": "ada"},
            "roles": [1, 2],
            "deaf": false
        });
        let decoded = decode(ShapeId::GuildMember, &payload).unwrap();
        let record = decoded.as_record().unwrap();

        let user = record.get("user").unwrap().as_record().unwrap();
        assert_eq!(user.shape(), ShapeId::User);
        assert_eq!(user.get("username").unwrap().as_str(), Some("ada"));

        let roles = record.get("roles").unwrap().as_list().unwrap();
        assert_eq!(roles[1].as_i64(), Some(2));
    }

    #[test]
    fn test_self_reference_resolves_to_enclosing_shape() {
        let payload = json!({
            "id": 10,
            "referenced_message": {
                "id": 9,
                "referenced_message": {"id": 8}
            }
        });
        let decoded = decode(ShapeId::Message, &payload).unwrap();
        let outer = decoded.as_record().unwrap();

        let mid = outer.get("referenced_message").unwrap().as_record().unwrap();
        assert_eq!(mid.shape(), ShapeId::Message);
        let inner = mid.get("referenced_message").unwrap().as_record().unwrap();
        assert_eq!(inner.get("id").unwrap().as_i64(), Some(8));
        assert!(inner.get("referenced_message").unwrap().is_null());
    }

    #[test]
    fn test_deep_self_reference_chain() {
        let mut payload = json!({"id": 0});
        for id in 1..=5 {
            payload = json!({"id": id, "referenced_message": payload});
        }
        let mut current = decode(ShapeId::Message, &payload).unwrap();
        for expected in (0..=5).rev() {
            let record = current.as_record().unwrap().clone();
            assert_eq!(record.get("id").unwrap().as_i64(), Some(expected));
            current = record.get("referenced_message").unwrap().clone();
        }
        assert!(current.is_null());
    }

    #[test]
    fn test_map_field_decodes_values() {
        let payload = json!({
            "users": {"3": {"id": 3, "username": "ada"}}
        });
        let decoded = decode(ShapeId::Resolved, &payload).unwrap();
        let record = decoded.as_record().unwrap();

        let DecodedValue::Map(users) = record.get("users").unwrap() else {
            panic!("expected a map");
        };
        let user = users.get("3").unwrap().as_record().unwrap();
        assert_eq!(user.get("username").unwrap().as_str(), Some("ada"));
    }

    #[test]
    fn test_union_passes_through_untouched() {
        let payload = json!({"nonce": {"weird": [1, "two"]}});
        let decoded = decode(ShapeId::Message, &payload).unwrap();
        let record = decoded.as_record().unwrap();

        assert_eq!(
            record.get("nonce").unwrap(),
            &DecodedValue::Raw(json!({"weird": [1, "two"]}))
        );
    }

    #[test_case(ShapeId::Application ; "application")]
    #[test_case(ShapeId::Component ; "component")]
    fn test_passthrough_shape_keeps_raw_payload(shape: ShapeId) {
        let payload = json!([{"type": 1, "components": []}]);
        let decoded = decode(shape, &payload).unwrap();
        assert_eq!(decoded, DecodedValue::Raw(payload));
    }

    #[test]
    fn test_scalar_payload_for_shape_is_fatal() {
        let err = decode(ShapeId::User, &json!(42)).unwrap_err();
        assert_eq!(err, DecodeError::ExpectedObject { shape: ShapeId::User });
    }

    #[test]
    fn test_scalar_for_sequence_is_fatal() {
        let err = decode(ShapeId::GuildMember, &json!({"roles": 5})).unwrap_err();
        assert_eq!(
            err,
            DecodeError::ExpectedCollection {
                shape: ShapeId::GuildMember,
                field: "roles",
                expected: "a sequence",
            }
        );
    }

    #[test]
    fn test_scalar_for_mapping_is_fatal() {
        let err = decode(ShapeId::Resolved, &json!({"users": [1]})).unwrap_err();
        assert_eq!(
            err,
            DecodeError::ExpectedCollection {
                shape: ShapeId::Resolved,
                field: "users",
                expected: "a mapping",
            }
        );
    }
}
