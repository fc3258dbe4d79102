//! Serialization derivation: the tagged JSON envelope
//!
//! Every serialized instance has the same shape, whatever the union:
//!
//! ```json
//! { "@@type": "unionkit:Validation", "@@tag": "Failure", "values": { "value": ["bad"] } }
//! ```
//!
//! Decoding checks `@@type`, resolves `@@tag` in the union's variant table and rebuilds the
//! variant from `values`, so `from_json(to_json(x))` equals `x` whenever the field values
//! round-trip through JSON themselves.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{AdtError, Adt, UnionType, VariantDescriptor};

/// Envelope key holding the union's type id
pub const TYPE_KEY: &str = "@@type";
/// Envelope key holding the variant tag
pub const TAG_KEY: &str = "@@tag";
/// Envelope key holding the field values
pub const VALUES_KEY: &str = "values";

/// Encoding of a union value as its tagged JSON envelope
///
/// Implemented by the `Serialization` derivation of [`union_type!`](crate::union_type),
/// together with serde's `Serialize` which goes through the same envelope. Only the
/// fields need to be `Serialize`, so borrowed payloads encode too.
///
/// ```
/// use unionkit::adt::{Deserialization, Serialization};
/// use unionkit::Validation;
///
/// let v = Validation::<i32, Vec<String>>::Success(42);
/// let json = v.to_json().unwrap();
/// assert_eq!(json["@@tag"], "Success");
/// assert_eq!(json["values"]["value"], 42);
/// assert_eq!(Validation::from_json(&json).unwrap(), v);
/// ```
pub trait Serialization: Adt {
    /// Encode this value as a tagged envelope.
    fn to_json(&self) -> Result<Value, AdtError>;
}

/// Decoding of a union value from its tagged JSON envelope
///
/// Installed by the same derivation, for instantiations whose fields are
/// `DeserializeOwned`; serde's `Deserialize` delegates here.
pub trait Deserialization: Adt + Sized {
    /// Rebuild a value from a tagged envelope.
    fn from_json(value: &Value) -> Result<Self, AdtError>;
}

/// Field values of one variant being encoded
#[derive(Debug)]
pub struct Fields {
    union: &'static UnionType,
    variant: &'static VariantDescriptor,
    values: Map<String, Value>,
}

impl Fields {
    /// Start encoding `variant` of `union`.
    pub fn new(union: &'static UnionType, variant: &'static VariantDescriptor) -> Self {
        Fields {
            union,
            variant,
            values: Map::new(),
        }
    }

    /// Encode one field.
    pub fn insert<T>(&mut self, field: &'static str, value: &T) -> Result<(), AdtError>
    where
        T: Serialize + ?Sized,
    {
        let encoded = serde_json::to_value(value).map_err(|source| AdtError::Encode {
            union: self.union.name(),
            variant: self.variant.name(),
            field,
            source,
        })?;
        self.values.insert(field.to_owned(), encoded);
        Ok(())
    }

    /// Wrap the encoded fields in the `@@type`/`@@tag`/`values` envelope.
    pub fn into_envelope(self) -> Value {
        let mut envelope = Map::new();
        envelope.insert(
            TYPE_KEY.to_owned(),
            Value::String(self.union.type_id().to_owned()),
        );
        envelope.insert(
            TAG_KEY.to_owned(),
            Value::String(self.variant.name().to_owned()),
        );
        envelope.insert(VALUES_KEY.to_owned(), Value::Object(self.values));
        Value::Object(envelope)
    }
}

/// A validated envelope being decoded
#[derive(Debug)]
pub struct Envelope<'a> {
    union: &'static UnionType,
    variant: &'static VariantDescriptor,
    values: &'a Map<String, Value>,
}

impl<'a> Envelope<'a> {
    /// Check that `value` is a serialized instance of `union` and resolve its tag.
    pub fn open(union: &'static UnionType, value: &'a Value) -> Result<Self, AdtError> {
        let malformed = |reason| AdtError::Malformed {
            type_id: union.type_id(),
            reason,
        };

        let object = value
            .as_object()
            .ok_or_else(|| malformed("expected a JSON object"))?;

        let type_id = match object.get(TYPE_KEY) {
            Some(Value::String(type_id)) => type_id,
            Some(_) => return Err(malformed("`@@type` must be a string")),
            None => return Err(malformed("missing `@@type`")),
        };
        if type_id != union.type_id() {
            return Err(AdtError::TypeMismatch {
                expected: union.type_id(),
                found: type_id.to_owned(),
            });
        }

        let tag = match object.get(TAG_KEY) {
            Some(Value::String(tag)) => tag,
            Some(_) => return Err(malformed("`@@tag` must be a string")),
            None => return Err(malformed("missing `@@tag`")),
        };
        let variant = union.variant(tag).ok_or_else(|| AdtError::UnknownVariant {
            union: union.name(),
            variant: tag.to_owned(),
        })?;

        let values = match object.get(VALUES_KEY) {
            Some(Value::Object(values)) => values,
            Some(_) => return Err(malformed("`values` must be an object")),
            None => return Err(malformed("missing `values` object")),
        };

        Ok(Envelope {
            union,
            variant,
            values,
        })
    }

    /// The variant named by `@@tag`
    pub fn variant(&self) -> &'static VariantDescriptor {
        self.variant
    }

    /// Decode one field of the variant.
    pub fn field<T: DeserializeOwned>(&self, field: &'static str) -> Result<T, AdtError> {
        let raw = self.values.get(field).ok_or(AdtError::MissingField {
            union: self.union.name(),
            variant: self.variant.name(),
            field,
        })?;
        T::deserialize(raw).map_err(|source| AdtError::Decode {
            union: self.union.name(),
            variant: self.variant.name(),
            field,
            source,
        })
    }

    /// Error for a tag the decoding union did not handle.
    pub fn unknown_variant(&self) -> AdtError {
        AdtError::UnknownVariant {
            union: self.union.name(),
            variant: self.variant.name().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    crate::union_type! {
        #[derive(Clone)]
        enum Reading<U> as "test:Reading" {
            Sample(sensor: String, value: f64, unit: U),
            Offline(sensor: String),
            Calibrating(),
        }
        derive(Equality, DebugRepresentation, Serialization);
    }

    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    enum Unit {
        Celsius,
        Pascal,
    }

    #[test]
    fn test_envelope_shape() {
        let reading = Reading::Sample("t1".to_string(), 21.5, Unit::Celsius);
        assert_eq!(
            reading.to_json().unwrap(),
            json!({
                "@@type": "test:Reading",
                "@@tag": "Sample",
                "values": { "sensor": "t1", "value": 21.5, "unit": "Celsius" }
            })
        );
    }

    #[test]
    fn test_envelope_no_fields() {
        let reading = Reading::<Unit>::Calibrating();
        assert_eq!(
            reading.to_json().unwrap(),
            json!({ "@@type": "test:Reading", "@@tag": "Calibrating", "values": {} })
        );
    }

    #[test]
    fn test_round_trip_every_variant() {
        for reading in [
            Reading::Sample("p".to_string(), 101.3, Unit::Pascal),
            Reading::Offline("p".to_string()),
            Reading::Calibrating(),
        ] {
            let json = reading.to_json().unwrap();
            assert_eq!(Reading::from_json(&json).unwrap(), reading);
        }
    }

    #[test]
    fn test_serde_goes_through_envelope() {
        let reading = Reading::<Unit>::Offline("t9".to_string());
        let text = serde_json::to_string(&reading).unwrap();
        assert_eq!(
            serde_json::from_str::<Value>(&text).unwrap(),
            reading.to_json().unwrap()
        );
        let back: Reading<Unit> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, reading);
    }

    #[test]
    fn test_key_order_does_not_matter() {
        let text = r#"{"values":{"sensor":"t2"},"@@tag":"Offline","@@type":"test:Reading"}"#;
        let reading: Reading<Unit> = serde_json::from_str(text).unwrap();
        assert_eq!(reading, Reading::Offline("t2".to_string()));
    }

    #[test]
    fn test_wrong_type_id() {
        let json = json!({ "@@type": "test:Other", "@@tag": "Offline", "values": {} });
        let err = Reading::<Unit>::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            AdtError::TypeMismatch { expected: "test:Reading", ref found } if found == "test:Other"
        ));
    }

    #[test]
    fn test_unknown_tag() {
        let json = json!({ "@@type": "test:Reading", "@@tag": "Broken", "values": {} });
        let err = Reading::<Unit>::from_json(&json).unwrap_err();
        assert_eq!(err.to_string(), "Reading has no variant named `Broken`");
    }

    #[test]
    fn test_missing_field() {
        let json = json!({ "@@type": "test:Reading", "@@tag": "Offline", "values": {} });
        let err = Reading::<Unit>::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            AdtError::MissingField { variant: "Offline", field: "sensor", .. }
        ));
    }

    #[test]
    fn test_field_of_wrong_type() {
        let json = json!({ "@@type": "test:Reading", "@@tag": "Offline", "values": { "sensor": 7 } });
        let err = Reading::<Unit>::from_json(&json).unwrap_err();
        assert!(matches!(err, AdtError::Decode { field: "sensor", .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_not_an_object() {
        let err = Reading::<Unit>::from_json(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, AdtError::Malformed { reason: "expected a JSON object", .. }));
    }

    #[test]
    fn test_missing_values() {
        let json = json!({ "@@type": "test:Reading", "@@tag": "Calibrating" });
        let err = Reading::<Unit>::from_json(&json).unwrap_err();
        assert!(matches!(err, AdtError::Malformed { reason: "missing `values` object", .. }));
    }

    #[test]
    fn test_envelope_keys_of_wrong_type() {
        let cases = [
            (json!({ "@@type": 1, "@@tag": "Offline", "values": {} }), "`@@type` must be a string"),
            (json!({ "@@type": "test:Reading", "@@tag": null, "values": {} }), "`@@tag` must be a string"),
            (json!({ "@@type": "test:Reading", "@@tag": "Calibrating", "values": [] }), "`values` must be an object"),
        ];
        for (json, expected) in cases {
            let err = Reading::<Unit>::from_json(&json).unwrap_err();
            assert!(
                matches!(err, AdtError::Malformed { reason, .. } if reason == expected),
                "{err}"
            );
        }
    }

    #[test]
    fn test_missing_type_still_reported_as_missing() {
        let json = json!({ "@@tag": "Offline", "values": {} });
        let err = Reading::<Unit>::from_json(&json).unwrap_err();
        assert_eq!(err.to_string(), "malformed serialized `test:Reading`: missing `@@type`");
    }

    #[test]
    fn test_borrowed_fields_encode() {
        let reading = Reading::Sample("t3".to_string(), 0.5, "kPa");
        assert_eq!(reading.to_json().unwrap()["values"]["unit"], "kPa");
        assert_eq!(
            serde_json::to_string(&reading).unwrap(),
            r#"{"@@tag":"Sample","@@type":"test:Reading","values":{"sensor":"t3","unit":"kPa","value":0.5}}"#
        );
    }

    #[test]
    fn test_serde_error_message_from_envelope() {
        let err = serde_json::from_str::<Reading<Unit>>(r#"{"@@tag":"Offline"}"#).unwrap_err();
        assert!(err.to_string().contains("missing `@@type`"));
    }

    #[test]
    fn test_unencodable_field() {
        use std::collections::HashMap;

        crate::union_type! {
            enum Keyed as "test:Keyed" {
                Map(entries: HashMap<(i32, i32), i32>),
            }
            derive(Serialization);
        }

        let keyed = Keyed::Map(HashMap::from([((1, 2), 3)]));
        let err = keyed.to_json().unwrap_err();
        assert!(matches!(err, AdtError::Encode { union: "Keyed", field: "entries", .. }));
    }
}
