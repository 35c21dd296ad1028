//! The roundtrip model layer shared by every request and response type.
//!
//! Each model keeps two views of its data: a typed field per declared property, and the raw JSON
//! object exactly as it was received or assigned. Serialization always emits the raw object, so
//! unknown keys, key order, and the difference between an absent key and an explicit `null`
//! survive a deserialize/serialize cycle.

use crate::error::Error;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An ordered JSON object, as used for the raw data of every [`Model`].
pub type JsonObject = serde_json::Map<String, Value>;

/// Types that can check themselves against the API schema.
///
/// Validation is never performed implicitly while deserializing; it is opt-in.
pub trait Validate {
    /// Returns the first schema violation found, if any.
    fn validate(&self) -> Result<(), Error>;
}

/// Types that can be stored in a declared field of a [`Model`].
pub trait FieldValue: Sized + Validate {
    /// Decodes a (non-null) JSON value.
    fn decode_json(value: &Value) -> Result<Self, serde_json::Error>;

    /// Encodes this value as JSON.
    fn encode_json(&self) -> Value;
}

/// Schema descriptor for one declared field of a [`Model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The JSON key.
    pub key: &'static str,
    /// Whether the key must be present.
    pub required: bool,
    /// Whether the key may be explicitly `null`.
    pub nullable: bool,
}

/// A request or response data type with exact JSON roundtrip fidelity.
///
/// Implementations are generated with the `define_model!` macro; see any type in
/// [`crate::data`] for an example.
pub trait Model:
    Sized + Clone + PartialEq + Validate + FieldValue + Serialize + DeserializeOwned
{
    /// Declared fields, in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// Creates a model from a raw JSON object, projecting every declared key into its typed
    /// field.
    ///
    /// Absent keys stay absent. A declared key holding a value of the wrong type is kept in the
    /// raw data with its typed field left empty, and reported by [`Validate::validate`].
    fn from_raw(raw: JsonObject) -> Result<Self, Error>;

    /// The raw JSON object, including keys unknown to this model.
    fn raw_data(&self) -> &JsonObject;

    /// Consumes the model, returning the raw JSON object.
    fn into_raw(self) -> JsonObject;

    /// Sets a raw JSON entry.
    ///
    /// Declared keys are re-projected into their typed field; if decoding fails, the model is
    /// left unchanged. Setting `null` on an optional, non-nullable field removes the key.
    fn set_raw<K: Into<String>>(&mut self, key: K, value: Value) -> Result<(), Error>;

    /// Removes a raw JSON entry (and clears the typed field, if declared).
    fn remove_raw(&mut self, key: &str) -> Option<Value>;

    /// Creates a model from a JSON value, which must be an object.
    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(raw) => Self::from_raw(raw),
            other => Err(Error::from(<serde_json::Error as serde::de::Error>::custom(
                format_args!("expected a JSON object, found {}", json_type_name(&other)),
            ))),
        }
    }

    /// Parses a model from a JSON string, which must contain an object.
    fn from_json_str(s: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(value)
    }

    /// Returns the raw data as a JSON object value.
    fn to_json(&self) -> Value {
        Value::Object(self.raw_data().clone())
    }

    /// Returns `true` if the raw data contains the key (even if its value is `null`).
    fn contains_key(&self, key: &str) -> bool {
        self.raw_data().contains_key(key)
    }

    /// Returns `true` if the raw data contains the key with an explicit `null` value.
    fn is_null(&self, key: &str) -> bool {
        matches!(self.raw_data().get(key), Some(Value::Null))
    }

    /// Looks up the descriptor of a declared field by JSON key.
    fn field_spec(key: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|spec| spec.key == key)
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub(crate) fn decode_value<T: FieldValue>(value: &Value, key: &str) -> Result<Option<T>, Error> {
    match value {
        Value::Null => Ok(None),
        other => T::decode_json(other)
            .map(Some)
            .map_err(|e| Error::field_decode(key, e)),
    }
}

// Decoding on read is lenient: a value of the wrong shape stays in the raw map, the typed field
// stays empty, and `validate()` reports it.
pub(crate) fn project_field<T: FieldValue>(raw: &JsonObject, key: &str) -> Option<T> {
    match raw.get(key).map(|value| decode_value(value, key)) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            tracing::debug!(field = key, error = %e, "keeping undecodable field as raw JSON");
            None
        }
        None => None,
    }
}

pub(crate) fn validate_field<T: FieldValue>(
    raw: &JsonObject,
    spec: FieldSpec,
    value: Option<&T>,
) -> Result<(), Error> {
    match (raw.get(spec.key), value) {
        (None, _) if spec.required => Err(Error::missing_field(spec.key)),
        (Some(Value::Null), _) if spec.required && !spec.nullable => Err(Error::invalid_data(
            format!("field `{}` cannot be null", spec.key),
        )),
        (_, Some(value)) => value.validate(),
        (Some(Value::Null), None) | (None, None) => Ok(()),
        (Some(other), None) => match T::decode_json(other) {
            Ok(_) => Ok(()),
            Err(e) => Err(Error::invalid_data(format!("field `{}`: {}", spec.key, e))),
        },
    }
}

// Scalars have no schema beyond their JSON type, which is checked while decoding.
macro_rules! impl_scalar_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Validate for $ty {
                fn validate(&self) -> Result<(), Error> {
                    Ok(())
                }
            }

            impl FieldValue for $ty {
                fn decode_json(value: &Value) -> Result<Self, serde_json::Error> {
                    <$ty>::deserialize(value)
                }

                fn encode_json(&self) -> Value {
                    Value::from(self.clone())
                }
            }
        )*
    };
}

impl_scalar_field!(String, bool, i32, i64, f64);

impl Validate for Value {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl FieldValue for Value {
    fn decode_json(value: &Value) -> Result<Self, serde_json::Error> {
        Ok(value.clone())
    }

    fn encode_json(&self) -> Value {
        self.clone()
    }
}

impl Validate for JsonObject {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl FieldValue for JsonObject {
    fn decode_json(value: &Value) -> Result<Self, serde_json::Error> {
        JsonObject::deserialize(value)
    }

    fn encode_json(&self) -> Value {
        Value::Object(self.clone())
    }
}

impl Validate for DateTime<Utc> {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl FieldValue for DateTime<Utc> {
    fn decode_json(value: &Value) -> Result<Self, serde_json::Error> {
        DateTime::<Utc>::deserialize(value)
    }

    fn encode_json(&self) -> Value {
        Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Validate for NaiveDate {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl FieldValue for NaiveDate {
    fn decode_json(value: &Value) -> Result<Self, serde_json::Error> {
        NaiveDate::deserialize(value)
    }

    fn encode_json(&self) -> Value {
        Value::String(self.format("%Y-%m-%d").to_string())
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), Error> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn decode_json(value: &Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Array(items) => items.iter().map(T::decode_json).collect(),
            other => Err(serde::de::Error::custom(format_args!(
                "expected an array, found {}",
                json_type_name(other)
            ))),
        }
    }

    fn encode_json(&self) -> Value {
        Value::Array(self.iter().map(FieldValue::encode_json).collect())
    }
}

impl<T: Validate> Validate for BTreeMap<String, T> {
    fn validate(&self) -> Result<(), Error> {
        self.values().try_for_each(Validate::validate)
    }
}

impl<T: FieldValue> FieldValue for BTreeMap<String, T> {
    fn decode_json(value: &Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Object(entries) => entries
                .iter()
                .map(|(k, v)| Ok((k.clone(), T::decode_json(v)?)))
                .collect(),
            other => Err(serde::de::Error::custom(format_args!(
                "expected an object, found {}",
                json_type_name(other)
            ))),
        }
    }

    fn encode_json(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(k, v)| (k.clone(), v.encode_json()))
                .collect(),
        )
    }
}

macro_rules! __field_spec {
    (required $key:literal) => {
        $crate::data::FieldSpec {
            key: $key,
            required: true,
            nullable: false,
        }
    };
    (required_nullable $key:literal) => {
        $crate::data::FieldSpec {
            key: $key,
            required: true,
            nullable: true,
        }
    };
    (optional $key:literal) => {
        $crate::data::FieldSpec {
            key: $key,
            required: false,
            nullable: false,
        }
    };
    (nullable $key:literal) => {
        $crate::data::FieldSpec {
            key: $key,
            required: false,
            nullable: true,
        }
    };
}

// Setters for one field. Every setter writes the typed field and the raw entry together.
macro_rules! __model_setters {
    (@set $field:ident : $ty:ty = $key:literal) => {
        paste::paste! {
            #[doc = concat!("Sets `", $key, "`.")]
            pub fn [<set_ $field>]<V: ::core::convert::Into<$ty>>(&mut self, value: V) {
                let value: $ty = ::core::convert::Into::into(value);
                let encoded = $crate::data::FieldValue::encode_json(&value);
                // Values without a JSON form (e.g. NaN) are stored as `null` in both views
                self.$field = if encoded.is_null() {
                    ::core::option::Option::None
                } else {
                    ::core::option::Option::Some(value)
                };
                self.raw.insert(::std::borrow::ToOwned::to_owned($key), encoded);
            }
        }
    };
    (@null $field:ident = $key:literal) => {
        paste::paste! {
            #[doc = concat!("Sets `", $key, "` to an explicit `null`.")]
            pub fn [<set_ $field _null>](&mut self) {
                self.raw.insert(::std::borrow::ToOwned::to_owned($key), serde_json::Value::Null);
                self.$field = ::core::option::Option::None;
            }
        }
    };
    (@unset $field:ident = $key:literal) => {
        paste::paste! {
            #[doc = concat!("Removes `", $key, "`, so that it is omitted when serialized.")]
            pub fn [<unset_ $field>](&mut self) {
                self.raw.shift_remove($key);
                self.$field = ::core::option::Option::None;
            }
        }
    };
    (required $field:ident : $ty:ty = $key:literal) => {
        $crate::data::model::__model_setters!(@set $field: $ty = $key);
    };
    (required_nullable $field:ident : $ty:ty = $key:literal) => {
        $crate::data::model::__model_setters!(@set $field: $ty = $key);
        $crate::data::model::__model_setters!(@null $field = $key);
    };
    (optional $field:ident : $ty:ty = $key:literal) => {
        $crate::data::model::__model_setters!(@set $field: $ty = $key);
        $crate::data::model::__model_setters!(@unset $field = $key);
    };
    (nullable $field:ident : $ty:ty = $key:literal) => {
        $crate::data::model::__model_setters!(@set $field: $ty = $key);
        $crate::data::model::__model_setters!(@null $field = $key);
        $crate::data::model::__model_setters!(@unset $field = $key);
    };
}

// Define a model struct, with one typed field per declared property plus the raw JSON object.
//
// Each field is declared as `<kind> <rust_name>: <type> = "<json key>"`, where `<kind>` is one of
// `required`, `required_nullable`, `optional` or `nullable`.
macro_rules! define_model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $kind:ident $field:ident : $ty:ty = $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            raw: $crate::data::JsonObject,
            $( $field: ::core::option::Option<$ty>, )*
        }

        impl $name {
            /// Creates an empty value, with every field absent.
            pub fn new() -> Self {
                <Self as ::core::default::Default>::default()
            }

            $(
                $(#[$field_meta])*
                pub fn $field(&self) -> ::core::option::Option<&$ty> {
                    self.$field.as_ref()
                }

                $crate::data::model::__model_setters!($kind $field: $ty = $key);
            )*
        }

        impl $crate::data::Model for $name {
            const FIELDS: &'static [$crate::data::FieldSpec] = &[
                $( $crate::data::model::__field_spec!($kind $key), )*
            ];

            fn from_raw(
                raw: $crate::data::JsonObject,
            ) -> ::core::result::Result<Self, $crate::Error> {
                ::core::result::Result::Ok(Self {
                    $( $field: $crate::data::model::project_field(&raw, $key), )*
                    raw,
                })
            }

            fn raw_data(&self) -> &$crate::data::JsonObject {
                &self.raw
            }

            fn into_raw(self) -> $crate::data::JsonObject {
                self.raw
            }

            fn set_raw<K: ::core::convert::Into<::std::string::String>>(
                &mut self,
                key: K,
                value: serde_json::Value,
            ) -> ::core::result::Result<(), $crate::Error> {
                let key: ::std::string::String = ::core::convert::Into::into(key);

                match key.as_str() {
                    $(
                        $key => {
                            let spec = $crate::data::model::__field_spec!($kind $key);
                            if value.is_null() && !spec.required && !spec.nullable {
                                self.raw.shift_remove($key);
                                self.$field = ::core::option::Option::None;
                                return ::core::result::Result::Ok(());
                            }
                            self.$field = $crate::data::model::decode_value(&value, $key)?;
                        }
                    )*
                    _ => {}
                }

                self.raw.insert(key, value);
                ::core::result::Result::Ok(())
            }

            fn remove_raw(&mut self, key: &str) -> ::core::option::Option<serde_json::Value> {
                match key {
                    $( $key => self.$field = ::core::option::Option::None, )*
                    _ => {}
                }

                self.raw.shift_remove(key)
            }
        }

        impl $crate::data::Validate for $name {
            fn validate(&self) -> ::core::result::Result<(), $crate::Error> {
                $(
                    $crate::data::model::validate_field(
                        &self.raw,
                        $crate::data::model::__field_spec!($kind $key),
                        self.$field.as_ref(),
                    )?;
                )*
                ::core::result::Result::Ok(())
            }
        }

        impl $crate::data::FieldValue for $name {
            fn decode_json(
                value: &serde_json::Value,
            ) -> ::core::result::Result<Self, serde_json::Error> {
                <Self as serde::Deserialize>::deserialize(value)
            }

            fn encode_json(&self) -> serde_json::Value {
                serde_json::Value::Object(::core::clone::Clone::clone(&self.raw))
            }
        }

        // Equality is over the raw data, so differing unknown keys are observable.
        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, rhs: &Self) -> bool {
                self.raw == rhs.raw
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.raw, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <$crate::data::JsonObject as serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::data::Model>::from_raw(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use __field_spec;
pub(crate) use __model_setters;
pub(crate) use define_model;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::OpenEnum;
    use crate::error::{ErrorKind, MissingRequiredFieldError};
    use serde_json::json;

    type Result<T = ()> = std::result::Result<T, Box<dyn std::error::Error>>;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    #[serde(rename_all = "snake_case")]
    pub enum TransferStatus {
        Created,
        Paid,
    }

    define_model! {
        /// A nested test model.
        pub struct Counterparty {
            required name: String = "name",
            nullable email: String = "email",
        }
    }

    define_model! {
        /// A test model covering every field kind.
        pub struct Transfer {
            /// The identifier.
            required id: String = "id",
            required status: OpenEnum<TransferStatus> = "status",
            required_nullable amount: i64 = "amount",
            optional description: String = "description",
            nullable note: String = "note",
            optional counterparty: Counterparty = "counterparty",
            optional tags: Vec<OpenEnum<TransferStatus>> = "tags",
        }
    }

    define_model! {
        pub struct Reading {
            nullable value: f64 = "value",
        }
    }

    fn transfer_json() -> Value {
        json!({
            "id": "tr_1",
            "status": "created",
            "amount": 1200,
            "note": null,
            "counterparty": { "name": "Acme", "extra": [1, 2, 3] },
            "future_field": { "nested": true }
        })
    }

    #[test]
    fn unknown_fields_roundtrip() -> Result {
        let json = transfer_json();
        let transfer = serde_json::from_value::<Transfer>(json.clone())?;

        assert_eq!(transfer.id().map(String::as_str), Some("tr_1"));
        assert_eq!(transfer.amount(), Some(&1200));
        assert_eq!(
            transfer.raw_data().get("future_field"),
            Some(&json!({ "nested": true }))
        );
        assert_eq!(serde_json::to_value(&transfer)?, json);
        assert_eq!(
            serde_json::to_string(&transfer)?,
            serde_json::to_string(&json)?
        );

        Ok(())
    }

    #[test]
    fn key_order_is_preserved() -> Result {
        let text = r#"{"zeta":1,"id":"tr_1","alpha":2,"status":"paid"}"#;
        let mut transfer = Transfer::from_json_str(text)?;
        assert_eq!(serde_json::to_string(&transfer)?, text);

        // Existing keys keep their position, new keys are appended
        transfer.set_status(TransferStatus::Created);
        transfer.set_description("rent");
        assert_eq!(
            serde_json::to_string(&transfer)?,
            r#"{"zeta":1,"id":"tr_1","alpha":2,"status":"created","description":"rent"}"#
        );

        // Removing a key does not reorder the others
        transfer.unset_description();
        transfer.remove_raw("id");
        assert_eq!(
            serde_json::to_string(&transfer)?,
            r#"{"zeta":1,"alpha":2,"status":"created"}"#
        );
        assert!(transfer.id().is_none());

        Ok(())
    }

    #[test]
    fn absent_vs_null() -> Result {
        let mut transfer = Transfer::new();
        assert!(!transfer.contains_key("note"));

        transfer.set_note_null();
        assert!(transfer.is_null("note"));
        assert!(transfer.note().is_none());

        let reparsed = serde_json::from_value::<Transfer>(serde_json::to_value(&transfer)?)?;
        assert!(reparsed.is_null("note"));

        transfer.unset_note();
        assert!(!transfer.contains_key("note"));

        let reparsed = serde_json::from_value::<Transfer>(serde_json::to_value(&transfer)?)?;
        assert!(!reparsed.contains_key("note"));
        assert_eq!(serde_json::to_value(&reparsed)?, json!({}));

        Ok(())
    }

    #[test]
    fn optional_non_nullable_null_is_unset() -> Result {
        let mut transfer = Transfer::new();
        transfer.set_description("rent");
        assert!(transfer.contains_key("description"));

        transfer.set_raw("description", Value::Null)?;
        assert!(!transfer.contains_key("description"));
        assert!(transfer.description().is_none());

        // Nullable fields keep the explicit null
        transfer.set_raw("note", Value::Null)?;
        assert!(transfer.is_null("note"));

        Ok(())
    }

    #[test]
    fn set_raw_projects_declared_fields() -> Result {
        let mut transfer = Transfer::new();
        transfer.set_raw("amount", json!(55))?;
        assert_eq!(transfer.amount(), Some(&55));

        transfer.set_raw("custom", json!("kept"))?;
        assert_eq!(transfer.raw_data().get("custom"), Some(&json!("kept")));

        let err = transfer.set_raw("amount", json!("lots")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Deserialization);
        assert!(err.to_string().contains("amount"));
        assert_eq!(transfer.amount(), Some(&55));
        assert_eq!(transfer.raw_data().get("amount"), Some(&json!(55)));

        Ok(())
    }

    #[test]
    fn typed_and_raw_agree() -> Result {
        let mut counterparty = Counterparty::new();
        counterparty.set_name("Acme");

        let mut transfer = Transfer::new();
        transfer.set_id("tr_9");
        transfer.set_status(TransferStatus::Paid);
        transfer.set_amount(10);
        transfer.set_counterparty(counterparty.clone());
        let tags: Vec<OpenEnum<TransferStatus>> = vec![TransferStatus::Created.into()];
        transfer.set_tags(tags);

        assert_eq!(
            transfer.to_json(),
            json!({
                "id": "tr_9",
                "status": "paid",
                "amount": 10,
                "counterparty": { "name": "Acme" },
                "tags": ["created"]
            })
        );
        assert_eq!(transfer.counterparty(), Some(&counterparty));

        let reparsed = Transfer::from_value(transfer.to_json())?;
        assert_eq!(reparsed, transfer);
        assert_eq!(reparsed.status(), Some(&OpenEnum::new(TransferStatus::Paid)));

        Ok(())
    }

    #[test]
    fn clone_is_independent() -> Result {
        let original = serde_json::from_value::<Transfer>(transfer_json())?;
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set_id("tr_2");
        copy.set_raw("future_field", json!(false))?;

        assert_ne!(copy, original);
        assert_eq!(original.id().map(String::as_str), Some("tr_1"));
        assert_eq!(
            original.raw_data().get("future_field"),
            Some(&json!({ "nested": true }))
        );

        Ok(())
    }

    #[test]
    fn equality_includes_unknown_keys() -> Result {
        let a = serde_json::from_value::<Counterparty>(json!({ "name": "Acme" }))?;
        let b = serde_json::from_value::<Counterparty>(json!({ "name": "Acme", "x": 1 }))?;
        assert_ne!(a, b);
        assert_eq!(a.name(), b.name());

        Ok(())
    }

    #[test]
    fn validate_fails_fast_in_declaration_order() -> Result {
        let transfer = serde_json::from_value::<Transfer>(json!({ "amount": 5 }))?;

        let err = transfer.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
        assert_eq!(
            err.find_source::<MissingRequiredFieldError>(),
            Some(&MissingRequiredFieldError { field: "id" })
        );

        // Idempotent
        assert_eq!(
            transfer.validate().unwrap_err().to_string(),
            err.to_string()
        );

        Ok(())
    }

    #[test]
    fn validate_null_handling() -> Result {
        // `amount` is required but nullable
        let ok = serde_json::from_value::<Transfer>(json!({
            "id": "tr_1",
            "status": "paid",
            "amount": null
        }))?;
        ok.validate()?;

        let missing = serde_json::from_value::<Transfer>(json!({
            "id": "tr_1",
            "status": "paid"
        }))?;
        assert!(missing.validate().unwrap_err().to_string().contains("`amount`"));

        let null_id = serde_json::from_value::<Transfer>(json!({
            "id": null,
            "status": "paid",
            "amount": 1
        }))?;
        let err = null_id.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().contains("field `id` cannot be null"));

        Ok(())
    }

    #[test]
    fn validate_recurses() -> Result {
        let bad_enum = serde_json::from_value::<Transfer>(json!({
            "id": "tr_1",
            "status": "paid",
            "amount": 1,
            "tags": ["created", "refunded"]
        }))?;
        let err = bad_enum.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().contains("unrecognized enum value: refunded"));

        let bad_nested = serde_json::from_value::<Transfer>(json!({
            "id": "tr_1",
            "status": "paid",
            "amount": 1,
            "counterparty": { "email": "a@b.c" }
        }))?;
        let err = bad_nested.validate().unwrap_err();
        assert_eq!(
            err.find_source::<MissingRequiredFieldError>(),
            Some(&MissingRequiredFieldError { field: "name" })
        );

        Ok(())
    }

    #[test]
    fn wrong_shape_is_kept_and_reported_by_validate() -> Result {
        let json = json!({
            "id": "tr_1",
            "status": "paid",
            "amount": "ten",
            "counterparty": { "name": 7 }
        });
        let transfer = serde_json::from_value::<Transfer>(json.clone())?;

        assert_eq!(transfer.amount(), None);
        assert_eq!(transfer.raw_data().get("amount"), Some(&json!("ten")));
        assert_eq!(serde_json::to_value(&transfer)?, json);

        let err = transfer.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().contains("field `amount`"));

        // Nested models are decoded the same way
        let counterparty = transfer.counterparty().ok_or("missing counterparty")?;
        assert_eq!(counterparty.name(), None);
        assert!(counterparty
            .validate()
            .unwrap_err()
            .to_string()
            .contains("field `name`"));

        Ok(())
    }

    #[test]
    fn deserialization_errors() {
        assert!(serde_json::from_value::<Transfer>(json!(["not", "an", "object"])).is_err());

        let err = Transfer::from_json_str("[1]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Deserialization);
        assert!(err.to_string().contains("expected a JSON object, found an array"));

        let err = Transfer::from_json_str("{not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Deserialization);
    }

    #[test]
    fn non_finite_floats_are_null_in_both_views() -> Result {
        let mut reading = Reading::new();
        reading.set_value(f64::NAN);

        assert_eq!(reading.value(), None);
        assert!(reading.is_null("value"));

        let reparsed = Reading::from_value(reading.to_json())?;
        assert_eq!(reparsed.value(), None);
        assert_eq!(reparsed, reading);

        reading.set_value(2.5);
        assert_eq!(reading.value(), Some(&2.5));
        assert_eq!(reading.to_json(), json!({ "value": 2.5 }));

        Ok(())
    }

    #[test]
    fn field_specs() {
        assert_eq!(Transfer::FIELDS.len(), 7);
        assert_eq!(
            Transfer::field_spec("amount"),
            Some(&FieldSpec {
                key: "amount",
                required: true,
                nullable: true,
            })
        );
        assert_eq!(Transfer::field_spec("future_field"), None);
    }

    #[test]
    fn scalar_encoding() {
        let date = NaiveDate::from_ymd_opt(1990, 4, 1);
        assert_eq!(date.map(|d| d.encode_json()), Some(json!("1990-04-01")));

        let time = DateTime::parse_from_rfc3339("2024-06-01T12:30:00Z")
            .map(|t| t.with_timezone(&Utc))
            .map(|t| t.encode_json())
            .ok();
        assert_eq!(time, Some(json!("2024-06-01T12:30:00Z")));

        assert_eq!(f64::NAN.encode_json(), Value::Null);
    }
}
