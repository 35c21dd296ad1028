use crate::data::model::{FieldValue, Validate};
use crate::error::Error;

use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::ser::{Impossible, SerializeTupleVariant};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The default wire representation of an [`OpenEnum`].
pub type WireStr = Cow<'static, str>;

/// Describes how a wire value maps to and from the known variants of `T`.
///
/// Implemented for [`WireStr`] (any `T` with serde-derived unit variants, using the serialized
/// variant name) and for `i64` (any `T` convertible to and from `i64`).
pub trait EnumWire<T>:
    Sized + Clone + Eq + Hash + fmt::Debug + fmt::Display + Serialize + DeserializeOwned
{
    /// Returns the wire value of a known variant.
    fn from_known(known: &T) -> Self;

    /// Looks up the known variant for this wire value.
    fn to_known(&self) -> Option<T>;

    /// Returns the JSON representation of this wire value.
    fn to_json(&self) -> Value;
}

impl<T> EnumWire<T> for WireStr
where
    T: Serialize + DeserializeOwned,
{
    fn from_known(known: &T) -> Self {
        Cow::Borrowed(VariantName::extract(known))
    }

    fn to_known(&self) -> Option<T> {
        let de: serde::de::value::StrDeserializer<'_, serde::de::value::Error> =
            self.as_ref().into_deserializer();
        T::deserialize(de).ok()
    }

    fn to_json(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl<T> EnumWire<T> for i64
where
    T: Copy + Into<i64> + TryFrom<i64>,
{
    fn from_known(known: &T) -> Self {
        (*known).into()
    }

    fn to_known(&self) -> Option<T> {
        T::try_from(*self).ok()
    }

    fn to_json(&self) -> Value {
        Value::from(*self)
    }
}

/// Wrapper type for an API enumeration that tolerates values unknown to this client.
///
/// The server may add new enum members at any time. An [`OpenEnum`] always keeps the raw wire
/// value, and additionally resolves it to a variant of `T` when it is one of the known values.
/// Unknown values are never rejected while deserializing; call [`Validate::validate`] to require
/// a known value.
///
/// # Example
///
/// ```
/// use straddle::data::{AccountStatus, OpenEnum, Validate};
///
/// // Multiple representations of the same enum
/// let from_known = OpenEnum::new(AccountStatus::Active);
/// let from_str = OpenEnum::<AccountStatus>::new_from_str("active");
///
/// // Equality is defined over the wire value
/// assert_eq!(from_known, from_str);
/// assert_eq!(from_str, AccountStatus::Active);
/// assert_eq!(from_str.known(), Some(&AccountStatus::Active));
///
/// // Unknown values are preserved, but fail validation
/// let unknown = OpenEnum::<AccountStatus>::new_from_str("suspended");
/// assert_eq!(unknown.as_str(), "suspended");
/// assert!(unknown.known().is_none());
/// assert!(unknown.validate().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct OpenEnum<T, W = WireStr> {
    wire: W,
    known: Option<T>,
}

impl<T, W> OpenEnum<T, W>
where
    W: EnumWire<T>,
{
    /// Creates a new value from a known variant.
    pub fn new(variant: T) -> Self {
        Self {
            wire: W::from_known(&variant),
            known: Some(variant),
        }
    }

    /// Creates a new value from a raw wire value, resolving the known variant if there is one.
    pub fn from_wire(wire: W) -> Self {
        let known = wire.to_known();
        Self { wire, known }
    }
}

impl<T, W> OpenEnum<T, W> {
    /// Returns the underlying wire value.
    pub fn wire_value(&self) -> &W {
        &self.wire
    }

    /// Consumes this value and returns the underlying wire value.
    pub fn into_wire(self) -> W {
        self.wire
    }

    /// Returns the known variant, or `None` if the wire value is not recognized.
    pub fn known(&self) -> Option<&T> {
        self.known.as_ref()
    }

    /// Returns `true` if the wire value resolved to a known variant.
    pub fn is_known(&self) -> bool {
        self.known.is_some()
    }
}

impl<T> OpenEnum<T, WireStr>
where
    WireStr: EnumWire<T>,
{
    /// Creates a new value from a raw string.
    pub fn new_from_str<S>(value: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::from_wire(value.into())
    }
}

impl<T> OpenEnum<T, WireStr> {
    /// Returns the string representation.
    pub fn as_str(&self) -> &str {
        self.wire.as_ref()
    }
}

impl<T, W> Validate for OpenEnum<T, W>
where
    W: fmt::Display,
{
    fn validate(&self) -> Result<(), Error> {
        if self.known.is_some() {
            Ok(())
        } else {
            Err(Error::invalid_data(format!(
                "unrecognized enum value: {}",
                self.wire
            )))
        }
    }
}

impl<T, W> FieldValue for OpenEnum<T, W>
where
    W: EnumWire<T>,
{
    fn decode_json(value: &Value) -> Result<Self, serde_json::Error> {
        W::deserialize(value).map(Self::from_wire)
    }

    fn encode_json(&self) -> Value {
        self.wire.to_json()
    }
}

impl<T, W> From<T> for OpenEnum<T, W>
where
    W: EnumWire<T>,
{
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, W> PartialEq for OpenEnum<T, W>
where
    W: PartialEq,
{
    fn eq(&self, rhs: &Self) -> bool {
        self.wire == rhs.wire
    }
}

impl<T, W> Eq for OpenEnum<T, W> where W: Eq {}

impl<T, W> Hash for OpenEnum<T, W>
where
    W: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.wire.hash(state)
    }
}

impl<T, W> PartialEq<T> for OpenEnum<T, W>
where
    W: EnumWire<T>,
{
    fn eq(&self, rhs: &T) -> bool {
        self.wire == W::from_known(rhs)
    }
}

impl<T> PartialEq<str> for OpenEnum<T, WireStr> {
    fn eq(&self, rhs: &str) -> bool {
        self.as_str() == rhs
    }
}

impl<T, W> fmt::Display for OpenEnum<T, W>
where
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire)
    }
}

impl<T, W> Serialize for OpenEnum<T, W>
where
    W: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.wire.serialize(serializer)
    }
}

impl<'de, T, W> Deserialize<'de> for OpenEnum<T, W>
where
    W: EnumWire<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        W::deserialize(deserializer).map(Self::from_wire)
    }
}

// Extracts the serialized name of a unit (or newtype/tuple) variant without allocating.
#[derive(Debug)]
pub(crate) struct VariantName;

impl VariantName {
    pub(crate) fn extract<T: Serialize>(value: &T) -> &'static str {
        value.serialize(&mut VariantName).unwrap_or("unknown")
    }
}

#[derive(thiserror::Error, Debug)]
#[error("cannot extract name of variant")]
pub(crate) struct VariantNameError;

impl serde::ser::Error for VariantNameError {
    fn custom<T: fmt::Display>(_msg: T) -> Self {
        VariantNameError
    }
}

pub(crate) struct TupleVariantName {
    name: &'static str,
}

impl SerializeTupleVariant for TupleVariantName {
    type Ok = &'static str;
    type Error = VariantNameError;

    fn serialize_field<T>(&mut self, _value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(self.name)
    }
}

// Everything that isn't an enum variant is rejected.
macro_rules! reject_serialize {
    ($($method:ident($($arg:ty),*) -> $ret:ty;)*) => {
        $(
            fn $method(self, $(_: $arg),*) -> Result<$ret, Self::Error> {
                Err(VariantNameError)
            }
        )*
    };
}

impl<'a> Serializer for &'a mut VariantName {
    type Ok = &'static str;
    type Error = VariantNameError;

    type SerializeSeq = Impossible<Self::Ok, Self::Error>;
    type SerializeTuple = Impossible<Self::Ok, Self::Error>;
    type SerializeTupleStruct = Impossible<Self::Ok, Self::Error>;
    type SerializeTupleVariant = TupleVariantName;
    type SerializeMap = Impossible<Self::Ok, Self::Error>;
    type SerializeStruct = Impossible<Self::Ok, Self::Error>;
    type SerializeStructVariant = Impossible<Self::Ok, Self::Error>;

    reject_serialize! {
        serialize_bool(bool) -> Self::Ok;
        serialize_i8(i8) -> Self::Ok;
        serialize_i16(i16) -> Self::Ok;
        serialize_i32(i32) -> Self::Ok;
        serialize_i64(i64) -> Self::Ok;
        serialize_u8(u8) -> Self::Ok;
        serialize_u16(u16) -> Self::Ok;
        serialize_u32(u32) -> Self::Ok;
        serialize_u64(u64) -> Self::Ok;
        serialize_f32(f32) -> Self::Ok;
        serialize_f64(f64) -> Self::Ok;
        serialize_char(char) -> Self::Ok;
        serialize_str(&str) -> Self::Ok;
        serialize_bytes(&[u8]) -> Self::Ok;
        serialize_none() -> Self::Ok;
        serialize_unit() -> Self::Ok;
        serialize_seq(Option<usize>) -> Self::SerializeSeq;
        serialize_tuple(usize) -> Self::SerializeTuple;
        serialize_tuple_struct(&'static str, usize) -> Self::SerializeTupleStruct;
        serialize_map(Option<usize>) -> Self::SerializeMap;
        serialize_struct(&'static str, usize) -> Self::SerializeStruct;
        serialize_struct_variant(&'static str, u32, &'static str, usize) -> Self::SerializeStructVariant;
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Self::Ok, Self::Error> {
        Ok(name)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        Ok(variant)
    }

    fn serialize_newtype_struct<T>(
        self,
        name: &'static str,
        _value: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + Serialize,
    {
        Ok(name)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + Serialize,
    {
        Ok(variant)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Ok(TupleVariantName { name: variant })
    }

    fn collect_str<T>(self, _value: &T) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized,
    {
        Err(VariantNameError)
    }
}
