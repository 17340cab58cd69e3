/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Values exchanged between typed structures and the transcoding engines.
//!
//! [`FieldValue`] borrows from a request and is what the marshaller encodes. [`WireValue`] is
//! owned and is what the unmarshaller hands to a result for assignment.

use crate::error::FieldError;
use crate::unmarshall::Unmarshall;
use std::collections::BTreeMap;
use wire_types::{Blob, Instant};

/// A request member's value, borrowed from the request.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Text
    String(&'a str),
    /// Any integer
    Integer(i64),
    /// A float
    Double(f64),
    /// A boolean
    Boolean(bool),
    /// A timestamp
    Timestamp(Instant),
    /// Raw bytes
    Blob(&'a Blob),
    /// Items in order. `None` items are skipped.
    List(Vec<Option<FieldValue<'a>>>),
    /// Entries in order
    Map(Vec<(&'a str, FieldValue<'a>)>),
    /// Present members of a nested structure, in shape order
    Struct(Vec<(&'static str, FieldValue<'a>)>),
}

impl<'a> FieldValue<'a> {
    /// Name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::String(_) => "string",
            FieldValue::Integer(_) => "integer",
            FieldValue::Double(_) => "double",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Timestamp(_) => "timestamp",
            FieldValue::Blob(_) => "blob",
            FieldValue::List(_) => "list",
            FieldValue::Map(_) => "map",
            FieldValue::Struct(_) => "structure",
        }
    }

    /// Builds a list that may contain absent items.
    pub fn sparse_list<T: ToFieldValue + 'a>(items: &'a [Option<T>]) -> Self {
        FieldValue::List(
            items
                .iter()
                .map(|item| item.as_ref().map(ToFieldValue::to_field_value))
                .collect(),
        )
    }
}

/// Conversion of a member value into a [`FieldValue`].
pub trait ToFieldValue {
    /// Borrows `self` as a field value.
    fn to_field_value(&self) -> FieldValue<'_>;
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::String(self)
    }
}

impl ToFieldValue for i32 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Integer(i64::from(*self))
    }
}

impl ToFieldValue for i64 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Integer(*self)
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Double(*self)
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Boolean(*self)
    }
}

impl ToFieldValue for Instant {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Timestamp(*self)
    }
}

impl ToFieldValue for Blob {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Blob(self)
    }
}

impl<T: ToFieldValue> ToFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::List(
            self.iter()
                .map(|item| Some(item.to_field_value()))
                .collect(),
        )
    }
}

impl<T: ToFieldValue> ToFieldValue for BTreeMap<String, T> {
    fn to_field_value(&self) -> FieldValue<'_> {
        FieldValue::Map(
            self.iter()
                .map(|(key, value)| (key.as_str(), value.to_field_value()))
                .collect(),
        )
    }
}

/// A decoded response value, handed to [`Unmarshall::assign`].
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    /// Text
    String(String),
    /// Any integer
    Integer(i64),
    /// A float
    Double(f64),
    /// A boolean
    Boolean(bool),
    /// A timestamp
    Timestamp(Instant),
    /// Raw bytes
    Blob(Blob),
    /// Items in wire order
    List(Vec<WireValue>),
    /// Entries keyed by their wire key
    Map(BTreeMap<String, WireValue>),
    /// Members of a nested structure, in wire order
    Structure(Vec<(&'static str, WireValue)>),
}

impl WireValue {
    /// Name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            WireValue::String(_) => "string",
            WireValue::Integer(_) => "integer",
            WireValue::Double(_) => "double",
            WireValue::Boolean(_) => "boolean",
            WireValue::Timestamp(_) => "timestamp",
            WireValue::Blob(_) => "blob",
            WireValue::List(_) => "list",
            WireValue::Map(_) => "map",
            WireValue::Structure(_) => "structure",
        }
    }

    fn mismatch(&self, expected: &'static str) -> FieldError {
        FieldError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Takes the value as a string.
    pub fn into_string(self) -> Result<String, FieldError> {
        match self {
            WireValue::String(value) => Ok(value),
            other => Err(other.mismatch("string")),
        }
    }

    /// Takes the value as a 64-bit integer.
    pub fn into_i64(self) -> Result<i64, FieldError> {
        match self {
            WireValue::Integer(value) => Ok(value),
            other => Err(other.mismatch("integer")),
        }
    }

    /// Takes the value as a 32-bit integer, failing if it is out of range.
    pub fn into_i32(self) -> Result<i32, FieldError> {
        let value = self.into_i64()?;
        i32::try_from(value).map_err(|err| FieldError::malformed(value.to_string(), err))
    }

    /// Takes the value as a float.
    pub fn into_f64(self) -> Result<f64, FieldError> {
        match self {
            WireValue::Double(value) => Ok(value),
            other => Err(other.mismatch("double")),
        }
    }

    /// Takes the value as a boolean.
    pub fn into_bool(self) -> Result<bool, FieldError> {
        match self {
            WireValue::Boolean(value) => Ok(value),
            other => Err(other.mismatch("boolean")),
        }
    }

    /// Takes the value as a timestamp.
    pub fn into_instant(self) -> Result<Instant, FieldError> {
        match self {
            WireValue::Timestamp(value) => Ok(value),
            other => Err(other.mismatch("timestamp")),
        }
    }

    /// Takes the value as bytes.
    pub fn into_blob(self) -> Result<Blob, FieldError> {
        match self {
            WireValue::Blob(value) => Ok(value),
            other => Err(other.mismatch("blob")),
        }
    }

    /// Takes the value as a list, converting each item.
    pub fn into_list<T: FromWireValue>(self) -> Result<Vec<T>, FieldError> {
        match self {
            WireValue::List(items) => items.into_iter().map(T::from_wire_value).collect(),
            other => Err(other.mismatch("list")),
        }
    }

    /// Takes the value as a map, converting each value.
    pub fn into_map<T: FromWireValue>(self) -> Result<BTreeMap<String, T>, FieldError> {
        match self {
            WireValue::Map(entries) => entries
                .into_iter()
                .map(|(key, value)| Ok((key, T::from_wire_value(value)?)))
                .collect(),
            other => Err(other.mismatch("map")),
        }
    }

    /// Takes the value as a nested structure.
    pub fn into_structure<T: Unmarshall>(self) -> Result<T, FieldError> {
        match self {
            WireValue::Structure(members) => Ok(T::from_members(members)?),
            other => Err(other.mismatch("structure")),
        }
    }
}

/// Conversion of a [`WireValue`] into a member type.
///
/// Nested structures implement this by delegating to [`WireValue::into_structure`].
pub trait FromWireValue: Sized {
    /// Converts the value, failing if it has the wrong shape.
    fn from_wire_value(value: WireValue) -> Result<Self, FieldError>;
}

macro_rules! from_wire_value {
    ($typ:ty, $method:ident) => {
        impl FromWireValue for $typ {
            fn from_wire_value(value: WireValue) -> Result<Self, FieldError> {
                value.$method()
            }
        }
    };
}

from_wire_value!(String, into_string);
from_wire_value!(i32, into_i32);
from_wire_value!(i64, into_i64);
from_wire_value!(f64, into_f64);
from_wire_value!(bool, into_bool);
from_wire_value!(Instant, into_instant);
from_wire_value!(Blob, into_blob);

impl<T: FromWireValue> FromWireValue for Vec<T> {
    fn from_wire_value(value: WireValue) -> Result<Self, FieldError> {
        value.into_list()
    }
}

impl<T: FromWireValue> FromWireValue for BTreeMap<String, T> {
    fn from_wire_value(value: WireValue) -> Result<Self, FieldError> {
        value.into_map()
    }
}
