/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Data types used by more than one operation.

use crate::operation;
use std::collections::BTreeMap;
use wire_http::error::FieldError;
use wire_http::shape::StructureShape;
use wire_http::unmarshall::Unmarshall;
use wire_http::value::{FieldValue, FromWireValue, ToFieldValue, WireValue};

/// <p>The attribute payload.</p>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributePayload {
    /// <p>A JSON string containing up to three key-value pair in JSON format.</p>
    pub attributes: Option<BTreeMap<String, String>>,
    /// <p>Specifies whether the list of attributes provided in the
    /// <code>AttributePayload</code> is merged with the attributes stored in the registry,
    /// instead of overwriting them.</p>
    pub merge: Option<bool>,
}

impl ToFieldValue for AttributePayload {
    fn to_field_value(&self) -> FieldValue<'_> {
        let mut members = Vec::new();
        if let Some(attributes) = &self.attributes {
            members.push(("attributes", attributes.to_field_value()));
        }
        if let Some(merge) = &self.merge {
            members.push(("merge", merge.to_field_value()));
        }
        FieldValue::Struct(members)
    }
}

/// <p>The properties of the thing, including thing name, thing type name, and a list of thing
/// attributes.</p>
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThingAttribute {
    /// <p>The name of the thing.</p>
    pub thing_name: Option<String>,
    /// <p>The name of the thing type, if the thing has been associated with a type.</p>
    pub thing_type_name: Option<String>,
    /// <p>The thing ARN.</p>
    pub thing_arn: Option<String>,
    /// <p>A list of thing attributes which are name-value pairs.</p>
    pub attributes: BTreeMap<String, String>,
    /// <p>The version of the thing record in the registry.</p>
    pub version: Option<i64>,
}

impl Unmarshall for ThingAttribute {
    fn shape() -> &'static StructureShape {
        &operation::THING_ATTRIBUTE
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "thingName" => self.thing_name = Some(value.into_string()?),
            "thingTypeName" => self.thing_type_name = Some(value.into_string()?),
            "thingArn" => self.thing_arn = Some(value.into_string()?),
            "attributes" => self.attributes = value.into_map()?,
            "version" => self.version = Some(value.into_i64()?),
            _ => {}
        }
        Ok(())
    }
}

impl FromWireValue for ThingAttribute {
    fn from_wire_value(value: WireValue) -> Result<Self, FieldError> {
        value.into_structure()
    }
}
