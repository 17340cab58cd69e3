/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation outputs.

use crate::model::ThingAttribute;
use crate::operation;
use std::collections::BTreeMap;
use wire_http::error::FieldError;
use wire_http::shape::StructureShape;
use wire_http::unmarshall::Unmarshall;
use wire_http::value::WireValue;

/// Outputs without members.
macro_rules! empty_output {
    ($($(#[$meta:meta])* $name:ident => $shape:path;)+) => {
        $(
            $(#[$meta])*
            #[non_exhaustive]
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $name {}

            impl Unmarshall for $name {
                fn shape() -> &'static StructureShape {
                    &$shape
                }

                fn assign(&mut self, _member: &str, _value: WireValue) -> Result<(), FieldError> {
                    Ok(())
                }
            }
        )+
    };
}

empty_output! {
    /// Output of `AttachThingPrincipal`
    AttachThingPrincipalOutput => operation::ATTACH_THING_PRINCIPAL_OUTPUT;
    /// Output of `DeleteThing`
    DeleteThingOutput => operation::DELETE_THING_OUTPUT;
    /// Output of `UpdateThing`
    UpdateThingOutput => operation::UPDATE_THING_OUTPUT;
}

/// Output of `CreateThing`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateThingOutput {
    /// <p>The name of the new thing.</p>
    pub thing_name: Option<String>,
    /// <p>The ARN of the new thing.</p>
    pub thing_arn: Option<String>,
    /// <p>The thing ID.</p>
    pub thing_id: Option<String>,
}

impl Unmarshall for CreateThingOutput {
    fn shape() -> &'static StructureShape {
        &operation::CREATE_THING_OUTPUT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "thingName" => self.thing_name = Some(value.into_string()?),
            "thingArn" => self.thing_arn = Some(value.into_string()?),
            "thingId" => self.thing_id = Some(value.into_string()?),
            _ => {}
        }
        Ok(())
    }
}

/// Output of `DescribeThing`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeThingOutput {
    /// <p>The default MQTT client ID.</p>
    pub default_client_id: Option<String>,
    /// <p>The name of the thing.</p>
    pub thing_name: Option<String>,
    /// <p>The ID of the thing to describe.</p>
    pub thing_id: Option<String>,
    /// <p>The ARN of the thing to describe.</p>
    pub thing_arn: Option<String>,
    /// <p>The thing type name.</p>
    pub thing_type_name: Option<String>,
    /// <p>The thing attributes.</p>
    pub attributes: BTreeMap<String, String>,
    /// <p>The current version of the thing record in the registry.</p>
    pub version: Option<i64>,
    /// <p>The name of the billing group the thing belongs to.</p>
    pub billing_group_name: Option<String>,
}

impl Unmarshall for DescribeThingOutput {
    fn shape() -> &'static StructureShape {
        &operation::DESCRIBE_THING_OUTPUT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "defaultClientId" => self.default_client_id = Some(value.into_string()?),
            "thingName" => self.thing_name = Some(value.into_string()?),
            "thingId" => self.thing_id = Some(value.into_string()?),
            "thingArn" => self.thing_arn = Some(value.into_string()?),
            "thingTypeName" => self.thing_type_name = Some(value.into_string()?),
            "attributes" => self.attributes = value.into_map()?,
            "version" => self.version = Some(value.into_i64()?),
            "billingGroupName" => self.billing_group_name = Some(value.into_string()?),
            _ => {}
        }
        Ok(())
    }
}

/// Output of `ListThings`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListThingsOutput {
    /// <p>The things.</p>
    pub things: Vec<ThingAttribute>,
    /// <p>The token to use to get the next set of results, or <b>null</b> if there are no
    /// additional results.</p>
    pub next_token: Option<String>,
}

impl Unmarshall for ListThingsOutput {
    fn shape() -> &'static StructureShape {
        &operation::LIST_THINGS_OUTPUT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "things" => self.things = value.into_list()?,
            "nextToken" => self.next_token = Some(value.into_string()?),
            _ => {}
        }
        Ok(())
    }
}
