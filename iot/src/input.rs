/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation inputs.

use crate::model::AttributePayload;
use crate::operation;
use wire_http::marshall::Marshall;
use wire_http::shape::OperationShape;
use wire_http::value::{FieldValue, ToFieldValue};

/// Input of `AttachThingPrincipal`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttachThingPrincipalInput {
    /// <p>The name of the thing.</p>
    pub thing_name: Option<String>,
    /// <p>The principal, which can be a certificate ARN (as returned from the CreateCertificate
    /// operation) or an Amazon Cognito ID.</p>
    pub principal: Option<String>,
}

impl Marshall for AttachThingPrincipalInput {
    fn shape() -> &'static OperationShape {
        &operation::ATTACH_THING_PRINCIPAL
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "thingName" => self.thing_name.as_ref().map(ToFieldValue::to_field_value),
            "principal" => self.principal.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `CreateThing`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateThingInput {
    /// <p>The name of the thing to create.</p>
    pub thing_name: Option<String>,
    /// <p>The name of the thing type associated with the new thing.</p>
    pub thing_type_name: Option<String>,
    /// <p>The attribute payload, which consists of up to three name/value pairs in a JSON
    /// document.</p>
    pub attribute_payload: Option<AttributePayload>,
    /// <p>The name of the billing group the thing will be added to.</p>
    pub billing_group_name: Option<String>,
}

impl Marshall for CreateThingInput {
    fn shape() -> &'static OperationShape {
        &operation::CREATE_THING
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "thingName" => self.thing_name.as_ref().map(ToFieldValue::to_field_value),
            "thingTypeName" => self.thing_type_name.as_ref().map(ToFieldValue::to_field_value),
            "attributePayload" => self
                .attribute_payload
                .as_ref()
                .map(ToFieldValue::to_field_value),
            "billingGroupName" => self
                .billing_group_name
                .as_ref()
                .map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `DeleteThing`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteThingInput {
    /// <p>The name of the thing to delete.</p>
    pub thing_name: Option<String>,
    /// <p>The expected version of the thing record in the registry.</p>
    pub expected_version: Option<i64>,
}

impl Marshall for DeleteThingInput {
    fn shape() -> &'static OperationShape {
        &operation::DELETE_THING
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "thingName" => self.thing_name.as_ref().map(ToFieldValue::to_field_value),
            "expectedVersion" => self.expected_version.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `DescribeThing`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeThingInput {
    /// <p>The name of the thing.</p>
    pub thing_name: Option<String>,
}

impl Marshall for DescribeThingInput {
    fn shape() -> &'static OperationShape {
        &operation::DESCRIBE_THING
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "thingName" => self.thing_name.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `ListThings`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListThingsInput {
    /// <p>To retrieve the next set of results, the <code>nextToken</code> value from a
    /// previous response.</p>
    pub next_token: Option<String>,
    /// <p>The maximum number of results to return in this operation.</p>
    pub max_results: Option<i32>,
    /// <p>The attribute name used to search for things.</p>
    pub attribute_name: Option<String>,
    /// <p>The attribute value used to search for things.</p>
    pub attribute_value: Option<String>,
    /// <p>The name of the thing type used to search for things.</p>
    pub thing_type_name: Option<String>,
}

impl Marshall for ListThingsInput {
    fn shape() -> &'static OperationShape {
        &operation::LIST_THINGS
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "nextToken" => self.next_token.as_ref().map(ToFieldValue::to_field_value),
            "maxResults" => self.max_results.as_ref().map(ToFieldValue::to_field_value),
            "attributeName" => self.attribute_name.as_ref().map(ToFieldValue::to_field_value),
            "attributeValue" => self.attribute_value.as_ref().map(ToFieldValue::to_field_value),
            "thingTypeName" => self.thing_type_name.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `UpdateThing`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateThingInput {
    /// <p>The name of the thing to update.</p>
    pub thing_name: Option<String>,
    /// <p>The name of the thing type.</p>
    pub thing_type_name: Option<String>,
    /// <p>A list of thing attributes, a JSON string containing name-value pairs.</p>
    pub attribute_payload: Option<AttributePayload>,
    /// <p>The expected version of the thing record in the registry.</p>
    pub expected_version: Option<i64>,
    /// <p>Remove a thing type association. If <b>true</b>, the association is removed.</p>
    pub remove_thing_type: Option<bool>,
}

impl Marshall for UpdateThingInput {
    fn shape() -> &'static OperationShape {
        &operation::UPDATE_THING
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "thingName" => self.thing_name.as_ref().map(ToFieldValue::to_field_value),
            "thingTypeName" => self.thing_type_name.as_ref().map(ToFieldValue::to_field_value),
            "attributePayload" => self
                .attribute_payload
                .as_ref()
                .map(ToFieldValue::to_field_value),
            "expectedVersion" => self.expected_version.as_ref().map(ToFieldValue::to_field_value),
            "removeThingType" => self.remove_thing_type.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}
