/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation inputs.

use crate::model::HostedZoneConfig;
use crate::operation;
use wire_http::marshall::Marshall;
use wire_http::shape::OperationShape;
use wire_http::value::{FieldValue, ToFieldValue};

/// Input of `CreateHostedZone`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateHostedZoneInput {
    /// <p>The name of the domain.</p>
    pub name: Option<String>,
    /// <p>A unique string that identifies the request and that allows failed
    /// <code>CreateHostedZone</code> requests to be retried without the risk of executing the
    /// operation twice.</p>
    pub caller_reference: Option<String>,
    /// <p>(Optional) A complex type that contains the following optional values.</p>
    pub hosted_zone_config: Option<HostedZoneConfig>,
    /// <p>If you want to associate a reusable delegation set with this hosted zone, the ID that
    /// Amazon Route 53 assigned to the reusable delegation set when you created it.</p>
    pub delegation_set_id: Option<String>,
}

impl Marshall for CreateHostedZoneInput {
    fn shape() -> &'static OperationShape {
        &operation::CREATE_HOSTED_ZONE
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "Name" => self.name.as_ref().map(ToFieldValue::to_field_value),
            "CallerReference" => self.caller_reference.as_ref().map(ToFieldValue::to_field_value),
            "HostedZoneConfig" => self
                .hosted_zone_config
                .as_ref()
                .map(ToFieldValue::to_field_value),
            "DelegationSetId" => self.delegation_set_id.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `DeleteHostedZone`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteHostedZoneInput {
    /// <p>The ID of the hosted zone you want to delete.</p>
    pub id: Option<String>,
}

impl Marshall for DeleteHostedZoneInput {
    fn shape() -> &'static OperationShape {
        &operation::DELETE_HOSTED_ZONE
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "Id" => self.id.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `GetChange`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetChangeInput {
    /// <p>The ID of the change batch request.</p>
    pub id: Option<String>,
}

impl Marshall for GetChangeInput {
    fn shape() -> &'static OperationShape {
        &operation::GET_CHANGE
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "Id" => self.id.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `GetHostedZone`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetHostedZoneInput {
    /// <p>The ID of the hosted zone that you want to get information about.</p>
    pub id: Option<String>,
}

impl Marshall for GetHostedZoneInput {
    fn shape() -> &'static OperationShape {
        &operation::GET_HOSTED_ZONE
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "Id" => self.id.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `ListHostedZones`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListHostedZonesInput {
    /// <p>If the value of <code>IsTruncated</code> in the previous response was
    /// <code>true</code>, the value of <code>NextMarker</code> from that response.</p>
    pub marker: Option<String>,
    /// <p>(Optional) The maximum number of hosted zones that you want Amazon Route 53 to return.
    /// </p>
    pub max_items: Option<i32>,
    /// <p>If you're using reusable delegation sets, the ID of the reusable delegation set whose
    /// hosted zones you want to list.</p>
    pub delegation_set_id: Option<String>,
}

impl Marshall for ListHostedZonesInput {
    fn shape() -> &'static OperationShape {
        &operation::LIST_HOSTED_ZONES
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "Marker" => self.marker.as_ref().map(ToFieldValue::to_field_value),
            "MaxItems" => self.max_items.as_ref().map(ToFieldValue::to_field_value),
            "DelegationSetId" => self.delegation_set_id.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}
