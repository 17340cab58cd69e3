/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation outputs.

use crate::model::{ChangeInfo, DelegationSet, HostedZone};
use crate::operation;
use wire_http::error::FieldError;
use wire_http::shape::StructureShape;
use wire_http::unmarshall::Unmarshall;
use wire_http::value::WireValue;

/// Output of `CreateHostedZone`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateHostedZoneOutput {
    /// <p>A complex type that contains general information about the hosted zone.</p>
    pub hosted_zone: Option<HostedZone>,
    /// <p>A complex type that contains information about the <code>CreateHostedZone</code>
    /// request.</p>
    pub change_info: Option<ChangeInfo>,
    /// <p>A complex type that describes the name servers for this hosted zone.</p>
    pub delegation_set: Option<DelegationSet>,
    /// <p>The unique URL representing the new hosted zone.</p>
    pub location: Option<String>,
}

impl Unmarshall for CreateHostedZoneOutput {
    fn shape() -> &'static StructureShape {
        &operation::CREATE_HOSTED_ZONE_OUTPUT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "HostedZone" => self.hosted_zone = Some(value.into_structure()?),
            "ChangeInfo" => self.change_info = Some(value.into_structure()?),
            "DelegationSet" => self.delegation_set = Some(value.into_structure()?),
            "Location" => self.location = Some(value.into_string()?),
            _ => {}
        }
        Ok(())
    }
}

/// Output of `DeleteHostedZone`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteHostedZoneOutput {
    /// <p>A complex type that contains the ID, the status, and the date and time of a request
    /// to delete a hosted zone.</p>
    pub change_info: Option<ChangeInfo>,
}

impl Unmarshall for DeleteHostedZoneOutput {
    fn shape() -> &'static StructureShape {
        &operation::DELETE_HOSTED_ZONE_OUTPUT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        if member == "ChangeInfo" {
            self.change_info = Some(value.into_structure()?);
        }
        Ok(())
    }
}

/// Output of `GetChange`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetChangeOutput {
    /// <p>A complex type that contains information about the specified change batch.</p>
    pub change_info: Option<ChangeInfo>,
}

impl Unmarshall for GetChangeOutput {
    fn shape() -> &'static StructureShape {
        &operation::GET_CHANGE_OUTPUT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        if member == "ChangeInfo" {
            self.change_info = Some(value.into_structure()?);
        }
        Ok(())
    }
}

/// Output of `GetHostedZone`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetHostedZoneOutput {
    /// <p>A complex type that contains general information about the specified hosted
    /// zone.</p>
    pub hosted_zone: Option<HostedZone>,
    /// <p>A complex type that lists the Amazon Route 53 name servers for the specified hosted
    /// zone.</p>
    pub delegation_set: Option<DelegationSet>,
}

impl Unmarshall for GetHostedZoneOutput {
    fn shape() -> &'static StructureShape {
        &operation::GET_HOSTED_ZONE_OUTPUT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "HostedZone" => self.hosted_zone = Some(value.into_structure()?),
            "DelegationSet" => self.delegation_set = Some(value.into_structure()?),
            _ => {}
        }
        Ok(())
    }
}

/// Output of `ListHostedZones`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListHostedZonesOutput {
    /// <p>A complex type that contains general information about the hosted zone.</p>
    pub hosted_zones: Vec<HostedZone>,
    /// <p>The value that you specified for the <code>marker</code> parameter in the request.</p>
    pub marker: Option<String>,
    /// <p>A flag indicating whether there are more hosted zones to be listed.</p>
    pub is_truncated: Option<bool>,
    /// <p>If <code>IsTruncated</code> is <code>true</code>, the value of
    /// <code>NextMarker</code> identifies the first hosted zone in the next group of hosted
    /// zones.</p>
    pub next_marker: Option<String>,
    /// <p>The value that you specified for the <code>maxitems</code> parameter in the call to
    /// <code>ListHostedZones</code> that produced the current response.</p>
    pub max_items: Option<i32>,
}

impl Unmarshall for ListHostedZonesOutput {
    fn shape() -> &'static StructureShape {
        &operation::LIST_HOSTED_ZONES_OUTPUT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "HostedZones" => self.hosted_zones = value.into_list()?,
            "Marker" => self.marker = Some(value.into_string()?),
            "IsTruncated" => self.is_truncated = Some(value.into_bool()?),
            "NextMarker" => self.next_marker = Some(value.into_string()?),
            "MaxItems" => self.max_items = Some(value.into_i32()?),
            _ => {}
        }
        Ok(())
    }
}
