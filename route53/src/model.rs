/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Data types used by more than one operation.

use crate::operation;
use wire_http::error::FieldError;
use wire_http::shape::StructureShape;
use wire_http::unmarshall::Unmarshall;
use wire_http::value::{FieldValue, FromWireValue, ToFieldValue, WireValue};
use wire_http::wire_enum;
use wire_types::Instant;

wire_enum! {
    /// Progress of a change batch.
    pub enum ChangeStatus {
        /// The change has not yet propagated to all Route 53 DNS servers.
        Pending => "PENDING",
        /// The change has propagated to all Route 53 DNS servers.
        Insync => "INSYNC",
    }
}

/// <p>A complex type that contains an optional comment about your hosted zone.</p>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostedZoneConfig {
    /// <p>Any comments that you want to include about the hosted zone.</p>
    pub comment: Option<String>,
    /// <p>A value that indicates whether this is a private hosted zone.</p>
    pub private_zone: Option<bool>,
}

impl ToFieldValue for HostedZoneConfig {
    fn to_field_value(&self) -> FieldValue<'_> {
        let mut members = Vec::new();
        if let Some(comment) = &self.comment {
            members.push(("Comment", comment.to_field_value()));
        }
        if let Some(private_zone) = &self.private_zone {
            members.push(("PrivateZone", private_zone.to_field_value()));
        }
        FieldValue::Struct(members)
    }
}

impl Unmarshall for HostedZoneConfig {
    fn shape() -> &'static StructureShape {
        &operation::HOSTED_ZONE_CONFIG
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "Comment" => self.comment = Some(value.into_string()?),
            "PrivateZone" => self.private_zone = Some(value.into_bool()?),
            _ => {}
        }
        Ok(())
    }
}

/// <p>A complex type that contains general information about the hosted zone.</p>
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostedZone {
    /// <p>The ID that Amazon Route 53 assigned to the hosted zone when you created it.</p>
    pub id: Option<String>,
    /// <p>The name of the domain.</p>
    pub name: Option<String>,
    /// <p>The value that you specified for <code>CallerReference</code> when you created the
    /// hosted zone.</p>
    pub caller_reference: Option<String>,
    /// <p>A complex type that includes the <code>Comment</code> and <code>PrivateZone</code>
    /// elements.</p>
    pub config: Option<HostedZoneConfig>,
    /// <p>The number of resource record sets in the hosted zone.</p>
    pub resource_record_set_count: Option<i64>,
}

impl Unmarshall for HostedZone {
    fn shape() -> &'static StructureShape {
        &operation::HOSTED_ZONE
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "Id" => self.id = Some(value.into_string()?),
            "Name" => self.name = Some(value.into_string()?),
            "CallerReference" => self.caller_reference = Some(value.into_string()?),
            "Config" => self.config = Some(value.into_structure()?),
            "ResourceRecordSetCount" => self.resource_record_set_count = Some(value.into_i64()?),
            _ => {}
        }
        Ok(())
    }
}

impl FromWireValue for HostedZone {
    fn from_wire_value(value: WireValue) -> Result<Self, FieldError> {
        value.into_structure()
    }
}

/// <p>A complex type that describes change information about changes made to your hosted
/// zone.</p>
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeInfo {
    /// <p>This element contains an ID that you use when performing a <code>GetChange</code>
    /// action to get detailed information about the change.</p>
    pub id: Option<String>,
    /// <p>The current state of the request.</p>
    pub status: Option<ChangeStatus>,
    /// <p>The date and time that the change request was submitted.</p>
    pub submitted_at: Option<Instant>,
    /// <p>A comment you can provide.</p>
    pub comment: Option<String>,
}

impl Unmarshall for ChangeInfo {
    fn shape() -> &'static StructureShape {
        &operation::CHANGE_INFO
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "Id" => self.id = Some(value.into_string()?),
            "Status" => self.status = Some(ChangeStatus::from_wire_value(value)?),
            "SubmittedAt" => self.submitted_at = Some(value.into_instant()?),
            "Comment" => self.comment = Some(value.into_string()?),
            _ => {}
        }
        Ok(())
    }
}

/// <p>A complex type that lists the name servers in a delegation set.</p>
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelegationSet {
    /// <p>The ID that Amazon Route 53 assigns to a reusable delegation set.</p>
    pub id: Option<String>,
    /// <p>The value that you specified for <code>CallerReference</code> when you created the
    /// reusable delegation set.</p>
    pub caller_reference: Option<String>,
    /// <p>A complex type that contains a list of the authoritative name servers for a hosted
    /// zone.</p>
    pub name_servers: Vec<String>,
}

impl Unmarshall for DelegationSet {
    fn shape() -> &'static StructureShape {
        &operation::DELEGATION_SET
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "Id" => self.id = Some(value.into_string()?),
            "CallerReference" => self.caller_reference = Some(value.into_string()?),
            "NameServers" => self.name_servers = value.into_list()?,
            _ => {}
        }
        Ok(())
    }
}
