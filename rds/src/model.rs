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
use wire_types::Instant;

/// <p>Metadata assigned to an Amazon RDS resource consisting of a key-value pair.</p>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    /// <p>A key is the required name of the tag.</p>
    pub key: Option<String>,
    /// <p>A value is the optional value of the tag.</p>
    pub value: Option<String>,
}

impl ToFieldValue for Tag {
    fn to_field_value(&self) -> FieldValue<'_> {
        let mut members = Vec::new();
        if let Some(key) = &self.key {
            members.push(("Key", key.to_field_value()));
        }
        if let Some(value) = &self.value {
            members.push(("Value", value.to_field_value()));
        }
        FieldValue::Struct(members)
    }
}

impl Unmarshall for Tag {
    fn shape() -> &'static StructureShape {
        &operation::TAG
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "Key" => self.key = Some(value.into_string()?),
            "Value" => self.value = Some(value.into_string()?),
            _ => {}
        }
        Ok(())
    }
}

impl FromWireValue for Tag {
    fn from_wire_value(value: WireValue) -> Result<Self, FieldError> {
        value.into_structure()
    }
}

/// <p>The connection endpoint of a DB instance.</p>
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Endpoint {
    /// <p>Specifies the DNS address of the DB instance.</p>
    pub address: Option<String>,
    /// <p>Specifies the port that the database engine is listening on.</p>
    pub port: Option<i32>,
    /// <p>Specifies the ID that Amazon Route 53 assigns when you create a hosted zone.</p>
    pub hosted_zone_id: Option<String>,
}

impl Unmarshall for Endpoint {
    fn shape() -> &'static StructureShape {
        &operation::ENDPOINT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "Address" => self.address = Some(value.into_string()?),
            "Port" => self.port = Some(value.into_i32()?),
            "HostedZoneId" => self.hosted_zone_id = Some(value.into_string()?),
            _ => {}
        }
        Ok(())
    }
}

/// <p>Contains the details of an Amazon RDS DB instance.</p>
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DbInstance {
    /// <p>Contains a user-supplied database identifier.</p>
    pub db_instance_identifier: Option<String>,
    /// <p>Contains the name of the compute and memory capacity class of the DB instance.</p>
    pub db_instance_class: Option<String>,
    /// <p>The name of the database engine to be used for this DB instance.</p>
    pub engine: Option<String>,
    /// <p>Specifies the current state of this database.</p>
    pub db_instance_status: Option<String>,
    /// <p>Contains the master username for the DB instance.</p>
    pub master_username: Option<String>,
    /// <p>Specifies the connection endpoint.</p>
    pub endpoint: Option<Endpoint>,
    /// <p>Specifies the allocated storage size specified in gibibytes (GiB).</p>
    pub allocated_storage: Option<i32>,
    /// <p>Provides the date and time the DB instance was created.</p>
    pub instance_create_time: Option<Instant>,
    /// <p>Specifies if the DB instance is a Multi-AZ deployment.</p>
    pub multi_az: Option<bool>,
}

impl Unmarshall for DbInstance {
    fn shape() -> &'static StructureShape {
        &operation::DB_INSTANCE
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "DBInstanceIdentifier" => self.db_instance_identifier = Some(value.into_string()?),
            "DBInstanceClass" => self.db_instance_class = Some(value.into_string()?),
            "Engine" => self.engine = Some(value.into_string()?),
            "DBInstanceStatus" => self.db_instance_status = Some(value.into_string()?),
            "MasterUsername" => self.master_username = Some(value.into_string()?),
            "Endpoint" => self.endpoint = Some(value.into_structure()?),
            "AllocatedStorage" => self.allocated_storage = Some(value.into_i32()?),
            "InstanceCreateTime" => self.instance_create_time = Some(value.into_instant()?),
            "MultiAZ" => self.multi_az = Some(value.into_bool()?),
            _ => {}
        }
        Ok(())
    }
}

impl FromWireValue for DbInstance {
    fn from_wire_value(value: WireValue) -> Result<Self, FieldError> {
        value.into_structure()
    }
}
