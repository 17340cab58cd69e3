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

wire_enum! {
    /// Registration state of a domain or type.
    pub enum RegistrationStatus {
        /// Registered and available for use.
        Registered => "REGISTERED",
        /// Deprecated: no new workflow executions can be started in it.
        Deprecated => "DEPRECATED",
    }
}

/// <p>Tags are key-value pairs that can be associated with Amazon SWF state machines and
/// activities.</p>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceTag {
    /// <p>The key of a tag.</p>
    pub key: Option<String>,
    /// <p>The value of a tag.</p>
    pub value: Option<String>,
}

impl ToFieldValue for ResourceTag {
    fn to_field_value(&self) -> FieldValue<'_> {
        let mut members = Vec::new();
        if let Some(key) = &self.key {
            members.push(("key", key.to_field_value()));
        }
        if let Some(value) = &self.value {
            members.push(("value", value.to_field_value()));
        }
        FieldValue::Struct(members)
    }
}

/// <p>Contains general information about a domain.</p>
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainInfo {
    /// <p>The name of the domain. This name is unique within the account.</p>
    pub name: Option<String>,
    /// <p>The status of the domain.</p>
    pub status: Option<RegistrationStatus>,
    /// <p>The description of the domain provided through <code>RegisterDomain</code>.</p>
    pub description: Option<String>,
    /// <p>The ARN of the domain.</p>
    pub arn: Option<String>,
}

impl Unmarshall for DomainInfo {
    fn shape() -> &'static StructureShape {
        &operation::DOMAIN_INFO
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "name" => self.name = Some(value.into_string()?),
            "status" => self.status = Some(RegistrationStatus::from_wire_value(value)?),
            "description" => self.description = Some(value.into_string()?),
            "arn" => self.arn = Some(value.into_string()?),
            _ => {}
        }
        Ok(())
    }
}

impl FromWireValue for DomainInfo {
    fn from_wire_value(value: WireValue) -> Result<Self, FieldError> {
        value.into_structure()
    }
}

/// <p>Contains the configuration settings of a domain.</p>
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainConfiguration {
    /// <p>The retention period for workflow executions in this domain.</p>
    pub workflow_execution_retention_period_in_days: Option<String>,
}

impl Unmarshall for DomainConfiguration {
    fn shape() -> &'static StructureShape {
        &operation::DOMAIN_CONFIGURATION
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        if member == "workflowExecutionRetentionPeriodInDays" {
            self.workflow_execution_retention_period_in_days = Some(value.into_string()?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::RegistrationStatus;
    use wire_http::enums::WireEnum;

    #[test]
    fn registration_status_is_strict() {
        assert_eq!(RegistrationStatus::tokens(), vec!["REGISTERED", "DEPRECATED"]);
        assert_eq!(
            RegistrationStatus::from_wire(Some("DEPRECATED")),
            Ok(RegistrationStatus::Deprecated)
        );
        for rejected in [None, Some(""), Some("Registered"), Some("ARCHIVED")] {
            let err = RegistrationStatus::from_wire(rejected).unwrap_err();
            assert_eq!(err.enum_name(), "RegistrationStatus");
            assert_eq!(err.token(), rejected);
        }
    }
}
