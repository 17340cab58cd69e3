/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation outputs.

use crate::model::{DbInstance, Tag};
use crate::operation;
use wire_http::error::FieldError;
use wire_http::shape::StructureShape;
use wire_http::unmarshall::Unmarshall;
use wire_http::value::WireValue;

/// Output of `AddTagsToResource`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddTagsToResourceOutput {}

impl Unmarshall for AddTagsToResourceOutput {
    fn shape() -> &'static StructureShape {
        &operation::ADD_TAGS_TO_RESOURCE_OUTPUT
    }

    fn assign(&mut self, _member: &str, _value: WireValue) -> Result<(), FieldError> {
        Ok(())
    }
}

/// Output of `DeleteDBInstance`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteDbInstanceOutput {
    /// <p>Contains the details of an Amazon RDS DB instance.</p>
    pub db_instance: Option<DbInstance>,
}

impl Unmarshall for DeleteDbInstanceOutput {
    fn shape() -> &'static StructureShape {
        &operation::DELETE_DB_INSTANCE_OUTPUT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        if member == "DBInstance" {
            self.db_instance = Some(value.into_structure()?);
        }
        Ok(())
    }
}

/// Output of `DescribeDBInstances`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeDbInstancesOutput {
    /// <p>An optional pagination token provided by a previous request.</p>
    pub marker: Option<String>,
    /// <p>A list of <code>DBInstance</code> instances.</p>
    pub db_instances: Vec<DbInstance>,
}

impl Unmarshall for DescribeDbInstancesOutput {
    fn shape() -> &'static StructureShape {
        &operation::DESCRIBE_DB_INSTANCES_OUTPUT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "Marker" => self.marker = Some(value.into_string()?),
            "DBInstances" => self.db_instances = value.into_list()?,
            _ => {}
        }
        Ok(())
    }
}

/// Output of `ListTagsForResource`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListTagsForResourceOutput {
    /// <p>List of tags returned by the <code>ListTagsForResource</code> operation.</p>
    pub tag_list: Vec<Tag>,
}

impl Unmarshall for ListTagsForResourceOutput {
    fn shape() -> &'static StructureShape {
        &operation::LIST_TAGS_FOR_RESOURCE_OUTPUT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        if member == "TagList" {
            self.tag_list = value.into_list()?;
        }
        Ok(())
    }
}

/// Output of `RemoveTagsFromResource`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoveTagsFromResourceOutput {}

impl Unmarshall for RemoveTagsFromResourceOutput {
    fn shape() -> &'static StructureShape {
        &operation::REMOVE_TAGS_FROM_RESOURCE_OUTPUT
    }

    fn assign(&mut self, _member: &str, _value: WireValue) -> Result<(), FieldError> {
        Ok(())
    }
}
