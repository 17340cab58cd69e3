/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation inputs.

use crate::model::Tag;
use crate::operation;
use wire_http::marshall::Marshall;
use wire_http::shape::OperationShape;
use wire_http::value::{FieldValue, ToFieldValue};

/// Input of `AddTagsToResource`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddTagsToResourceInput {
    /// <p>The Amazon RDS resource that the tags are added to.</p>
    pub resource_name: Option<String>,
    /// <p>The tags to be assigned to the Amazon RDS resource.</p>
    pub tags: Option<Vec<Tag>>,
}

impl Marshall for AddTagsToResourceInput {
    fn shape() -> &'static OperationShape {
        &operation::ADD_TAGS_TO_RESOURCE
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "ResourceName" => self.resource_name.as_ref().map(ToFieldValue::to_field_value),
            "Tags" => self.tags.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `DeleteDBInstance`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteDbInstanceInput {
    /// <p>The DB instance identifier for the DB instance to be deleted.</p>
    pub db_instance_identifier: Option<String>,
    /// <p>A value that indicates whether to skip the creation of a final DB snapshot before
    /// deleting the instance.</p>
    pub skip_final_snapshot: Option<bool>,
    /// <p>The <code>DBSnapshotIdentifier</code> of the new <code>DBSnapshot</code> created when
    /// the <code>SkipFinalSnapshot</code> parameter is disabled.</p>
    pub final_db_snapshot_identifier: Option<String>,
}

impl Marshall for DeleteDbInstanceInput {
    fn shape() -> &'static OperationShape {
        &operation::DELETE_DB_INSTANCE
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "DBInstanceIdentifier" => self
                .db_instance_identifier
                .as_ref()
                .map(ToFieldValue::to_field_value),
            "SkipFinalSnapshot" => self
                .skip_final_snapshot
                .as_ref()
                .map(ToFieldValue::to_field_value),
            "FinalDBSnapshotIdentifier" => self
                .final_db_snapshot_identifier
                .as_ref()
                .map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `DescribeDBInstances`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeDbInstancesInput {
    /// <p>The user-supplied instance identifier or the Amazon Resource Name (ARN) of the DB
    /// instance.</p>
    pub db_instance_identifier: Option<String>,
    /// <p>The maximum number of records to include in the response.</p>
    pub max_records: Option<i32>,
    /// <p>An optional pagination token provided by a previous
    /// <code>DescribeDBInstances</code> request.</p>
    pub marker: Option<String>,
}

impl Marshall for DescribeDbInstancesInput {
    fn shape() -> &'static OperationShape {
        &operation::DESCRIBE_DB_INSTANCES
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "DBInstanceIdentifier" => self
                .db_instance_identifier
                .as_ref()
                .map(ToFieldValue::to_field_value),
            "MaxRecords" => self.max_records.as_ref().map(ToFieldValue::to_field_value),
            "Marker" => self.marker.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `ListTagsForResource`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListTagsForResourceInput {
    /// <p>The Amazon RDS resource with tags to be listed.</p>
    pub resource_name: Option<String>,
}

impl Marshall for ListTagsForResourceInput {
    fn shape() -> &'static OperationShape {
        &operation::LIST_TAGS_FOR_RESOURCE
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "ResourceName" => self.resource_name.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `RemoveTagsFromResource`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoveTagsFromResourceInput {
    /// <p>The Amazon RDS resource that the tags are removed from.</p>
    pub resource_name: Option<String>,
    /// <p>The tag key (name) of the tag to be removed.</p>
    pub tag_keys: Option<Vec<String>>,
}

impl Marshall for RemoveTagsFromResourceInput {
    fn shape() -> &'static OperationShape {
        &operation::REMOVE_TAGS_FROM_RESOURCE
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "ResourceName" => self.resource_name.as_ref().map(ToFieldValue::to_field_value),
            "TagKeys" => self.tag_keys.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}
