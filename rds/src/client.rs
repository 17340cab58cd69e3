/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! The capability set of the service.

use crate::input::*;
use crate::operation;
use crate::output::*;
use wire_http::service::{OperationError, OperationResult};
use wire_http::shape::OperationShape;

/// Every operation of Amazon RDS.
pub static OPERATIONS: &[&OperationShape] = &[
    &operation::ADD_TAGS_TO_RESOURCE,
    &operation::DELETE_DB_INSTANCE,
    &operation::DESCRIBE_DB_INSTANCES,
    &operation::LIST_TAGS_FOR_RESOURCE,
    &operation::REMOVE_TAGS_FROM_RESOURCE,
];

/// <fullname>Amazon Relational Database Service</fullname>
///
/// Every operation fails with [`OperationError::NotImplemented`] until it is overridden.
pub trait Rds {
    /// <p>Adds metadata tags to an Amazon RDS resource.</p>
    fn add_tags_to_resource(
        &self,
        _input: AddTagsToResourceInput,
    ) -> OperationResult<AddTagsToResourceOutput> {
        Err(OperationError::not_implemented("AddTagsToResource"))
    }

    /// <p>The DeleteDBInstance action deletes a previously provisioned DB instance.</p>
    fn delete_db_instance(
        &self,
        _input: DeleteDbInstanceInput,
    ) -> OperationResult<DeleteDbInstanceOutput> {
        Err(OperationError::not_implemented("DeleteDBInstance"))
    }

    /// <p>Returns information about provisioned RDS instances.</p>
    fn describe_db_instances(
        &self,
        _input: DescribeDbInstancesInput,
    ) -> OperationResult<DescribeDbInstancesOutput> {
        Err(OperationError::not_implemented("DescribeDBInstances"))
    }

    /// <p>Lists all tags on an Amazon RDS resource.</p>
    fn list_tags_for_resource(
        &self,
        _input: ListTagsForResourceInput,
    ) -> OperationResult<ListTagsForResourceOutput> {
        Err(OperationError::not_implemented("ListTagsForResource"))
    }

    /// <p>Removes metadata tags from an Amazon RDS resource.</p>
    fn remove_tags_from_resource(
        &self,
        _input: RemoveTagsFromResourceInput,
    ) -> OperationResult<RemoveTagsFromResourceOutput> {
        Err(OperationError::not_implemented("RemoveTagsFromResource"))
    }
}

/// An [`Rds`] that implements no operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedRds;

impl Rds for UnimplementedRds {}
