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

/// Every operation of AWS IoT.
pub static OPERATIONS: &[&OperationShape] = &[
    &operation::ATTACH_THING_PRINCIPAL,
    &operation::CREATE_THING,
    &operation::DELETE_THING,
    &operation::DESCRIBE_THING,
    &operation::LIST_THINGS,
    &operation::UPDATE_THING,
];

/// <fullname>AWS IoT</fullname>
///
/// Every operation fails with [`OperationError::NotImplemented`] until it is overridden.
pub trait Iot {
    /// <p>Attaches the specified principal to the specified thing.</p>
    fn attach_thing_principal(
        &self,
        _input: AttachThingPrincipalInput,
    ) -> OperationResult<AttachThingPrincipalOutput> {
        Err(OperationError::not_implemented("AttachThingPrincipal"))
    }

    /// <p>Creates a thing record in the registry.</p>
    fn create_thing(&self, _input: CreateThingInput) -> OperationResult<CreateThingOutput> {
        Err(OperationError::not_implemented("CreateThing"))
    }

    /// <p>Deletes the specified thing.</p>
    fn delete_thing(&self, _input: DeleteThingInput) -> OperationResult<DeleteThingOutput> {
        Err(OperationError::not_implemented("DeleteThing"))
    }

    /// <p>Gets information about the specified thing.</p>
    fn describe_thing(&self, _input: DescribeThingInput) -> OperationResult<DescribeThingOutput> {
        Err(OperationError::not_implemented("DescribeThing"))
    }

    /// <p>Lists your things.</p>
    fn list_things(&self, _input: ListThingsInput) -> OperationResult<ListThingsOutput> {
        Err(OperationError::not_implemented("ListThings"))
    }

    /// <p>Updates the data for a thing.</p>
    fn update_thing(&self, _input: UpdateThingInput) -> OperationResult<UpdateThingOutput> {
        Err(OperationError::not_implemented("UpdateThing"))
    }
}

/// An [`Iot`] that implements no operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedIot;

impl Iot for UnimplementedIot {}
