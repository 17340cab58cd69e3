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

/// Every operation of Amazon Route 53.
pub static OPERATIONS: &[&OperationShape] = &[
    &operation::CREATE_HOSTED_ZONE,
    &operation::DELETE_HOSTED_ZONE,
    &operation::GET_CHANGE,
    &operation::GET_HOSTED_ZONE,
    &operation::LIST_HOSTED_ZONES,
];

/// <fullname>Amazon Route 53</fullname>
///
/// Every operation fails with [`OperationError::NotImplemented`] until it is overridden.
pub trait Route53 {
    /// <p>Creates a new public or private hosted zone.</p>
    fn create_hosted_zone(
        &self,
        _input: CreateHostedZoneInput,
    ) -> OperationResult<CreateHostedZoneOutput> {
        Err(OperationError::not_implemented("CreateHostedZone"))
    }

    /// <p>Deletes a hosted zone.</p>
    fn delete_hosted_zone(
        &self,
        _input: DeleteHostedZoneInput,
    ) -> OperationResult<DeleteHostedZoneOutput> {
        Err(OperationError::not_implemented("DeleteHostedZone"))
    }

    /// <p>Returns the current status of a change batch request.</p>
    fn get_change(&self, _input: GetChangeInput) -> OperationResult<GetChangeOutput> {
        Err(OperationError::not_implemented("GetChange"))
    }

    /// <p>Gets information about a specified hosted zone including the four name servers
    /// assigned to the hosted zone.</p>
    fn get_hosted_zone(&self, _input: GetHostedZoneInput) -> OperationResult<GetHostedZoneOutput> {
        Err(OperationError::not_implemented("GetHostedZone"))
    }

    /// <p>Retrieves a list of the public and private hosted zones that are associated with the
    /// current Amazon Web Services account.</p>
    fn list_hosted_zones(
        &self,
        _input: ListHostedZonesInput,
    ) -> OperationResult<ListHostedZonesOutput> {
        Err(OperationError::not_implemented("ListHostedZones"))
    }
}

/// A [`Route53`] that implements no operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedRoute53;

impl Route53 for UnimplementedRoute53 {}
