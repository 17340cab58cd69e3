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

/// Every operation of Amazon SWF.
pub static OPERATIONS: &[&OperationShape] = &[
    &operation::DEPRECATE_DOMAIN,
    &operation::DESCRIBE_DOMAIN,
    &operation::LIST_DOMAINS,
    &operation::REGISTER_DOMAIN,
    &operation::UNDEPRECATE_DOMAIN,
];

/// <fullname>Amazon Simple Workflow Service</fullname>
///
/// Every operation fails with [`OperationError::NotImplemented`] until it is overridden.
pub trait SimpleWorkflow {
    /// <p>Deprecates the specified domain.</p>
    fn deprecate_domain(
        &self,
        _input: DeprecateDomainInput,
    ) -> OperationResult<DeprecateDomainOutput> {
        Err(OperationError::not_implemented("DeprecateDomain"))
    }

    /// <p>Returns information about the specified domain, including description and
    /// status.</p>
    fn describe_domain(
        &self,
        _input: DescribeDomainInput,
    ) -> OperationResult<DescribeDomainOutput> {
        Err(OperationError::not_implemented("DescribeDomain"))
    }

    /// <p>Returns the list of domains registered in the account.</p>
    fn list_domains(&self, _input: ListDomainsInput) -> OperationResult<ListDomainsOutput> {
        Err(OperationError::not_implemented("ListDomains"))
    }

    /// <p>Registers a new domain.</p>
    fn register_domain(
        &self,
        _input: RegisterDomainInput,
    ) -> OperationResult<RegisterDomainOutput> {
        Err(OperationError::not_implemented("RegisterDomain"))
    }

    /// <p>Undeprecates a previously deprecated domain.</p>
    fn undeprecate_domain(
        &self,
        _input: UndeprecateDomainInput,
    ) -> OperationResult<UndeprecateDomainOutput> {
        Err(OperationError::not_implemented("UndeprecateDomain"))
    }
}

/// A [`SimpleWorkflow`] that implements no operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedSimpleWorkflow;

impl SimpleWorkflow for UnimplementedSimpleWorkflow {}
