/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation inputs.

use crate::model::{RegistrationStatus, ResourceTag};
use crate::operation;
use wire_http::marshall::Marshall;
use wire_http::shape::OperationShape;
use wire_http::value::{FieldValue, ToFieldValue};

/// Inputs naming a single domain.
macro_rules! domain_name_input {
    ($($(#[$meta:meta])* $name:ident => $shape:path;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $name {
                /// <p>The name of the domain.</p>
                pub name: Option<String>,
            }

            impl Marshall for $name {
                fn shape() -> &'static OperationShape {
                    &$shape
                }

                fn member(&self, name: &str) -> Option<FieldValue<'_>> {
                    match name {
                        "name" => self.name.as_ref().map(ToFieldValue::to_field_value),
                        _ => None,
                    }
                }
            }
        )+
    };
}

domain_name_input! {
    /// Input of `DeprecateDomain`
    DeprecateDomainInput => operation::DEPRECATE_DOMAIN;
    /// Input of `DescribeDomain`
    DescribeDomainInput => operation::DESCRIBE_DOMAIN;
    /// Input of `UndeprecateDomain`
    UndeprecateDomainInput => operation::UNDEPRECATE_DOMAIN;
}

/// Input of `ListDomains`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDomainsInput {
    /// <p>If <code>NextPageToken</code> is returned there are more results available.</p>
    pub next_page_token: Option<String>,
    /// <p>Specifies the registration status of the domains to list.</p>
    pub registration_status: Option<RegistrationStatus>,
    /// <p>The maximum number of results that are returned per call.</p>
    pub maximum_page_size: Option<i32>,
    /// <p>When set to <code>true</code>, returns the results in reverse order.</p>
    pub reverse_order: Option<bool>,
}

impl Marshall for ListDomainsInput {
    fn shape() -> &'static OperationShape {
        &operation::LIST_DOMAINS
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "nextPageToken" => self.next_page_token.as_ref().map(ToFieldValue::to_field_value),
            "registrationStatus" => self
                .registration_status
                .as_ref()
                .map(ToFieldValue::to_field_value),
            "maximumPageSize" => self.maximum_page_size.as_ref().map(ToFieldValue::to_field_value),
            "reverseOrder" => self.reverse_order.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `RegisterDomain`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterDomainInput {
    /// <p>Name of the domain to register. The name must be unique in the region that the domain
    /// is registered in.</p>
    pub name: Option<String>,
    /// <p>A text description of the domain.</p>
    pub description: Option<String>,
    /// <p>The duration (in days) that records and histories of workflow executions on the
    /// domain should be kept by the service.</p>
    pub workflow_execution_retention_period_in_days: Option<String>,
    /// <p>Tags to be added when registering a domain.</p>
    pub tags: Option<Vec<ResourceTag>>,
}

impl Marshall for RegisterDomainInput {
    fn shape() -> &'static OperationShape {
        &operation::REGISTER_DOMAIN
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => self.name.as_ref().map(ToFieldValue::to_field_value),
            "description" => self.description.as_ref().map(ToFieldValue::to_field_value),
            "workflowExecutionRetentionPeriodInDays" => self
                .workflow_execution_retention_period_in_days
                .as_ref()
                .map(ToFieldValue::to_field_value),
            "tags" => self.tags.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}
