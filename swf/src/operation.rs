/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shape tables of the service, its operations and its structures.

use http::Method;
use wire_http::shape::{
    Kind, Location, Member, OperationShape, OutputMember, Protocol, ServiceShape, StructureShape,
};

/// Amazon Simple Workflow Service
pub static SERVICE: ServiceShape =
    ServiceShape::new("SimpleWorkflowService", Protocol::AwsJson1_0, "2012-01-25")
        .target_prefix("SimpleWorkflowService");

/// `DomainInfo`
pub static DOMAIN_INFO: StructureShape = StructureShape::new(
    "DomainInfo",
    &[
        OutputMember::body("name", Kind::String),
        OutputMember::body("status", Kind::String),
        OutputMember::body("description", Kind::String),
        OutputMember::body("arn", Kind::String),
    ],
);

static DOMAIN_INFO_ITEM: Kind = Kind::Structure(&DOMAIN_INFO);

/// `DomainConfiguration`
pub static DOMAIN_CONFIGURATION: StructureShape = StructureShape::new(
    "DomainConfiguration",
    &[OutputMember::body(
        "workflowExecutionRetentionPeriodInDays",
        Kind::String,
    )],
);

static EMPTY_OUTPUT: StructureShape = StructureShape::new("Unit", &[]);

/// `DeprecateDomain`
pub static DEPRECATE_DOMAIN: OperationShape = OperationShape::new(
    &SERVICE,
    "DeprecateDomain",
    Method::POST,
    "/",
    &[Member::new("name", Location::Body)],
);

/// Output of `DeprecateDomain`
pub static DEPRECATE_DOMAIN_OUTPUT: &StructureShape = &EMPTY_OUTPUT;

/// `DescribeDomain`
pub static DESCRIBE_DOMAIN: OperationShape = OperationShape::new(
    &SERVICE,
    "DescribeDomain",
    Method::POST,
    "/",
    &[Member::new("name", Location::Body)],
);

/// Output of `DescribeDomain`
pub static DESCRIBE_DOMAIN_OUTPUT: StructureShape = StructureShape::new(
    "DomainDetail",
    &[
        OutputMember::body("domainInfo", Kind::Structure(&DOMAIN_INFO)),
        OutputMember::body("configuration", Kind::Structure(&DOMAIN_CONFIGURATION)),
    ],
);

/// `ListDomains`
pub static LIST_DOMAINS: OperationShape = OperationShape::new(
    &SERVICE,
    "ListDomains",
    Method::POST,
    "/",
    &[
        Member::new("nextPageToken", Location::Body),
        Member::new("registrationStatus", Location::Body),
        Member::new("maximumPageSize", Location::Body),
        Member::new("reverseOrder", Location::Body),
    ],
);

/// Output of `ListDomains`
pub static LIST_DOMAINS_OUTPUT: StructureShape = StructureShape::new(
    "DomainInfos",
    &[
        OutputMember::body("domainInfos", Kind::list(&DOMAIN_INFO_ITEM)),
        OutputMember::body("nextPageToken", Kind::String),
    ],
);

/// `RegisterDomain`
pub static REGISTER_DOMAIN: OperationShape = OperationShape::new(
    &SERVICE,
    "RegisterDomain",
    Method::POST,
    "/",
    &[
        Member::new("name", Location::Body),
        Member::new("description", Location::Body),
        Member::new("workflowExecutionRetentionPeriodInDays", Location::Body),
        Member::new("tags", Location::Body),
    ],
);

/// Output of `RegisterDomain`
pub static REGISTER_DOMAIN_OUTPUT: &StructureShape = &EMPTY_OUTPUT;

/// `UndeprecateDomain`
pub static UNDEPRECATE_DOMAIN: OperationShape = OperationShape::new(
    &SERVICE,
    "UndeprecateDomain",
    Method::POST,
    "/",
    &[Member::new("name", Location::Body)],
);

/// Output of `UndeprecateDomain`
pub static UNDEPRECATE_DOMAIN_OUTPUT: &StructureShape = &EMPTY_OUTPUT;
