/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shape tables of the service, its operations and its structures.

use http::Method;
use wire_http::shape::{
    Envelope, Kind, Location, Member, OperationShape, OutputMember, Protocol, ServiceShape,
    StructureShape,
};
use wire_types::instant::Format;

/// Amazon Relational Database Service
pub static SERVICE: ServiceShape =
    ServiceShape::new("AmazonRDSv19", Protocol::AwsQuery, "2014-10-31")
        .xml_namespace("http://rds.amazonaws.com/doc/2014-10-31/");

/// `Tag`
pub static TAG: StructureShape = StructureShape::new(
    "Tag",
    &[
        OutputMember::body("Key", Kind::String),
        OutputMember::body("Value", Kind::String),
    ],
);

static TAG_ITEM: Kind = Kind::Structure(&TAG);

/// `Endpoint`
pub static ENDPOINT: StructureShape = StructureShape::new(
    "Endpoint",
    &[
        OutputMember::body("Address", Kind::String),
        OutputMember::body("Port", Kind::Integer),
        OutputMember::body("HostedZoneId", Kind::String),
    ],
);

/// `DBInstance`
pub static DB_INSTANCE: StructureShape = StructureShape::new(
    "DBInstance",
    &[
        OutputMember::body("DBInstanceIdentifier", Kind::String),
        OutputMember::body("DBInstanceClass", Kind::String),
        OutputMember::body("Engine", Kind::String),
        OutputMember::body("DBInstanceStatus", Kind::String),
        OutputMember::body("MasterUsername", Kind::String),
        OutputMember::body("Endpoint", Kind::Structure(&ENDPOINT)),
        OutputMember::body("AllocatedStorage", Kind::Integer),
        OutputMember::body("InstanceCreateTime", Kind::Timestamp(Format::DateTime)),
        OutputMember::body("MultiAZ", Kind::Boolean),
    ],
);

static DB_INSTANCE_ITEM: Kind = Kind::Structure(&DB_INSTANCE);

/// `AddTagsToResource`
pub static ADD_TAGS_TO_RESOURCE: OperationShape = OperationShape::new(
    &SERVICE,
    "AddTagsToResource",
    Method::POST,
    "/",
    &[
        Member::new("ResourceName", Location::Body),
        Member::new("Tags", Location::Body).list_member("Tag"),
    ],
);

/// Output of `AddTagsToResource`
pub static ADD_TAGS_TO_RESOURCE_OUTPUT: StructureShape =
    StructureShape::new("AddTagsToResourceResult", &[]).envelope(Envelope::QUERY_RESULT);

/// `DeleteDBInstance`
pub static DELETE_DB_INSTANCE: OperationShape = OperationShape::new(
    &SERVICE,
    "DeleteDBInstance",
    Method::POST,
    "/",
    &[
        Member::new("DBInstanceIdentifier", Location::Body),
        Member::new("SkipFinalSnapshot", Location::Body),
        Member::new("FinalDBSnapshotIdentifier", Location::Body),
    ],
);

/// Output of `DeleteDBInstance`
pub static DELETE_DB_INSTANCE_OUTPUT: StructureShape = StructureShape::new(
    "DeleteDBInstanceResult",
    &[OutputMember::body("DBInstance", Kind::Structure(&DB_INSTANCE))],
)
.envelope(Envelope::QUERY_RESULT);

/// `DescribeDBInstances`
pub static DESCRIBE_DB_INSTANCES: OperationShape = OperationShape::new(
    &SERVICE,
    "DescribeDBInstances",
    Method::POST,
    "/",
    &[
        Member::new("DBInstanceIdentifier", Location::Body),
        Member::new("MaxRecords", Location::Body),
        Member::new("Marker", Location::Body),
    ],
);

/// Output of `DescribeDBInstances`
pub static DESCRIBE_DB_INSTANCES_OUTPUT: StructureShape = StructureShape::new(
    "DescribeDBInstancesResult",
    &[
        OutputMember::body("Marker", Kind::String),
        OutputMember::body(
            "DBInstances",
            Kind::List {
                member: "DBInstance",
                item: &DB_INSTANCE_ITEM,
                flattened: false,
            },
        ),
    ],
)
.envelope(Envelope::QUERY_RESULT);

/// `ListTagsForResource`
pub static LIST_TAGS_FOR_RESOURCE: OperationShape = OperationShape::new(
    &SERVICE,
    "ListTagsForResource",
    Method::POST,
    "/",
    &[Member::new("ResourceName", Location::Body)],
);

/// Output of `ListTagsForResource`
pub static LIST_TAGS_FOR_RESOURCE_OUTPUT: StructureShape = StructureShape::new(
    "ListTagsForResourceResult",
    &[OutputMember::body(
        "TagList",
        Kind::List {
            member: "Tag",
            item: &TAG_ITEM,
            flattened: false,
        },
    )],
)
.envelope(Envelope::QUERY_RESULT);

/// `RemoveTagsFromResource`
pub static REMOVE_TAGS_FROM_RESOURCE: OperationShape = OperationShape::new(
    &SERVICE,
    "RemoveTagsFromResource",
    Method::POST,
    "/",
    &[
        Member::new("ResourceName", Location::Body),
        Member::new("TagKeys", Location::Body),
    ],
);

/// Output of `RemoveTagsFromResource`
pub static REMOVE_TAGS_FROM_RESOURCE_OUTPUT: StructureShape =
    StructureShape::new("RemoveTagsFromResourceResult", &[]).envelope(Envelope::QUERY_RESULT);
