/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shape tables of the service, its operations and its structures.

use http::Method;
use wire_http::shape::{
    Kind, Location, Member, OperationShape, OutputMember, Protocol, ServiceShape, StructureShape,
};

/// AWS IoT
pub static SERVICE: ServiceShape = ServiceShape::new("Iot", Protocol::RestJson1, "2015-05-28");

static STRING: Kind = Kind::String;

/// `ThingAttribute`
pub static THING_ATTRIBUTE: StructureShape = StructureShape::new(
    "ThingAttribute",
    &[
        OutputMember::body("thingName", Kind::String),
        OutputMember::body("thingTypeName", Kind::String),
        OutputMember::body("thingArn", Kind::String),
        OutputMember::body("attributes", Kind::Map { value: &STRING }),
        OutputMember::body("version", Kind::Long),
    ],
);

static THING_ATTRIBUTE_ITEM: Kind = Kind::Structure(&THING_ATTRIBUTE);

/// `AttachThingPrincipal`
pub static ATTACH_THING_PRINCIPAL: OperationShape = OperationShape::new(
    &SERVICE,
    "AttachThingPrincipal",
    Method::PUT,
    "/things/{thingName}/principals",
    &[
        Member::new("thingName", Location::Label("thingName")),
        Member::new("principal", Location::Header("x-amzn-principal")),
    ],
);

/// Output of `AttachThingPrincipal`
pub static ATTACH_THING_PRINCIPAL_OUTPUT: StructureShape =
    StructureShape::new("AttachThingPrincipalOutput", &[]);

/// `CreateThing`
pub static CREATE_THING: OperationShape = OperationShape::new(
    &SERVICE,
    "CreateThing",
    Method::POST,
    "/things/{thingName}",
    &[
        Member::new("thingName", Location::Label("thingName")),
        Member::new("thingTypeName", Location::Body),
        Member::new("attributePayload", Location::Body),
        Member::new("billingGroupName", Location::Body),
    ],
);

/// Output of `CreateThing`
pub static CREATE_THING_OUTPUT: StructureShape = StructureShape::new(
    "CreateThingOutput",
    &[
        OutputMember::body("thingName", Kind::String),
        OutputMember::body("thingArn", Kind::String),
        OutputMember::body("thingId", Kind::String),
    ],
);

/// `DeleteThing`
pub static DELETE_THING: OperationShape = OperationShape::new(
    &SERVICE,
    "DeleteThing",
    Method::DELETE,
    "/things/{thingName}",
    &[
        Member::new("thingName", Location::Label("thingName")),
        Member::new("expectedVersion", Location::Query("expectedVersion")),
    ],
);

/// Output of `DeleteThing`
pub static DELETE_THING_OUTPUT: StructureShape = StructureShape::new("DeleteThingOutput", &[]);

/// `DescribeThing`
pub static DESCRIBE_THING: OperationShape = OperationShape::new(
    &SERVICE,
    "DescribeThing",
    Method::GET,
    "/things/{thingName}",
    &[Member::new("thingName", Location::Label("thingName"))],
);

/// Output of `DescribeThing`
pub static DESCRIBE_THING_OUTPUT: StructureShape = StructureShape::new(
    "DescribeThingOutput",
    &[
        OutputMember::body("defaultClientId", Kind::String),
        OutputMember::body("thingName", Kind::String),
        OutputMember::body("thingId", Kind::String),
        OutputMember::body("thingArn", Kind::String),
        OutputMember::body("thingTypeName", Kind::String),
        OutputMember::body("attributes", Kind::Map { value: &STRING }),
        OutputMember::body("version", Kind::Long),
        OutputMember::body("billingGroupName", Kind::String),
    ],
);

/// `ListThings`
pub static LIST_THINGS: OperationShape = OperationShape::new(
    &SERVICE,
    "ListThings",
    Method::GET,
    "/things",
    &[
        Member::new("nextToken", Location::Query("nextToken")),
        Member::new("maxResults", Location::Query("maxResults")),
        Member::new("attributeName", Location::Query("attributeName")),
        Member::new("attributeValue", Location::Query("attributeValue")),
        Member::new("thingTypeName", Location::Query("thingTypeName")),
    ],
);

/// Output of `ListThings`
pub static LIST_THINGS_OUTPUT: StructureShape = StructureShape::new(
    "ListThingsOutput",
    &[
        OutputMember::body("things", Kind::list(&THING_ATTRIBUTE_ITEM)),
        OutputMember::body("nextToken", Kind::String),
    ],
);

/// `UpdateThing`
pub static UPDATE_THING: OperationShape = OperationShape::new(
    &SERVICE,
    "UpdateThing",
    Method::PATCH,
    "/things/{thingName}",
    &[
        Member::new("thingName", Location::Label("thingName")),
        Member::new("thingTypeName", Location::Body),
        Member::new("attributePayload", Location::Body),
        Member::new("expectedVersion", Location::Body),
        Member::new("removeThingType", Location::Body),
    ],
);

/// Output of `UpdateThing`
pub static UPDATE_THING_OUTPUT: StructureShape = StructureShape::new("UpdateThingOutput", &[]);
