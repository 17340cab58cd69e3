/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shape tables of the service, its operations and its structures.

use http::Method;
use wire_http::shape::{
    Kind, Location, Member, OperationShape, OutputMember, Protocol, ResponseLocation,
    ServiceShape, StructureShape,
};
use wire_types::instant::Format;

/// Amazon Route 53
pub static SERVICE: ServiceShape =
    ServiceShape::new("AWSDnsV20130401", Protocol::RestXml, "2013-04-01")
        .xml_namespace("https://route53.amazonaws.com/doc/2013-04-01/");

static STRING: Kind = Kind::String;

/// `HostedZoneConfig`
pub static HOSTED_ZONE_CONFIG: StructureShape = StructureShape::new(
    "HostedZoneConfig",
    &[
        OutputMember::body("Comment", Kind::String),
        OutputMember::body("PrivateZone", Kind::Boolean),
    ],
);

/// `HostedZone`
pub static HOSTED_ZONE: StructureShape = StructureShape::new(
    "HostedZone",
    &[
        OutputMember::body("Id", Kind::String),
        OutputMember::body("Name", Kind::String),
        OutputMember::body("CallerReference", Kind::String),
        OutputMember::body("Config", Kind::Structure(&HOSTED_ZONE_CONFIG)),
        OutputMember::body("ResourceRecordSetCount", Kind::Long),
    ],
);

static HOSTED_ZONE_ITEM: Kind = Kind::Structure(&HOSTED_ZONE);

/// `ChangeInfo`
pub static CHANGE_INFO: StructureShape = StructureShape::new(
    "ChangeInfo",
    &[
        OutputMember::body("Id", Kind::String),
        OutputMember::body("Status", Kind::String),
        OutputMember::body("SubmittedAt", Kind::Timestamp(Format::DateTime)),
        OutputMember::body("Comment", Kind::String),
    ],
);

/// `DelegationSet`
pub static DELEGATION_SET: StructureShape = StructureShape::new(
    "DelegationSet",
    &[
        OutputMember::body("Id", Kind::String),
        OutputMember::body("CallerReference", Kind::String),
        OutputMember::body(
            "NameServers",
            Kind::List {
                member: "NameServer",
                item: &STRING,
                flattened: false,
            },
        ),
    ],
);

/// `CreateHostedZone`
pub static CREATE_HOSTED_ZONE: OperationShape = OperationShape::new(
    &SERVICE,
    "CreateHostedZone",
    Method::POST,
    "/2013-04-01/hostedzone",
    &[
        Member::new("Name", Location::Body),
        Member::new("CallerReference", Location::Body),
        Member::new("HostedZoneConfig", Location::Body),
        Member::new("DelegationSetId", Location::Body),
    ],
)
.payload_root("CreateHostedZoneRequest");

/// Output of `CreateHostedZone`
pub static CREATE_HOSTED_ZONE_OUTPUT: StructureShape = StructureShape::new(
    "CreateHostedZoneResponse",
    &[
        OutputMember::body("HostedZone", Kind::Structure(&HOSTED_ZONE)),
        OutputMember::body("ChangeInfo", Kind::Structure(&CHANGE_INFO)),
        OutputMember::body("DelegationSet", Kind::Structure(&DELEGATION_SET)),
        OutputMember::new("Location", ResponseLocation::Header("Location"), Kind::String),
    ],
);

/// `DeleteHostedZone`
pub static DELETE_HOSTED_ZONE: OperationShape = OperationShape::new(
    &SERVICE,
    "DeleteHostedZone",
    Method::DELETE,
    "/2013-04-01/hostedzone/{Id}",
    &[Member::new("Id", Location::Label("Id"))],
);

/// Output of `DeleteHostedZone`
pub static DELETE_HOSTED_ZONE_OUTPUT: StructureShape = StructureShape::new(
    "DeleteHostedZoneResponse",
    &[OutputMember::body("ChangeInfo", Kind::Structure(&CHANGE_INFO))],
);

/// `GetChange`
pub static GET_CHANGE: OperationShape = OperationShape::new(
    &SERVICE,
    "GetChange",
    Method::GET,
    "/2013-04-01/change/{Id}",
    &[Member::new("Id", Location::Label("Id"))],
);

/// Output of `GetChange`
pub static GET_CHANGE_OUTPUT: StructureShape = StructureShape::new(
    "GetChangeResponse",
    &[OutputMember::body("ChangeInfo", Kind::Structure(&CHANGE_INFO))],
);

/// `GetHostedZone`
pub static GET_HOSTED_ZONE: OperationShape = OperationShape::new(
    &SERVICE,
    "GetHostedZone",
    Method::GET,
    "/2013-04-01/hostedzone/{Id}",
    &[Member::new("Id", Location::Label("Id"))],
);

/// Output of `GetHostedZone`
pub static GET_HOSTED_ZONE_OUTPUT: StructureShape = StructureShape::new(
    "GetHostedZoneResponse",
    &[
        OutputMember::body("HostedZone", Kind::Structure(&HOSTED_ZONE)),
        OutputMember::body("DelegationSet", Kind::Structure(&DELEGATION_SET)),
    ],
);

/// `ListHostedZones`
pub static LIST_HOSTED_ZONES: OperationShape = OperationShape::new(
    &SERVICE,
    "ListHostedZones",
    Method::GET,
    "/2013-04-01/hostedzone",
    &[
        Member::new("Marker", Location::Query("marker")),
        Member::new("MaxItems", Location::Query("maxitems")),
        Member::new("DelegationSetId", Location::Query("delegationsetid")),
    ],
);

/// Output of `ListHostedZones`
pub static LIST_HOSTED_ZONES_OUTPUT: StructureShape = StructureShape::new(
    "ListHostedZonesResponse",
    &[
        OutputMember::body(
            "HostedZones",
            Kind::List {
                member: "HostedZone",
                item: &HOSTED_ZONE_ITEM,
                flattened: false,
            },
        ),
        OutputMember::body("Marker", Kind::String),
        OutputMember::body("IsTruncated", Kind::Boolean),
        OutputMember::body("NextMarker", Kind::String),
        OutputMember::body("MaxItems", Kind::Integer),
    ],
);
