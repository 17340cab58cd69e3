/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shape tables of the service, its operations and its structures.

use http::Method;
use wire_http::shape::{
    Kind, Location, Member, OperationShape, OutputMember, Protocol, ServiceShape, StructureShape,
};
use wire_types::instant::Format;

/// AWS Certificate Manager
pub static SERVICE: ServiceShape =
    ServiceShape::new("CertificateManager", Protocol::AwsJson1_1, "2015-12-08")
        .target_prefix("CertificateManager");

static STRING: Kind = Kind::String;

/// `Tag`
pub static TAG: StructureShape = StructureShape::new(
    "Tag",
    &[
        OutputMember::body("Key", Kind::String),
        OutputMember::body("Value", Kind::String),
    ],
);

/// `CertificateSummary`
pub static CERTIFICATE_SUMMARY: StructureShape = StructureShape::new(
    "CertificateSummary",
    &[
        OutputMember::body("CertificateArn", Kind::String),
        OutputMember::body("DomainName", Kind::String),
    ],
);

static CERTIFICATE_SUMMARY_ITEM: Kind = Kind::Structure(&CERTIFICATE_SUMMARY);

/// `CertificateDetail`
pub static CERTIFICATE_DETAIL: StructureShape = StructureShape::new(
    "CertificateDetail",
    &[
        OutputMember::body("CertificateArn", Kind::String),
        OutputMember::body("DomainName", Kind::String),
        OutputMember::body("SubjectAlternativeNames", Kind::list(&STRING)),
        OutputMember::body("Serial", Kind::String),
        OutputMember::body("Status", Kind::String),
        OutputMember::body("KeyAlgorithm", Kind::String),
        OutputMember::body("CreatedAt", Kind::Timestamp(Format::EpochSeconds)),
        OutputMember::body("InUseBy", Kind::list(&STRING)),
    ],
);

/// `DeleteCertificate`
pub static DELETE_CERTIFICATE: OperationShape = OperationShape::new(
    &SERVICE,
    "DeleteCertificate",
    Method::POST,
    "/",
    &[Member::new("CertificateArn", Location::Body)],
);

/// Output of `DeleteCertificate`
pub static DELETE_CERTIFICATE_OUTPUT: StructureShape =
    StructureShape::new("DeleteCertificateOutput", &[]);

/// `DescribeCertificate`
pub static DESCRIBE_CERTIFICATE: OperationShape = OperationShape::new(
    &SERVICE,
    "DescribeCertificate",
    Method::POST,
    "/",
    &[Member::new("CertificateArn", Location::Body)],
);

/// Output of `DescribeCertificate`
pub static DESCRIBE_CERTIFICATE_OUTPUT: StructureShape = StructureShape::new(
    "DescribeCertificateOutput",
    &[OutputMember::body(
        "Certificate",
        Kind::Structure(&CERTIFICATE_DETAIL),
    )],
);

/// `ImportCertificate`
pub static IMPORT_CERTIFICATE: OperationShape = OperationShape::new(
    &SERVICE,
    "ImportCertificate",
    Method::POST,
    "/",
    &[
        Member::new("CertificateArn", Location::Body),
        Member::new("Certificate", Location::Body),
        Member::new("PrivateKey", Location::Body),
        Member::new("CertificateChain", Location::Body),
        Member::new("Tags", Location::Body),
    ],
);

/// Output of `ImportCertificate`
pub static IMPORT_CERTIFICATE_OUTPUT: StructureShape = StructureShape::new(
    "ImportCertificateOutput",
    &[OutputMember::body("CertificateArn", Kind::String)],
);

/// `ListCertificates`
pub static LIST_CERTIFICATES: OperationShape = OperationShape::new(
    &SERVICE,
    "ListCertificates",
    Method::POST,
    "/",
    &[
        Member::new("CertificateStatuses", Location::Body),
        Member::new("NextToken", Location::Body),
        Member::new("MaxItems", Location::Body),
    ],
);

/// Output of `ListCertificates`
pub static LIST_CERTIFICATES_OUTPUT: StructureShape = StructureShape::new(
    "ListCertificatesOutput",
    &[
        OutputMember::body("NextToken", Kind::String),
        OutputMember::body(
            "CertificateSummaryList",
            Kind::list(&CERTIFICATE_SUMMARY_ITEM),
        ),
    ],
);
