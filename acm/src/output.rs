/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation outputs.

use crate::model::{CertificateDetail, CertificateSummary};
use crate::operation;
use wire_http::error::FieldError;
use wire_http::shape::StructureShape;
use wire_http::unmarshall::Unmarshall;
use wire_http::value::WireValue;

/// Output of `DeleteCertificate`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteCertificateOutput {}

impl Unmarshall for DeleteCertificateOutput {
    fn shape() -> &'static StructureShape {
        &operation::DELETE_CERTIFICATE_OUTPUT
    }

    fn assign(&mut self, _member: &str, _value: WireValue) -> Result<(), FieldError> {
        Ok(())
    }
}

/// Output of `DescribeCertificate`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeCertificateOutput {
    /// <p>Metadata about an ACM certificate.</p>
    pub certificate: Option<CertificateDetail>,
}

impl Unmarshall for DescribeCertificateOutput {
    fn shape() -> &'static StructureShape {
        &operation::DESCRIBE_CERTIFICATE_OUTPUT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        if member == "Certificate" {
            self.certificate = Some(value.into_structure()?);
        }
        Ok(())
    }
}

/// Output of `ImportCertificate`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportCertificateOutput {
    /// <p>The Amazon Resource Name (ARN) of the imported certificate.</p>
    pub certificate_arn: Option<String>,
}

impl Unmarshall for ImportCertificateOutput {
    fn shape() -> &'static StructureShape {
        &operation::IMPORT_CERTIFICATE_OUTPUT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        if member == "CertificateArn" {
            self.certificate_arn = Some(value.into_string()?);
        }
        Ok(())
    }
}

/// Output of `ListCertificates`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListCertificatesOutput {
    /// <p>When the list is truncated, this value is present and contains the value to use for
    /// the <code>NextToken</code> parameter in a subsequent pagination request.</p>
    pub next_token: Option<String>,
    /// <p>A list of ACM certificates.</p>
    pub certificate_summary_list: Vec<CertificateSummary>,
}

impl Unmarshall for ListCertificatesOutput {
    fn shape() -> &'static StructureShape {
        &operation::LIST_CERTIFICATES_OUTPUT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "NextToken" => self.next_token = Some(value.into_string()?),
            "CertificateSummaryList" => self.certificate_summary_list = value.into_list()?,
            _ => {}
        }
        Ok(())
    }
}
