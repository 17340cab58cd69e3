/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation inputs.

use crate::model::{CertificateStatus, Tag};
use crate::operation;
use wire_http::marshall::Marshall;
use wire_http::shape::OperationShape;
use wire_http::value::{FieldValue, ToFieldValue};
use wire_types::Blob;

/// Input of `DeleteCertificate`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteCertificateInput {
    /// <p>String that contains the ARN of the ACM certificate to be deleted.</p>
    pub certificate_arn: Option<String>,
}

impl Marshall for DeleteCertificateInput {
    fn shape() -> &'static OperationShape {
        &operation::DELETE_CERTIFICATE
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "CertificateArn" => self.certificate_arn.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `DescribeCertificate`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeCertificateInput {
    /// <p>The Amazon Resource Name (ARN) of the ACM certificate.</p>
    pub certificate_arn: Option<String>,
}

impl Marshall for DescribeCertificateInput {
    fn shape() -> &'static OperationShape {
        &operation::DESCRIBE_CERTIFICATE
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "CertificateArn" => self.certificate_arn.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `ImportCertificate`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportCertificateInput {
    /// <p>The ARN of an imported certificate to replace.</p>
    pub certificate_arn: Option<String>,
    /// <p>The certificate to import.</p>
    pub certificate: Option<Blob>,
    /// <p>The private key that matches the public key in the certificate.</p>
    pub private_key: Option<Blob>,
    /// <p>The PEM encoded certificate chain.</p>
    pub certificate_chain: Option<Blob>,
    /// <p>One or more resource tags to associate with the imported certificate.</p>
    pub tags: Option<Vec<Tag>>,
}

impl Marshall for ImportCertificateInput {
    fn shape() -> &'static OperationShape {
        &operation::IMPORT_CERTIFICATE
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "CertificateArn" => self.certificate_arn.as_ref().map(ToFieldValue::to_field_value),
            "Certificate" => self.certificate.as_ref().map(ToFieldValue::to_field_value),
            "PrivateKey" => self.private_key.as_ref().map(ToFieldValue::to_field_value),
            "CertificateChain" => self
                .certificate_chain
                .as_ref()
                .map(ToFieldValue::to_field_value),
            "Tags" => self.tags.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}

/// Input of `ListCertificates`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListCertificatesInput {
    /// <p>Filter the certificate list by status value.</p>
    pub certificate_statuses: Option<Vec<CertificateStatus>>,
    /// <p>Use this parameter only when paginating results and only in a subsequent request
    /// after you receive a response with truncated results.</p>
    pub next_token: Option<String>,
    /// <p>Use this parameter when paginating results to specify the maximum number of items to
    /// return in the response.</p>
    pub max_items: Option<i32>,
}

impl Marshall for ListCertificatesInput {
    fn shape() -> &'static OperationShape {
        &operation::LIST_CERTIFICATES
    }

    fn member(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "CertificateStatuses" => self
                .certificate_statuses
                .as_ref()
                .map(ToFieldValue::to_field_value),
            "NextToken" => self.next_token.as_ref().map(ToFieldValue::to_field_value),
            "MaxItems" => self.max_items.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }
}
