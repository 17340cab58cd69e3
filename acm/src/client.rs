/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! The capability set of the service.

use crate::input::{
    DeleteCertificateInput, DescribeCertificateInput, ImportCertificateInput,
    ListCertificatesInput,
};
use crate::operation;
use crate::output::{
    DeleteCertificateOutput, DescribeCertificateOutput, ImportCertificateOutput,
    ListCertificatesOutput,
};
use wire_http::service::{OperationError, OperationResult};
use wire_http::shape::OperationShape;

/// Every operation of AWS Certificate Manager.
pub static OPERATIONS: &[&OperationShape] = &[
    &operation::DELETE_CERTIFICATE,
    &operation::DESCRIBE_CERTIFICATE,
    &operation::IMPORT_CERTIFICATE,
    &operation::LIST_CERTIFICATES,
];

/// <fullname>AWS Certificate Manager</fullname>
///
/// Every operation fails with [`OperationError::NotImplemented`] until it is overridden.
pub trait CertificateManager {
    /// <p>Deletes a certificate and its associated private key.</p>
    fn delete_certificate(
        &self,
        _input: DeleteCertificateInput,
    ) -> OperationResult<DeleteCertificateOutput> {
        Err(OperationError::not_implemented("DeleteCertificate"))
    }

    /// <p>Returns detailed metadata about the specified ACM certificate.</p>
    fn describe_certificate(
        &self,
        _input: DescribeCertificateInput,
    ) -> OperationResult<DescribeCertificateOutput> {
        Err(OperationError::not_implemented("DescribeCertificate"))
    }

    /// <p>Imports a certificate into Certificate Manager (ACM) to use with services that are
    /// integrated with ACM.</p>
    fn import_certificate(
        &self,
        _input: ImportCertificateInput,
    ) -> OperationResult<ImportCertificateOutput> {
        Err(OperationError::not_implemented("ImportCertificate"))
    }

    /// <p>Retrieves a list of certificate ARNs and domain names.</p>
    fn list_certificates(
        &self,
        _input: ListCertificatesInput,
    ) -> OperationResult<ListCertificatesOutput> {
        Err(OperationError::not_implemented("ListCertificates"))
    }
}

/// A [`CertificateManager`] that implements no operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedCertificateManager;

impl CertificateManager for UnimplementedCertificateManager {}
