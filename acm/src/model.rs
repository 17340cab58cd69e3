/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Data types used by more than one operation.

use crate::operation;
use wire_http::error::FieldError;
use wire_http::shape::StructureShape;
use wire_http::unmarshall::Unmarshall;
use wire_http::value::{FieldValue, FromWireValue, ToFieldValue, WireValue};
use wire_http::wire_enum;
use wire_types::Instant;

wire_enum! {
    /// Lifecycle state of a certificate.
    pub enum CertificateStatus {
        #[allow(missing_docs)] // documentation missing in model
        PendingValidation => "PENDING_VALIDATION",
        #[allow(missing_docs)] // documentation missing in model
        Issued => "ISSUED",
        #[allow(missing_docs)] // documentation missing in model
        Inactive => "INACTIVE",
        #[allow(missing_docs)] // documentation missing in model
        Expired => "EXPIRED",
        #[allow(missing_docs)] // documentation missing in model
        ValidationTimedOut => "VALIDATION_TIMED_OUT",
        #[allow(missing_docs)] // documentation missing in model
        Revoked => "REVOKED",
        #[allow(missing_docs)] // documentation missing in model
        Failed => "FAILED",
    }
}

/// <p>A key-value pair that identifies or specifies metadata about an ACM resource.</p>
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    /// <p>The key of the tag.</p>
    pub key: Option<String>,
    /// <p>The value of the tag.</p>
    pub value: Option<String>,
}

impl Tag {
    /// Creates a tag from its key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

impl ToFieldValue for Tag {
    fn to_field_value(&self) -> FieldValue<'_> {
        let mut members = Vec::new();
        if let Some(key) = &self.key {
            members.push(("Key", key.to_field_value()));
        }
        if let Some(value) = &self.value {
            members.push(("Value", value.to_field_value()));
        }
        FieldValue::Struct(members)
    }
}

impl Unmarshall for Tag {
    fn shape() -> &'static StructureShape {
        &operation::TAG
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "Key" => self.key = Some(value.into_string()?),
            "Value" => self.value = Some(value.into_string()?),
            _ => {}
        }
        Ok(())
    }
}

impl FromWireValue for Tag {
    fn from_wire_value(value: WireValue) -> Result<Self, FieldError> {
        value.into_structure()
    }
}

/// <p>This structure is returned in the response object of <code>ListCertificates</code>
/// action.</p>
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificateSummary {
    /// <p>Amazon Resource Name (ARN) of the certificate.</p>
    pub certificate_arn: Option<String>,
    /// <p>Fully qualified domain name (FQDN), such as www.example.com or example.com, for the
    /// certificate.</p>
    pub domain_name: Option<String>,
}

impl Unmarshall for CertificateSummary {
    fn shape() -> &'static StructureShape {
        &operation::CERTIFICATE_SUMMARY
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "CertificateArn" => self.certificate_arn = Some(value.into_string()?),
            "DomainName" => self.domain_name = Some(value.into_string()?),
            _ => {}
        }
        Ok(())
    }
}

impl FromWireValue for CertificateSummary {
    fn from_wire_value(value: WireValue) -> Result<Self, FieldError> {
        value.into_structure()
    }
}

/// <p>Contains metadata about an ACM certificate.</p>
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificateDetail {
    /// <p>The Amazon Resource Name (ARN) of the certificate.</p>
    pub certificate_arn: Option<String>,
    /// <p>The fully qualified domain name for the certificate.</p>
    pub domain_name: Option<String>,
    /// <p>One or more domain names (subject alternative names) included in the certificate.</p>
    pub subject_alternative_names: Vec<String>,
    /// <p>The serial number of the certificate.</p>
    pub serial: Option<String>,
    /// <p>The status of the certificate.</p>
    pub status: Option<CertificateStatus>,
    /// <p>The algorithm that was used to generate the public-private key pair.</p>
    pub key_algorithm: Option<String>,
    /// <p>The time at which the certificate was requested.</p>
    pub created_at: Option<Instant>,
    /// <p>A list of ARNs for the Amazon Web Services resources that are using the
    /// certificate.</p>
    pub in_use_by: Vec<String>,
}

impl Unmarshall for CertificateDetail {
    fn shape() -> &'static StructureShape {
        &operation::CERTIFICATE_DETAIL
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "CertificateArn" => self.certificate_arn = Some(value.into_string()?),
            "DomainName" => self.domain_name = Some(value.into_string()?),
            "SubjectAlternativeNames" => self.subject_alternative_names = value.into_list()?,
            "Serial" => self.serial = Some(value.into_string()?),
            "Status" => self.status = Some(CertificateStatus::from_wire_value(value)?),
            "KeyAlgorithm" => self.key_algorithm = Some(value.into_string()?),
            "CreatedAt" => self.created_at = Some(value.into_instant()?),
            "InUseBy" => self.in_use_by = value.into_list()?,
            _ => {}
        }
        Ok(())
    }
}

impl FromWireValue for CertificateDetail {
    fn from_wire_value(value: WireValue) -> Result<Self, FieldError> {
        value.into_structure()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wire_http::enums::WireEnum;

    #[test]
    fn status_tokens() {
        assert_eq!(CertificateStatus::VALUES.len(), 7);
        assert_eq!(
            "VALIDATION_TIMED_OUT".parse::<CertificateStatus>(),
            Ok(CertificateStatus::ValidationTimedOut)
        );
        assert!("issued".parse::<CertificateStatus>().is_err());
        assert!(CertificateStatus::from_wire(Some("")).is_err());
    }

    #[test]
    fn tags_skip_absent_members() {
        let tag = Tag {
            key: Some("env".into()),
            value: None,
        };
        assert_eq!(
            tag.to_field_value(),
            FieldValue::Struct(vec![("Key", FieldValue::String("env"))])
        );
    }
}
