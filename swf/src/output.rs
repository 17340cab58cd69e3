/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation outputs.

use crate::model::{DomainConfiguration, DomainInfo};
use crate::operation;
use wire_http::error::FieldError;
use wire_http::shape::StructureShape;
use wire_http::unmarshall::Unmarshall;
use wire_http::value::WireValue;

/// Outputs without members.
macro_rules! empty_output {
    ($($(#[$meta:meta])* $name:ident => $shape:path;)+) => {
        $(
            $(#[$meta])*
            #[non_exhaustive]
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct $name {}

            impl Unmarshall for $name {
                fn shape() -> &'static StructureShape {
                    $shape
                }

                fn assign(&mut self, _member: &str, _value: WireValue) -> Result<(), FieldError> {
                    Ok(())
                }
            }
        )+
    };
}

empty_output! {
    /// Output of `DeprecateDomain`
    DeprecateDomainOutput => operation::DEPRECATE_DOMAIN_OUTPUT;
    /// Output of `RegisterDomain`
    RegisterDomainOutput => operation::REGISTER_DOMAIN_OUTPUT;
    /// Output of `UndeprecateDomain`
    UndeprecateDomainOutput => operation::UNDEPRECATE_DOMAIN_OUTPUT;
}

/// Output of `DescribeDomain`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeDomainOutput {
    /// <p>The basic information about a domain, such as its name, status, and description.</p>
    pub domain_info: Option<DomainInfo>,
    /// <p>The domain configuration.</p>
    pub configuration: Option<DomainConfiguration>,
}

impl Unmarshall for DescribeDomainOutput {
    fn shape() -> &'static StructureShape {
        &operation::DESCRIBE_DOMAIN_OUTPUT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "domainInfo" => self.domain_info = Some(value.into_structure()?),
            "configuration" => self.configuration = Some(value.into_structure()?),
            _ => {}
        }
        Ok(())
    }
}

/// Output of `ListDomains`
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDomainsOutput {
    /// <p>A list of DomainInfo structures.</p>
    pub domain_infos: Vec<DomainInfo>,
    /// <p>If a <code>NextPageToken</code> was returned by a previous call, there are more
    /// results available.</p>
    pub next_page_token: Option<String>,
}

impl Unmarshall for ListDomainsOutput {
    fn shape() -> &'static StructureShape {
        &operation::LIST_DOMAINS_OUTPUT
    }

    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
        match member {
            "domainInfos" => self.domain_infos = value.into_list()?,
            "nextPageToken" => self.next_page_token = Some(value.into_string()?),
            _ => {}
        }
        Ok(())
    }
}
