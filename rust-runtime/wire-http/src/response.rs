/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Unmarshalling of complete HTTP responses: body, headers and status code.

use crate::error::{FieldError, UnmarshallError};
use crate::event::{JsonEventSource, XmlEventSource};
use crate::header;
use crate::shape::{Kind, OperationShape, ResponseLocation, StructureShape};
use crate::unmarshall::{decode_text, read_members, Unmarshall};
use crate::value::WireValue;
use bytes::Bytes;
use http::Response;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// Parses a fully loaded response.
///
/// Parsers hold no per call state, so one value can be shared by every caller.
pub trait ParseStrictResponse {
    /// What the response parses into, typically a `Result`
    type Output;

    /// Parses `response`.
    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

/// The response parser of one operation.
pub struct Unmarshaller<T> {
    operation: &'static OperationShape,
    _output: PhantomData<fn() -> T>,
}

impl<T> Unmarshaller<T> {
    /// A parser for responses of `operation`.
    pub const fn new(operation: &'static OperationShape) -> Self {
        Unmarshaller {
            operation,
            _output: PhantomData,
        }
    }
}

impl<T> Clone for Unmarshaller<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Unmarshaller<T> {}

impl<T> fmt::Debug for Unmarshaller<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unmarshaller")
            .field("operation", &self.operation.name)
            .finish()
    }
}

impl<T: Unmarshall> ParseStrictResponse for Unmarshaller<T> {
    type Output = Result<T, UnmarshallError>;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output {
        parse_response(self.operation, response)
    }
}

/// Unmarshalls a successful response of `operation` into `T`.
///
/// The body is read in the operation's protocol format. Members bound to headers and to the status
/// code are read from the response itself.
pub fn parse_response<T: Unmarshall>(
    operation: &OperationShape,
    response: &Response<Bytes>,
) -> Result<T, UnmarshallError> {
    let shape = T::shape();
    let body = response.body();
    let mut members = if operation.protocol().is_json() {
        read_members(JsonEventSource::new(body), shape, shape.envelope)?
    } else {
        let body = std::str::from_utf8(body)
            .map_err(|err| UnmarshallError::malformed_with("response body is not UTF-8", err))?;
        read_members(XmlEventSource::new(body), shape, shape.envelope)?
    };
    read_http_members(shape, response, &mut members)?;
    debug!(
        operation = operation.name,
        status = response.status().as_u16(),
        "parsed response"
    );
    T::from_members(members)
}

fn read_http_members(
    shape: &'static StructureShape,
    response: &Response<Bytes>,
    members: &mut Vec<(&'static str, WireValue)>,
) -> Result<(), UnmarshallError> {
    for member in shape.members {
        let value = match member.location {
            ResponseLocation::Body(_) => continue,
            ResponseLocation::StatusCode => {
                Some(WireValue::Integer(response.status().as_u16().into()))
            }
            ResponseLocation::Header(name) => read_header(response, name, &member.kind)
                .map_err(|err| UnmarshallError::field(member.name, err))?,
            ResponseLocation::PrefixHeaders(prefix) => {
                read_prefix_headers(response, prefix, &member.kind)
                    .map_err(|err| UnmarshallError::field(member.name, err))?
            }
        };
        if let Some(value) = value {
            members.push((member.name, value));
        }
    }
    Ok(())
}

fn read_header(
    response: &Response<Bytes>,
    name: &str,
    kind: &Kind,
) -> Result<Option<WireValue>, FieldError> {
    let headers = response.headers();
    if !headers.contains_key(name) {
        return Ok(None);
    }
    let value = match kind {
        Kind::List {
            item: Kind::Timestamp(format),
            ..
        } => WireValue::List(
            header::many_dates(headers, name, *format)
                .map_err(|err| FieldError::malformed(name, err))?
                .into_iter()
                .map(WireValue::Timestamp)
                .collect(),
        ),
        Kind::List { item, .. } => {
            let values =
                header::read_many(headers, name).map_err(|err| FieldError::malformed(name, err))?;
            WireValue::List(
                values
                    .iter()
                    .map(|value| decode_text(item, value))
                    .collect::<Result<_, _>>()?,
            )
        }
        Kind::Map { .. } | Kind::Structure(_) => {
            return Err(FieldError::TypeMismatch {
                expected: kind.name(),
                found: "header",
            })
        }
        scalar => {
            let text = headers
                .get(name)
                .map(|value| value.to_str())
                .transpose()
                .map_err(|err| FieldError::malformed(name, err))?
                .unwrap_or_default();
            decode_text(scalar, text)?
        }
    };
    Ok(Some(value))
}

fn read_prefix_headers(
    response: &Response<Bytes>,
    prefix: &str,
    kind: &Kind,
) -> Result<Option<WireValue>, FieldError> {
    let value_kind = match kind {
        Kind::Map { value } => *value,
        other => {
            return Err(FieldError::TypeMismatch {
                expected: other.name(),
                found: "map",
            })
        }
    };
    let prefix = prefix.to_ascii_lowercase();
    let mut entries = BTreeMap::new();
    for (name, value) in response.headers() {
        if let Some(key) = name.as_str().strip_prefix(prefix.as_str()) {
            let text = value
                .to_str()
                .map_err(|err| FieldError::malformed(name.as_str(), err))?;
            entries.insert(key.to_string(), decode_text(value_kind, text)?);
        }
    }
    Ok(if entries.is_empty() {
        None
    } else {
        Some(WireValue::Map(entries))
    })
}
