/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors raised while marshalling requests and unmarshalling responses.

use crate::enums::UnknownEnumValue;
use std::borrow::Cow;
use std::error::Error;
use thiserror::Error;

/// Boxed error carried as the cause of a failure.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// A request could not be turned into a [`WireFrame`](crate::frame::WireFrame).
#[derive(Debug, Error)]
pub enum MarshallError {
    /// No request was supplied. Nothing was encoded.
    #[error("the request to marshall was absent")]
    InvalidRequest,
    /// Encoding the request failed.
    #[error("failed to marshall a {operation} request")]
    MarshallingFailure {
        /// Operation being marshalled
        operation: &'static str,
        /// The underlying failure
        #[source]
        source: BoxError,
    },
}

impl MarshallError {
    pub(crate) fn failure(operation: &'static str, source: impl Into<BoxError>) -> Self {
        MarshallError::MarshallingFailure {
            operation,
            source: source.into(),
        }
    }
}

/// A response could not be turned into its typed result.
#[derive(Debug, Error)]
pub enum UnmarshallError {
    /// The body is not a well formed document, or its structure is unusable.
    #[error("malformed wire data: {message}")]
    MalformedWireData {
        /// What was wrong
        message: Cow<'static, str>,
        /// The underlying parser error, if any
        #[source]
        source: Option<BoxError>,
    },
    /// The value of a member could not be decoded.
    #[error("failed to decode field `{field}`")]
    FieldDecodeFailure {
        /// Name of the member
        field: &'static str,
        /// Why decoding failed
        #[source]
        source: FieldError,
    },
}

impl UnmarshallError {
    /// Malformed data described by `message`.
    pub fn malformed(message: impl Into<Cow<'static, str>>) -> Self {
        UnmarshallError::MalformedWireData {
            message: message.into(),
            source: None,
        }
    }

    /// Malformed data reported by a parser.
    pub fn malformed_with(
        message: impl Into<Cow<'static, str>>,
        source: impl Into<BoxError>,
    ) -> Self {
        UnmarshallError::MalformedWireData {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// A decode failure of the member `field`.
    pub fn field(field: &'static str, source: impl Into<FieldError>) -> Self {
        UnmarshallError::FieldDecodeFailure {
            field,
            source: source.into(),
        }
    }
}

/// A single value could not be decoded into the type of its member.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The value has the wrong shape for the member, e.g. a list where a string was expected.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// What the member needs
        expected: &'static str,
        /// What the wire carried
        found: &'static str,
    },
    /// The scalar token could not be parsed.
    #[error("malformed value {token:?}")]
    Malformed {
        /// The offending token
        token: String,
        /// Why parsing failed
        #[source]
        source: BoxError,
    },
    /// The token is not a member of a closed enum.
    #[error(transparent)]
    UnknownEnum(#[from] UnknownEnumValue),
    /// A nested structure failed to decode.
    #[error(transparent)]
    Nested(Box<UnmarshallError>),
}

impl FieldError {
    pub(crate) fn malformed(token: impl Into<String>, source: impl Into<BoxError>) -> Self {
        FieldError::Malformed {
            token: token.into(),
            source: source.into(),
        }
    }
}

impl From<UnmarshallError> for FieldError {
    fn from(err: UnmarshallError) -> Self {
        FieldError::Nested(Box::new(err))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn field_failures_name_the_field() {
        let err = UnmarshallError::field(
            "maxItems",
            FieldError::TypeMismatch {
                expected: "integer",
                found: "string",
            },
        );
        assert_eq!(format!("{}", err), "failed to decode field `maxItems`");
        assert_eq!(
            format!("{}", err.source().expect("has a source")),
            "expected integer, found string"
        );
    }

    #[test]
    fn marshalling_failure_keeps_its_cause() {
        let err = MarshallError::failure("ListWidgets", "boom");
        assert_eq!(format!("{}", err), "failed to marshall a ListWidgets request");
        assert_eq!(format!("{}", err.source().expect("has a source")), "boom");
        assert!(MarshallError::InvalidRequest.source().is_none());
    }

    #[test]
    fn nested_errors_are_transparent() {
        let nested: FieldError = UnmarshallError::malformed("unbalanced").into();
        assert_eq!(format!("{}", nested), "malformed wire data: unbalanced");
    }
}
