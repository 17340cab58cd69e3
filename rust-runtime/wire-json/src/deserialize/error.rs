/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::escape::EscapeError;
use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub(in crate::deserialize) enum DeserializeErrorKind {
    BadLiteral(&'static str),
    BadNumber,
    NotUtf8,
    Escape(EscapeError),
    RawControlByte(u8),
    Truncated,
    Unexpected(char, &'static str),
}

impl fmt::Display for DeserializeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadLiteral(literal) => write!(f, "expected the literal `{literal}`"),
            Self::BadNumber => f.write_str("malformed number"),
            Self::NotUtf8 => f.write_str("JSON text is not valid UTF-8"),
            Self::Escape(_) => f.write_str("string contains a bad escape sequence"),
            Self::RawControlByte(byte) => {
                write!(f, "control byte 0x{byte:02X} must be escaped inside a string")
            }
            Self::Truncated => f.write_str("input ended before the document was complete"),
            Self::Unexpected(found, expected) => {
                write!(f, "found '{found}' where one of {expected} was expected")
            }
        }
    }
}

/// The JSON input was not well formed.
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct DeserializeError {
    kind: DeserializeErrorKind,
    offset: Option<usize>,
}

impl DeserializeError {
    pub(in crate::deserialize) fn new(kind: DeserializeErrorKind, offset: Option<usize>) -> Self {
        Self { kind, offset }
    }

    /// Byte position in the input, when one is known.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }
}

impl StdError for DeserializeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            DeserializeErrorKind::Escape(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for DeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "at byte {offset}: {}", self.kind),
            None => self.kind.fmt(f),
        }
    }
}

impl From<EscapeError> for DeserializeError {
    fn from(err: EscapeError) -> Self {
        Self::new(DeserializeErrorKind::Escape(err), None)
    }
}
