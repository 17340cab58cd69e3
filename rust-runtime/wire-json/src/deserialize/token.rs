/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::escape::unescape_string;
use crate::EscapeError;
use std::borrow::Cow;
use wire_types::Number;

/// A string exactly as it appeared between quotes in the input, escapes included.
///
/// Unescaping is deferred so that keys and values which are never read cost nothing.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct EscapedStr<'a>(&'a str);

impl<'a> EscapedStr<'a> {
    /// Wraps text that is still escaped.
    pub fn new(escaped: &'a str) -> Self {
        Self(escaped)
    }

    /// The raw text.
    pub fn as_escaped_str(&self) -> &'a str {
        self.0
    }

    /// Resolves escape sequences, borrowing when there are none.
    pub fn to_unescaped(&self) -> Result<Cow<'a, str>, EscapeError> {
        unescape_string(self.0)
    }
}

/// Byte position of a token in the input.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Offset(pub usize);

/// One lexical unit of a JSON document, as yielded by
/// [`json_token_iter`](crate::deserialize::json_token_iter).
#[allow(missing_docs)]
#[derive(Debug, PartialEq)]
pub enum Token<'a> {
    StartArray { offset: Offset },
    EndArray { offset: Offset },
    StartObject { offset: Offset },
    EndObject { offset: Offset },
    /// A member name. The following token is its value.
    ObjectKey { offset: Offset, key: EscapedStr<'a> },
    ValueNull { offset: Offset },
    ValueBool { offset: Offset, value: bool },
    ValueNumber { offset: Offset, value: Number },
    ValueString { offset: Offset, value: EscapedStr<'a> },
}

impl Token<'_> {
    /// Where the token starts.
    pub fn offset(&self) -> Offset {
        match self {
            Token::StartArray { offset }
            | Token::EndArray { offset }
            | Token::StartObject { offset }
            | Token::EndObject { offset }
            | Token::ValueNull { offset }
            | Token::ObjectKey { offset, .. }
            | Token::ValueBool { offset, .. }
            | Token::ValueNumber { offset, .. }
            | Token::ValueString { offset, .. } => *offset,
        }
    }
}

/// Expected-token builders for tokenizer tests.
#[cfg(test)]
pub(crate) mod test {
    use super::{EscapedStr, Offset, Token};
    use crate::deserialize::DeserializeError;
    use wire_types::Number;

    pub(crate) type Expected<'a> = Option<Result<Token<'a>, DeserializeError>>;

    pub(crate) fn start_array<'a>(at: usize) -> Expected<'a> {
        Some(Ok(Token::StartArray { offset: Offset(at) }))
    }

    pub(crate) fn end_array<'a>(at: usize) -> Expected<'a> {
        Some(Ok(Token::EndArray { offset: Offset(at) }))
    }

    pub(crate) fn start_object<'a>(at: usize) -> Expected<'a> {
        Some(Ok(Token::StartObject { offset: Offset(at) }))
    }

    pub(crate) fn end_object<'a>(at: usize) -> Expected<'a> {
        Some(Ok(Token::EndObject { offset: Offset(at) }))
    }

    pub(crate) fn object_key(at: usize, key: &str) -> Expected<'_> {
        Some(Ok(Token::ObjectKey {
            offset: Offset(at),
            key: EscapedStr::new(key),
        }))
    }

    pub(crate) fn value_null<'a>(at: usize) -> Expected<'a> {
        Some(Ok(Token::ValueNull { offset: Offset(at) }))
    }

    pub(crate) fn value_bool<'a>(at: usize, value: bool) -> Expected<'a> {
        Some(Ok(Token::ValueBool {
            offset: Offset(at),
            value,
        }))
    }

    pub(crate) fn value_number<'a>(at: usize, value: Number) -> Expected<'a> {
        Some(Ok(Token::ValueNumber {
            offset: Offset(at),
            value,
        }))
    }

    pub(crate) fn value_string(at: usize, value: &str) -> Expected<'_> {
        Some(Ok(Token::ValueString {
            offset: Offset(at),
            value: EscapedStr::new(value),
        }))
    }

    #[test]
    fn offsets() {
        let key = Token::ObjectKey {
            offset: Offset(3),
            key: EscapedStr::new("CertificateArn"),
        };
        assert_eq!(Offset(3), key.offset());
        assert_eq!(Offset(9), Token::EndArray { offset: Offset(9) }.offset());
    }

    #[test]
    fn escaped_text_is_resolved_on_demand() {
        let value = EscapedStr::new(r"line\nbreak");
        assert_eq!(r"line\nbreak", value.as_escaped_str());
        assert_eq!("line\nbreak", value.to_unescaped().unwrap());
        assert!(EscapedStr::new(r"\x").to_unescaped().is_err());
    }
}
