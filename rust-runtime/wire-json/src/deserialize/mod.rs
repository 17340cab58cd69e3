/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Streaming JSON tokenizer.
//!
//! [`json_token_iter`] walks a byte slice and yields one [`Token`] at a time without
//! allocating a document tree. Structural errors (mismatched brackets, missing commas,
//! truncated input) are reported as they are reached, along with the byte offset.

use crate::deserialize::error::DeserializeErrorKind as ErrorKind;
use wire_types::Number;

mod error;
/// Tokens yielded by [`JsonTokenIterator`].
pub mod token;

pub use error::DeserializeError;
pub use token::{EscapedStr, Offset, Token};

/// JSON token parser as a Rust iterator
///
/// This parser will parse and yield exactly one [`Token`] per iterator `next()` call.
/// Validation is done on the fly, so it is possible for it to parse an invalid JSON document
/// until it gets to the first [`DeserializeError`].
///
/// JSON string values are left escaped in the [`Token::ValueString`] as an [`EscapedStr`],
/// which is a new type around a slice of original `input` bytes so that the caller can decide
/// when to unescape and allocate into a [`String`].
///
/// The parser *will* accept multiple valid JSON values. For example, `b"null true"` will
/// yield `ValueNull` and `ValueBool(true)`. The parser does not allow multiple keys with the
/// same name to be validated by the caller, it just reports them in order.
pub fn json_token_iter(input: &[u8]) -> JsonTokenIterator<'_> {
    JsonTokenIterator {
        input,
        index: 0,
        state_stack: vec![State::Initial],
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    Initial,
    ArrayFirstValueOrEnd,
    ArrayNextValueOrEnd,
    ObjectFirstKeyOrEnd,
    ObjectNextKeyOrEnd,
    ObjectFieldValue,
}

/// An iterator over a `&[u8]` that yields [`Token`]s. See [`json_token_iter`].
pub struct JsonTokenIterator<'a> {
    input: &'a [u8],
    index: usize,
    state_stack: Vec<State>,
}

impl<'a> JsonTokenIterator<'a> {
    /// Returns the next unprocessed byte.
    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    /// Returns the next unprocessed byte, or an unexpected EOS error.
    fn peek_expect(&self) -> Result<u8, DeserializeError> {
        self.peek_byte().ok_or_else(|| self.error(ErrorKind::Truncated))
    }

    fn advance(&mut self) {
        if self.index < self.input.len() {
            self.index += 1;
        }
    }

    /// Consumes and returns the next byte, or an unexpected EOS error.
    fn next_expect(&mut self) -> Result<u8, DeserializeError> {
        let byte = self.peek_expect()?;
        self.advance();
        Ok(byte)
    }

    fn error_at(&self, offset: usize, kind: ErrorKind) -> DeserializeError {
        DeserializeError::new(kind, Some(offset))
    }

    fn error(&self, kind: ErrorKind) -> DeserializeError {
        self.error_at(self.index, kind)
    }

    fn discard_whitespace(&mut self) {
        while let Some(byte) = self.peek_byte() {
            match byte {
                b' ' | b'\t' | b'\r' | b'\n' => self.advance(),
                _ => break,
            }
        }
    }

    fn state(&self) -> State {
        *self.state_stack.last().unwrap_or(&State::Initial)
    }

    fn replace_state(&mut self, state: State) {
        self.state_stack.pop();
        self.state_stack.push(state);
    }

    fn offset(&self) -> Offset {
        Offset(self.index)
    }

    fn start_object(&mut self) -> Token<'a> {
        let offset = self.offset();
        self.advance();
        self.state_stack.push(State::ObjectFirstKeyOrEnd);
        Token::StartObject { offset }
    }

    fn end_object(&mut self) -> Token<'a> {
        let offset = self.offset();
        self.advance();
        self.state_stack.pop();
        Token::EndObject { offset }
    }

    fn start_array(&mut self) -> Token<'a> {
        let offset = self.offset();
        self.advance();
        self.state_stack.push(State::ArrayFirstValueOrEnd);
        Token::StartArray { offset }
    }

    fn end_array(&mut self) -> Token<'a> {
        let offset = self.offset();
        self.advance();
        self.state_stack.pop();
        Token::EndArray { offset }
    }

    /// Reads a JSON string out of the stream, leaving escapes in place.
    fn read_string(&mut self) -> Result<&'a str, DeserializeError> {
        // Skip the starting quote
        let quote_byte = self.next_expect()?;
        debug_assert_eq!(quote_byte, b'\"');

        let start = self.index;
        loop {
            match self.peek_expect()? {
                b'"' => {
                    let value = std::str::from_utf8(&self.input[start..self.index])
                        .map_err(|_| self.error_at(start, ErrorKind::NotUtf8))?;
                    self.advance();
                    return Ok(value);
                }
                b'\\' => {
                    // Escapes are validated when the string is unescaped
                    self.advance();
                    self.next_expect()?;
                }
                byte @ 0x00..=0x1F => {
                    return Err(self.error(ErrorKind::RawControlByte(byte)))
                }
                _ => self.advance(),
            }
        }
    }

    fn expect_literal(&mut self, expected: &'static str) -> Result<(), DeserializeError> {
        let end = self.index + expected.len();
        if end > self.input.len() || &self.input[self.index..end] != expected.as_bytes() {
            return Err(self.error(ErrorKind::BadLiteral(expected)));
        }
        self.index = end;
        Ok(())
    }

    /// Scans a number according to the JSON grammar:
    /// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
    fn read_number(&mut self) -> Result<Token<'a>, DeserializeError> {
        let start = self.index;
        let digits = |iter: &mut Self| {
            let digits_start = iter.index;
            while matches!(iter.peek_byte(), Some(b'0'..=b'9')) {
                iter.advance();
            }
            iter.index - digits_start
        };

        if self.peek_byte() == Some(b'-') {
            self.advance();
        }
        let int_start = self.index;
        let int_digits = digits(self);
        if int_digits == 0 || (int_digits > 1 && self.input[int_start] == b'0') {
            return Err(self.error_at(start, ErrorKind::BadNumber));
        }
        let mut floating = false;
        if self.peek_byte() == Some(b'.') {
            floating = true;
            self.advance();
            if digits(self) == 0 {
                return Err(self.error_at(start, ErrorKind::BadNumber));
            }
        }
        if matches!(self.peek_byte(), Some(b'e' | b'E')) {
            floating = true;
            self.advance();
            if matches!(self.peek_byte(), Some(b'+' | b'-')) {
                self.advance();
            }
            if digits(self) == 0 {
                return Err(self.error_at(start, ErrorKind::BadNumber));
            }
        }

        // The scanned range contains only ASCII
        let text = std::str::from_utf8(&self.input[start..self.index])
            .map_err(|_| self.error_at(start, ErrorKind::NotUtf8))?;
        // Literals beyond the range of f64 would otherwise parse as infinity
        let float = || {
            text.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(Number::Float)
        };
        let value = if floating {
            float()
        } else if text.starts_with('-') {
            text.parse::<i64>()
                .ok()
                .filter(|value| *value < 0)
                .map(Number::NegInt)
                .or_else(float)
        } else {
            text.parse::<u64>().map(Number::PosInt).ok().or_else(float)
        };
        let value = value.ok_or_else(|| self.error_at(start, ErrorKind::BadNumber))?;
        Ok(Token::ValueNumber {
            offset: Offset(start),
            value,
        })
    }

    fn read_value(&mut self) -> Result<Token<'a>, DeserializeError> {
        self.discard_whitespace();
        let offset = self.offset();
        match self.peek_expect()? {
            b'{' => Ok(self.start_object()),
            b'[' => Ok(self.start_array()),
            b'"' => self.read_string().map(|s| Token::ValueString {
                offset,
                value: EscapedStr::new(s),
            }),
            b't' => self.expect_literal("true").map(|_| Token::ValueBool {
                offset,
                value: true,
            }),
            b'f' => self.expect_literal("false").map(|_| Token::ValueBool {
                offset,
                value: false,
            }),
            b'n' => self
                .expect_literal("null")
                .map(|_| Token::ValueNull { offset }),
            b'-' | b'0'..=b'9' => self.read_number(),
            byte => Err(self.error(ErrorKind::Unexpected(
                byte.into(),
                "'{', '[', '\"', 'true', 'false', 'null', number",
            ))),
        }
    }

    fn read_object_key(&mut self) -> Result<Token<'a>, DeserializeError> {
        let offset = self.offset();
        let key = self.read_string()?;
        self.replace_state(State::ObjectFieldValue);
        Ok(Token::ObjectKey {
            offset,
            key: EscapedStr::new(key),
        })
    }

    fn state_array_first_value_or_end(&mut self) -> Result<Token<'a>, DeserializeError> {
        match self.peek_expect()? {
            b']' => Ok(self.end_array()),
            _ => {
                self.replace_state(State::ArrayNextValueOrEnd);
                self.read_value()
            }
        }
    }

    fn state_array_next_value_or_end(&mut self) -> Result<Token<'a>, DeserializeError> {
        match self.peek_expect()? {
            b']' => Ok(self.end_array()),
            b',' => {
                self.advance();
                self.read_value()
            }
            byte => Err(self.error(ErrorKind::Unexpected(byte.into(), "']', ','"))),
        }
    }

    fn state_object_first_key_or_end(&mut self) -> Result<Token<'a>, DeserializeError> {
        match self.peek_expect()? {
            b'}' => Ok(self.end_object()),
            b'"' => self.read_object_key(),
            byte => Err(self.error(ErrorKind::Unexpected(byte.into(), "'}', '\"'"))),
        }
    }

    fn state_object_next_key_or_end(&mut self) -> Result<Token<'a>, DeserializeError> {
        match self.peek_expect()? {
            b'}' => Ok(self.end_object()),
            b',' => {
                self.advance();
                self.discard_whitespace();
                match self.peek_expect()? {
                    b'"' => self.read_object_key(),
                    byte => Err(self.error(ErrorKind::Unexpected(byte.into(), "'\"'"))),
                }
            }
            byte => Err(self.error(ErrorKind::Unexpected(byte.into(), "'}', ','"))),
        }
    }

    fn state_object_field_value(&mut self) -> Result<Token<'a>, DeserializeError> {
        match self.peek_expect()? {
            b':' => {
                self.advance();
                self.replace_state(State::ObjectNextKeyOrEnd);
                self.read_value()
            }
            byte => Err(self.error(ErrorKind::Unexpected(byte.into(), "':'"))),
        }
    }
}

impl<'a> Iterator for JsonTokenIterator<'a> {
    type Item = Result<Token<'a>, DeserializeError>;

    fn next(&mut self) -> Option<Self::Item> {
        debug_assert!(self.index <= self.input.len());
        self.discard_whitespace();
        if self.index == self.input.len() {
            // Running out of input is only valid between top-level values
            return match self.state() {
                State::Initial => None,
                _ => {
                    self.state_stack = vec![State::Initial];
                    Some(Err(self.error(ErrorKind::Truncated)))
                }
            };
        }

        let result = match self.state() {
            State::Initial => self.read_value(),
            State::ArrayFirstValueOrEnd => self.state_array_first_value_or_end(),
            State::ArrayNextValueOrEnd => self.state_array_next_value_or_end(),
            State::ObjectFirstKeyOrEnd => self.state_object_first_key_or_end(),
            State::ObjectNextKeyOrEnd => self.state_object_next_key_or_end(),
            State::ObjectFieldValue => self.state_object_field_value(),
        };
        if result.is_err() {
            // Stop producing tokens after the first error
            self.index = self.input.len();
            self.state_stack = vec![State::Initial];
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::error::DeserializeErrorKind::*;
    use super::token::test::*;
    use super::*;
    use proptest::prelude::*;

    #[track_caller]
    fn expect_token(
        expected: Option<Result<Token<'_>, DeserializeError>>,
        actual: Option<Result<Token<'_>, DeserializeError>>,
    ) {
        assert_eq!(expected, actual);
    }

    macro_rules! expect_err {
        ($kind:expr, $offset:expr, $value:expr) => {
            let err: DeserializeError = $value.transpose().err().expect("expected error");
            assert_eq!(DeserializeError::new($kind, $offset), err);
        };
    }

    #[test]
    fn test_empty() {
        assert!(json_token_iter(b"").next().is_none());
        assert!(json_token_iter(b" ").next().is_none());
        assert!(json_token_iter(b"\t").next().is_none());
    }

    #[test]
    fn test_empty_string() {
        let mut iter = json_token_iter(b"\"\"");
        expect_token(value_string(0, ""), iter.next());
        expect_token(None, iter.next());

        let mut iter = json_token_iter(b" \r\n\t\"\"  ");
        expect_token(value_string(4, ""), iter.next());
        expect_token(None, iter.next());
    }

    #[test]
    fn test_empty_array() {
        let mut iter = json_token_iter(b"[]");
        expect_token(start_array(0), iter.next());
        expect_token(end_array(1), iter.next());
        expect_token(None, iter.next());
    }

    #[test]
    fn test_empty_object() {
        let mut iter = json_token_iter(b"{}");
        expect_token(start_object(0), iter.next());
        expect_token(end_object(1), iter.next());
        expect_token(None, iter.next());
    }

    #[test]
    fn test_literals() {
        let mut iter = json_token_iter(b"null true false");
        expect_token(value_null(0), iter.next());
        expect_token(value_bool(5, true), iter.next());
        expect_token(value_bool(10, false), iter.next());
        expect_token(None, iter.next());
    }

    #[test]
    fn test_numbers() {
        let mut iter =
            json_token_iter(b"0 1 -2 3.5 -4e2 18446744073709551615 18446744073709551616");
        expect_token(value_number(0, Number::PosInt(0)), iter.next());
        expect_token(value_number(2, Number::PosInt(1)), iter.next());
        expect_token(value_number(4, Number::NegInt(-2)), iter.next());
        expect_token(value_number(7, Number::Float(3.5)), iter.next());
        expect_token(value_number(11, Number::Float(-400.0)), iter.next());
        expect_token(value_number(16, Number::PosInt(u64::MAX)), iter.next());
        expect_token(
            value_number(37, Number::Float(18446744073709551616.0)),
            iter.next(),
        );
        expect_token(None, iter.next());
    }

    #[test]
    fn test_invalid_numbers() {
        expect_err!(BadNumber, Some(0), json_token_iter(b"01").next());
        expect_err!(BadNumber, Some(0), json_token_iter(b"-").next());
        expect_err!(BadNumber, Some(0), json_token_iter(b"1.").next());
        expect_err!(BadNumber, Some(0), json_token_iter(b"1e+").next());
        expect_err!(BadNumber, Some(0), json_token_iter(b"1e400").next());
        expect_err!(BadNumber, Some(0), json_token_iter(b"-1e400").next());
        expect_err!(BadNumber, Some(0), json_token_iter(&[b'9'; 400]).next());
        expect_err!(
            Unexpected('+', "'{', '[', '\"', 'true', 'false', 'null', number"),
            Some(0),
            json_token_iter(b"+1").next()
        );
    }

    #[test]
    fn test_object() {
        let mut iter = json_token_iter(br#"{ "a": 1, "b" : [true, null], "c": {"d": "e\"f"} }"#);
        expect_token(start_object(0), iter.next());
        expect_token(object_key(2, "a"), iter.next());
        expect_token(value_number(7, Number::PosInt(1)), iter.next());
        expect_token(object_key(10, "b"), iter.next());
        expect_token(start_array(16), iter.next());
        expect_token(value_bool(17, true), iter.next());
        expect_token(value_null(23), iter.next());
        expect_token(end_array(27), iter.next());
        expect_token(object_key(30, "c"), iter.next());
        expect_token(start_object(35), iter.next());
        expect_token(object_key(36, "d"), iter.next());
        expect_token(value_string(41, "e\\\"f"), iter.next());
        expect_token(end_object(47), iter.next());
        expect_token(end_object(49), iter.next());
        expect_token(None, iter.next());
    }

    #[test]
    fn mismatched_braces() {
        fn collect(input: &[u8]) -> Result<Vec<Token<'_>>, DeserializeError> {
            json_token_iter(input).collect()
        }
        assert_eq!(
            Err(DeserializeError::new(Unexpected(']', "'}', ','"), Some(10))),
            collect(br#"[{"foo": 5]}"#).map(|_| ())
        );
        assert_eq!(
            Err(DeserializeError::new(Unexpected(']', "'}', ','"), Some(9))),
            collect(br#"{"foo": 5]}"#).map(|_| ())
        );
        assert_eq!(
            Err(DeserializeError::new(Unexpected('}', "']', ','"), Some(4))),
            collect(br#"[5,6}"#).map(|_| ())
        );
    }

    #[test]
    fn unterminated() {
        let mut iter = json_token_iter(br#"{"foo": 5"#);
        expect_token(start_object(0), iter.next());
        expect_token(object_key(1, "foo"), iter.next());
        expect_token(value_number(8, Number::PosInt(5)), iter.next());
        expect_err!(Truncated, Some(9), iter.next());
        expect_token(None, iter.next());

        expect_err!(Truncated, Some(4), json_token_iter(b"\"abc").next());
    }

    #[test]
    fn control_characters_and_literals() {
        expect_err!(
            RawControlByte(0x0A),
            Some(3),
            json_token_iter(b"\"ab\ncd\"").next()
        );
        expect_err!(BadLiteral("true"), Some(0), json_token_iter(b"tru").next());
        expect_err!(BadLiteral("null"), Some(0), json_token_iter(b"nul1").next());
    }

    #[test]
    fn missing_colon() {
        let mut iter = json_token_iter(br#"{"a" 1}"#);
        expect_token(start_object(0), iter.next());
        expect_token(object_key(1, "a"), iter.next());
        expect_err!(Unexpected('1', "':'"), Some(5), iter.next());
    }

    proptest! {
        #[test]
        fn never_panics(input in proptest::collection::vec(any::<u8>(), 0..64)) {
            for token in json_token_iter(&input) {
                if token.is_err() {
                    break;
                }
            }
        }

        #[test]
        fn string_tokens_match_serde_json(s in ".*") {
            let json = serde_json::to_string(&s).unwrap();
            let mut iter = json_token_iter(json.as_bytes());
            match iter.next() {
                Some(Ok(Token::ValueString { value, .. })) => {
                    prop_assert_eq!(value.to_unescaped().unwrap(), s.as_str());
                }
                other => prop_assert!(false, "unexpected token: {:?}", other),
            }
        }
    }
}
