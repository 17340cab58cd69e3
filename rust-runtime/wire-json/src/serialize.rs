/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Append-only JSON writers.
//!
//! A [`JsonValueWriter`] writes exactly one value. Objects hand one out per key and arrays
//! one per element, so scalar and container encoding is shared between the two. Writers
//! borrow the output `String` mutably, which forces a nested container to be finished
//! before its parent continues.

use crate::escape::escape_string;
use wire_types::instant::{Format, InstantFormatError};
use wire_types::{Instant, Number};

/// Writes a single JSON value at the end of a `String`.
#[must_use]
pub struct JsonValueWriter<'a> {
    out: &'a mut String,
}

impl<'a> JsonValueWriter<'a> {
    /// Writes into the end of `out`.
    pub fn new(out: &'a mut String) -> Self {
        Self { out }
    }

    /// `null`
    pub fn null(self) {
        self.out.push_str("null");
    }

    /// `true` or `false`
    pub fn boolean(self, value: bool) {
        self.out.push_str(if value { "true" } else { "false" });
    }

    /// A quoted string, escaped as needed.
    pub fn string(self, value: &str) {
        push_quoted(self.out, value);
    }

    /// A number. JSON has no literal for NaN or the infinities, so those become `null`.
    pub fn number(self, value: Number) {
        match value {
            Number::PosInt(value) => self.out.push_str(itoa::Buffer::new().format(value)),
            Number::NegInt(value) => self.out.push_str(itoa::Buffer::new().format(value)),
            Number::Float(value) if value.is_finite() => {
                self.out.push_str(ryu::Buffer::new().format_finite(value))
            }
            Number::Float(_) => self.out.push_str("null"),
        }
    }

    /// An instant in `format`. Epoch seconds are written as a bare number.
    ///
    /// On error nothing is appended for the value itself; any key already written by the
    /// enclosing object remains, so the document should be discarded.
    pub fn instant(self, instant: &Instant, format: Format) -> Result<(), InstantFormatError> {
        let formatted = instant.fmt(format)?;
        match format {
            Format::EpochSeconds => self.out.push_str(&formatted),
            _ => push_quoted(self.out, &formatted),
        }
        Ok(())
    }

    /// Opens a nested array.
    pub fn start_array(self) -> JsonArrayWriter<'a> {
        JsonArrayWriter::new(self.out)
    }

    /// Opens a nested object.
    pub fn start_object(self) -> JsonObjectWriter<'a> {
        JsonObjectWriter::new(self.out)
    }
}

/// Writes the members of a JSON object.
pub struct JsonObjectWriter<'a> {
    out: &'a mut String,
    empty: bool,
}

impl<'a> JsonObjectWriter<'a> {
    /// Opens an object at the end of `out`.
    pub fn new(out: &'a mut String) -> Self {
        out.push('{');
        Self { out, empty: true }
    }

    /// Writes `"key":` and returns the writer for its value.
    pub fn key(&mut self, key: &str) -> JsonValueWriter<'_> {
        if !std::mem::take(&mut self.empty) {
            self.out.push(',');
        }
        push_quoted(self.out, key);
        self.out.push(':');
        JsonValueWriter::new(self.out)
    }

    /// Closes the object.
    pub fn finish(self) {
        self.out.push('}');
    }
}

/// Writes the elements of a JSON array.
pub struct JsonArrayWriter<'a> {
    out: &'a mut String,
    empty: bool,
}

impl<'a> JsonArrayWriter<'a> {
    /// Opens an array at the end of `out`.
    pub fn new(out: &'a mut String) -> Self {
        out.push('[');
        Self { out, empty: true }
    }

    /// Returns the writer for the next element.
    pub fn value(&mut self) -> JsonValueWriter<'_> {
        if !std::mem::take(&mut self.empty) {
            self.out.push(',');
        }
        JsonValueWriter::new(self.out)
    }

    /// Closes the array.
    pub fn finish(self) {
        self.out.push(']');
    }
}

fn push_quoted(out: &mut String, value: &str) {
    out.push('"');
    out.push_str(&escape_string(value));
    out.push('"');
}

#[cfg(test)]
mod test {
    use super::{JsonArrayWriter, JsonObjectWriter, JsonValueWriter};
    use proptest::proptest;
    use wire_types::instant::Format;
    use wire_types::{Instant, Number};

    fn number(value: Number) -> String {
        let mut out = String::new();
        JsonValueWriter::new(&mut out).number(value);
        out
    }

    #[test]
    fn empty_containers() {
        let mut out = String::new();
        let mut array = JsonArrayWriter::new(&mut out);
        array.value().start_object().finish();
        array.value().start_array().finish();
        array.finish();
        assert_eq!("[{},[]]", out);
    }

    #[test]
    fn mixed_document() {
        let mut out = String::new();
        let mut object = JsonObjectWriter::new(&mut out);
        object.key("enabled").boolean(true);
        object.key("na\"me").string("multi\nline");
        object.key("ratio").number(Number::Float(0.25));
        object.key("missing").null();
        let mut tags = object.key("tags").start_array();
        tags.value().string("a");
        tags.value().number(Number::NegInt(-3));
        let mut inner = tags.value().start_object();
        inner.key("k").boolean(false);
        inner.finish();
        tags.finish();
        object.finish();
        assert_eq!(
            r#"{"enabled":true,"na\"me":"multi\nline","ratio":0.25,"missing":null,"tags":["a",-3,{"k":false}]}"#,
            out
        );
    }

    #[test]
    fn instants_follow_their_format() {
        let mut out = String::new();
        let mut object = JsonObjectWriter::new(&mut out);
        object
            .key("epoch")
            .instant(
                &Instant::from_secs_and_nanos(1_700_000_000, 500_000_000),
                Format::EpochSeconds,
            )
            .unwrap();
        object
            .key("iso")
            .instant(&Instant::from_secs(0), Format::DateTime)
            .unwrap();
        object
            .key("http")
            .instant(&Instant::from_secs(1_445_412_480), Format::HttpDate)
            .unwrap();
        object.finish();
        assert_eq!(
            r#"{"epoch":1700000000.5,"iso":"1970-01-01T00:00:00Z","http":"Wed, 21 Oct 2015 07:28:00 GMT"}"#,
            out
        );
    }

    #[test]
    fn unrepresentable_instant_is_an_error() {
        let mut out = String::new();
        let mut array = JsonArrayWriter::new(&mut out);
        assert!(array
            .value()
            .instant(&Instant::from_secs(i64::MAX), Format::HttpDate)
            .is_err());
        array.finish();
        assert_eq!("[]", out);
    }

    #[test]
    fn non_finite_floats_become_null() {
        assert_eq!("null", number(Number::Float(f64::NAN)));
        assert_eq!("null", number(Number::Float(f64::INFINITY)));
        assert_eq!("1e100", number(Number::Float(1e100)));
    }

    proptest! {
        #[test]
        fn integers_match_serde_json(pos in 0..=u64::MAX, neg in i64::MIN..0i64) {
            assert_eq!(serde_json::to_string(&pos).unwrap(), number(Number::PosInt(pos)));
            assert_eq!(serde_json::to_string(&neg).unwrap(), number(Number::NegInt(neg)));
        }

        #[test]
        fn floats_read_back_exactly(value in proptest::num::f64::ANY) {
            let written = number(Number::Float(value));
            if value.is_finite() {
                let read: f64 = serde_json::from_str(&written).unwrap();
                assert_eq!(value.to_bits(), read.to_bits(), "{}", written);
            } else {
                assert_eq!("null", written);
            }
        }
    }
}
