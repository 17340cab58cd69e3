/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Writer for `application/x-www-form-urlencoded` request bodies in the awsQuery style.
//!
//! Nested members are flattened into dotted parameter names: `Struct.Field=value`,
//! `List.member.1=value`, and `Map.entry.1.key=k&Map.entry.1.value=v`.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

use std::borrow::Cow;
use urlencoding::encode;
use wire_types::instant::{Format, InstantFormatError};
use wire_types::primitive::Encoder;
use wire_types::{Instant, Number};

/// Writes the top level parameters of a query request.
pub struct QueryWriter<'a> {
    output: &'a mut String,
}

impl<'a> QueryWriter<'a> {
    /// Starts a request body with the `Action` and `Version` parameters.
    pub fn new(output: &'a mut String, action: &str, version: &str) -> Self {
        output.push_str("Action=");
        output.push_str(&encode(action));
        output.push_str("&Version=");
        output.push_str(&encode(version));
        QueryWriter { output }
    }

    /// Returns a writer for the parameter named `prefix`.
    pub fn prefix(&mut self, prefix: &'a str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(self.output, Cow::Borrowed(prefix))
    }

    /// Finishes the body.
    pub fn finish(self) {
        // Calling this drops self
    }
}

/// Writes the value of a single parameter, or the parameters nested under it.
#[must_use]
pub struct QueryValueWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
}

impl<'a> QueryValueWriter<'a> {
    /// Writes values under the parameter name `prefix`.
    pub fn new(output: &'a mut String, prefix: Cow<'a, str>) -> QueryValueWriter<'a> {
        QueryValueWriter { output, prefix }
    }

    /// Returns the parameter name this writer will write.
    pub fn name(&self) -> &str {
        &self.prefix
    }

    /// Starts a nested member named `prefix.suffix`.
    pub fn prefix(&mut self, suffix: &str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(
            self.output,
            Cow::Owned(format!("{}.{}", self.prefix, suffix)),
        )
    }

    /// Starts a list.
    ///
    /// Flattened lists number their elements directly under the name, otherwise elements are
    /// written under `member_override` (or `member`).
    pub fn start_list(self, flat: bool, member_override: Option<&'a str>) -> QueryListWriter<'a> {
        QueryListWriter::new(self.output, self.prefix, flat, member_override)
    }

    /// Starts a map. Entries are written under `entry.N` unless the map is flattened.
    pub fn start_map(
        self,
        flat: bool,
        key_name: Option<&'a str>,
        value_name: Option<&'a str>,
    ) -> QueryMapWriter<'a> {
        QueryMapWriter::new(self.output, self.prefix, flat, key_name, value_name)
    }

    /// Writes a boolean value.
    pub fn boolean(mut self, value: bool) {
        self.write_param_name();
        self.output.push_str(match value {
            true => "true",
            _ => "false",
        });
    }

    /// Writes a string value, URL encoding it.
    pub fn string(mut self, value: &str) {
        self.write_param_name();
        self.output.push_str(&encode(value));
    }

    /// Writes a number value.
    pub fn number(mut self, value: Number) {
        self.write_param_name();
        match value {
            Number::PosInt(value) => self.output.push_str(&value.to_string()),
            Number::NegInt(value) => self.output.push_str(Encoder::from(value).encode()),
            Number::Float(value) => self.output.push_str(Encoder::from(value).encode()),
        }
    }

    /// Writes an instant in the given `format`. Nothing is written on error.
    pub fn instant(mut self, instant: &Instant, format: Format) -> Result<(), InstantFormatError> {
        let formatted = instant.fmt(format)?;
        self.write_param_name();
        self.output.push_str(&encode(&formatted));
        Ok(())
    }

    /// Writes the parameter name with no value, as done for empty lists.
    pub fn empty(mut self) {
        self.write_param_name();
    }

    fn write_param_name(&mut self) {
        self.output.push('&');
        self.output.push_str(&self.prefix);
        self.output.push('=');
    }
}

/// Writes the elements of a list parameter.
pub struct QueryListWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    flat: bool,
    member_override: Option<&'a str>,
    next_index: usize,
}

impl<'a> QueryListWriter<'a> {
    fn new(
        output: &'a mut String,
        prefix: Cow<'a, str>,
        flat: bool,
        member_override: Option<&'a str>,
    ) -> QueryListWriter<'a> {
        QueryListWriter {
            prefix,
            output,
            flat,
            member_override,
            next_index: 1,
        }
    }

    /// Starts the next element.
    pub fn entry(&mut self) -> QueryValueWriter<'_> {
        let prefix = if self.flat {
            format!("{}.{}", self.prefix, self.next_index)
        } else {
            format!(
                "{}.{}.{}",
                self.prefix,
                self.member_override.unwrap_or("member"),
                self.next_index
            )
        };
        self.next_index += 1;
        QueryValueWriter::new(self.output, Cow::Owned(prefix))
    }

    /// Finishes the list. An empty list is written as the bare parameter name.
    pub fn finish(self) {
        if self.next_index == 1 {
            QueryValueWriter::new(self.output, self.prefix).empty();
        }
    }
}

/// Writes the entries of a map parameter.
pub struct QueryMapWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    flat: bool,
    key_name: &'a str,
    value_name: &'a str,
    next_index: usize,
}

impl<'a> QueryMapWriter<'a> {
    fn new(
        output: &'a mut String,
        prefix: Cow<'a, str>,
        flat: bool,
        key_name: Option<&'a str>,
        value_name: Option<&'a str>,
    ) -> QueryMapWriter<'a> {
        QueryMapWriter {
            prefix,
            output,
            flat,
            key_name: key_name.unwrap_or("key"),
            value_name: value_name.unwrap_or("value"),
            next_index: 1,
        }
    }

    /// Writes the key of the next entry and returns a writer for its value.
    pub fn entry(&mut self, key: &str) -> QueryValueWriter<'_> {
        let entry = if self.flat {
            format!("{}.{}", self.prefix, self.next_index)
        } else {
            format!("{}.entry.{}", self.prefix, self.next_index)
        };
        self.next_index += 1;
        self.output.push('&');
        self.output.push_str(&entry);
        self.output.push('.');
        self.output.push_str(self.key_name);
        self.output.push('=');
        self.output.push_str(&encode(key));
        QueryValueWriter::new(
            self.output,
            Cow::Owned(format!("{}.{}", entry, self.value_name)),
        )
    }

    /// Finishes the map.
    pub fn finish(self) {
        // Calling this drops self
    }
}

#[cfg(test)]
mod tests {
    use crate::QueryWriter;
    use wire_types::instant::Format;
    use wire_types::{Instant, Number};

    #[test]
    fn no_params() {
        let mut out = String::new();
        let writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        writer.finish();
        assert_eq!("Action=SomeAction&Version=1.0", out);
    }

    #[test]
    fn query_list_writer_empty_list() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        writer.prefix("myList").start_list(false, None).finish();
        writer.finish();
        assert_eq!("Action=SomeAction&Version=1.0&myList=", out);
    }

    #[test]
    fn lists_and_maps() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");

        let mut list = writer.prefix("Names").start_list(false, None);
        list.entry().string("a b");
        list.entry().string("c&d");
        list.finish();

        let mut flat = writer.prefix("Flat").start_list(true, None);
        flat.entry().boolean(true);
        flat.finish();

        let mut map = writer.prefix("Tags").start_map(false, None, None);
        map.entry("k1").number(Number::PosInt(1));
        map.entry("k2").prefix("Nested").number(Number::NegInt(-2));
        map.finish();

        writer.finish();
        assert_eq!(
            "Action=SomeAction&Version=1.0\
            &Names.member.1=a%20b&Names.member.2=c%26d\
            &Flat.1=true\
            &Tags.entry.1.key=k1&Tags.entry.1.value=1\
            &Tags.entry.2.key=k2&Tags.entry.2.value.Nested=-2",
            out
        );
    }

    #[test]
    fn nested_structures() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        let mut scope = writer.prefix("Struct");
        scope.prefix("Float").number(Number::Float(1.5));
        scope
            .prefix("When")
            .instant(
                &Instant::from_secs(1_576_540_098),
                Format::DateTime,
            )
            .unwrap();
        let mut list = scope.prefix("Items").start_list(false, Some("Item"));
        list.entry().string("x");
        list.finish();
        writer.finish();
        assert_eq!(
            "Action=SomeAction&Version=1.0\
            &Struct.Float=1.5\
            &Struct.When=2019-12-16T23%3A48%3A18Z\
            &Struct.Items.Item.1=x",
            out
        );
    }
}
