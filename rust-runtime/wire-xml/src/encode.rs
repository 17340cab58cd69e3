/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! XML Encoding module that uses Rust lifetimes to make generating malformed XML a compilation
//! error.

use crate::escape::escape;

/// XmlWriter Abstraction
///
/// XmlWriter (and friends) make generating an invalid XML document a type error. Nested children
/// borrow their parents, so a parent can't be finished while a child is still open.
///
/// ```rust
/// use wire_xml::encode::XmlWriter;
/// let mut s = String::new();
/// let mut doc = XmlWriter::new(&mut s);
/// let start_el = doc.start_el("Root")
///     .write_ns("http://example.com", None);
/// let mut start_tag = start_el.finish();
/// start_tag.data("hello");
/// start_tag.finish();
/// assert_eq!(s, "<Root xmlns=\"http://example.com\">hello</Root>");
/// ```
pub struct XmlWriter<'a> {
    doc: &'a mut String,
}

impl<'a> XmlWriter<'a> {
    /// Writes into the end of `doc`.
    pub fn new(doc: &'a mut String) -> Self {
        Self { doc }
    }

    /// Opens the tag of a top level element.
    pub fn start_el<'b, 'c>(&'c mut self, tag: &'b str) -> ElWriter<'c, 'b> {
        self.doc.push('<');
        self.doc.push_str(tag);
        ElWriter::new(self.doc, tag)
    }
}

/// Writes the attributes of an open tag.
///
/// The tag must be closed with either [`ElWriter::finish`] or [`ElWriter::finish_empty`].
#[must_use]
pub struct ElWriter<'a, 'b> {
    start: &'b str,
    doc: &'a mut String,
}

impl<'a, 'b> ElWriter<'a, 'b> {
    fn new(doc: &'a mut String, start: &'b str) -> ElWriter<'a, 'b> {
        ElWriter { start, doc }
    }

    /// Writes an attribute with an escaped value.
    pub fn write_attribute(&mut self, key: &str, value: &str) -> &mut Self {
        self.doc.push(' ');
        self.doc.push_str(key);
        self.doc.push_str("=\"");
        self.doc.push_str(&escape(value));
        self.doc.push('"');
        self
    }

    /// Declares the default namespace, or a prefixed one when `prefix` is set.
    pub fn write_ns(mut self, namespace: &str, prefix: Option<&str>) -> Self {
        match prefix {
            Some(prefix) => self.write_attribute(&format!("xmlns:{}", prefix), namespace),
            None => self.write_attribute("xmlns", namespace),
        };
        self
    }

    /// Closes the opening tag and returns a writer for the element's content.
    pub fn finish(self) -> ScopeWriter<'a, 'b> {
        self.doc.push('>');
        ScopeWriter {
            doc: self.doc,
            start: self.start,
        }
    }

    /// Closes the element as a self-closing tag.
    pub fn finish_empty(self) {
        self.doc.push_str("/>");
    }
}

/// Writes the content of an element, then its closing tag.
pub struct ScopeWriter<'a, 'b> {
    doc: &'a mut String,
    start: &'b str,
}

impl Drop for ScopeWriter<'_, '_> {
    fn drop(&mut self) {
        self.doc.push_str("</");
        self.doc.push_str(self.start);
        self.doc.push('>');
    }
}

impl ScopeWriter<'_, '_> {
    /// Writes escaped character data.
    pub fn data(&mut self, data: &str) {
        self.doc.push_str(escape(data).as_ref());
    }

    /// Writes the closing tag.
    pub fn finish(self) {
        // drop will be called which writes the closer to the document
    }

    /// Opens a child element.
    pub fn start_el<'b, 'c>(&'c mut self, tag: &'b str) -> ElWriter<'c, 'b> {
        self.doc.push('<');
        self.doc.push_str(tag);
        ElWriter::new(self.doc, tag)
    }
}
