/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Streaming XML reader.
//!
//! [`xml_events`] turns a document into a flat sequence of [`XmlEvent`]s. Close tags are
//! checked against the element they close, so every `StartElement` is eventually matched
//! by exactly one `EndElement` or the iterator reports an error.

use crate::unescape::unescape;
use std::borrow::Cow;
use thiserror::Error;
use xmlparser::{ElementEnd, Token, Tokenizer};

/// The XML input was not well formed.
#[derive(Debug, Error)]
pub enum XmlDecodeError {
    /// The tokenizer rejected the document.
    #[error("XML parse error")]
    InvalidXml(#[from] xmlparser::Error),
    /// An `&` sequence was not a known entity or character reference.
    #[error("invalid XML escape: {esc}")]
    InvalidEscape {
        /// The text following the `&`
        esc: String,
    },
    /// Structural problem detected while reading.
    #[error("error parsing XML: {0}")]
    Custom(Cow<'static, str>),
}

impl XmlDecodeError {
    /// Builds a custom decode error.
    pub fn custom(msg: impl Into<Cow<'static, str>>) -> Self {
        XmlDecodeError::Custom(msg.into())
    }
}

/// A possibly namespace-prefixed XML name.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Name<'a> {
    /// Namespace prefix, empty when the name has none
    pub prefix: &'a str,
    /// Local part of the name
    pub local: &'a str,
}

impl<'a> Name<'a> {
    /// Checks whether this name matches `tag`.
    ///
    /// A `tag` without a prefix matches on the local name only.
    pub fn matches(&self, tag: &str) -> bool {
        match tag.split_once(':') {
            Some((prefix, local)) => self.prefix == prefix && self.local == local,
            None => self.local == tag,
        }
    }
}

/// An attribute with its value already unescaped.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Attr<'a> {
    /// Attribute name
    pub name: Name<'a>,
    /// Unescaped attribute value
    pub value: Cow<'a, str>,
}

/// One step through an XML document.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum XmlEvent<'a> {
    /// An opening tag. The root element has depth 1.
    StartElement {
        /// Element name
        name: Name<'a>,
        /// Element attributes in document order
        attributes: Vec<Attr<'a>>,
        /// Nesting depth of the element
        depth: usize,
    },
    /// Character data inside an element, unescaped.
    Text(Cow<'a, str>),
    /// A closing tag, or the implicit close of a self-closing element.
    EndElement {
        /// Element name
        name: Name<'a>,
        /// Nesting depth of the element being closed
        depth: usize,
    },
}

/// Iterator of [`XmlEvent`]s. See [`xml_events`].
pub struct XmlEvents<'a> {
    tokenizer: Tokenizer<'a>,
    open: Vec<Name<'a>>,
    building: Option<(Name<'a>, Vec<Attr<'a>>)>,
    pending_end: bool,
    done: bool,
}

/// Reads `doc` as a stream of [`XmlEvent`]s.
///
/// Declarations, comments, processing instructions and whitespace outside of the root
/// element are skipped.
pub fn xml_events(doc: &str) -> XmlEvents<'_> {
    XmlEvents {
        tokenizer: Tokenizer::from(doc),
        open: Vec::new(),
        building: None,
        pending_end: false,
        done: false,
    }
}

impl<'a> XmlEvents<'a> {
    /// Number of elements currently open.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    fn close_top(&mut self) -> Result<XmlEvent<'a>, XmlDecodeError> {
        let depth = self.open.len();
        let name = self
            .open
            .pop()
            .ok_or_else(|| XmlDecodeError::custom("close tag without a matching open tag"))?;
        Ok(XmlEvent::EndElement { name, depth })
    }

    fn next_event(&mut self) -> Result<Option<XmlEvent<'a>>, XmlDecodeError> {
        if self.pending_end {
            self.pending_end = false;
            return self.close_top().map(Some);
        }
        loop {
            let token = match self.tokenizer.next() {
                Some(token) => token?,
                None if self.open.is_empty() => return Ok(None),
                None => {
                    return Err(XmlDecodeError::custom(format!(
                        "unexpected end of document: {} unclosed element(s)",
                        self.open.len()
                    )))
                }
            };
            match token {
                Token::ElementStart { prefix, local, .. } => {
                    let name = Name {
                        prefix: prefix.as_str(),
                        local: local.as_str(),
                    };
                    self.building = Some((name, Vec::new()));
                }
                Token::Attribute {
                    prefix,
                    local,
                    value,
                    ..
                } => {
                    let attr = Attr {
                        name: Name {
                            prefix: prefix.as_str(),
                            local: local.as_str(),
                        },
                        value: unescape(value.as_str())?,
                    };
                    match self.building.as_mut() {
                        Some((_, attributes)) => attributes.push(attr),
                        None => return Err(XmlDecodeError::custom("attribute outside of a tag")),
                    }
                }
                Token::ElementEnd { end, .. } => match end {
                    ElementEnd::Open | ElementEnd::Empty => {
                        let (name, attributes) = self.building.take().ok_or_else(|| {
                            XmlDecodeError::custom("end of tag without a start")
                        })?;
                        self.open.push(name);
                        self.pending_end = matches!(end, ElementEnd::Empty);
                        return Ok(Some(XmlEvent::StartElement {
                            name,
                            attributes,
                            depth: self.open.len(),
                        }));
                    }
                    ElementEnd::Close(prefix, local) => {
                        let closing = Name {
                            prefix: prefix.as_str(),
                            local: local.as_str(),
                        };
                        match self.open.last() {
                            Some(open) if *open == closing => {
                                return self.close_top().map(Some);
                            }
                            Some(open) => {
                                return Err(XmlDecodeError::custom(format!(
                                    "invalid XML: expected close tag for `{}` but found `{}`",
                                    open.local, closing.local
                                )))
                            }
                            None => {
                                return Err(XmlDecodeError::custom(
                                    "close tag without a matching open tag",
                                ))
                            }
                        }
                    }
                },
                Token::Text { text } => {
                    let text = text.as_str();
                    if self.open.is_empty() {
                        if text.trim().is_empty() {
                            continue;
                        }
                        return Err(XmlDecodeError::custom("text outside of the root element"));
                    }
                    return Ok(Some(XmlEvent::Text(unescape(text)?)));
                }
                Token::Cdata { text, .. } => {
                    return Ok(Some(XmlEvent::Text(Cow::Borrowed(text.as_str()))));
                }
                Token::Declaration { .. }
                | Token::ProcessingInstruction { .. }
                | Token::Comment { .. }
                | Token::DtdStart { .. }
                | Token::EmptyDtd { .. }
                | Token::EntityDeclaration { .. }
                | Token::DtdEnd { .. } => continue,
            }
        }
    }
}

impl<'a> Iterator for XmlEvents<'a> {
    type Item = Result<XmlEvent<'a>, XmlDecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_event().transpose();
        if !matches!(result, Some(Ok(_))) {
            self.done = true;
        }
        result
    }
}
