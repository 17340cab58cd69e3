/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! A single event model over JSON and XML bodies.
//!
//! Every value in a document is a scope. A scope opens with [`Event::StartElement`] when the
//! value is named (an XML element or a JSON object member) or [`Event::StartItem`] when it is
//! anonymous (a JSON array element or the JSON root value), and closes with exactly one
//! [`Event::EndElement`]. Leaf scopes carry one [`Event::Scalar`] or [`Event::Null`].
//!
//! ```text
//! {"items":["a"],"next":null}       <Result><Items><member>a</member></Items></Result>
//!
//! StartItem                          StartElement("Result")
//!   StartElement("items")              StartElement("Items")
//!     StartItem                          StartElement("member")
//!       Scalar("a")                        Scalar("a")
//!     EndElement                         EndElement
//!   EndElement                         EndElement
//!   StartElement("next")             EndElement
//!     Null                           EndDocument
//!   EndElement
//! EndElement
//! EndDocument
//! ```

use crate::error::UnmarshallError;
use std::borrow::Cow;
use std::collections::VecDeque;
use wire_json::deserialize::{json_token_iter, JsonTokenIterator, Token};
use wire_types::Number;
use wire_xml::decode::{xml_events, XmlEvent, XmlEvents};

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar<'a> {
    /// Text, already unescaped
    Text(Cow<'a, str>),
    /// A JSON number
    Number(Number),
    /// A JSON boolean
    Bool(bool),
}

/// One step through a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<'a> {
    /// A named scope opens.
    StartElement(Cow<'a, str>),
    /// An anonymous scope opens.
    StartItem,
    /// The value of a leaf scope.
    Scalar(Scalar<'a>),
    /// An explicit null.
    Null,
    /// The innermost open scope closes.
    EndElement,
    /// There is nothing left to read.
    EndDocument,
}

/// Body format, which decides how maps are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    /// Maps are objects keyed by entry key
    Json,
    /// Maps are `entry` elements holding `key` and `value`
    Xml,
}

/// A pull source of [`Event`]s.
///
/// After [`Event::EndDocument`] a source keeps returning it.
pub trait EventSource<'a> {
    /// Reads the next event.
    fn next_event(&mut self) -> Result<Event<'a>, UnmarshallError>;

    /// The format of the underlying document.
    fn format(&self) -> WireFormat;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JsonFrame {
    Object,
    Array,
}

/// Events over a JSON body.
pub struct JsonEventSource<'a> {
    tokens: JsonTokenIterator<'a>,
    frames: Vec<JsonFrame>,
    queue: VecDeque<Event<'a>>,
}

impl<'a> JsonEventSource<'a> {
    /// Reads events from `input`.
    pub fn new(input: &'a [u8]) -> Self {
        JsonEventSource {
            tokens: json_token_iter(input),
            frames: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    /// Values directly inside an object were opened by their key; all others open an item.
    fn opens_item(&self) -> bool {
        self.frames.last() != Some(&JsonFrame::Object)
    }

    fn leaf(&mut self, event: Event<'a>) -> Event<'a> {
        if self.opens_item() {
            self.queue.push_back(event);
            self.queue.push_back(Event::EndElement);
            Event::StartItem
        } else {
            self.queue.push_back(Event::EndElement);
            event
        }
    }

    fn container(&mut self, frame: JsonFrame) -> Option<Event<'a>> {
        let opens_item = self.opens_item();
        self.frames.push(frame);
        opens_item.then_some(Event::StartItem)
    }
}

impl<'a> EventSource<'a> for JsonEventSource<'a> {
    fn next_event(&mut self) -> Result<Event<'a>, UnmarshallError> {
        loop {
            if let Some(event) = self.queue.pop_front() {
                return Ok(event);
            }
            let token = match self.tokens.next() {
                None => return Ok(Event::EndDocument),
                Some(token) => {
                    token.map_err(|err| UnmarshallError::malformed_with("invalid JSON", err))?
                }
            };
            let event = match token {
                Token::StartObject { .. } => self.container(JsonFrame::Object),
                Token::StartArray { .. } => self.container(JsonFrame::Array),
                Token::EndObject { .. } | Token::EndArray { .. } => {
                    self.frames.pop();
                    Some(Event::EndElement)
                }
                Token::ObjectKey { key, .. } => {
                    let key = key.to_unescaped().map_err(|err| {
                        UnmarshallError::malformed_with("invalid escape in object key", err)
                    })?;
                    Some(Event::StartElement(key))
                }
                Token::ValueNull { .. } => Some(self.leaf(Event::Null)),
                Token::ValueBool { value, .. } => {
                    Some(self.leaf(Event::Scalar(Scalar::Bool(value))))
                }
                Token::ValueNumber { value, .. } => {
                    Some(self.leaf(Event::Scalar(Scalar::Number(value))))
                }
                Token::ValueString { value, .. } => {
                    let value = value.to_unescaped().map_err(|err| {
                        UnmarshallError::malformed_with("invalid escape in string", err)
                    })?;
                    Some(self.leaf(Event::Scalar(Scalar::Text(value))))
                }
            };
            if let Some(event) = event {
                return Ok(event);
            }
        }
    }

    fn format(&self) -> WireFormat {
        WireFormat::Json
    }
}

/// Events over an XML body.
///
/// An element holding only text becomes a leaf scope with a [`Scalar::Text`] (empty for
/// `<a/>`); whitespace between child elements is dropped.
pub struct XmlEventSource<'a> {
    events: XmlEvents<'a>,
    lookahead: Option<XmlEvent<'a>>,
    queue: VecDeque<Event<'a>>,
}

impl<'a> XmlEventSource<'a> {
    /// Reads events from `input`.
    pub fn new(input: &'a str) -> Self {
        XmlEventSource {
            events: xml_events(input),
            lookahead: None,
            queue: VecDeque::new(),
        }
    }

    fn next_xml(&mut self) -> Result<Option<XmlEvent<'a>>, UnmarshallError> {
        if let Some(event) = self.lookahead.take() {
            return Ok(Some(event));
        }
        self.events
            .next()
            .transpose()
            .map_err(|err| UnmarshallError::malformed_with("invalid XML", err))
    }

    /// Collects the text of the element just opened, stopping at its first child element.
    fn element_content(&mut self) -> Result<(), UnmarshallError> {
        let mut text: Option<Cow<'a, str>> = None;
        loop {
            match self.next_xml()? {
                Some(XmlEvent::Text(chunk)) => {
                    text = Some(match text {
                        None => chunk,
                        Some(existing) => Cow::Owned(existing.into_owned() + &chunk),
                    });
                }
                Some(XmlEvent::EndElement { .. }) => {
                    self.queue
                        .push_back(Event::Scalar(Scalar::Text(text.unwrap_or_default())));
                    self.queue.push_back(Event::EndElement);
                    return Ok(());
                }
                Some(start @ XmlEvent::StartElement { .. }) => {
                    self.lookahead = Some(start);
                    return Ok(());
                }
                None => return Ok(()),
            }
        }
    }
}

impl<'a> EventSource<'a> for XmlEventSource<'a> {
    fn next_event(&mut self) -> Result<Event<'a>, UnmarshallError> {
        loop {
            if let Some(event) = self.queue.pop_front() {
                return Ok(event);
            }
            match self.next_xml()? {
                None => return Ok(Event::EndDocument),
                Some(XmlEvent::StartElement { name, .. }) => {
                    self.element_content()?;
                    return Ok(Event::StartElement(Cow::Borrowed(name.local)));
                }
                Some(XmlEvent::EndElement { .. }) => return Ok(Event::EndElement),
                // text between child elements
                Some(XmlEvent::Text(_)) => continue,
            }
        }
    }

    fn format(&self) -> WireFormat {
        WireFormat::Xml
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect<'a>(mut source: impl EventSource<'a>) -> Vec<Event<'a>> {
        let mut events = vec![];
        loop {
            let event = source.next_event().expect("valid document");
            if event == Event::EndDocument {
                return events;
            }
            events.push(event);
        }
    }

    fn start(name: &str) -> Event<'_> {
        Event::StartElement(Cow::Borrowed(name))
    }

    fn text(value: &str) -> Event<'_> {
        Event::Scalar(Scalar::Text(Cow::Borrowed(value)))
    }

    #[test]
    fn json_events() {
        let events = collect(JsonEventSource::new(
            br#"{"items":["a",{"b":true}],"next":null,"n":5}"#,
        ));
        assert_eq!(
            events,
            vec![
                Event::StartItem,
                start("items"),
                Event::StartItem,
                text("a"),
                Event::EndElement,
                Event::StartItem,
                start("b"),
                Event::Scalar(Scalar::Bool(true)),
                Event::EndElement,
                Event::EndElement,
                Event::EndElement,
                start("next"),
                Event::Null,
                Event::EndElement,
                start("n"),
                Event::Scalar(Scalar::Number(Number::PosInt(5))),
                Event::EndElement,
                Event::EndElement,
            ]
        );
    }

    #[test]
    fn json_scalar_root() {
        assert_eq!(
            collect(JsonEventSource::new(br#""Ab""#)),
            vec![Event::StartItem, text("Ab"), Event::EndElement]
        );
        assert!(collect(JsonEventSource::new(b"  ")).is_empty());
    }

    #[test]
    fn xml_events_collapse_text_elements() {
        let events = collect(XmlEventSource::new(
            "<Result>\n  <Items><member>a</member><member/></Items>\n  <Name>x &amp; y</Name>\n</Result>",
        ));
        assert_eq!(
            events,
            vec![
                start("Result"),
                start("Items"),
                start("member"),
                text("a"),
                Event::EndElement,
                start("member"),
                text(""),
                Event::EndElement,
                Event::EndElement,
                start("Name"),
                text("x & y"),
                Event::EndElement,
                Event::EndElement,
            ]
        );
    }

    #[test]
    fn malformed_documents() {
        let mut json = JsonEventSource::new(br#"{"a": [1}"#);
        let err = loop {
            match json.next_event() {
                Ok(Event::EndDocument) => panic!("should fail"),
                Ok(_) => continue,
                Err(err) => break err,
            }
        };
        assert!(matches!(err, UnmarshallError::MalformedWireData { .. }));

        let mut xml = XmlEventSource::new("<a><b></a>");
        let err = loop {
            match xml.next_event() {
                Ok(Event::EndDocument) => panic!("should fail"),
                Ok(_) => continue,
                Err(err) => break err,
            }
        };
        assert!(matches!(err, UnmarshallError::MalformedWireData { .. }));
    }
}
