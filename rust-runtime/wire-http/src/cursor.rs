/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Depth tracking over an [`EventSource`].
//!
//! A message's own members are only matched at its target depth. Anything deeper belongs to a
//! nested value (or an unknown member being walked past), so a member that shares its name with
//! something nested is never bound by mistake.

use crate::error::UnmarshallError;
use crate::event::{Event, EventSource, WireFormat};
use crate::shape::Envelope;

/// Progress of a message through the event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageState {
    /// The wrappers around the message are still being entered.
    AwaitingStart,
    /// Events belong to the message.
    InMessage,
    /// The message is complete.
    Done,
}

/// The depths that delimit one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    /// Depth at which the message was entered
    pub origin: usize,
    /// Depth at which the message's members appear
    pub target: usize,
}

impl Scope {
    /// Classifies an event, given the cursor depth after consuming it.
    pub fn observe(&self, event: &Event<'_>, depth: usize) -> MessageState {
        match event {
            Event::EndDocument => MessageState::Done,
            Event::EndElement if depth < self.origin => MessageState::Done,
            _ if depth + 1 >= self.target => MessageState::InMessage,
            _ => MessageState::AwaitingStart,
        }
    }
}

/// Reads events and keeps the current nesting depth.
///
/// Depth counts open scopes: it rises on `StartElement`/`StartItem` and falls on `EndElement`.
pub struct TokenCursor<'a, S> {
    source: S,
    depth: usize,
    peeked: Option<Event<'a>>,
}

impl<'a, S: EventSource<'a>> TokenCursor<'a, S> {
    /// Starts a cursor at depth zero.
    pub fn new(source: S) -> Self {
        TokenCursor {
            source,
            depth: 0,
            peeked: None,
        }
    }

    /// Number of currently open scopes.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Format of the underlying document.
    pub fn format(&self) -> WireFormat {
        self.source.format()
    }

    /// The scope of a message that starts at the current position of the document, nested
    /// `envelope.levels` wrappers deep.
    pub fn document_scope(&self, envelope: Envelope) -> Scope {
        Scope {
            origin: self.depth,
            target: self.depth + 1 + envelope.levels,
        }
    }

    /// The scope of the value whose start event was just consumed.
    pub fn nested_scope(&self) -> Scope {
        Scope {
            origin: self.depth,
            target: self.depth + 1,
        }
    }

    /// Returns the next event without consuming it.
    pub fn peek(&mut self) -> Result<&Event<'a>, UnmarshallError> {
        if self.peeked.is_none() {
            self.peeked = Some(self.source.next_event()?);
        }
        match &self.peeked {
            Some(event) => Ok(event),
            None => Err(UnmarshallError::malformed("no event to peek")),
        }
    }

    /// Consumes the next event and updates the depth.
    pub fn next_event(&mut self) -> Result<Event<'a>, UnmarshallError> {
        let event = match self.peeked.take() {
            Some(event) => event,
            None => self.source.next_event()?,
        };
        match &event {
            Event::StartElement(_) | Event::StartItem => self.depth += 1,
            Event::EndElement => {
                self.depth = self.depth.checked_sub(1).ok_or_else(|| {
                    UnmarshallError::malformed("end of a scope that was never opened")
                })?
            }
            Event::EndDocument if self.depth != 0 => {
                return Err(UnmarshallError::malformed(format!(
                    "document ended with {} open scope(s)",
                    self.depth
                )))
            }
            Event::EndDocument | Event::Scalar(_) | Event::Null => {}
        }
        Ok(event)
    }

    /// Consumes events until the scope whose start event was just consumed is closed.
    pub fn skip_scope(&mut self) -> Result<(), UnmarshallError> {
        let origin = self.depth;
        while self.depth >= origin {
            if self.next_event()? == Event::EndDocument {
                return Err(UnmarshallError::malformed("document ended inside a scope"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::{JsonEventSource, XmlEventSource};
    use std::borrow::Cow;

    #[test]
    fn depth_follows_scopes() {
        let mut cursor = TokenCursor::new(JsonEventSource::new(br#"{"a":{"b":1}}"#));
        let mut depths = vec![];
        loop {
            let event = cursor.next_event().unwrap();
            depths.push(cursor.depth());
            if event == Event::EndDocument {
                break;
            }
        }
        // StartItem, a, b, 1, end b, end a, end root, EndDocument
        assert_eq!(depths, vec![1, 2, 3, 3, 2, 1, 0, 0]);
    }

    #[test]
    fn document_scope_skips_the_envelope() {
        let cursor = TokenCursor::new(XmlEventSource::new("<a/>"));
        assert_eq!(
            cursor.document_scope(Envelope::ROOT),
            Scope {
                origin: 0,
                target: 2
            }
        );
        assert_eq!(cursor.document_scope(Envelope::QUERY_RESULT).target, 3);
        assert_eq!(cursor.nested_scope().target, 1);
    }

    #[test]
    fn scope_states() {
        let scope = Scope {
            origin: 0,
            target: 3,
        };
        let start = Event::StartElement(Cow::Borrowed("OpResponse"));
        assert_eq!(scope.observe(&start, 1), MessageState::AwaitingStart);
        assert_eq!(scope.observe(&start, 2), MessageState::InMessage);
        assert_eq!(scope.observe(&Event::EndElement, 2), MessageState::InMessage);
        assert_eq!(scope.observe(&Event::EndDocument, 0), MessageState::Done);

        let nested = Scope {
            origin: 2,
            target: 3,
        };
        assert_eq!(nested.observe(&Event::EndElement, 2), MessageState::InMessage);
        assert_eq!(nested.observe(&Event::EndElement, 1), MessageState::Done);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut cursor = TokenCursor::new(JsonEventSource::new(b"[true]"));
        assert_eq!(cursor.peek().unwrap(), &Event::StartItem);
        assert_eq!(cursor.depth(), 0);
        assert_eq!(cursor.next_event().unwrap(), Event::StartItem);
        assert_eq!(cursor.depth(), 1);
    }

    #[test]
    fn skip_scope_returns_to_the_parent() {
        let mut cursor =
            TokenCursor::new(XmlEventSource::new("<a><b><c>1</c><c>2</c></b><d>x</d></a>"));
        cursor.next_event().unwrap(); // a
        cursor.next_event().unwrap(); // b
        cursor.skip_scope().unwrap();
        assert_eq!(cursor.depth(), 1);
        assert_eq!(
            cursor.next_event().unwrap(),
            Event::StartElement(Cow::Borrowed("d"))
        );
    }
}
