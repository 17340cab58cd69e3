/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Message unmarshalling: response bodies into typed results.
//!
//! The engine walks a [`TokenCursor`] over the body. Inside a structure, only named scopes at the
//! structure's target depth are matched against its [`StructureShape`]; everything else (wrappers,
//! unknown members and their contents) passes by without being bound.

use crate::cursor::{MessageState, Scope, TokenCursor};
use crate::error::{FieldError, UnmarshallError};
use crate::event::{Event, EventSource, JsonEventSource, Scalar, WireFormat, XmlEventSource};
use crate::shape::{Envelope, Kind, StructureShape};
use crate::value::WireValue;
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::{debug, trace};
use wire_types::primitive::Parse;
use wire_types::{base64, Blob, Instant, Number};

/// A result type populated from a response.
///
/// Implementations start from [`Default`] (empty collections, absent optionals) and accept each
/// decoded member through [`Unmarshall::assign`]:
///
/// ```
/// use wire_http::error::FieldError;
/// use wire_http::shape::{Kind, OutputMember, StructureShape};
/// use wire_http::unmarshall::{unmarshall_json, Unmarshall};
/// use wire_http::value::WireValue;
///
/// #[derive(Debug, Default)]
/// struct ListWidgetsOutput {
///     items: Vec<String>,
///     next_marker: Option<String>,
/// }
///
/// static ITEMS: Kind = Kind::String;
/// static SHAPE: StructureShape = StructureShape::new(
///     "ListWidgetsOutput",
///     &[
///         OutputMember::body("items", Kind::list(&ITEMS)),
///         OutputMember::body("nextMarker", Kind::String),
///     ],
/// );
///
/// impl Unmarshall for ListWidgetsOutput {
///     fn shape() -> &'static StructureShape {
///         &SHAPE
///     }
///
///     fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
///         match member {
///             "items" => self.items = value.into_list()?,
///             "nextMarker" => self.next_marker = Some(value.into_string()?),
///             _ => {}
///         }
///         Ok(())
///     }
/// }
///
/// let output: ListWidgetsOutput =
///     unmarshall_json(br#"{"items":["a","b"], "nextMarker": null}"#).unwrap();
/// assert_eq!(output.items, vec!["a", "b"]);
/// assert_eq!(output.next_marker, None);
/// ```
pub trait Unmarshall: Default {
    /// Shape of the structure.
    fn shape() -> &'static StructureShape;

    /// Stores a decoded member, named as in the shape.
    fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError>;

    /// Builds a value from decoded members.
    fn from_members(members: Vec<(&'static str, WireValue)>) -> Result<Self, UnmarshallError> {
        let mut result = Self::default();
        for (name, value) in members {
            result
                .assign(name, value)
                .map_err(|err| UnmarshallError::field(name, err))?;
        }
        Ok(result)
    }
}

/// Unmarshalls a JSON body using the envelope of `T`'s shape.
pub fn unmarshall_json<T: Unmarshall>(body: &[u8]) -> Result<T, UnmarshallError> {
    unmarshall_with(JsonEventSource::new(body), T::shape().envelope)
}

/// Unmarshalls an XML body using the envelope of `T`'s shape.
pub fn unmarshall_xml<T: Unmarshall>(body: &str) -> Result<T, UnmarshallError> {
    unmarshall_with(XmlEventSource::new(body), T::shape().envelope)
}

/// Unmarshalls the message found `envelope.levels` wrappers deep in `source`.
///
/// A document that ends before the message is seen yields `T::default()`.
pub fn unmarshall_with<'a, T, S>(source: S, envelope: Envelope) -> Result<T, UnmarshallError>
where
    T: Unmarshall,
    S: EventSource<'a>,
{
    let members = read_members(source, T::shape(), envelope)?;
    T::from_members(members)
}

/// Reads the body members of `shape` without building a result.
pub(crate) fn read_members<'a, S: EventSource<'a>>(
    source: S,
    shape: &'static StructureShape,
    envelope: Envelope,
) -> Result<Vec<(&'static str, WireValue)>, UnmarshallError> {
    let mut cursor = TokenCursor::new(source);
    let scope = cursor.document_scope(envelope);
    let members = read_structure(&mut cursor, shape, scope)?;
    debug!(
        structure = shape.name,
        members = members.len(),
        "unmarshalled response"
    );
    Ok(members)
}

fn read_structure<'a, S: EventSource<'a>>(
    cursor: &mut TokenCursor<'a, S>,
    shape: &'static StructureShape,
    scope: Scope,
) -> Result<Vec<(&'static str, WireValue)>, UnmarshallError> {
    let mut members: Vec<(&'static str, WireValue)> = Vec::new();
    loop {
        let event = cursor.next_event()?;
        match scope.observe(&event, cursor.depth()) {
            MessageState::Done => return Ok(members),
            MessageState::AwaitingStart => continue,
            MessageState::InMessage => {}
        }
        let name = match event {
            Event::StartElement(name) if cursor.depth() == scope.target => name,
            _ => continue,
        };
        let member = match shape.body_member(&name) {
            Some(member) => member,
            None => {
                trace!(structure = shape.name, field = %name, "skipping unknown field");
                continue;
            }
        };
        match &member.kind {
            // every occurrence of a flattened member is one item
            Kind::List {
                item,
                flattened: true,
                ..
            } if cursor.format() == WireFormat::Xml => {
                if let Some(item) = read_value(cursor, *item, member.name)? {
                    match members.iter_mut().find(|(name, _)| *name == member.name) {
                        Some((_, WireValue::List(items))) => items.push(item),
                        _ => members.push((member.name, WireValue::List(vec![item]))),
                    }
                }
            }
            kind => {
                if let Some(value) = read_value(cursor, kind, member.name)? {
                    members.push((member.name, value));
                }
            }
        }
    }
}

/// Reads the value of the scope whose start event was just consumed, through its end event.
///
/// `None` is an explicit null.
fn read_value<'a, S: EventSource<'a>>(
    cursor: &mut TokenCursor<'a, S>,
    kind: &'static Kind,
    field: &'static str,
) -> Result<Option<WireValue>, UnmarshallError> {
    let format = cursor.format();
    let is_null = match cursor.peek()? {
        Event::Null => true,
        Event::Scalar(scalar)
            if format == WireFormat::Json
                && matches!(
                    kind,
                    Kind::List { .. } | Kind::Map { .. } | Kind::Structure(_)
                ) =>
        {
            return Err(UnmarshallError::field(
                field,
                FieldError::TypeMismatch {
                    expected: kind.name(),
                    found: scalar_name(scalar),
                },
            ))
        }
        _ => false,
    };
    if is_null {
        cursor.next_event()?;
        expect_end(cursor, field)?;
        return Ok(None);
    }
    let value = match kind {
        Kind::List {
            member,
            item,
            flattened: _,
        } => read_list(cursor, member, *item, field)?,
        Kind::Map { value } => match format {
            WireFormat::Json => read_json_map(cursor, *value, field)?,
            WireFormat::Xml => read_xml_map(cursor, *value, field)?,
        },
        Kind::Structure(shape) => {
            let scope = cursor.nested_scope();
            WireValue::Structure(read_structure(cursor, *shape, scope)?)
        }
        scalar => read_scalar(cursor, scalar, field)?,
    };
    Ok(Some(value))
}

fn read_list<'a, S: EventSource<'a>>(
    cursor: &mut TokenCursor<'a, S>,
    member: &str,
    item: &'static Kind,
    field: &'static str,
) -> Result<WireValue, UnmarshallError> {
    let scope = cursor.nested_scope();
    let mut items = Vec::new();
    loop {
        let event = cursor.next_event()?;
        if scope.observe(&event, cursor.depth()) == MessageState::Done {
            return Ok(WireValue::List(items));
        }
        let is_item = match &event {
            Event::StartItem => true,
            Event::StartElement(name) => cursor.format() == WireFormat::Xml && name == member,
            _ => false,
        };
        if is_item && cursor.depth() == scope.target {
            // null items are dropped
            if let Some(value) = read_value(cursor, item, field)? {
                items.push(value);
            }
        }
    }
}

fn read_json_map<'a, S: EventSource<'a>>(
    cursor: &mut TokenCursor<'a, S>,
    value: &'static Kind,
    field: &'static str,
) -> Result<WireValue, UnmarshallError> {
    let scope = cursor.nested_scope();
    let mut entries = BTreeMap::new();
    loop {
        let event = cursor.next_event()?;
        if scope.observe(&event, cursor.depth()) == MessageState::Done {
            return Ok(WireValue::Map(entries));
        }
        match event {
            Event::StartElement(key) if cursor.depth() == scope.target => {
                if let Some(value) = read_value(cursor, value, field)? {
                    entries.insert(key.into_owned(), value);
                }
            }
            Event::StartItem if cursor.depth() == scope.target => {
                return Err(UnmarshallError::field(
                    field,
                    FieldError::TypeMismatch {
                        expected: "map",
                        found: "list",
                    },
                ))
            }
            _ => {}
        }
    }
}

/// `<entry><key>k</key><value>v</value></entry>` per entry.
fn read_xml_map<'a, S: EventSource<'a>>(
    cursor: &mut TokenCursor<'a, S>,
    value: &'static Kind,
    field: &'static str,
) -> Result<WireValue, UnmarshallError> {
    let scope = cursor.nested_scope();
    let mut entries = BTreeMap::new();
    loop {
        let event = cursor.next_event()?;
        if scope.observe(&event, cursor.depth()) == MessageState::Done {
            return Ok(WireValue::Map(entries));
        }
        match event {
            Event::StartElement(name) if cursor.depth() == scope.target && name == "entry" => {
                if let (key, Some(value)) = read_xml_entry(cursor, value, field)? {
                    entries.insert(key, value);
                }
            }
            _ => {}
        }
    }
}

fn read_xml_entry<'a, S: EventSource<'a>>(
    cursor: &mut TokenCursor<'a, S>,
    value_kind: &'static Kind,
    field: &'static str,
) -> Result<(String, Option<WireValue>), UnmarshallError> {
    let scope = cursor.nested_scope();
    let mut key = None;
    let mut value = None;
    loop {
        let event = cursor.next_event()?;
        if scope.observe(&event, cursor.depth()) == MessageState::Done {
            break;
        }
        match event {
            Event::StartElement(name) if cursor.depth() == scope.target => match name.as_ref() {
                "key" => key = Some(read_text(cursor, field)?),
                "value" => value = read_value(cursor, value_kind, field)?,
                _ => {}
            },
            _ => {}
        }
    }
    match key {
        Some(key) => Ok((key, value)),
        None => Err(UnmarshallError::malformed(format!(
            "map entry in `{}` has no key",
            field
        ))),
    }
}

fn read_text<'a, S: EventSource<'a>>(
    cursor: &mut TokenCursor<'a, S>,
    field: &'static str,
) -> Result<String, UnmarshallError> {
    match read_scalar(cursor, &Kind::String, field)? {
        WireValue::String(text) => Ok(text),
        other => Err(UnmarshallError::field(
            field,
            FieldError::TypeMismatch {
                expected: "string",
                found: other.kind(),
            },
        )),
    }
}

fn read_scalar<'a, S: EventSource<'a>>(
    cursor: &mut TokenCursor<'a, S>,
    kind: &Kind,
    field: &'static str,
) -> Result<WireValue, UnmarshallError> {
    let scalar = match cursor.next_event()? {
        Event::Scalar(scalar) => scalar,
        event @ (Event::StartElement(_) | Event::StartItem) => {
            return Err(UnmarshallError::field(
                field,
                FieldError::TypeMismatch {
                    expected: kind.name(),
                    found: if event == Event::StartItem {
                        "list"
                    } else {
                        "structure"
                    },
                },
            ))
        }
        _ => {
            return Err(UnmarshallError::malformed(format!(
                "`{}` has no value",
                field
            )))
        }
    };
    let value = decode_scalar(kind, scalar).map_err(|err| UnmarshallError::field(field, err))?;
    expect_end(cursor, field)?;
    Ok(value)
}

fn expect_end<'a, S: EventSource<'a>>(
    cursor: &mut TokenCursor<'a, S>,
    field: &'static str,
) -> Result<(), UnmarshallError> {
    match cursor.next_event()? {
        Event::EndElement => Ok(()),
        _ => Err(UnmarshallError::malformed(format!(
            "expected the end of `{}`",
            field
        ))),
    }
}

fn scalar_name(scalar: &Scalar<'_>) -> &'static str {
    match scalar {
        Scalar::Text(_) => "string",
        Scalar::Number(_) => "number",
        Scalar::Bool(_) => "boolean",
    }
}

/// Decodes a scalar carried as text outside of the body, e.g. in a header.
pub(crate) fn decode_text(kind: &Kind, text: &str) -> Result<WireValue, FieldError> {
    decode_scalar(kind, Scalar::Text(Cow::Borrowed(text)))
}

/// Decodes one leaf through the field codec.
fn decode_scalar(kind: &Kind, scalar: Scalar<'_>) -> Result<WireValue, FieldError> {
    match (kind, scalar) {
        (Kind::String, Scalar::Text(text)) => Ok(WireValue::String(text.into_owned())),
        (Kind::Integer, Scalar::Number(number)) => i32::try_from(number)
            .map(|value| WireValue::Integer(value.into()))
            .map_err(|err| FieldError::malformed(number_token(number), err)),
        (Kind::Integer, Scalar::Text(text)) => {
            parse::<i32>(&text).map(|v| WireValue::Integer(v.into()))
        }
        (Kind::Long, Scalar::Number(number)) => i64::try_from(number)
            .map(WireValue::Integer)
            .map_err(|err| FieldError::malformed(number_token(number), err)),
        (Kind::Long, Scalar::Text(text)) => parse::<i64>(&text).map(WireValue::Integer),
        (Kind::Double, Scalar::Number(number)) => Ok(WireValue::Double(number.to_f64_lossy())),
        // non-finite doubles travel as strings, even in JSON
        (Kind::Double, Scalar::Text(text)) => parse::<f64>(&text).map(WireValue::Double),
        (Kind::Boolean, Scalar::Bool(value)) => Ok(WireValue::Boolean(value)),
        (Kind::Boolean, Scalar::Text(text)) => parse::<bool>(&text).map(WireValue::Boolean),
        (Kind::Timestamp(_), Scalar::Number(number)) => {
            epoch_instant(number).map(WireValue::Timestamp)
        }
        (Kind::Timestamp(format), Scalar::Text(text)) => Instant::from_str(&text, *format)
            .map(WireValue::Timestamp)
            .map_err(|err| FieldError::malformed(text.as_ref(), err)),
        (Kind::Blob, Scalar::Text(text)) => base64::decode(text.as_ref())
            .map(|bytes| WireValue::Blob(Blob::new(bytes)))
            .map_err(|err| FieldError::malformed(text.as_ref(), err)),
        (kind, scalar) => Err(FieldError::TypeMismatch {
            expected: kind.name(),
            found: scalar_name(&scalar),
        }),
    }
}

fn parse<T: Parse>(token: &str) -> Result<T, FieldError> {
    T::parse_wire_token(token).map_err(|err| FieldError::malformed(token, err))
}

fn epoch_instant(number: Number) -> Result<Instant, FieldError> {
    match number {
        Number::PosInt(seconds) => i64::try_from(seconds)
            .map(Instant::from_secs)
            .map_err(|err| FieldError::malformed(number_token(number), err)),
        Number::NegInt(seconds) => Ok(Instant::from_secs(seconds)),
        Number::Float(seconds) => Instant::from_secs_f64(seconds)
            .map_err(|err| FieldError::malformed(number_token(number), err)),
    }
}

fn number_token(number: Number) -> String {
    match number {
        Number::PosInt(value) => value.to_string(),
        Number::NegInt(value) => value.to_string(),
        Number::Float(value) => value.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shape::{OutputMember, ResponseLocation};
    use crate::value::FromWireValue;
    use wire_types::instant::Format;

    #[derive(Debug, Default, PartialEq)]
    struct Inner {
        name: Option<String>,
        count: Option<i32>,
    }

    static INNER: StructureShape = StructureShape::new(
        "Inner",
        &[
            OutputMember::body("name", Kind::String),
            OutputMember::body("count", Kind::Integer),
        ],
    );

    impl Unmarshall for Inner {
        fn shape() -> &'static StructureShape {
            &INNER
        }

        fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
            match member {
                "name" => self.name = Some(value.into_string()?),
                "count" => self.count = Some(value.into_i32()?),
                _ => {}
            }
            Ok(())
        }
    }

    impl FromWireValue for Inner {
        fn from_wire_value(value: WireValue) -> Result<Self, FieldError> {
            value.into_structure()
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Outer {
        name: Option<String>,
        items: Vec<String>,
        next_marker: Option<String>,
        inner: Option<Inner>,
        children: Vec<Inner>,
        tags: BTreeMap<String, i64>,
        ratio: Option<f64>,
        enabled: Option<bool>,
        created: Option<Instant>,
        data: Option<Blob>,
    }

    static STRING: Kind = Kind::String;
    static LONG: Kind = Kind::Long;
    static CHILD: Kind = Kind::Structure(&INNER);

    static OUTER: StructureShape = StructureShape::new(
        "Outer",
        &[
            OutputMember::body("name", Kind::String),
            OutputMember::body("items", Kind::list(&STRING)),
            OutputMember::body("nextMarker", Kind::String),
            OutputMember::body("inner", Kind::Structure(&INNER)),
            OutputMember::new(
                "children",
                ResponseLocation::Body("Child"),
                Kind::List {
                    member: "member",
                    item: &CHILD,
                    flattened: true,
                },
            ),
            OutputMember::body("tags", Kind::Map { value: &LONG }),
            OutputMember::body("ratio", Kind::Double),
            OutputMember::body("enabled", Kind::Boolean),
            OutputMember::body("created", Kind::Timestamp(Format::DateTime)),
            OutputMember::body("data", Kind::Blob),
        ],
    );

    impl Unmarshall for Outer {
        fn shape() -> &'static StructureShape {
            &OUTER
        }

        fn assign(&mut self, member: &str, value: WireValue) -> Result<(), FieldError> {
            match member {
                "name" => self.name = Some(value.into_string()?),
                "items" => self.items = value.into_list()?,
                "nextMarker" => self.next_marker = Some(value.into_string()?),
                "inner" => self.inner = Some(value.into_structure()?),
                "children" => self.children = value.into_list()?,
                "tags" => self.tags = value.into_map()?,
                "ratio" => self.ratio = Some(value.into_f64()?),
                "enabled" => self.enabled = Some(value.into_bool()?),
                "created" => self.created = Some(value.into_instant()?),
                "data" => self.data = Some(value.into_blob()?),
                _ => {}
            }
            Ok(())
        }
    }

    #[test]
    fn list_and_null_marker() {
        let output: Outer =
            unmarshall_json(br#"{"items":["a","b"], "nextMarker": null}"#).unwrap();
        assert_eq!(output.items, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(output.next_marker, None);
    }

    #[test]
    fn empty_bodies_produce_defaults() {
        assert_eq!(unmarshall_json::<Outer>(b"").unwrap(), Outer::default());
        assert_eq!(unmarshall_json::<Outer>(b"{}").unwrap(), Outer::default());
        assert_eq!(unmarshall_xml::<Outer>("").unwrap(), Outer::default());
    }

    #[test]
    fn unknown_fields_are_skipped() {
        let output: Outer = unmarshall_json(
            br#"{"extra":{"name":"nested","deeper":[1,2,{"x":null}]},"name":"top","other":5}"#,
        )
        .unwrap();
        assert_eq!(output.name.as_deref(), Some("top"));
        assert_eq!(output.inner, None);
    }

    #[test]
    fn only_the_message_level_binds() {
        let output: Outer =
            unmarshall_json(br#"{"inner":{"name":"nested","count":3},"name":"top"}"#).unwrap();
        assert_eq!(output.name.as_deref(), Some("top"));
        assert_eq!(
            output.inner,
            Some(Inner {
                name: Some("nested".into()),
                count: Some(3)
            })
        );

        // a same-named element below the message level never binds to the message
        let output: Outer =
            unmarshall_xml("<Outer><wrapper><name>deep</name></wrapper></Outer>").unwrap();
        assert_eq!(output.name, None);
    }

    #[test]
    fn scalars_decode_from_json() {
        let output: Outer = unmarshall_json(
            br#"{"ratio":"NaN","enabled":true,"created":1515531081.5,"data":"aGVsbG8=","tags":{"b":2,"a":-1}}"#,
        )
        .unwrap();
        assert!(output.ratio.unwrap().is_nan());
        assert_eq!(output.enabled, Some(true));
        assert_eq!(
            output.created,
            Some(Instant::from_secs_and_nanos(1515531081, 500_000_000))
        );
        assert_eq!(output.data, Some(Blob::new("hello")));
        assert_eq!(
            output.tags.into_iter().collect::<Vec<_>>(),
            vec![("a".to_string(), -1), ("b".to_string(), 2)]
        );
    }

    #[test]
    fn xml_structures_lists_and_maps() {
        let output: Outer = unmarshall_xml(
            r#"<Outer xmlns="https://example.com/doc">
                <name>top</name>
                <items><member>a</member><member>b</member></items>
                <Child><name>first</name></Child>
                <ignored><Child><name>nope</name></Child></ignored>
                <Child><name>second</name><count>2</count></Child>
                <tags><entry><key>k</key><value>7</value></entry></tags>
                <created>2018-01-09T20:51:21Z</created>
                <enabled>false</enabled>
            </Outer>"#,
        )
        .unwrap();
        assert_eq!(output.name.as_deref(), Some("top"));
        assert_eq!(output.items, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            output
                .children
                .iter()
                .map(|child| child.name.as_deref())
                .collect::<Vec<_>>(),
            vec![Some("first"), Some("second")]
        );
        assert_eq!(output.children[1].count, Some(2));
        assert_eq!(output.tags.get("k"), Some(&7));
        assert_eq!(output.created, Some(Instant::from_secs(1515531081)));
        assert_eq!(output.enabled, Some(false));
    }

    #[test]
    fn query_result_envelope() {
        let body = "<OuterResponse><OuterResult><name>inside</name></OuterResult>\
                    <ResponseMetadata><RequestId>abc</RequestId></ResponseMetadata></OuterResponse>";
        let output: Outer =
            unmarshall_with(XmlEventSource::new(body), Envelope::QUERY_RESULT).unwrap();
        assert_eq!(output.name.as_deref(), Some("inside"));

        // with the default envelope the result wrapper is an unknown member
        let output: Outer = unmarshall_xml(body).unwrap();
        assert_eq!(output.name, None);
    }

    #[test]
    fn decode_failures_name_the_field() {
        let err = unmarshall_json::<Outer>(br#"{"name":5}"#).unwrap_err();
        assert!(
            matches!(
                err,
                UnmarshallError::FieldDecodeFailure {
                    field: "name",
                    source: FieldError::TypeMismatch { .. }
                }
            ),
            "{:?}",
            err
        );

        let err = unmarshall_xml::<Outer>("<Outer><enabled>yes</enabled></Outer>").unwrap_err();
        assert!(matches!(
            err,
            UnmarshallError::FieldDecodeFailure {
                field: "enabled",
                source: FieldError::Malformed { .. }
            }
        ));

        let err = unmarshall_json::<Outer>(br#"{"inner":{"count":2147483648}}"#).unwrap_err();
        assert!(matches!(
            err,
            UnmarshallError::FieldDecodeFailure { field: "count", .. }
        ));

        let err = unmarshall_json::<Outer>(br#"{"items":"a"}"#).unwrap_err();
        assert!(matches!(
            err,
            UnmarshallError::FieldDecodeFailure { field: "items", .. }
        ));
    }

    #[test]
    fn out_of_range_numbers_fail() {
        for body in [&br#"{"created":1e300}"#[..], br#"{"created":-1e19}"#] {
            let err = unmarshall_json::<Outer>(body).unwrap_err();
            assert!(
                matches!(
                    err,
                    UnmarshallError::FieldDecodeFailure {
                        field: "created",
                        source: FieldError::Malformed { .. }
                    }
                ),
                "{:?}",
                err
            );
        }
        let err = unmarshall_xml::<Outer>("<Outer><created>1e300</created></Outer>").unwrap_err();
        assert!(matches!(
            err,
            UnmarshallError::FieldDecodeFailure { field: "created", .. }
        ));

        let err = unmarshall_json::<Outer>(br#"{"ratio":1e400}"#).unwrap_err();
        assert!(matches!(err, UnmarshallError::MalformedWireData { .. }));
    }

    #[test]
    fn malformed_documents_fail() {
        for body in [&br#"{"name":"a""#[..], br#"{"name":}"#, b"[}"] {
            let err = unmarshall_json::<Outer>(body).unwrap_err();
            assert!(
                matches!(err, UnmarshallError::MalformedWireData { .. }),
                "{:?}",
                err
            );
        }
        let err = unmarshall_xml::<Outer>("<Outer><name>a</Outer>").unwrap_err();
        assert!(matches!(err, UnmarshallError::MalformedWireData { .. }));
    }
}
