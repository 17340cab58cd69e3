/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Message marshalling: typed requests into [`WireFrame`]s.
//!
//! Members are visited in the order of their [`OperationShape`]. A member the request doesn't
//! hold is left out of every wire location; there are no empty or zero placeholders.

use crate::config::CodecSettings;
use crate::error::{BoxError, MarshallError};
use crate::frame::WireFrame;
use crate::header;
use crate::label::UriTemplate;
use crate::shape::{Location, Member, OperationShape, Protocol};
use crate::value::FieldValue;
use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::HeaderMap;
use std::borrow::Cow;
use tracing::{debug, trace};
use wire_json::serialize::{JsonObjectWriter, JsonValueWriter};
use wire_query::{QueryValueWriter, QueryWriter};
use wire_types::instant::Format;
use wire_types::primitive::Encoder;
use wire_types::{base64, Number};
use wire_xml::encode::{ScopeWriter, XmlWriter};

/// A request type that can be marshalled.
///
/// ```
/// use wire_http::marshall::Marshall;
/// use wire_http::shape::{Location, Member, OperationShape, Protocol, ServiceShape};
/// use wire_http::value::{FieldValue, ToFieldValue};
///
/// static SERVICE: ServiceShape =
///     ServiceShape::new("Widgets", Protocol::AwsJson1_1, "2015-12-08").target_prefix("Widgets");
/// static LIST_WIDGETS: OperationShape = OperationShape::new(
///     &SERVICE,
///     "ListWidgets",
///     http::Method::POST,
///     "/",
///     &[
///         Member::new("name", Location::Body),
///         Member::new("maxItems", Location::Body),
///     ],
/// );
///
/// struct ListWidgetsInput {
///     name: Option<String>,
///     max_items: Option<i32>,
/// }
///
/// impl Marshall for ListWidgetsInput {
///     fn shape() -> &'static OperationShape {
///         &LIST_WIDGETS
///     }
///
///     fn member(&self, name: &str) -> Option<FieldValue<'_>> {
///         match name {
///             "name" => self.name.as_ref().map(ToFieldValue::to_field_value),
///             "maxItems" => self.max_items.as_ref().map(ToFieldValue::to_field_value),
///             _ => None,
///         }
///     }
/// }
///
/// let input = ListWidgetsInput { name: Some("widget-1".into()), max_items: None };
/// let frame = input.marshall().unwrap();
/// assert_eq!(frame.body.as_ref(), br#"{"name":"widget-1"}"#);
/// assert_eq!(frame.header("x-amz-target"), Some("Widgets.ListWidgets"));
/// ```
pub trait Marshall {
    /// Shape of the operation this request is sent to.
    fn shape() -> &'static OperationShape;

    /// Value of the member `name`, or `None` when the request doesn't hold it.
    fn member(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Marshalls the request with the settings of its protocol.
    fn marshall(&self) -> Result<WireFrame, MarshallError>
    where
        Self: Sized,
    {
        crate::marshall::marshall(Some(self))
    }
}

/// Marshalls `request` with the settings of its protocol.
pub fn marshall<T: Marshall>(request: Option<&T>) -> Result<WireFrame, MarshallError> {
    marshall_with(request, &CodecSettings::for_protocol(T::shape().protocol()))
}

/// Marshalls `request` with explicit codec settings.
///
/// Fails with [`MarshallError::InvalidRequest`] when `request` is `None`, before anything else is
/// done.
pub fn marshall_with<T: Marshall>(
    request: Option<&T>,
    settings: &CodecSettings,
) -> Result<WireFrame, MarshallError> {
    let request = request.ok_or(MarshallError::InvalidRequest)?;
    let shape = T::shape();
    let mut present = Vec::with_capacity(shape.members.len());
    for member in shape.members {
        match request.member(member.name) {
            Some(value) => present.push((member, value)),
            None => trace!(
                operation = shape.name,
                member = member.name,
                "omitting absent member"
            ),
        }
    }
    let frame = build_frame(shape, &present, settings)
        .map_err(|err| MarshallError::failure(shape.name, err))?;
    debug!(
        operation = shape.name,
        method = %frame.method,
        path = %frame.path,
        body_len = frame.body.len(),
        "marshalled request"
    );
    Ok(frame)
}

type Present<'a> = [(&'static Member, FieldValue<'a>)];

fn build_frame(
    shape: &'static OperationShape,
    present: &Present<'_>,
    settings: &CodecSettings,
) -> Result<WireFrame, BoxError> {
    let template = UriTemplate::parse(shape.uri);
    let mut labels = Vec::new();
    for (member, value) in present {
        if let Location::Label(label) = member.location {
            labels.push((label, scalar_string(value, settings.label_timestamp)?));
        }
    }
    let path = template.expand(|label| {
        labels
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, value)| value.clone())
    })?;

    let mut frame = WireFrame::new(shape.method.clone(), path);
    frame.query.extend(
        template
            .literal_query
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string())),
    );
    let mut body_members = Vec::new();
    for (member, value) in present {
        match member.location {
            Location::Label(_) => {}
            Location::Query(name) => {
                write_query_param(&mut frame.query, name, value, settings.query_timestamp)?
            }
            Location::Header(name) => {
                write_header(&mut frame.headers, name, value, settings.header_timestamp)?
            }
            Location::PrefixHeaders(prefix) => {
                write_prefix_headers(&mut frame.headers, prefix, value, settings.header_timestamp)?
            }
            Location::Body => body_members.push((*member, value.clone())),
        }
    }

    let protocol = shape.protocol();
    let body = match protocol {
        Protocol::AwsJson1_0 | Protocol::AwsJson1_1 => {
            let target = format!("{}.{}", shape.service.target_prefix, shape.name);
            header::append(&mut frame.headers, "x-amz-target", &target)?;
            Some(json_body(&body_members, settings.body_timestamp)?)
        }
        Protocol::RestJson1 if body_members.is_empty() => None,
        Protocol::RestJson1 => Some(json_body(&body_members, settings.body_timestamp)?),
        Protocol::RestXml if body_members.is_empty() => None,
        Protocol::RestXml => {
            let default_root;
            let root: &str = match shape.payload_root {
                Some(root) => root,
                None => {
                    default_root = format!("{}Request", shape.name);
                    &default_root
                }
            };
            Some(xml_body(
                root,
                shape.service.xml_namespace,
                &body_members,
                settings.body_timestamp,
            )?)
        }
        Protocol::AwsQuery => Some(query_body(shape, &body_members, settings.body_timestamp)?),
    };
    if let Some(body) = body {
        header::append(&mut frame.headers, CONTENT_TYPE.as_str(), protocol.content_type())?;
        header::append(
            &mut frame.headers,
            CONTENT_LENGTH.as_str(),
            &body.len().to_string(),
        )?;
        frame.body = Bytes::from(body);
    }
    Ok(frame)
}

/// Text of a scalar, as written into a label, a query string, or a header.
fn scalar_string<'a>(value: &FieldValue<'a>, format: Format) -> Result<Cow<'a, str>, BoxError> {
    Ok(match value {
        FieldValue::String(value) => Cow::Borrowed(*value),
        FieldValue::Integer(value) => Cow::Owned(Encoder::from(*value).encode().to_string()),
        FieldValue::Double(value) => Cow::Owned(Encoder::from(*value).encode().to_string()),
        FieldValue::Boolean(value) => Cow::Owned(Encoder::from(*value).encode().to_string()),
        FieldValue::Timestamp(value) => Cow::Owned(value.fmt(format)?),
        FieldValue::Blob(value) => Cow::Owned(base64::encode(value)),
        other => return Err(format!("a {} cannot be written as text", other.kind()).into()),
    })
}

fn write_query_param(
    query: &mut Vec<(String, String)>,
    name: &str,
    value: &FieldValue<'_>,
    format: Format,
) -> Result<(), BoxError> {
    match value {
        FieldValue::List(items) => {
            for item in items.iter().flatten() {
                query.push((name.to_string(), scalar_string(item, format)?.into_owned()));
            }
        }
        // a map bound to the query string contributes one parameter per entry
        FieldValue::Map(entries) => {
            for (key, value) in entries {
                write_query_param(query, key, value, format)?;
            }
        }
        scalar => query.push((name.to_string(), scalar_string(scalar, format)?.into_owned())),
    }
    Ok(())
}

fn write_header(
    headers: &mut HeaderMap,
    name: &str,
    value: &FieldValue<'_>,
    format: Format,
) -> Result<(), BoxError> {
    let text = match value {
        FieldValue::List(items) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items.iter().flatten() {
                let text = scalar_string(item, format)?;
                // HTTP dates carry a comma of their own and are never quoted
                values.push(match item {
                    FieldValue::Timestamp(_) => text,
                    _ => Cow::Owned(header::quote_value(&text).into_owned()),
                });
            }
            values.join(", ")
        }
        scalar => scalar_string(scalar, format)?.into_owned(),
    };
    header::append(headers, name, &text)?;
    Ok(())
}

fn write_prefix_headers(
    headers: &mut HeaderMap,
    prefix: &str,
    value: &FieldValue<'_>,
    format: Format,
) -> Result<(), BoxError> {
    match value {
        FieldValue::Map(entries) => {
            for (key, value) in entries {
                write_header(headers, &format!("{}{}", prefix, key), value, format)?;
            }
            Ok(())
        }
        other => Err(format!("prefixed headers need a map, not a {}", other.kind()).into()),
    }
}

fn integer(value: i64) -> Number {
    if value < 0 {
        Number::NegInt(value)
    } else {
        Number::PosInt(value as u64)
    }
}

fn json_body(members: &Present<'_>, format: Format) -> Result<String, BoxError> {
    let mut out = String::new();
    let mut object = JsonObjectWriter::new(&mut out);
    for (member, value) in members {
        write_json(object.key(member.name), value, format)?;
    }
    object.finish();
    Ok(out)
}

fn write_json(
    writer: JsonValueWriter<'_>,
    value: &FieldValue<'_>,
    format: Format,
) -> Result<(), BoxError> {
    match value {
        FieldValue::String(value) => writer.string(value),
        FieldValue::Integer(value) => writer.number(integer(*value)),
        FieldValue::Double(value) if value.is_finite() => writer.number(Number::Float(*value)),
        // JSON has no literal for these
        FieldValue::Double(value) => writer.string(Encoder::from(*value).encode()),
        FieldValue::Boolean(value) => writer.boolean(*value),
        FieldValue::Timestamp(value) => writer.instant(value, format)?,
        FieldValue::Blob(value) => writer.string(&base64::encode(value)),
        FieldValue::List(items) => {
            let mut array = writer.start_array();
            for item in items.iter().flatten() {
                write_json(array.value(), item, format)?;
            }
            array.finish();
        }
        FieldValue::Map(entries) => {
            let mut object = writer.start_object();
            for (key, value) in entries {
                write_json(object.key(key), value, format)?;
            }
            object.finish();
        }
        FieldValue::Struct(members) => {
            let mut object = writer.start_object();
            for (name, value) in members {
                write_json(object.key(name), value, format)?;
            }
            object.finish();
        }
    }
    Ok(())
}

fn xml_body(
    root: &str,
    namespace: Option<&str>,
    members: &Present<'_>,
    format: Format,
) -> Result<String, BoxError> {
    let mut out = String::new();
    let mut writer = XmlWriter::new(&mut out);
    let mut start = writer.start_el(root);
    if let Some(namespace) = namespace {
        start = start.write_ns(namespace, None);
    }
    let mut scope = start.finish();
    for (member, value) in members {
        match value {
            FieldValue::List(items) if member.flattened => {
                for item in items.iter().flatten() {
                    write_xml_value(&mut scope, member.name, item, format)?;
                }
            }
            FieldValue::List(items) => {
                let mut list = scope.start_el(member.name).finish();
                for item in items.iter().flatten() {
                    write_xml_value(&mut list, member.list_member, item, format)?;
                }
                list.finish();
            }
            value => write_xml_value(&mut scope, member.name, value, format)?,
        }
    }
    scope.finish();
    Ok(out)
}

fn write_xml_value(
    scope: &mut ScopeWriter<'_, '_>,
    tag: &str,
    value: &FieldValue<'_>,
    format: Format,
) -> Result<(), BoxError> {
    match value {
        FieldValue::List(items) => {
            let mut list = scope.start_el(tag).finish();
            for item in items.iter().flatten() {
                write_xml_value(&mut list, "member", item, format)?;
            }
            list.finish();
        }
        FieldValue::Map(entries) => {
            let mut map = scope.start_el(tag).finish();
            for (key, value) in entries {
                let mut entry = map.start_el("entry").finish();
                let mut key_el = entry.start_el("key").finish();
                key_el.data(key);
                key_el.finish();
                write_xml_value(&mut entry, "value", value, format)?;
                entry.finish();
            }
            map.finish();
        }
        FieldValue::Struct(members) => {
            let mut nested = scope.start_el(tag).finish();
            for (name, value) in members {
                write_xml_value(&mut nested, name, value, format)?;
            }
            nested.finish();
        }
        scalar => {
            let text = scalar_string(scalar, format)?;
            let mut el = scope.start_el(tag).finish();
            el.data(&text);
            el.finish();
        }
    }
    Ok(())
}

fn query_body(
    shape: &OperationShape,
    members: &Present<'_>,
    format: Format,
) -> Result<String, BoxError> {
    let mut out = String::new();
    let mut writer = QueryWriter::new(&mut out, shape.name, shape.service.version);
    for (member, value) in members {
        write_query_value(
            writer.prefix(member.name),
            member.list_member,
            member.flattened,
            value,
            format,
        )?;
    }
    writer.finish();
    Ok(out)
}

fn write_query_value(
    writer: QueryValueWriter<'_>,
    list_member: &'static str,
    flattened: bool,
    value: &FieldValue<'_>,
    format: Format,
) -> Result<(), BoxError> {
    match value {
        FieldValue::String(value) => writer.string(value),
        FieldValue::Integer(value) => writer.number(integer(*value)),
        FieldValue::Double(value) => writer.number(Number::Float(*value)),
        FieldValue::Boolean(value) => writer.boolean(*value),
        FieldValue::Timestamp(value) => writer.instant(value, format)?,
        FieldValue::Blob(value) => writer.string(&base64::encode(value)),
        FieldValue::List(items) => {
            let mut list = writer.start_list(flattened, Some(list_member));
            for item in items.iter().flatten() {
                write_query_value(list.entry(), "member", false, item, format)?;
            }
            list.finish();
        }
        FieldValue::Map(entries) => {
            let mut map = writer.start_map(flattened, None, None);
            for (key, value) in entries {
                write_query_value(map.entry(key), "member", false, value, format)?;
            }
            map.finish();
        }
        FieldValue::Struct(members) => {
            let mut writer = writer;
            for (name, value) in members {
                write_query_value(writer.prefix(name), "member", false, value, format)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shape::ServiceShape;
    use crate::value::ToFieldValue;
    use http::Method;
    use std::collections::BTreeMap;
    use std::error::Error as _;
    use wire_protocol_test::{
        assert_ok, forbid_query_params, validate_body, validate_headers, validate_query_string,
        MediaType,
    };
    use wire_types::{Blob, Instant};

    #[derive(Default)]
    struct ListWidgets {
        name: Option<String>,
        max_items: Option<i32>,
        tags: Option<Vec<String>>,
        created_after: Option<Instant>,
        metadata: Option<BTreeMap<String, String>>,
        ratio: Option<f64>,
        payload: Option<Blob>,
    }

    fn list_widgets_member<'a>(request: &'a ListWidgets, name: &str) -> Option<FieldValue<'a>> {
        match name {
            "name" => request.name.as_ref().map(ToFieldValue::to_field_value),
            "maxItems" => request.max_items.as_ref().map(ToFieldValue::to_field_value),
            "tags" => request.tags.as_ref().map(ToFieldValue::to_field_value),
            "createdAfter" => request.created_after.as_ref().map(ToFieldValue::to_field_value),
            "metadata" => request.metadata.as_ref().map(ToFieldValue::to_field_value),
            "ratio" => request.ratio.as_ref().map(ToFieldValue::to_field_value),
            "payload" => request.payload.as_ref().map(ToFieldValue::to_field_value),
            _ => None,
        }
    }

    static JSON_SERVICE: ServiceShape =
        ServiceShape::new("Widgets", Protocol::AwsJson1_1, "2015-12-08").target_prefix("Widgets");

    static JSON_OP: OperationShape = OperationShape::new(
        &JSON_SERVICE,
        "ListWidgets",
        Method::POST,
        "/",
        &[
            Member::new("name", Location::Body),
            Member::new("maxItems", Location::Body),
            Member::new("tags", Location::Body),
            Member::new("createdAfter", Location::Body),
            Member::new("ratio", Location::Body),
            Member::new("payload", Location::Body),
        ],
    );

    struct JsonRequest(ListWidgets);

    impl Marshall for JsonRequest {
        fn shape() -> &'static OperationShape {
            &JSON_OP
        }

        fn member(&self, name: &str) -> Option<FieldValue<'_>> {
            list_widgets_member(&self.0, name)
        }
    }

    static REST_SERVICE: ServiceShape =
        ServiceShape::new("Widgets", Protocol::RestJson1, "2015-12-08");

    static REST_OP: OperationShape = OperationShape::new(
        &REST_SERVICE,
        "ListWidgets",
        Method::GET,
        "/widgets/{name}?list",
        &[
            Member::new("name", Location::Label("name")),
            Member::new("maxItems", Location::Query("maxItems")),
            Member::new("tags", Location::Query("tag")),
            Member::new("createdAfter", Location::Header("X-Created-After")),
            Member::new("metadata", Location::PrefixHeaders("X-Meta-")),
            Member::new("ratio", Location::Body),
        ],
    );

    struct RestRequest(ListWidgets);

    impl Marshall for RestRequest {
        fn shape() -> &'static OperationShape {
            &REST_OP
        }

        fn member(&self, name: &str) -> Option<FieldValue<'_>> {
            list_widgets_member(&self.0, name)
        }
    }

    static XML_SERVICE: ServiceShape = ServiceShape::new("Widgets", Protocol::RestXml, "2013-04-01")
        .xml_namespace("https://widgets.amazonaws.com/doc/2013-04-01/");

    static XML_OP: OperationShape = OperationShape::new(
        &XML_SERVICE,
        "CreateWidget",
        Method::POST,
        "/2013-04-01/widget",
        &[
            Member::new("name", Location::Body),
            Member::new("tags", Location::Body).list_member("Tag"),
            Member::new("metadata", Location::Body),
            Member::new("createdAfter", Location::Body),
        ],
    )
    .payload_root("CreateWidgetRequest");

    struct XmlRequest(ListWidgets);

    impl Marshall for XmlRequest {
        fn shape() -> &'static OperationShape {
            &XML_OP
        }

        fn member(&self, name: &str) -> Option<FieldValue<'_>> {
            list_widgets_member(&self.0, name)
        }
    }

    static QUERY_SERVICE: ServiceShape =
        ServiceShape::new("Widgets", Protocol::AwsQuery, "2014-10-31");

    static QUERY_OP: OperationShape = OperationShape::new(
        &QUERY_SERVICE,
        "ListWidgets",
        Method::POST,
        "/",
        &[
            Member::new("name", Location::Body),
            Member::new("maxItems", Location::Body),
            Member::new("tags", Location::Body).list_member("Tag"),
            Member::new("createdAfter", Location::Body),
        ],
    );

    struct QueryRequest(ListWidgets);

    impl Marshall for QueryRequest {
        fn shape() -> &'static OperationShape {
            &QUERY_OP
        }

        fn member(&self, name: &str) -> Option<FieldValue<'_>> {
            list_widgets_member(&self.0, name)
        }
    }

    fn widget_1() -> ListWidgets {
        ListWidgets {
            name: Some("widget-1".to_string()),
            ..Default::default()
        }
    }

    fn render(frame: WireFrame) -> http::Request<Bytes> {
        frame
            .into_http_request(&"https://widgets.amazonaws.com".parse().unwrap())
            .unwrap()
    }

    #[test]
    fn absent_request_is_invalid() {
        let err = marshall::<JsonRequest>(None).unwrap_err();
        assert!(matches!(err, MarshallError::InvalidRequest));
    }

    #[test]
    fn absent_members_are_omitted() {
        let frame = JsonRequest(widget_1()).marshall().unwrap();
        assert_eq!(frame.method, Method::POST);
        assert_eq!(frame.path, "/");
        assert_ok(validate_body(&frame.body, r#"{"name":"widget-1"}"#, MediaType::Json));
        let request = render(frame);
        assert_ok(validate_headers(
            &request,
            &[
                ("content-type", "application/x-amz-json-1.1"),
                ("x-amz-target", "Widgets.ListWidgets"),
                ("content-length", "19"),
            ],
        ));

        let frame = QueryRequest(widget_1()).marshall().unwrap();
        assert_ok(validate_body(
            &frame.body,
            "Action=ListWidgets&Version=2014-10-31&name=widget-1",
            MediaType::UrlEncodedForm,
        ));
        assert!(!std::str::from_utf8(&frame.body).unwrap().contains("maxItems"));
    }

    #[test]
    fn json_body_values() {
        let request = JsonRequest(ListWidgets {
            max_items: Some(-3),
            tags: Some(vec!["a".into(), "b".into()]),
            created_after: Some(Instant::from_secs_and_nanos(1576540098, 500_000_000)),
            ratio: Some(f64::NEG_INFINITY),
            payload: Some(Blob::new("hello")),
            ..Default::default()
        });
        let frame = request.marshall().unwrap();
        assert_ok(validate_body(
            &frame.body,
            r#"{"maxItems":-3,"tags":["a","b"],"createdAfter":1576540098.5,"ratio":"-Infinity","payload":"aGVsbG8="}"#,
            MediaType::Json,
        ));
    }

    #[test]
    fn empty_json_request_is_an_empty_object() {
        let frame = JsonRequest(ListWidgets::default()).marshall().unwrap();
        assert_eq!(frame.body.as_ref(), b"{}");
    }

    #[test]
    fn rest_bindings() {
        let mut metadata = BTreeMap::new();
        metadata.insert("Color".to_string(), "blue".to_string());
        let request = RestRequest(ListWidgets {
            name: Some("my widget/1".into()),
            max_items: Some(10),
            tags: Some(vec!["a".into(), "b c".into()]),
            created_after: Some(Instant::from_secs(1576540098)),
            metadata: Some(metadata),
            ..Default::default()
        });
        let frame = request.marshall().unwrap();
        assert_eq!(frame.path, "/widgets/my%20widget%2F1");
        // no body members are set
        assert!(frame.body.is_empty());
        assert!(frame.header("content-type").is_none());
        let request = render(frame);
        assert_eq!(request.method(), Method::GET);
        assert_ok(validate_query_string(
            &request,
            &["list=", "maxItems=10", "tag=a", "tag=b%20c"],
        ));
        assert_ok(validate_headers(
            &request,
            &[
                ("X-Created-After", "Mon, 16 Dec 2019 23:48:18 GMT"),
                ("X-Meta-Color", "blue"),
            ],
        ));
    }

    #[test]
    fn rest_absent_label_and_query() {
        let frame = RestRequest(ListWidgets {
            ratio: Some(0.5),
            ..Default::default()
        })
        .marshall()
        .unwrap();
        assert_eq!(frame.path, "/widgets/");
        assert_ok(validate_body(&frame.body, r#"{"ratio":0.5}"#, MediaType::Json));
        assert_eq!(frame.header("content-type"), Some("application/json"));
        let request = render(frame);
        assert_ok(forbid_query_params(&request, &["maxItems", "tag"]));
    }

    #[test]
    fn xml_payload() {
        let mut metadata = BTreeMap::new();
        metadata.insert("k".to_string(), "v & w".to_string());
        let frame = XmlRequest(ListWidgets {
            name: Some("widget-1".into()),
            tags: Some(vec!["a".into(), "b".into()]),
            metadata: Some(metadata),
            created_after: Some(Instant::from_secs(1576540098)),
            ..Default::default()
        })
        .marshall()
        .unwrap();
        assert_eq!(frame.header("content-type"), Some("application/xml"));
        assert_ok(validate_body(
            &frame.body,
            r#"<CreateWidgetRequest xmlns="https://widgets.amazonaws.com/doc/2013-04-01/">
                <name>widget-1</name>
                <tags><Tag>a</Tag><Tag>b</Tag></tags>
                <metadata><entry><key>k</key><value>v &amp; w</value></entry></metadata>
                <createdAfter>2019-12-16T23:48:18Z</createdAfter>
            </CreateWidgetRequest>"#,
            MediaType::Xml,
        ));
    }

    #[test]
    fn query_body_lists() {
        let frame = QueryRequest(ListWidgets {
            max_items: Some(5),
            tags: Some(vec!["a".into(), "b".into()]),
            created_after: Some(Instant::from_secs(1576540098)),
            ..Default::default()
        })
        .marshall()
        .unwrap();
        assert_eq!(
            frame.header("content-type"),
            Some("application/x-www-form-urlencoded; charset=utf-8")
        );
        assert_ok(validate_body(
            &frame.body,
            "Action=ListWidgets&Version=2014-10-31&maxItems=5&tags.Tag.1=a&tags.Tag.2=b\
             &createdAfter=2019-12-16T23%3A48%3A18Z",
            MediaType::UrlEncodedForm,
        ));
    }

    #[test]
    fn unformattable_instants_fail_marshalling() {
        let request = JsonRequest(ListWidgets {
            created_after: Some(Instant::from_secs(i64::MAX)),
            ..Default::default()
        });
        let settings = CodecSettings::for_protocol(Protocol::AwsJson1_1)
            .with_body_timestamp(Format::DateTime);
        let err = marshall_with(Some(&request), &settings).unwrap_err();
        assert!(matches!(
            err,
            MarshallError::MarshallingFailure {
                operation: "ListWidgets",
                ..
            }
        ));
        assert!(err.source().is_some());
    }

    #[test]
    fn sparse_lists_skip_absent_items() {
        static SPARSE_OP: OperationShape = OperationShape::new(
            &JSON_SERVICE,
            "PutItems",
            Method::POST,
            "/",
            &[Member::new("items", Location::Body)],
        );
        struct Sparse(Vec<Option<String>>);
        impl Marshall for Sparse {
            fn shape() -> &'static OperationShape {
                &SPARSE_OP
            }

            fn member(&self, name: &str) -> Option<FieldValue<'_>> {
                match name {
                    "items" => Some(FieldValue::sparse_list(&self.0)),
                    _ => None,
                }
            }
        }
        let frame = Sparse(vec![Some("a".into()), None, Some("c".into())])
            .marshall()
            .unwrap();
        assert_ok(validate_body(&frame.body, r#"{"items":["a","c"]}"#, MediaType::Json));
    }
}
