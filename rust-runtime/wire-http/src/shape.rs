/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Static descriptions of services, operations and structures.
//!
//! Shapes are plain data meant to live in `static` items next to the types they describe:
//!
//! ```
//! use wire_http::shape::{Location, Member, OperationShape, Protocol, ServiceShape};
//!
//! static SERVICE: ServiceShape = ServiceShape::new("Things", Protocol::RestJson1, "2020-01-01");
//! static GET_THING: OperationShape = OperationShape::new(
//!     &SERVICE,
//!     "GetThing",
//!     http::Method::GET,
//!     "/things/{thingName}",
//!     &[Member::new("thingName", Location::Label("thingName"))],
//! );
//! assert_eq!(GET_THING.member("thingName").map(|m| m.name), Some("thingName"));
//! ```

use wire_types::instant::Format;

/// The wire protocol a service speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// JSON RPC over `POST /`, dispatched by `X-Amz-Target`, version 1.0
    AwsJson1_0,
    /// JSON RPC over `POST /`, dispatched by `X-Amz-Target`, version 1.1
    AwsJson1_1,
    /// HTTP bindings with JSON payloads
    RestJson1,
    /// HTTP bindings with XML payloads
    RestXml,
    /// Form encoded requests with XML responses
    AwsQuery,
}

impl Protocol {
    /// Whether response bodies are JSON.
    pub fn is_json(&self) -> bool {
        matches!(
            self,
            Protocol::AwsJson1_0 | Protocol::AwsJson1_1 | Protocol::RestJson1
        )
    }

    /// Content type of a request body.
    pub fn content_type(&self) -> &'static str {
        match self {
            Protocol::AwsJson1_0 => "application/x-amz-json-1.0",
            Protocol::AwsJson1_1 => "application/x-amz-json-1.1",
            Protocol::RestJson1 => "application/json",
            Protocol::RestXml => "application/xml",
            Protocol::AwsQuery => "application/x-www-form-urlencoded; charset=utf-8",
        }
    }
}

/// A service: its protocol and the values every request carries.
#[derive(Debug)]
pub struct ServiceShape {
    /// Service name
    pub name: &'static str,
    /// Wire protocol
    pub protocol: Protocol,
    /// API version, sent as `Version` by `awsQuery`
    pub version: &'static str,
    /// Prefix of the `X-Amz-Target` header for the `awsJson` protocols
    pub target_prefix: &'static str,
    /// Namespace of `restXml` request payloads
    pub xml_namespace: Option<&'static str>,
}

impl ServiceShape {
    /// Creates a service shape without a target prefix or XML namespace.
    pub const fn new(name: &'static str, protocol: Protocol, version: &'static str) -> Self {
        ServiceShape {
            name,
            protocol,
            version,
            target_prefix: "",
            xml_namespace: None,
        }
    }

    /// Sets the `X-Amz-Target` prefix.
    pub const fn target_prefix(mut self, prefix: &'static str) -> Self {
        self.target_prefix = prefix;
        self
    }

    /// Sets the XML namespace of request payloads.
    pub const fn xml_namespace(mut self, namespace: &'static str) -> Self {
        self.xml_namespace = Some(namespace);
        self
    }
}

/// Where a request member is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Substituted into the `{name}` or `{name+}` placeholder of the URI template
    Label(&'static str),
    /// A query string parameter
    Query(&'static str),
    /// A header
    Header(&'static str),
    /// A map written as one header per entry, each named `prefix` + key
    PrefixHeaders(&'static str),
    /// A member of the serialized body
    Body,
}

/// A request member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    /// Member name, also its name in JSON, XML and query bodies
    pub name: &'static str,
    /// Where the member is written
    pub location: Location,
    /// Element name wrapping list items in XML and query bodies
    pub list_member: &'static str,
    /// Whether list items are written without a wrapping element
    pub flattened: bool,
}

impl Member {
    /// Creates a member with the default list layout.
    pub const fn new(name: &'static str, location: Location) -> Self {
        Member {
            name,
            location,
            list_member: "member",
            flattened: false,
        }
    }

    /// Overrides the element name wrapping list items.
    pub const fn list_member(mut self, name: &'static str) -> Self {
        self.list_member = name;
        self
    }

    /// Writes list items without a wrapping element.
    pub const fn flattened(mut self) -> Self {
        self.flattened = true;
        self
    }
}

/// An operation: how a request is sent.
#[derive(Debug)]
pub struct OperationShape {
    /// The service the operation belongs to
    pub service: &'static ServiceShape,
    /// Operation name
    pub name: &'static str,
    /// HTTP method
    pub method: http::Method,
    /// URI template, with `{Label}` or greedy `{Label+}` placeholders and an optional literal
    /// query string
    pub uri: &'static str,
    /// Request members, in the order they are written
    pub members: &'static [Member],
    /// Root element of `restXml` request payloads
    pub payload_root: Option<&'static str>,
}

impl OperationShape {
    /// Creates an operation shape.
    pub const fn new(
        service: &'static ServiceShape,
        name: &'static str,
        method: http::Method,
        uri: &'static str,
        members: &'static [Member],
    ) -> Self {
        OperationShape {
            service,
            name,
            method,
            uri,
            members,
            payload_root: None,
        }
    }

    /// Sets the root element of `restXml` request payloads.
    pub const fn payload_root(mut self, root: &'static str) -> Self {
        self.payload_root = Some(root);
        self
    }

    /// Looks up a request member by name.
    pub fn member(&self, name: &str) -> Option<&'static Member> {
        self.members.iter().find(|member| member.name == name)
    }

    /// The protocol of the owning service.
    pub fn protocol(&self) -> Protocol {
        self.service.protocol
    }
}

/// Number of wrapper levels between the start of a document and the members of the message.
///
/// JSON bodies wrap their members in the top level object and REST-XML bodies in the root
/// element, so both use [`Envelope::ROOT`]. `awsQuery` responses nest the result one level
/// deeper (`<OpResponse><OpResult>...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope {
    /// Wrapper levels
    pub levels: usize,
}

impl Envelope {
    /// One wrapper: the top level object or root element.
    pub const ROOT: Envelope = Envelope { levels: 1 };

    /// The `awsQuery` response and result wrappers.
    pub const QUERY_RESULT: Envelope = Envelope { levels: 2 };

    /// A custom number of wrapper levels.
    pub const fn new(levels: usize) -> Self {
        Envelope { levels }
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Envelope::ROOT
    }
}

/// The type of a response member.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    /// UTF-8 text
    String,
    /// 32-bit integer
    Integer,
    /// 64-bit integer
    Long,
    /// 64-bit float
    Double,
    /// `true` or `false`
    Boolean,
    /// Timestamp written in the given format
    Timestamp(Format),
    /// Base64 encoded bytes
    Blob,
    /// Ordered items
    List {
        /// Element wrapping each item in XML
        member: &'static str,
        /// Item type
        item: &'static Kind,
        /// Whether items repeat at the level of the list member itself
        flattened: bool,
    },
    /// String keyed entries
    Map {
        /// Value type
        value: &'static Kind,
    },
    /// A nested structure
    Structure(&'static StructureShape),
}

impl Kind {
    /// A wrapped list with `member` item elements.
    pub const fn list(item: &'static Kind) -> Kind {
        Kind::List {
            member: "member",
            item,
            flattened: false,
        }
    }

    /// Name of the kind, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Long => "long",
            Kind::Double => "double",
            Kind::Boolean => "boolean",
            Kind::Timestamp(_) => "timestamp",
            Kind::Blob => "blob",
            Kind::List { .. } => "list",
            Kind::Map { .. } => "map",
            Kind::Structure(_) => "structure",
        }
    }
}

/// Where a response member is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseLocation {
    /// A member of the body, by wire name
    Body(&'static str),
    /// A header
    Header(&'static str),
    /// All headers starting with the prefix, as a map keyed by the remainder of the name
    PrefixHeaders(&'static str),
    /// The HTTP status code
    StatusCode,
}

/// A response member.
#[derive(Debug)]
pub struct OutputMember {
    /// Name passed to [`Unmarshall::assign`](crate::unmarshall::Unmarshall::assign)
    pub name: &'static str,
    /// Where the member is read from
    pub location: ResponseLocation,
    /// Member type
    pub kind: Kind,
}

impl OutputMember {
    /// A body member whose wire name equals its name.
    pub const fn body(name: &'static str, kind: Kind) -> Self {
        OutputMember {
            name,
            location: ResponseLocation::Body(name),
            kind,
        }
    }

    /// A member read from `location`.
    pub const fn new(name: &'static str, location: ResponseLocation, kind: Kind) -> Self {
        OutputMember {
            name,
            location,
            kind,
        }
    }
}

/// A response structure.
#[derive(Debug)]
pub struct StructureShape {
    /// Structure name
    pub name: &'static str,
    /// Members
    pub members: &'static [OutputMember],
    /// Wrapper levels when the structure is the whole document
    pub envelope: Envelope,
}

impl StructureShape {
    /// Creates a structure shape read at [`Envelope::ROOT`].
    pub const fn new(name: &'static str, members: &'static [OutputMember]) -> Self {
        StructureShape {
            name,
            members,
            envelope: Envelope::ROOT,
        }
    }

    /// Overrides the document envelope.
    pub const fn envelope(mut self, envelope: Envelope) -> Self {
        self.envelope = envelope;
        self
    }

    /// Finds the body member with the given wire name.
    pub fn body_member(&self, wire_name: &str) -> Option<&'static OutputMember> {
        self.members
            .iter()
            .find(|member| {
                matches!(member.location, ResponseLocation::Body(name) if name == wire_name)
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static SERVICE: ServiceShape =
        ServiceShape::new("Widgets", Protocol::AwsJson1_1, "2015-12-08").target_prefix("Widgets");

    static LIST: OperationShape = OperationShape::new(
        &SERVICE,
        "ListWidgets",
        http::Method::POST,
        "/",
        &[
            Member::new("name", Location::Body),
            Member::new("maxItems", Location::Body),
        ],
    );

    static NESTED: StructureShape =
        StructureShape::new("Nested", &[OutputMember::body("value", Kind::String)]);

    static OUTPUT: StructureShape = StructureShape::new(
        "ListWidgetsResult",
        &[
            OutputMember::new("items", ResponseLocation::Body("Items"), Kind::list(&Kind::String)),
            OutputMember::new(
                "requestId",
                ResponseLocation::Header("x-amzn-requestid"),
                Kind::String,
            ),
            OutputMember::body("nested", Kind::Structure(&NESTED)),
        ],
    )
    .envelope(Envelope::QUERY_RESULT);

    #[test]
    fn lookups() {
        assert_eq!(LIST.member("maxItems").map(|m| m.location), Some(Location::Body));
        assert!(LIST.member("missing").is_none());
        assert_eq!(LIST.protocol(), Protocol::AwsJson1_1);
        assert_eq!(OUTPUT.body_member("Items").map(|m| m.name), Some("items"));
        assert!(OUTPUT.body_member("items").is_none());
        assert!(OUTPUT.body_member("x-amzn-requestid").is_none());
        assert_eq!(OUTPUT.envelope.levels, 2);
        assert_eq!(NESTED.envelope, Envelope::ROOT);
    }

    #[test]
    fn member_builders() {
        let member = Member::new("ids", Location::Body).list_member("Id").flattened();
        assert_eq!(member.list_member, "Id");
        assert!(member.flattened);
        assert_eq!(Member::new("ids", Location::Body).list_member, "member");
    }

    #[test]
    fn protocol_properties() {
        assert!(Protocol::RestJson1.is_json());
        assert!(!Protocol::AwsQuery.is_json());
        assert_eq!(
            Protocol::AwsJson1_0.content_type(),
            "application/x-amz-json-1.0"
        );
    }
}
