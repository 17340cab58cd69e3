/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::{diff, xml, ProtocolTestFailure};
use assert_json_diff::{assert_json_matches_no_panic, CompareMode, Config};
use serde_json::Value;

/// How a body should be compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    /// Semantic JSON equality
    Json,
    /// XML equality ignoring whitespace between elements and attribute order
    Xml,
    /// `application/x-www-form-urlencoded` equality ignoring parameter order
    UrlEncodedForm,
    /// Byte equality
    Other(String),
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(content_type: T) -> Self {
        match content_type.as_ref() {
            "application/json" | "application/x-amz-json-1.0" | "application/x-amz-json-1.1" => {
                MediaType::Json
            }
            "application/xml" | "text/xml" => MediaType::Xml,
            "application/x-www-form-urlencoded" => MediaType::UrlEncodedForm,
            other => MediaType::Other(other.to_owned()),
        }
    }
}

impl MediaType {
    fn label(&self) -> &'static str {
        match self {
            MediaType::Json => "JSON",
            MediaType::Xml => "XML",
            MediaType::UrlEncodedForm => "a form",
            MediaType::Other(_) => "bytes",
        }
    }
}

/// Checks that `actual` is equivalent to `expected` for the given media type.
pub fn validate_body(
    actual: impl AsRef<[u8]>,
    expected: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    let actual = actual.as_ref();
    if let MediaType::Other(_) = media_type {
        return if actual == expected.as_bytes() {
            Ok(())
        } else {
            Err(ProtocolTestFailure::BodyMismatch {
                diff: diff(&String::from_utf8_lossy(actual), expected),
                hint: "bytes differ".into(),
            })
        };
    }
    let text = std::str::from_utf8(actual).map_err(|err| ProtocolTestFailure::UnreadableBody {
        media_type: media_type.label(),
        reason: err.to_string(),
    })?;
    match media_type {
        MediaType::Json => json_equivalent(text, expected),
        MediaType::Xml => xml::xml_equivalent(text, expected),
        _ => form_equivalent(text, expected),
    }
}

fn parse_json(body: &str, which: &str) -> Result<Value, ProtocolTestFailure> {
    serde_json::from_str(body).map_err(|err| ProtocolTestFailure::UnreadableBody {
        media_type: "JSON",
        reason: format!("{which} body: {err}\n{body}"),
    })
}

fn json_equivalent(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    let actual = parse_json(actual, "actual")?;
    let expected = parse_json(expected, "expected")?;
    assert_json_matches_no_panic(&actual, &expected, Config::new(CompareMode::Strict)).map_err(
        |hint| ProtocolTestFailure::BodyMismatch {
            diff: diff(
                &serde_json::to_string_pretty(&actual).unwrap_or_default(),
                &serde_json::to_string_pretty(&expected).unwrap_or_default(),
            ),
            hint,
        },
    )
}

/// Form parameters one per line, sorted.
fn normalize_form(body: &str) -> String {
    let mut params: Vec<_> = body
        .split('&')
        .map(str::trim)
        .filter(|param| !param.is_empty())
        .collect();
    params.sort_unstable();
    params.join("\n")
}

fn form_equivalent(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    let (actual, expected) = (normalize_form(actual), normalize_form(expected));
    if actual == expected {
        Ok(())
    } else {
        Err(ProtocolTestFailure::BodyMismatch {
            diff: diff(&actual, &expected),
            hint: "form parameters differ".into(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::{validate_body, MediaType};
    use crate::ProtocolTestFailure;

    #[test]
    fn json_ignores_formatting_and_member_order() {
        let expected = r#"{"CertificateStatuses": ["ISSUED"], "MaxItems": 10}"#;
        validate_body(
            r#"{"MaxItems":10,"CertificateStatuses":["ISSUED"]}"#,
            expected,
            MediaType::Json,
        )
        .unwrap();
        validate_body(r#"{"MaxItems":10}"#, expected, MediaType::Json).unwrap_err();
    }

    #[test]
    fn unreadable_json() {
        let failure = validate_body("{", "{}", MediaType::Json).unwrap_err();
        assert!(matches!(
            failure,
            ProtocolTestFailure::UnreadableBody {
                media_type: "JSON",
                ..
            }
        ));
        assert!(matches!(
            validate_body(&b"\xff\xfe"[..], "{}", MediaType::Json),
            Err(ProtocolTestFailure::UnreadableBody { .. })
        ));
    }

    #[test]
    fn xml_ignores_indentation() {
        let expected = "<CreateHostedZoneRequest>
            <Name>example.com</Name>
        </CreateHostedZoneRequest>";
        validate_body(
            "<CreateHostedZoneRequest><Name>example.com</Name></CreateHostedZoneRequest>",
            expected,
            MediaType::Xml,
        )
        .unwrap();
        validate_body(
            "<CreateHostedZoneRequest><Name>example.org</Name></CreateHostedZoneRequest>",
            expected,
            MediaType::Xml,
        )
        .unwrap_err();
    }

    #[test]
    fn form_ignores_parameter_order() {
        let expected = "Action=DeleteDBInstance&Version=2014-10-31&DBInstanceIdentifier=db1";
        validate_body(
            "Version=2014-10-31&DBInstanceIdentifier=db1&Action=DeleteDBInstance",
            expected,
            MediaType::UrlEncodedForm,
        )
        .unwrap();
        validate_body("Action=DeleteDBInstance", expected, MediaType::UrlEncodedForm)
            .unwrap_err();
    }

    #[test]
    fn other_media_types_compare_bytes() {
        let octets = MediaType::from("application/octet-stream");
        assert_eq!(MediaType::Other("application/octet-stream".into()), octets);
        validate_body("raw", "raw", octets.clone()).unwrap();
        validate_body("raw ", "raw", octets).unwrap_err();
    }

    #[test]
    fn media_type_from_content_type() {
        assert_eq!(MediaType::from("application/x-amz-json-1.0"), MediaType::Json);
        assert_eq!(MediaType::from("text/xml"), MediaType::Xml);
        assert_eq!(
            MediaType::from("application/x-www-form-urlencoded"),
            MediaType::UrlEncodedForm
        );
    }
}
