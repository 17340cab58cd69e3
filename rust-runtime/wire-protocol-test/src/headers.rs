/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::ProtocolTestFailure;
use http::Request;

/// Checks header values. A header sent several times is compared as its values joined by
/// `, `. Names are case-insensitive, values are not.
pub fn validate_headers<B>(
    request: &Request<B>,
    expected: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (name, value) in expected {
        let sent: Vec<_> = request
            .headers()
            .get_all(*name)
            .iter()
            .map(|value| value.to_str().unwrap_or("<opaque bytes>"))
            .collect();
        if sent.is_empty() {
            return Err(ProtocolTestFailure::MissingHeader {
                name: name.to_string(),
            });
        }
        let found = sent.join(", ");
        if found != *value {
            return Err(ProtocolTestFailure::HeaderMismatch {
                name: name.to_string(),
                expected: value.to_string(),
                found,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::validate_headers;
    use crate::ProtocolTestFailure;
    use http::Request;

    #[test]
    fn header_values() {
        let request = Request::builder()
            .uri("/")
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("x-amz-meta-tag", "a")
            .header("x-amz-meta-tag", "b")
            .body(())
            .unwrap();
        validate_headers(&request, &[("content-type", "application/x-amz-json-1.1")]).unwrap();
        validate_headers(&request, &[("x-amz-meta-tag", "a, b")]).unwrap();
        assert_eq!(
            validate_headers(&request, &[("x-amz-meta-tag", "a")]),
            Err(ProtocolTestFailure::HeaderMismatch {
                name: "x-amz-meta-tag".into(),
                expected: "a".into(),
                found: "a, b".into(),
            })
        );
        assert_eq!(
            validate_headers(&request, &[("x-amz-target", "Svc.Op")]),
            Err(ProtocolTestFailure::MissingHeader {
                name: "x-amz-target".into()
            })
        );
    }
}
