/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Utilities for writing values into and reading values out of HTTP headers

use http::header::{HeaderMap, HeaderName, HeaderValue};
use std::borrow::Cow;
use thiserror::Error;
use wire_types::instant::Format;
use wire_types::Instant;

/// A header value that could not be parsed.
#[derive(Debug, Error)]
#[error("invalid value in header `{header}`: {message}")]
pub struct ParseError {
    header: String,
    message: Cow<'static, str>,
}

impl ParseError {
    fn new(header: &str, message: impl Into<Cow<'static, str>>) -> Self {
        ParseError {
            header: header.to_string(),
            message: message.into(),
        }
    }
}

/// Read all comma / header delimited values from the header map at `key`
///
/// Values in double quotes may contain commas; `\"` and `\\` are unescaped inside them.
pub fn read_many(headers: &HeaderMap, key: &str) -> Result<Vec<String>, ParseError> {
    let mut out = vec![];
    for header in headers.get_all(key).iter() {
        let header = header
            .to_str()
            .map_err(|_| ParseError::new(key, "not visible ASCII"))?;
        let mut rest = header;
        while !rest.trim_start().is_empty() {
            let (value, next) = read_one(rest).map_err(|message| ParseError::new(key, message))?;
            out.push(value);
            rest = next;
        }
    }
    Ok(out)
}

/// Read all the dates from the header map at `key` according to `format`
///
/// This is separate from `read_many` because an HTTP date contains a comma of its own.
pub fn many_dates(
    headers: &HeaderMap,
    key: &str,
    format: Format,
) -> Result<Vec<Instant>, ParseError> {
    let mut out = vec![];
    for header in headers.get_all(key).iter() {
        let header = header
            .to_str()
            .map_err(|_| ParseError::new(key, "not visible ASCII"))?;
        let mut parts = header.split(',').map(str::trim).filter(|p| !p.is_empty());
        while let Some(first) = parts.next() {
            let value = match format {
                Format::HttpDate => match parts.next() {
                    Some(second) => format!("{}, {}", first, second),
                    None => return Err(ParseError::new(key, "truncated HTTP date")),
                },
                _ => first.to_string(),
            };
            out.push(
                Instant::from_str(&value, format)
                    .map_err(|err| ParseError::new(key, err.to_string()))?,
            );
        }
    }
    Ok(out)
}

/// Read one comma delimited value, returning it and the remaining input
fn read_one(s: &str) -> Result<(String, &str), &'static str> {
    let s = s.trim_start();
    if let Some(quoted) = s.strip_prefix('"') {
        let mut value = String::new();
        let mut chars = quoted.char_indices();
        while let Some((idx, c)) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some((_, escaped)) => value.push(escaped),
                    None => return Err("unterminated escape"),
                },
                '"' => return Ok((value, then_delim(&quoted[idx + 1..])?)),
                c => value.push(c),
            }
        }
        Err("unterminated quoted value")
    } else {
        let (head, rest) = split_at_delim(s);
        Ok((head.trim().to_string(), rest))
    }
}

fn split_at_delim(s: &str) -> (&str, &str) {
    match s.find(',') {
        Some(idx) => (&s[..idx], &s[idx + 1..]),
        None => (s, ""),
    }
}

fn then_delim(s: &str) -> Result<&str, &'static str> {
    let s = s.trim_start();
    if s.is_empty() {
        Ok(s)
    } else if let Some(rest) = s.strip_prefix(',') {
        Ok(rest)
    } else {
        Err("expected a comma after a quoted value")
    }
}

/// Quotes a list item if it contains a comma or a double quote.
pub fn quote_value(value: &str) -> Cow<'_, str> {
    if value.contains(|c: char| c == ',' || c == '"') {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('"');
        for c in value.chars() {
            if c == '"' || c == '\\' {
                quoted.push('\\');
            }
            quoted.push(c);
        }
        quoted.push('"');
        Cow::Owned(quoted)
    } else {
        Cow::Borrowed(value)
    }
}

/// Inserts `name: value`, appending to any value already present.
pub(crate) fn append(
    headers: &mut HeaderMap,
    name: &str,
    value: &str,
) -> Result<(), http::Error> {
    let name = HeaderName::from_bytes(name.as_bytes())?;
    let value = HeaderValue::from_str(value)?;
    headers.append(name, value);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_many_strings() {
        let test_request = http::Request::builder()
            .header("X-Multi", "a, b")
            .header("X-Multi", "c")
            .header("X-Quoted", r#""a,b", "say \"hi\"", c"#)
            .header("X-Bad-Quote", r#""open"#)
            .body(())
            .unwrap();
        assert_eq!(
            read_many(test_request.headers(), "X-Multi").expect("valid"),
            vec!["a", "b", "c"]
        );
        assert_eq!(
            read_many(test_request.headers(), "X-Quoted").expect("valid"),
            vec!["a,b", r#"say "hi""#, "c"]
        );
        assert!(read_many(test_request.headers(), "X-Missing")
            .unwrap()
            .is_empty());
        read_many(test_request.headers(), "X-Bad-Quote").expect_err("invalid");
    }

    #[test]
    fn read_many_dates() {
        let test_request = http::Request::builder()
            .header(
                "X-Dates",
                "Mon, 16 Dec 2019 23:48:18 GMT, Tue, 17 Dec 2019 23:48:18 GMT",
            )
            .header("X-Epoch", "1576540098,1576540099.5")
            .body(())
            .unwrap();
        assert_eq!(
            many_dates(test_request.headers(), "X-Dates", Format::HttpDate).expect("valid"),
            vec![
                Instant::from_secs(1576540098),
                Instant::from_secs(1576626498)
            ]
        );
        assert_eq!(
            many_dates(test_request.headers(), "X-Epoch", Format::EpochSeconds).expect("valid"),
            vec![
                Instant::from_secs(1576540098),
                Instant::from_secs_and_nanos(1576540099, 500_000_000)
            ]
        );
    }

    #[test]
    fn quoting_round_trips() {
        assert_eq!(quote_value("plain"), "plain");
        assert_eq!(quote_value("a,b"), r#""a,b""#);
        assert_eq!(quote_value(r#"say "hi""#), r#""say \"hi\"""#);

        let joined = ["a,b", "c", r#"x"y"#]
            .iter()
            .map(|v| quote_value(v))
            .collect::<Vec<_>>()
            .join(", ");
        let mut headers = HeaderMap::new();
        append(&mut headers, "X-List", &joined).unwrap();
        assert_eq!(
            read_many(&headers, "x-list").unwrap(),
            vec!["a,b", "c", r#"x"y"#]
        );
    }

    #[test]
    fn invalid_headers_are_rejected() {
        let mut headers = HeaderMap::new();
        assert!(append(&mut headers, "bad header", "v").is_err());
        assert!(append(&mut headers, "X-Ok", "line\nbreak").is_err());
    }
}
