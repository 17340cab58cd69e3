/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Substitution of `{Label}` placeholders in URI templates.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::borrow::Cow;
use std::fmt;

/// Characters percent-encoded in a label.
pub(crate) const BASE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    // sub-delims are legal in a path, but services and signing expect them encoded
    .add(b':')
    .add(b',')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'@')
    .add(b'!')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b';')
    .add(b'=')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'"')
    .add(b'^')
    .add(b'`')
    .add(b'\\');

/// Greedy labels span several path segments, so `/` is kept.
const GREEDY_SET: &AsciiSet = &BASE_SET.remove(b'/');

/// Percent-encodes a label value.
pub fn fmt_string(value: &str, greedy: bool) -> Cow<'_, str> {
    let set = if greedy { GREEDY_SET } else { BASE_SET };
    utf8_percent_encode(value, set).into()
}

/// A URI template with an unterminated placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTemplate {
    template: &'static str,
}

impl fmt::Display for InvalidTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unterminated label in URI template `{}`", self.template)
    }
}

impl std::error::Error for InvalidTemplate {}

/// A URI template split into its path and its literal query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    /// Path with `{Label}` placeholders
    pub path: &'static str,
    /// `a=b` / `flag` pairs after the `?`
    pub literal_query: Vec<(&'static str, &'static str)>,
}

impl UriTemplate {
    /// Splits `template` at its `?`.
    pub fn parse(template: &'static str) -> Self {
        let (path, query) = match template.split_once('?') {
            Some((path, query)) => (path, query),
            None => (template, ""),
        };
        let literal_query = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .collect();
        UriTemplate {
            path,
            literal_query,
        }
    }

    /// Substitutes every placeholder in the path with its encoded value.
    ///
    /// `value` returns the unencoded value of a label, or `None` when the label's member is absent,
    /// in which case the placeholder becomes an empty string.
    pub fn expand<'a>(
        &self,
        mut value: impl FnMut(&str) -> Option<Cow<'a, str>>,
    ) -> Result<String, InvalidTemplate> {
        let mut out = String::with_capacity(self.path.len());
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let end = rest[start..].find('}').ok_or(InvalidTemplate {
                template: self.path,
            })? + start;
            let label = &rest[start + 1..end];
            let (label, greedy) = match label.strip_suffix('+') {
                Some(label) => (label, true),
                None => (label, false),
            };
            match value(label) {
                Some(raw) => out.push_str(&fmt_string(&raw, greedy)),
                None => tracing::trace!(label, "absent label substituted with an empty string"),
            }
            rest = &rest[end + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(fmt_string("a b/c:d", false), "a%20b%2Fc%3Ad");
        assert_eq!(fmt_string("a b/c:d", true), "a%20b/c%3Ad");
        assert_eq!(fmt_string("plain-value_1.~", false), "plain-value_1.~");
        assert_eq!(fmt_string("ü", false), "%C3%BC");
    }

    #[test]
    fn splits_literal_query() {
        let template = UriTemplate::parse("/things/{thingName}?versions&mode=full");
        assert_eq!(template.path, "/things/{thingName}");
        assert_eq!(template.literal_query, vec![("versions", ""), ("mode", "full")]);
        assert!(UriTemplate::parse("/").literal_query.is_empty());
    }

    #[test]
    fn expands_labels() {
        let template = UriTemplate::parse("/things/{thingName}/shadow/{key+}");
        let path = template
            .expand(|label| match label {
                "thingName" => Some(Cow::Borrowed("my thing")),
                "key" => Some(Cow::Borrowed("a/b c")),
                _ => None,
            })
            .unwrap();
        assert_eq!(path, "/things/my%20thing/shadow/a/b%20c");
    }

    #[test]
    fn absent_labels_become_empty() {
        let template = UriTemplate::parse("/things/{thingName}/jobs");
        assert_eq!(template.expand(|_| None).unwrap(), "/things//jobs");
    }

    #[test]
    fn unterminated_label() {
        let template = UriTemplate::parse("/things/{thingName");
        assert!(template.expand(|_| None).is_err());
    }

    proptest::proptest! {
        #[test]
        fn labels_stay_in_one_segment(value in ".*") {
            let encoded = fmt_string(&value, false);
            proptest::prop_assert!(!encoded.contains('/'));
            let decoded = percent_encoding::percent_decode_str(&encoded).decode_utf8().unwrap();
            proptest::prop_assert_eq!(decoded, value.as_str());
        }
    }
}
