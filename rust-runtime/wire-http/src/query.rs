/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Query string encoding.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

/// Everything except RFC 3986 unreserved characters.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes a query string key or value.
pub fn fmt_string(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, QUERY_SET).into()
}

/// Renders `params` as `k=v&k2=v2`, encoding each key and value.
pub fn render<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    for (key, value) in params {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(&fmt_string(key.as_ref()));
        out.push('=');
        out.push_str(&fmt_string(value.as_ref()));
    }
    out
}
