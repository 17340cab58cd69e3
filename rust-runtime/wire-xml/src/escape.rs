/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::borrow::Cow;

const ESCAPES: &[char] = &[
    '&', '\'', '\"', '<', '>', '\u{00D}', '\u{00A}', '\u{0085}', '\u{2028}',
];

/// Escapes `s` for use in element text or an attribute value.
///
/// Line breaks are written as character references so they survive attribute
/// value normalization.
pub(crate) fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPES) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for chr in s.chars() {
        match chr {
            '>' => out.push_str("&gt;"),
            '<' => out.push_str("&lt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            // line breaks become hex character references
            other if ESCAPES.contains(&other) => {
                out.push_str(&format!("&#x{:X};", other as u32))
            }
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
