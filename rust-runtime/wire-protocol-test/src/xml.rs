/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::{diff, ProtocolTestFailure};
use roxmltree::{Document, Node};
use std::fmt::{self, Write};
use wire_xml::decode::xml_events;

/// Compares two documents structurally.
///
/// Whitespace-only text between elements is ignored, other text is trimmed, and
/// attributes are compared without regard to their order. Namespaces are significant.
pub(crate) fn xml_equivalent(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    let (actual, expected) = (canonical(actual, "actual")?, canonical(expected, "expected")?);
    if actual == expected {
        Ok(())
    } else {
        Err(ProtocolTestFailure::BodyMismatch {
            diff: diff(&actual, &expected),
            hint: String::new(),
        })
    }
}

/// One tag or text run per line, indented by depth.
fn canonical(document: &str, which: &str) -> Result<String, ProtocolTestFailure> {
    let unreadable = |err: &dyn fmt::Display| ProtocolTestFailure::UnreadableBody {
        media_type: "XML",
        reason: format!("{which} body: {err}\n{document}"),
    };
    // roxmltree accepts a root element that is never closed
    for event in xml_events(document) {
        event.map_err(|err| unreadable(&err))?;
    }
    let tree = Document::parse(document).map_err(|err| unreadable(&err))?;
    let mut out = String::new();
    render(tree.root_element(), 0, &mut out);
    Ok(out)
}

fn qualified(namespace: Option<&str>, name: &str) -> String {
    match namespace {
        Some(namespace) => format!("{{{namespace}}}{name}"),
        None => name.to_owned(),
    }
}

fn render(node: Node<'_, '_>, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    if node.is_text() {
        let text = node.text().unwrap_or_default().trim();
        if !text.is_empty() {
            let _ = writeln!(out, "{indent}{text}");
        }
        return;
    }
    if !node.is_element() {
        return;
    }
    let name = qualified(node.tag_name().namespace(), node.tag_name().name());
    let mut attributes: Vec<_> = node
        .attributes()
        .iter()
        .map(|attr| format!(" {}={:?}", qualified(attr.namespace(), attr.name()), attr.value()))
        .collect();
    attributes.sort();
    let _ = writeln!(out, "{indent}<{name}{}>", attributes.concat());
    for child in node.children() {
        render(child, depth + 1, out);
    }
    let _ = writeln!(out, "{indent}</{name}>");
}
