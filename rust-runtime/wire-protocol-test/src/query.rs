/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Query string checks. Pairs are compared in their percent-encoded form.

use crate::ProtocolTestFailure;
use http::Request;
use std::collections::BTreeSet;

/// The raw `key[=value]` pairs of the request's query string.
fn pairs<B>(request: &Request<B>) -> BTreeSet<&str> {
    request
        .uri()
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .collect()
}

fn keys<B>(request: &Request<B>) -> BTreeSet<&str> {
    pairs(request)
        .into_iter()
        .map(|pair| pair.split_once('=').map_or(pair, |(key, _)| key))
        .collect()
}

/// Checks that every `key=value` pair in `expected` is in the request's query string.
pub fn validate_query_string<B>(
    request: &Request<B>,
    expected: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let present = pairs(request);
    match expected.iter().find(|pair| !present.contains(**pair)) {
        None => Ok(()),
        Some(missing) => Err(ProtocolTestFailure::MissingQueryParam {
            expected: missing.to_string(),
            found: present.iter().map(|pair| pair.to_string()).collect(),
        }),
    }
}

/// Checks that none of `forbidden` appear as keys in the query string.
pub fn forbid_query_params<B>(
    request: &Request<B>,
    forbidden: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let present = keys(request);
    match forbidden.iter().find(|key| present.contains(**key)) {
        None => Ok(()),
        Some(key) => Err(ProtocolTestFailure::ForbiddenQueryParam {
            key: key.to_string(),
        }),
    }
}

/// Checks that all of `required` appear as keys in the query string.
pub fn require_query_params<B>(
    request: &Request<B>,
    required: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let present = keys(request);
    match required.iter().find(|key| !present.contains(**key)) {
        None => Ok(()),
        Some(key) => Err(ProtocolTestFailure::RequiredQueryParam {
            key: key.to_string(),
        }),
    }
}
