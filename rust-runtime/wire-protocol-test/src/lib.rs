/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Assertions for checking marshalled HTTP requests against expected query strings,
//! headers and bodies.
//!
//! Every check returns `Result<(), ProtocolTestFailure>` so several can be combined in one
//! test; [`assert_ok`] turns a failure into a panic with a readable diff.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

mod body;
mod headers;
mod query;
mod xml;

pub use body::{validate_body, MediaType};
pub use headers::validate_headers;
pub use query::{forbid_query_params, require_query_params, validate_query_string};

use pretty_assertions::Comparison;
use std::fmt;
use thiserror::Error;

/// A check on a marshalled request that did not hold.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    /// An expected `key=value` pair was not in the query string.
    #[error("query string lacks `{expected}` (it has {found:?})")]
    MissingQueryParam {
        /// The expected pair
        expected: String,
        /// Every pair that was present, sorted
        found: Vec<String>,
    },
    /// A key that must be absent was present.
    #[error("query string must not contain the key `{key}`")]
    ForbiddenQueryParam {
        /// The forbidden key
        key: String,
    },
    /// A key that must be present was absent.
    #[error("query string must contain the key `{key}`")]
    RequiredQueryParam {
        /// The required key
        key: String,
    },
    /// A header was present with the wrong value.
    #[error("header `{name}` is `{found}`, expected `{expected}`")]
    HeaderMismatch {
        /// Header name
        name: String,
        /// Expected value
        expected: String,
        /// Actual value, with repeated headers joined by `, `
        found: String,
    },
    /// A required header was absent.
    #[error("header `{name}` is missing")]
    MissingHeader {
        /// Header name
        name: String,
    },
    /// The body could not be read as the expected media type.
    #[error("body is not readable as {media_type}: {reason}")]
    UnreadableBody {
        /// Media type the body was expected to have
        media_type: &'static str,
        /// Why reading failed
        reason: String,
    },
    /// The body was readable but differs from the expected body.
    #[error("body differs (left: actual, right: expected)\n{diff}\n{hint}")]
    BodyMismatch {
        /// Side-by-side diff of the normalized bodies
        diff: Verbatim,
        /// Extra detail about the mismatch
        hint: String,
    },
}

/// Text that prints unquoted through both `Debug` and `Display`, which keeps multi-line
/// diffs legible inside test failures.
#[derive(Eq, PartialEq)]
pub struct Verbatim(String);

impl fmt::Debug for Verbatim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Verbatim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

struct Unquoted<'a>(&'a str);

impl fmt::Debug for Unquoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub(crate) fn diff(actual: &str, expected: &str) -> Verbatim {
    Verbatim(Comparison::new(&Unquoted(actual), &Unquoted(expected)).to_string())
}

/// Panics with the rendered failure if the check did not hold.
#[track_caller]
pub fn assert_ok(check: Result<(), ProtocolTestFailure>) {
    if let Err(failure) = check {
        panic!("protocol check failed: {failure}");
    }
}

#[cfg(test)]
mod test {
    use crate::{assert_ok, ProtocolTestFailure};

    #[test]
    fn assert_ok_passes_through_success() {
        assert_ok(Ok(()));
    }

    #[test]
    #[should_panic(expected = "header `x-amz-target` is missing")]
    fn assert_ok_panics_with_the_failure() {
        assert_ok(Err(ProtocolTestFailure::MissingHeader {
            name: "x-amz-target".into(),
        }));
    }
}
