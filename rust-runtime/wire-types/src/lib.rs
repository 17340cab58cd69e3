/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Primitive types shared by every wire codec: timestamps, blobs, numbers, and the
//! string token conversions used for headers, query strings, and XML text.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

pub mod base64;
pub mod instant;
mod number;
pub mod primitive;

pub use crate::instant::Instant;
pub use crate::number::{Number, TryFromNumberError};

/// Binary data, transmitted as base64 text on every text-based wire format.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct Blob {
    bytes: Vec<u8>,
}

impl Blob {
    /// Wraps `bytes`.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// The wrapped bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}
