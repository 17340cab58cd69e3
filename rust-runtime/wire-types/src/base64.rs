/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Standard-alphabet, padded base64 used for blob fields.
//!
//! Decoding is strict: missing padding and characters outside the alphabet are errors.

/// Failure to decode a base64 string.
pub type DecodeError = base64_simd::Error;

/// Decodes base64 text into bytes.
pub fn decode(text: impl AsRef<str>) -> Result<Vec<u8>, DecodeError> {
    base64_simd::STANDARD.decode_to_vec(text.as_ref())
}

/// Encodes bytes as padded base64 text.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    base64_simd::STANDARD.encode_to_string(bytes)
}
