/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Conversions between primitive values and the string tokens used on the wire.
//!
//! Headers, query strings, path labels, form bodies, and XML text all carry scalars as text.
//! [`Parse`] reads such a token strictly: malformed or out-of-range input is an error, never a
//! default. [`Encoder`] produces the canonical token for a value.
//!
//! ```
//! use wire_types::primitive::{Encoder, Parse};
//! let token = Encoder::from(-42_i64).encode().to_owned();
//! assert_eq!(i64::parse_wire_token(&token).unwrap(), -42);
//! assert!(i32::parse_wire_token("12ab").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

enum Inner {
    Bool(bool),
    I8(i8, itoa::Buffer),
    I16(i16, itoa::Buffer),
    I32(i32, itoa::Buffer),
    I64(i64, itoa::Buffer),
    F32(f32, ryu::Buffer),
    F64(f64, ryu::Buffer),
}

/// Primitive value encoder.
///
/// Floats encode `NaN`, `Infinity`, and `-Infinity` as those literal tokens.
pub struct Encoder {
    value: Inner,
}

impl fmt::Debug for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut encoder = f.debug_tuple("Encoder");
        match &self.value {
            Inner::Bool(v) => encoder.field(v),
            Inner::I8(v, _) => encoder.field(v),
            Inner::I16(v, _) => encoder.field(v),
            Inner::I32(v, _) => encoder.field(v),
            Inner::I64(v, _) => encoder.field(v),
            Inner::F32(v, _) => encoder.field(v),
            Inner::F64(v, _) => encoder.field(v),
        };
        encoder.finish()
    }
}

impl Encoder {
    /// Encodes the value as a wire token.
    pub fn encode(&mut self) -> &str {
        match &mut self.value {
            Inner::Bool(true) => "true",
            Inner::Bool(false) => "false",
            Inner::I8(v, buf) => buf.format(*v),
            Inner::I16(v, buf) => buf.format(*v),
            Inner::I32(v, buf) => buf.format(*v),
            Inner::I64(v, buf) => buf.format(*v),
            Inner::F32(v, buf) => {
                if v.is_nan() {
                    float::NAN
                } else if *v == f32::INFINITY {
                    float::INFINITY
                } else if *v == f32::NEG_INFINITY {
                    float::NEG_INFINITY
                } else {
                    buf.format_finite(*v)
                }
            }
            Inner::F64(v, buf) => {
                if v.is_nan() {
                    float::NAN
                } else if *v == f64::INFINITY {
                    float::INFINITY
                } else if *v == f64::NEG_INFINITY {
                    float::NEG_INFINITY
                } else {
                    buf.format_finite(*v)
                }
            }
        }
    }
}

macro_rules! encoder_from {
    ($typ:ty, $variant:ident, $buffer:expr) => {
        impl From<$typ> for Encoder {
            fn from(input: $typ) -> Self {
                Self {
                    value: Inner::$variant(input, $buffer),
                }
            }
        }
    };
}

impl From<bool> for Encoder {
    fn from(input: bool) -> Self {
        Self {
            value: Inner::Bool(input),
        }
    }
}

encoder_from!(i8, I8, itoa::Buffer::new());
encoder_from!(i16, I16, itoa::Buffer::new());
encoder_from!(i32, I32, itoa::Buffer::new());
encoder_from!(i64, I64, itoa::Buffer::new());
encoder_from!(f32, F32, ryu::Buffer::new());
encoder_from!(f64, F64, ryu::Buffer::new());

/// A wire token could not be parsed into the requested primitive type.
#[derive(Debug)]
pub struct PrimitiveParseError {
    expected: &'static str,
    token: String,
}

impl PrimitiveParseError {
    fn new(expected: &'static str, token: &str) -> Self {
        Self {
            expected,
            token: token.into(),
        }
    }

    /// Name of the primitive type that was being parsed.
    pub fn expected(&self) -> &'static str {
        self.expected
    }
}

impl fmt::Display for PrimitiveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {:?} as {}", self.token, self.expected)
    }
}

impl std::error::Error for PrimitiveParseError {}

/// Parse a wire token into a primitive value.
pub trait Parse
where
    Self: Sized,
{
    /// Parses `input`, failing on anything that isn't exactly a token of this type.
    fn parse_wire_token(input: &str) -> Result<Self, PrimitiveParseError>;
}

impl Parse for bool {
    fn parse_wire_token(input: &str) -> Result<Self, PrimitiveParseError> {
        match input {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(PrimitiveParseError::new("boolean", input)),
        }
    }
}

impl Parse for String {
    fn parse_wire_token(input: &str) -> Result<Self, PrimitiveParseError> {
        Ok(input.to_owned())
    }
}

macro_rules! parse_integer {
    ($typ:ty, $name:literal) => {
        impl Parse for $typ {
            fn parse_wire_token(input: &str) -> Result<Self, PrimitiveParseError> {
                // `FromStr` tolerates a leading `+`, the wire format doesn't
                if input.starts_with('+') {
                    return Err(PrimitiveParseError::new($name, input));
                }
                <$typ>::from_str(input).map_err(|_| PrimitiveParseError::new($name, input))
            }
        }
    };
}

parse_integer!(i8, "byte");
parse_integer!(i16, "short");
parse_integer!(i32, "integer");
parse_integer!(i64, "long");

impl Parse for f32 {
    fn parse_wire_token(input: &str) -> Result<Self, PrimitiveParseError> {
        float::parse_f32(input).ok_or_else(|| PrimitiveParseError::new("float", input))
    }
}

impl Parse for f64 {
    fn parse_wire_token(input: &str) -> Result<Self, PrimitiveParseError> {
        float::parse_f64(input).ok_or_else(|| PrimitiveParseError::new("double", input))
    }
}

mod float {
    use std::str::FromStr;

    pub(super) const INFINITY: &str = "Infinity";
    pub(super) const NEG_INFINITY: &str = "-Infinity";
    pub(super) const NAN: &str = "NaN";

    /// `FromStr` for floats also accepts `inf`, `infinity`, and `nan` in any case; only the
    /// canonical spellings are valid on the wire.
    fn is_numeric(input: &str) -> bool {
        !input.is_empty()
            && input
                .bytes()
                .all(|b| b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.' | b'e' | b'E'))
    }

    pub(super) fn parse_f32(input: &str) -> Option<f32> {
        match input {
            INFINITY => Some(f32::INFINITY),
            NEG_INFINITY => Some(f32::NEG_INFINITY),
            NAN => Some(f32::NAN),
            _ if is_numeric(input) => f32::from_str(input).ok(),
            _ => None,
        }
    }

    pub(super) fn parse_f64(input: &str) -> Option<f64> {
        match input {
            INFINITY => Some(f64::INFINITY),
            NEG_INFINITY => Some(f64::NEG_INFINITY),
            NAN => Some(f64::NAN),
            _ if is_numeric(input) => f64::from_str(input).ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Encoder, Parse};
    use proptest::prelude::*;

    #[test]
    fn bool_parse() {
        assert!(bool::parse_wire_token("true").unwrap());
        assert!(!bool::parse_wire_token("false").unwrap());
        assert!(bool::parse_wire_token("True").is_err());
        assert!(bool::parse_wire_token("").is_err());
    }

    #[test]
    fn integer_parse() {
        assert_eq!(i32::parse_wire_token("-2147483648").unwrap(), i32::MIN);
        assert_eq!(i64::parse_wire_token("0").unwrap(), 0);
        assert!(i32::parse_wire_token("2147483648").is_err());
        assert!(i8::parse_wire_token("+1").is_err());
        assert!(i16::parse_wire_token("").is_err());
        assert!(i64::parse_wire_token("1.0").is_err());
    }

    #[test]
    fn float_parse() {
        assert_eq!(f64::parse_wire_token("1.5").unwrap(), 1.5);
        assert_eq!(f64::parse_wire_token("Infinity").unwrap(), f64::INFINITY);
        assert_eq!(f64::parse_wire_token("-Infinity").unwrap(), f64::NEG_INFINITY);
        assert!(f64::parse_wire_token("NaN").unwrap().is_nan());
        assert!(f32::parse_wire_token("NaN").unwrap().is_nan());
        assert!(f64::parse_wire_token("inf").is_err());
        assert!(f64::parse_wire_token("nan").is_err());
        assert!(f64::parse_wire_token("").is_err());
        assert!(f64::parse_wire_token("1.5x").is_err());
    }

    #[test]
    fn encode_floats() {
        assert_eq!(Encoder::from(f64::NAN).encode(), "NaN");
        assert_eq!(Encoder::from(f64::INFINITY).encode(), "Infinity");
        assert_eq!(Encoder::from(f32::NEG_INFINITY).encode(), "-Infinity");
        assert_eq!(Encoder::from(0.0_f64).encode(), "0.0");
        assert_eq!(Encoder::from(true).encode(), "true");
    }

    proptest! {
        #[test]
        fn i64_round_trip(value: i64) {
            let token = Encoder::from(value).encode().to_owned();
            prop_assert_eq!(i64::parse_wire_token(&token).unwrap(), value);
        }

        #[test]
        fn i32_round_trip(value: i32) {
            let token = Encoder::from(value).encode().to_owned();
            prop_assert_eq!(i32::parse_wire_token(&token).unwrap(), value);
        }

        #[test]
        fn f64_round_trip(value in proptest::num::f64::ANY) {
            let token = Encoder::from(value).encode().to_owned();
            let parsed = f64::parse_wire_token(&token).unwrap();
            if value.is_nan() {
                prop_assert!(parsed.is_nan());
            } else {
                prop_assert_eq!(parsed, value);
            }
        }

        #[test]
        fn string_round_trip(value in ".*") {
            prop_assert_eq!(String::parse_wire_token(&value).unwrap(), value);
        }
    }

    #[test]
    fn numeric_boundaries() {
        for value in [i64::MIN, i64::MAX, 0] {
            let token = Encoder::from(value).encode().to_owned();
            assert_eq!(i64::parse_wire_token(&token).unwrap(), value);
        }
        for value in [f64::MIN, f64::MAX, f64::MIN_POSITIVE, 0.0] {
            let token = Encoder::from(value).encode().to_owned();
            assert_eq!(f64::parse_wire_token(&token).unwrap(), value);
        }
    }
}
