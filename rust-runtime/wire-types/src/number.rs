/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// <https://docs.serde.rs/src/serde_json/number.rs.html#20-22>
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Unsigned 64-bit integer value.
    PosInt(u64),
    /// Signed 64-bit integer value. The wrapped value is _always_ negative.
    NegInt(i64),
    /// 64-bit floating-point value.
    Float(f64),
}

impl Number {
    /// Converts to an `f64` lossily.
    /// Use `Number::try_from` to make the conversion only if it is not lossy.
    pub fn to_f64_lossy(self) -> f64 {
        match self {
            Number::PosInt(v) => v as f64,
            Number::NegInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

#[derive(Debug)]
enum TryFromNumberErrorKind {
    OutsideIntegerRange(std::num::TryFromIntError),
    FloatToIntegerLossyConversion(f64),
    IntegerToFloatLossyConversion(i128),
}

/// The error type returned when conversion out of a [`Number`] would be lossy.
#[derive(Debug)]
pub struct TryFromNumberError {
    kind: TryFromNumberErrorKind,
}

impl fmt::Display for TryFromNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TryFromNumberErrorKind::*;
        match self.kind {
            OutsideIntegerRange(_) => write!(f, "integer out of range"),
            FloatToIntegerLossyConversion(v) => write!(
                f,
                "cannot convert floating point number {v} into an integer"
            ),
            IntegerToFloatLossyConversion(v) => write!(
                f,
                "cannot convert {v} into a floating point type without precision loss"
            ),
        }
    }
}

impl std::error::Error for TryFromNumberError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            TryFromNumberErrorKind::OutsideIntegerRange(err) => Some(err as _),
            _ => None,
        }
    }
}

impl From<TryFromNumberErrorKind> for TryFromNumberError {
    fn from(kind: TryFromNumberErrorKind) -> Self {
        Self { kind }
    }
}

macro_rules! to_signed_integer_converter {
    ($typ:ident) => {
        impl TryFrom<Number> for $typ {
            type Error = TryFromNumberError;

            fn try_from(value: Number) -> Result<Self, Self::Error> {
                match value {
                    Number::PosInt(v) => <$typ>::try_from(v)
                        .map_err(|err| TryFromNumberErrorKind::OutsideIntegerRange(err).into()),
                    Number::NegInt(v) => <$typ>::try_from(v)
                        .map_err(|err| TryFromNumberErrorKind::OutsideIntegerRange(err).into()),
                    Number::Float(v) => {
                        Err(TryFromNumberErrorKind::FloatToIntegerLossyConversion(v).into())
                    }
                }
            }
        }
    };
}

to_signed_integer_converter!(i8);
to_signed_integer_converter!(i16);
to_signed_integer_converter!(i32);

impl TryFrom<Number> for i64 {
    type Error = TryFromNumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value {
            Number::PosInt(v) => Self::try_from(v)
                .map_err(|err| TryFromNumberErrorKind::OutsideIntegerRange(err).into()),
            Number::NegInt(v) => Ok(v),
            Number::Float(v) => {
                Err(TryFromNumberErrorKind::FloatToIntegerLossyConversion(v).into())
            }
        }
    }
}

impl TryFrom<Number> for f64 {
    type Error = TryFromNumberError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        // 2^53 is the largest integer that round trips through an f64
        const MAX_EXACT: u64 = 1 << 53;
        match value {
            Number::PosInt(v) if v <= MAX_EXACT => Ok(v as f64),
            Number::NegInt(v) if v.unsigned_abs() <= MAX_EXACT => Ok(v as f64),
            Number::PosInt(v) => {
                Err(TryFromNumberErrorKind::IntegerToFloatLossyConversion(v as i128).into())
            }
            Number::NegInt(v) => {
                Err(TryFromNumberErrorKind::IntegerToFloatLossyConversion(v as i128).into())
            }
            Number::Float(v) => Ok(v),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Number;

    #[test]
    fn to_integers() {
        assert_eq!(i32::try_from(Number::PosInt(5)).unwrap(), 5);
        assert_eq!(i64::try_from(Number::NegInt(-5)).unwrap(), -5);
        assert!(i8::try_from(Number::PosInt(300)).is_err());
        assert!(i32::try_from(Number::PosInt(u64::MAX)).is_err());
        assert!(i64::try_from(Number::Float(1.5)).is_err());
        assert_eq!(i64::try_from(Number::PosInt(i64::MAX as u64)).unwrap(), i64::MAX);
        assert_eq!(i64::try_from(Number::NegInt(i64::MIN)).unwrap(), i64::MIN);
        assert!(i64::try_from(Number::PosInt(i64::MAX as u64 + 1)).is_err());
        assert!(i8::try_from(Number::NegInt(-129)).is_err());
    }

    #[test]
    fn to_float() {
        assert_eq!(f64::try_from(Number::PosInt(5)).unwrap(), 5.0);
        assert_eq!(f64::try_from(Number::NegInt(-5)).unwrap(), -5.0);
        assert_eq!(f64::try_from(Number::Float(0.5)).unwrap(), 0.5);
        assert!(f64::try_from(Number::PosInt(u64::MAX)).is_err());
        assert_eq!(Number::PosInt(u64::MAX).to_f64_lossy(), u64::MAX as f64);
    }
}
