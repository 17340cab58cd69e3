/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Timestamps as they travel on the wire.
//!
//! An [`Instant`] is a signed count of seconds since the Unix epoch plus a sub-second part.
//! [`Format`] picks one of the three textual encodings; parsing and formatting for each
//! live in `format`.

mod format;

pub use self::format::{InstantFormatError, InstantParseError};

pub(crate) const NANOS_PER_SECOND_U32: u32 = 1_000_000_000;

/// A point in time with nanosecond resolution.
///
/// The sub-second part is never negative: `-1.5` seconds is stored as `-2` seconds plus
/// `500_000_000` nanos, which keeps ordering a plain field-by-field comparison.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    nanos: u32,
}

impl Instant {
    /// Whole seconds since the epoch.
    pub fn from_secs(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }

    /// Seconds since the epoch plus `nanos` into the following second.
    ///
    /// # Panics
    /// If `nanos` is a second or more.
    pub fn from_secs_and_nanos(seconds: i64, nanos: u32) -> Self {
        assert!(
            nanos < NANOS_PER_SECOND_U32,
            "sub-second part must be below one second, got {nanos}ns"
        );
        Self { seconds, nanos }
    }

    /// Fractional seconds since the epoch, as carried by JSON numbers.
    ///
    /// The fraction is truncated to whole nanoseconds. Fails for non-finite values and for
    /// seconds outside the range of `i64`.
    pub fn from_secs_f64(seconds: f64) -> Result<Self, InstantParseError> {
        // 2^63; `i64::MAX as f64` rounds up to it
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;
        let whole = seconds.floor();
        if !(-LIMIT..LIMIT).contains(&whole) {
            return Err(InstantParseError::invalid(format!(
                "{seconds} is out of range for epoch seconds"
            )));
        }
        let nanos = ((seconds - whole) * f64::from(NANOS_PER_SECOND_U32)) as u32;
        Ok(Self {
            seconds: whole as i64,
            nanos: nanos.min(NANOS_PER_SECOND_U32 - 1),
        })
    }

    /// Nanoseconds since the epoch.
    pub fn as_nanos(&self) -> i128 {
        i128::from(self.seconds) * i128::from(NANOS_PER_SECOND_U32) + i128::from(self.nanos)
    }

    /// The seconds component.
    pub fn secs(&self) -> i64 {
        self.seconds
    }

    /// The sub-second component, in nanoseconds.
    pub fn subsec_nanos(&self) -> u32 {
        self.nanos
    }

    /// Whether there is a sub-second component.
    pub fn has_subsec_nanos(&self) -> bool {
        self.nanos != 0
    }

    /// Parses `text` in the given `format`.
    pub fn from_str(text: &str, format: Format) -> Result<Self, InstantParseError> {
        match format {
            Format::DateTime => format::rfc3339::parse(text),
            Format::HttpDate => format::http_date::parse(text),
            Format::EpochSeconds => format::epoch_seconds::parse(text),
        }
    }

    /// Renders the instant in the given `format`.
    ///
    /// Fails when the instant lies outside the years the format can express.
    pub fn fmt(&self, format: Format) -> Result<String, InstantFormatError> {
        match format {
            Format::DateTime => format::rfc3339::format(self),
            Format::HttpDate => format::http_date::format(self),
            Format::EpochSeconds => Ok(format::epoch_seconds::format(self)),
        }
    }
}

/// Textual encoding of a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// RFC 3339 date-time in UTC, e.g. `2019-12-16T23:48:18.52Z`.
    DateTime,
    /// RFC 7231 IMF-fixdate, e.g. `Mon, 16 Dec 2019 23:48:18 GMT`.
    HttpDate,
    /// Decimal seconds since the Unix epoch, e.g. `1576540098.52`.
    EpochSeconds,
}
