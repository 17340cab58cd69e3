/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
#[non_exhaustive]
enum InstantParseErrorKind {
    Invalid(Cow<'static, str>),
    IntParseError,
}

/// Error returned when a timestamp string can't be parsed into an [`Instant`](super::Instant).
#[derive(Debug)]
pub struct InstantParseError {
    kind: InstantParseErrorKind,
}

impl InstantParseError {
    pub(super) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        InstantParseErrorKind::Invalid(message.into()).into()
    }
}

impl Error for InstantParseError {}

impl fmt::Display for InstantParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InstantParseErrorKind::*;
        match &self.kind {
            Invalid(msg) => write!(f, "invalid timestamp: {msg}"),
            IntParseError => write!(f, "failed to parse int"),
        }
    }
}

impl From<InstantParseErrorKind> for InstantParseError {
    fn from(kind: InstantParseErrorKind) -> Self {
        Self { kind }
    }
}

/// Error returned when an [`Instant`](super::Instant) can't be represented in a timestamp format.
#[derive(Debug)]
pub struct InstantFormatError {
    message: Cow<'static, str>,
}

impl InstantFormatError {
    fn out_of_range(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Error for InstantFormatError {}

impl fmt::Display for InstantFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to format timestamp: {}", self.message)
    }
}

fn split_nanos(total_nanos: i128) -> (i64, u32) {
    let (seconds, nanos) = num_integer::div_mod_floor(total_nanos, 1_000_000_000);
    (seconds as i64, nanos as u32)
}

pub(crate) mod rfc3339 {
    use super::{split_nanos, InstantFormatError, InstantParseError};
    use crate::Instant;
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    /// Ok: "2019-12-16T23:48:18Z"
    /// Ok: "2019-12-16T23:48:18.52Z"
    /// Ok: "2019-12-16T23:48:18.52+02:00" (normalized to UTC)
    pub(crate) fn parse(s: &str) -> Result<Instant, InstantParseError> {
        let date_time = OffsetDateTime::parse(s.trim(), &Rfc3339)
            .map_err(|err| InstantParseError::invalid(format!("{s:?} is not RFC 3339: {err}")))?;
        let (seconds, nanos) = split_nanos(date_time.unix_timestamp_nanos());
        Ok(Instant::from_secs_and_nanos(seconds, nanos))
    }

    pub(crate) fn format(instant: &Instant) -> Result<String, InstantFormatError> {
        OffsetDateTime::from_unix_timestamp_nanos(instant.as_nanos())
            .ok()
            .and_then(|date_time| date_time.format(&Rfc3339).ok())
            .ok_or_else(|| {
                InstantFormatError::out_of_range(format!(
                    "{instant:?} is outside of the range representable by RFC 3339"
                ))
            })
    }
}

pub(crate) mod http_date {
    use super::{InstantFormatError, InstantParseError, InstantParseErrorKind};
    use crate::instant::NANOS_PER_SECOND_U32;
    use crate::Instant;
    use std::str::FromStr;
    use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time, Weekday};

    /// Ok: "Mon, 16 Dec 2019 23:48:18 GMT"
    /// Ok: "Mon, 16 Dec 2019 23:48:18.123 GMT"
    /// Not Ok: "Mon, 16 Dec 2019 23:48:18.1234 GMT"
    pub(crate) fn format(instant: &Instant) -> Result<String, InstantFormatError> {
        let date_time = OffsetDateTime::from_unix_timestamp(instant.secs())
            .ok()
            .filter(|date_time| (0..=9999).contains(&date_time.year()))
            .ok_or_else(|| {
                InstantFormatError::out_of_range(format!(
                    "{instant:?} is outside of the range representable by an HTTP date"
                ))
            })?;
        let weekday = match date_time.weekday() {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        };
        let month = match date_time.month() {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        };
        let fraction = if instant.has_subsec_nanos() {
            format!(".{:03}", instant.subsec_nanos() / 1_000_000)
        } else {
            String::new()
        };
        Ok(format!(
            "{weekday}, {:02} {month} {:04} {:02}:{:02}:{:02}{fraction} GMT",
            date_time.day(),
            date_time.year(),
            date_time.hour(),
            date_time.minute(),
            date_time.second(),
        ))
    }

    pub(crate) fn parse(s: &str) -> Result<Instant, InstantParseError> {
        if !s.is_ascii() {
            return Err(InstantParseError::invalid("date is not ascii"));
        }
        let s = s.trim().as_bytes();
        // Example: `Sun, 06 Nov 1994 08:49:37 GMT`
        if s.len() < 29
            || s.len() > 33
            || !s.ends_with(b" GMT")
            || s[16] != b' '
            || s[19] != b':'
            || s[22] != b':'
        {
            return Err(InstantParseError::invalid("incorrectly shaped string"));
        }
        let nanos: u32 = match s[25] {
            b'.' => {
                // Everything between the `.` and the trailing " GMT"
                let fraction_slice = &s[26..s.len() - 4];
                if fraction_slice.is_empty() || fraction_slice.len() > 3 {
                    return Err(InstantParseError::invalid("unsupported fractional precision"));
                }
                let fraction: u32 = parse_slice(fraction_slice)?;
                fraction * 10u32.pow(9 - fraction_slice.len() as u32)
            }
            b' ' if s.len() == 29 => 0,
            _ => return Err(InstantParseError::invalid("incorrectly shaped string")),
        };
        match &s[..5] {
            b"Mon, " | b"Tue, " | b"Wed, " | b"Thu, " | b"Fri, " | b"Sat, " | b"Sun, " => {}
            _ => return Err(InstantParseError::invalid("invalid day")),
        }
        let month = match &s[7..12] {
            b" Jan " => Month::January,
            b" Feb " => Month::February,
            b" Mar " => Month::March,
            b" Apr " => Month::April,
            b" May " => Month::May,
            b" Jun " => Month::June,
            b" Jul " => Month::July,
            b" Aug " => Month::August,
            b" Sep " => Month::September,
            b" Oct " => Month::October,
            b" Nov " => Month::November,
            b" Dec " => Month::December,
            _ => return Err(InstantParseError::invalid("invalid month")),
        };
        debug_assert!(nanos < NANOS_PER_SECOND_U32);
        let date = Date::from_calendar_date(parse_slice(&s[12..16])?, month, parse_slice(&s[5..7])?)
            .map_err(|_| InstantParseError::invalid("invalid date"))?;
        let time = Time::from_hms_nano(
            parse_slice(&s[17..19])?,
            parse_slice(&s[20..22])?,
            parse_slice(&s[23..25])?,
            nanos,
        )
        .map_err(|_| InstantParseError::invalid("invalid time"))?;
        let seconds = PrimitiveDateTime::new(date, time).assume_utc().unix_timestamp();
        Ok(Instant::from_secs_and_nanos(seconds, nanos))
    }

    fn parse_slice<T>(ascii_slice: &[u8]) -> Result<T, InstantParseError>
    where
        T: FromStr,
    {
        if !ascii_slice.iter().all(u8::is_ascii_digit) {
            return Err(InstantParseErrorKind::IntParseError.into());
        }
        std::str::from_utf8(ascii_slice)
            .ok()
            .and_then(|digits| digits.parse::<T>().ok())
            .ok_or_else(|| InstantParseErrorKind::IntParseError.into())
    }
}

pub(crate) mod epoch_seconds {
    use super::{InstantParseError, InstantParseErrorKind};
    use crate::instant::NANOS_PER_SECOND_U32;
    use crate::Instant;

    /// Negative instants carrying a fraction are written relative to zero, so
    /// `(-2 s, 500_000_000 ns)` becomes `-1.5`.
    pub(crate) fn format(instant: &Instant) -> String {
        let (seconds, nanos) = (instant.secs(), instant.subsec_nanos());
        if nanos == 0 {
            return itoa::Buffer::new().format(seconds).to_owned();
        }
        let (sign, whole, fraction) = if seconds >= 0 {
            ("", seconds as u64, nanos)
        } else {
            ("-", (-(seconds + 1)) as u64, NANOS_PER_SECOND_U32 - nanos)
        };
        let fraction = format!("{fraction:09}");
        format!("{sign}{whole}.{}", fraction.trim_end_matches('0'))
    }

    pub(crate) fn parse(s: &str) -> Result<Instant, InstantParseError> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits, None),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InstantParseError::invalid(format!(
                "{s:?} is not a number of epoch seconds"
            )));
        }
        let whole: i128 = whole
            .parse()
            .map_err(|_| InstantParseError::from(InstantParseErrorKind::IntParseError))?;
        let nanos = match fraction {
            None => 0,
            Some(fraction) => {
                if fraction.is_empty()
                    || fraction.len() > 9
                    || !fraction.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(InstantParseError::invalid(format!(
                        "{s:?} has an invalid fractional part"
                    )));
                }
                let parsed: u32 = fraction
                    .parse()
                    .map_err(|_| InstantParseError::from(InstantParseErrorKind::IntParseError))?;
                parsed * 10u32.pow(9 - fraction.len() as u32)
            }
        };
        let (seconds, nanos) = match (negative, nanos) {
            (false, nanos) => (whole, nanos),
            (true, 0) => (-whole, 0),
            (true, nanos) => (-whole - 1, NANOS_PER_SECOND_U32 - nanos),
        };
        let seconds = i64::try_from(seconds).map_err(|_| {
            InstantParseError::invalid(format!("{s:?} is out of range for an instant"))
        })?;
        Ok(Instant::from_secs_and_nanos(seconds, nanos))
    }
}
