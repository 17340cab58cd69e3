/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Codec settings for the marshaller.

use crate::shape::Protocol;
use wire_types::instant::Format;

/// Timestamp formats used when marshalling, per wire location.
///
/// [`CodecSettings::for_protocol`] returns the formats each protocol expects; individual
/// locations can be overridden for services that deviate.
///
/// ```
/// use wire_http::config::CodecSettings;
/// use wire_http::shape::Protocol;
/// use wire_types::instant::Format;
///
/// let settings = CodecSettings::for_protocol(Protocol::AwsJson1_1)
///     .with_header_timestamp(Format::EpochSeconds);
/// assert_eq!(settings.body_timestamp, Format::EpochSeconds);
/// assert_eq!(settings.header_timestamp, Format::EpochSeconds);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecSettings {
    /// Format of timestamps in bodies
    pub body_timestamp: Format,
    /// Format of timestamps in headers
    pub header_timestamp: Format,
    /// Format of timestamps substituted into URI labels
    pub label_timestamp: Format,
    /// Format of timestamps in query strings
    pub query_timestamp: Format,
}

impl CodecSettings {
    /// Formats used by `protocol`.
    pub fn for_protocol(protocol: Protocol) -> Self {
        let body_timestamp = if protocol.is_json() {
            Format::EpochSeconds
        } else {
            Format::DateTime
        };
        CodecSettings {
            body_timestamp,
            ..CodecSettings::default()
        }
    }

    /// Overrides the body timestamp format.
    pub fn with_body_timestamp(mut self, format: Format) -> Self {
        self.body_timestamp = format;
        self
    }

    /// Overrides the header timestamp format.
    pub fn with_header_timestamp(mut self, format: Format) -> Self {
        self.header_timestamp = format;
        self
    }

    /// Overrides the label timestamp format.
    pub fn with_label_timestamp(mut self, format: Format) -> Self {
        self.label_timestamp = format;
        self
    }

    /// Overrides the query string timestamp format.
    pub fn with_query_timestamp(mut self, format: Format) -> Self {
        self.query_timestamp = format;
        self
    }
}

impl Default for CodecSettings {
    fn default() -> Self {
        CodecSettings {
            body_timestamp: Format::DateTime,
            header_timestamp: Format::HttpDate,
            label_timestamp: Format::DateTime,
            query_timestamp: Format::DateTime,
        }
    }
}

#[cfg(test)]
mod test {
    use super::CodecSettings;
    use crate::shape::Protocol;
    use wire_types::instant::Format;

    #[test]
    fn protocol_defaults() {
        for protocol in [Protocol::AwsJson1_0, Protocol::AwsJson1_1, Protocol::RestJson1] {
            let settings = CodecSettings::for_protocol(protocol);
            assert_eq!(settings.body_timestamp, Format::EpochSeconds);
            assert_eq!(settings.header_timestamp, Format::HttpDate);
        }
        for protocol in [Protocol::RestXml, Protocol::AwsQuery] {
            assert_eq!(
                CodecSettings::for_protocol(protocol),
                CodecSettings::default()
            );
        }
    }

    #[test]
    fn overrides() {
        let settings = CodecSettings::default()
            .with_label_timestamp(Format::EpochSeconds)
            .with_query_timestamp(Format::HttpDate)
            .with_body_timestamp(Format::EpochSeconds);
        assert_eq!(settings.label_timestamp, Format::EpochSeconds);
        assert_eq!(settings.query_timestamp, Format::HttpDate);
        assert_eq!(settings.body_timestamp, Format::EpochSeconds);
        assert_eq!(settings.header_timestamp, Format::HttpDate);
    }
}
