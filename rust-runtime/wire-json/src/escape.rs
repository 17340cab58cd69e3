/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! String escaping for JSON text.

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
enum Problem {
    /// Input stopped in the middle of an escape sequence.
    Truncated,
    /// A backslash followed by a character JSON does not define.
    UnknownEscape(char),
    /// `\u` not followed by four hex digits.
    BadHex(String),
    /// A high surrogate that was not followed by a `\u` low surrogate.
    LoneSurrogate(u16),
    /// A high surrogate followed by something other than a low surrogate.
    MismatchedSurrogates(u16, u16),
    /// The unescaped bytes do not form UTF-8.
    NotUtf8,
}

/// A JSON string contained an escape sequence that could not be decoded.
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct EscapeError {
    problem: Problem,
}

impl From<Problem> for EscapeError {
    fn from(problem: Problem) -> Self {
        Self { problem }
    }
}

impl std::error::Error for EscapeError {}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            Problem::Truncated => f.write_str("string ends inside an escape sequence"),
            Problem::UnknownEscape(chr) => write!(f, "`\\{chr}` is not a JSON escape"),
            Problem::BadHex(digits) => write!(f, "`\\u{digits}` is not four hex digits"),
            Problem::LoneSurrogate(high) => {
                write!(f, "high surrogate \\u{high:04X} has no low surrogate after it")
            }
            Problem::MismatchedSurrogates(high, low) => {
                write!(f, "\\u{high:04X} cannot pair with \\u{low:04X}")
            }
            Problem::NotUtf8 => f.write_str("unescaped string is not valid UTF-8"),
        }
    }
}

const HEX: &[u8; 16] = b"0123456789abcdef";

fn needs_escape(byte: u8) -> bool {
    byte < 0x20 || byte == b'"' || byte == b'\\'
}

/// Escapes `value` for use between the quotes of a JSON string.
pub(crate) fn escape_string(value: &str) -> Cow<'_, str> {
    let first = match value.bytes().position(needs_escape) {
        Some(first) => first,
        None => return Cow::Borrowed(value),
    };
    let mut out = String::with_capacity(value.len() + 8);
    out.push_str(&value[..first]);
    for chr in value[first..].chars() {
        match chr {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            chr if (chr as u32) < 0x20 => {
                let byte = chr as u8;
                out.push_str("\\u00");
                out.push(HEX[usize::from(byte >> 4)] as char);
                out.push(HEX[usize::from(byte & 0xF)] as char);
            }
            chr => out.push(chr),
        }
    }
    Cow::Owned(out)
}

/// Resolves the escape sequences in `value`. Borrows when there are none.
pub(crate) fn unescape_string(value: &str) -> Result<Cow<'_, str>, EscapeError> {
    match value.find('\\') {
        None => Ok(Cow::Borrowed(value)),
        Some(first) => {
            let mut decoder = Unescaper {
                input: value.as_bytes(),
                pos: first,
                out: value.as_bytes()[..first].to_vec(),
            };
            decoder.run()?;
            String::from_utf8(decoder.out)
                .map(Cow::Owned)
                .map_err(|_| Problem::NotUtf8.into())
        }
    }
}

struct Unescaper<'a> {
    input: &'a [u8],
    pos: usize,
    out: Vec<u8>,
}

impl Unescaper<'_> {
    fn run(&mut self) -> Result<(), EscapeError> {
        while let Some(&byte) = self.input.get(self.pos) {
            self.pos += 1;
            if byte == b'\\' {
                self.escape()?;
            } else {
                self.out.push(byte);
            }
        }
        Ok(())
    }

    fn escape(&mut self) -> Result<(), EscapeError> {
        let marker = *self.input.get(self.pos).ok_or(Problem::Truncated)?;
        self.pos += 1;
        let simple = match marker {
            b'"' => b'"',
            b'\\' => b'\\',
            b'/' => b'/',
            b'b' => 0x08,
            b'f' => 0x0C,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'u' => return self.unicode(),
            other => return Err(Problem::UnknownEscape(char::from(other)).into()),
        };
        self.out.push(simple);
        Ok(())
    }

    /// Four hex digits following `\u`.
    fn hex_unit(&mut self) -> Result<u16, EscapeError> {
        let digits = self
            .input
            .get(self.pos..self.pos + 4)
            .ok_or(Problem::Truncated)?;
        let text = std::str::from_utf8(digits).map_err(|_| Problem::NotUtf8)?;
        if !digits.iter().all(u8::is_ascii_hexdigit) {
            return Err(Problem::BadHex(text.into()).into());
        }
        self.pos += 4;
        u16::from_str_radix(text, 16).map_err(|_| Problem::BadHex(text.into()).into())
    }

    fn unicode(&mut self) -> Result<(), EscapeError> {
        let unit = self.hex_unit()?;
        let chr = match unit {
            0xD800..=0xDBFF => {
                if self.input.get(self.pos..self.pos + 2) != Some(b"\\u".as_slice()) {
                    return Err(Problem::LoneSurrogate(unit).into());
                }
                self.pos += 2;
                let low = self.hex_unit()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(Problem::MismatchedSurrogates(unit, low).into());
                }
                let scalar =
                    0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                char::from_u32(scalar).ok_or(Problem::MismatchedSurrogates(unit, low))?
            }
            unit => char::from_u32(u32::from(unit))
                .ok_or_else(|| Problem::BadHex(format!("{unit:04X}")))?,
        };
        let mut buf = [0; 4];
        self.out.extend_from_slice(chr.encode_utf8(&mut buf).as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{escape_string, unescape_string, Problem};
    use std::borrow::Cow;

    #[test]
    fn escapes_quotes_and_control_characters() {
        assert!(matches!(escape_string("plain text"), Cow::Borrowed(_)));
        assert_eq!("", escape_string(""));
        assert_eq!(r#"say \"hi\"\n"#, escape_string("say \"hi\"\n"));
        assert_eq!(r"C:\\tmp\tx", escape_string("C:\\tmp\tx"));
        assert_eq!(r"\b\f\r", escape_string("\u{08}\u{0C}\r"));
        assert_eq!(r"\u0000\u001f", escape_string("\u{0}\u{1f}"));
        assert_eq!("caf\u{e9} \u{1F600}", escape_string("caf\u{e9} \u{1F600}"));
    }

    #[test]
    fn unescapes_sequences() {
        assert!(matches!(unescape_string("nothing"), Ok(Cow::Borrowed(_))));
        assert_eq!("a/b", unescape_string(r"a\/b").unwrap());
        assert_eq!("line\r\nnext", unescape_string(r"line\r\nnext").unwrap());
        assert_eq!("\"q\"", unescape_string(r#"\"q\""#).unwrap());
        assert_eq!("\u{0}\u{e9}", unescape_string(r"\u0000\u00E9").unwrap());
        assert_eq!("\u{10437}", unescape_string(r"\uD801\uDC37").unwrap());
    }

    #[test]
    fn rejects_bad_sequences() {
        let cases = [
            (r"\", Problem::Truncated),
            (r"\u00", Problem::Truncated),
            (r"\q", Problem::UnknownEscape('q')),
            (r"\u+04D", Problem::BadHex("+04D".into())),
            (r"\uD801 tail", Problem::LoneSurrogate(0xD801)),
            (r"\uD801\u0041", Problem::MismatchedSurrogates(0xD801, 0x0041)),
        ];
        for (input, problem) in cases {
            assert_eq!(Err(problem.into()), unescape_string(input), "{input}");
        }
    }

    proptest::proptest! {
        #[test]
        fn agrees_with_serde_json(s in ".*") {
            proptest::prop_assert_eq!(
                serde_json::to_string(&s).unwrap(),
                format!("\"{}\"", escape_string(&s))
            );
        }

        #[test]
        fn unescape_inverts_escape(s in ".*") {
            let escaped = escape_string(&s);
            proptest::prop_assert_eq!(unescape_string(&escaped).unwrap(), s.as_str());
        }
    }
}
