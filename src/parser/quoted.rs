//! Quoted-string codec, RFC 3261 Section 25.1:
//!
//! quoted-string = SWS DQUOTE *(qdtext / quoted-pair) DQUOTE
//! quoted-pair   = "\" (%x00-09 / %x0B-0C / %x0E-7F)
//!
//! The scanner tolerates raw high-bit octets both as qdtext (multi-byte
//! UTF-8 content) and behind a backslash escape; only CR, LF, and NUL are
//! forbidden as the escaped octet.

use std::borrow::Cow;

use nom::error::{Error as NomError, ErrorKind};

use crate::error::{Error, Result};
use crate::parser::ParseResult;

#[inline]
fn is_forbidden_raw(b: u8) -> bool {
    // Bare CR/LF and controls below 0x20 other than HTAB
    b == b'\r' || b == b'\n' || (b < 0x20 && b != b'\t')
}

#[inline]
fn is_forbidden_escaped(b: u8) -> bool {
    b == b'\r' || b == b'\n' || b == 0
}

/// Scans a complete quoted string from the start of `input`.
///
/// The input must begin with `"`. On success the value is the whole
/// quoted region including both quotes, and the remainder is everything
/// after the closing quote. Fails if the opening quote is absent, the
/// closing quote is never found, or a forbidden control character appears
/// (raw CR/LF inside the string, or CR/LF/NUL behind a backslash).
pub fn quoted_string(input: &[u8]) -> ParseResult<&[u8]> {
    if input.first() != Some(&b'"') {
        return Err(nom::Err::Error(NomError::new(input, ErrorKind::Char)));
    }
    let mut i = 1;
    while i < input.len() {
        match input[i] {
            b'"' => return Ok((&input[i + 1..], &input[..i + 1])),
            b'\\' => match input.get(i + 1) {
                Some(&b) if !is_forbidden_escaped(b) => i += 2,
                Some(_) => {
                    return Err(nom::Err::Failure(NomError::new(&input[i..], ErrorKind::Verify)))
                }
                None => {
                    return Err(nom::Err::Failure(NomError::new(&input[i..], ErrorKind::Eof)))
                }
            },
            b if is_forbidden_raw(b) => {
                return Err(nom::Err::Failure(NomError::new(&input[i..], ErrorKind::Verify)))
            }
            _ => i += 1,
        }
    }
    Err(nom::Err::Failure(NomError::new(input, ErrorKind::Eof)))
}

/// Streaming skip over a quoted string: validates the region and
/// returns only the remainder after the closing quote. Callers that
/// need the consumed region compute it from the byte count.
///
/// Failures map onto the crate taxonomy: a missing opening quote is a
/// separator error, an unclosed string is
/// [`Error::UnterminatedQuotedString`], and a forbidden control
/// character is [`Error::IllegalControlInQuotedString`].
pub fn skip(input: &[u8]) -> Result<&[u8]> {
    match quoted_string(input) {
        Ok((rem, _)) => Ok(rem),
        Err(nom::Err::Error(_)) => Err(Error::NoSeparator('"')),
        Err(nom::Err::Failure(e)) if e.code == ErrorKind::Eof => {
            Err(Error::UnterminatedQuotedString)
        }
        Err(_) => Err(Error::IllegalControlInQuotedString),
    }
}

/// Encodes `raw` as a quoted string: surrounds it with `"` and escapes
/// every `\` and `"` as `\\` and `\"`. All other bytes, including
/// multi-byte UTF-8 sequences, pass through unescaped.
pub fn quote(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len() + 2);
    out.push(b'"');
    for &b in raw {
        if b == b'\\' || b == b'"' {
            out.push(b'\\');
        }
        out.push(b);
    }
    out.push(b'"');
    out
}

// Resolves quoted-pair escapes in already-unwrapped content. Borrows when
// no escape is present.
fn unescape(content: &[u8]) -> Cow<'_, [u8]> {
    if !content.contains(&b'\\') {
        return Cow::Borrowed(content);
    }
    let mut out = Vec::with_capacity(content.len());
    let mut i = 0;
    while i < content.len() {
        if content[i] == b'\\' && i + 1 < content.len() {
            out.push(content[i + 1]);
            i += 2;
        } else {
            out.push(content[i]);
            i += 1;
        }
    }
    Cow::Owned(out)
}

/// Decodes a quoted string back to its raw text.
///
/// Input that is not surrounded by quotes is returned unchanged. Quoted
/// input has its surrounding quotes stripped and every `\X` escape
/// resolved to `X`. Exact inverse of [`quote`] for any raw text free of
/// CR/LF.
pub fn unquote(input: &[u8]) -> Cow<'_, [u8]> {
    if input.len() >= 2 && input.first() == Some(&b'"') && input.last() == Some(&b'"') {
        unescape(&input[1..input.len() - 1])
    } else {
        Cow::Borrowed(input)
    }
}

/// Scans a quoted string and decodes it in one pass.
///
/// On success returns the unescaped content (quotes stripped, escapes
/// resolved) and the remainder after the closing quote. Multi-byte UTF-8
/// content passes through intact; escape resolution copies whole bytes
/// and never splits a scalar.
pub fn unquoting_parse(input: &[u8]) -> ParseResult<Cow<'_, [u8]>> {
    let (rem, region) = quoted_string(input)?;
    Ok((rem, unescape(&region[1..region.len() - 1])))
}
