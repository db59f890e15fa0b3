use nom::{
    bytes::complete::take_while1,
    combinator::map_res,
};

use crate::parser::ParseResult;

/// Returns `true` if `c` is a `token` character per RFC 3261 Section 25.1.
///
/// token = 1*(alphanum / "-" / "." / "!" / "%" / "*" / "_" / "+" / "`" / "'" / "~")
///
/// Classification is per Unicode scalar. All token characters are ASCII,
/// so every non-ASCII scalar is rejected here, which in turn guarantees
/// that byte-level token scanning never stops inside a multi-byte UTF-8
/// sequence.
#[inline]
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '-' | '.' | '!' | '%' | '*' | '_' | '+' | '`' | '\'' | '~')
}

#[inline]
pub(crate) fn is_token_byte(b: u8) -> bool {
    b.is_ascii() && is_token_char(b as char)
}

// Extended scan used for unquoted parameter values: plain token characters
// plus ":". Covers bare IPv6 text and host:port forms that show up in real
// traffic (e.g. received=::1) without being legal "host" grammar.
#[inline]
pub(crate) fn is_extended_token_byte(b: u8) -> bool {
    is_token_byte(b) || b == b':'
}

/// Greedily scans a maximal run of token characters. Fails if zero
/// characters match.
pub fn token(input: &[u8]) -> ParseResult<&[u8]> {
    take_while1(is_token_byte)(input)
}

/// Like [`token`], but returns the scanned run as an owned `String`.
pub fn token_string(input: &[u8]) -> ParseResult<String> {
    map_res(token, |b: &[u8]| {
        std::str::from_utf8(b).map(String::from)
    })(input)
}

/// Token scan that additionally accepts `:` in the run.
pub fn extended_token(input: &[u8]) -> ParseResult<&[u8]> {
    take_while1(is_extended_token_byte)(input)
}
