use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    combinator::{opt, recognize},
    sequence::tuple,
};

use crate::parser::ParseResult;

#[inline]
fn is_wsp(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Parses one or more SP / HTAB characters.
pub fn wsp(input: &[u8]) -> ParseResult<&[u8]> {
    take_while1(is_wsp)(input)
}

/// Parses zero or more SP / HTAB characters. Always succeeds.
pub fn owsp(input: &[u8]) -> ParseResult<&[u8]> {
    take_while(is_wsp)(input)
}

fn crlf(input: &[u8]) -> ParseResult<&[u8]> {
    // Lenient: accepts bare LF as well as CRLF.
    alt((tag(b"\r\n"), tag(b"\n")))(input)
}

/// Linear white space, RFC 3261 Section 25.1:
/// LWS = [*WSP CRLF] 1*WSP
///
/// Fails if no whitespace is present at all. A CRLF is only consumed when
/// followed by at least one SP / HTAB (line folding).
pub fn lws(input: &[u8]) -> ParseResult<&[u8]> {
    alt((
        recognize(tuple((owsp, crlf, wsp))),
        wsp,
    ))(input)
}

/// Optional linear white space: SWS = [LWS]. Always succeeds, possibly
/// consuming nothing.
pub fn sws(input: &[u8]) -> ParseResult<&[u8]> {
    let (rem, consumed) = opt(lws)(input)?;
    Ok((rem, consumed.unwrap_or(&[])))
}

/// Strips SP / HTAB from both ends of a byte slice. Used where a caller
/// holds a detached chunk (key-value splitting) rather than a parse
/// position.
pub fn trim_wsp(input: &[u8]) -> &[u8] {
    let start = input.iter().position(|b| !is_wsp(*b)).unwrap_or(input.len());
    let end = input.iter().rposition(|b| !is_wsp(*b)).map_or(start, |p| p + 1);
    &input[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wsp_and_owsp() {
        let (rem, val) = wsp(b" \t rest").unwrap();
        assert_eq!(val, b" \t ");
        assert_eq!(rem, b"rest");
        assert!(wsp(b"rest").is_err());
        assert!(wsp(b"").is_err());

        let (rem, val) = owsp(b"rest").unwrap();
        assert_eq!(val, b"");
        assert_eq!(rem, b"rest");
    }

    #[test]
    fn test_lws_requires_whitespace() {
        let (rem, val) = lws(b"  rest").unwrap();
        assert_eq!(val, b"  ");
        assert_eq!(rem, b"rest");

        assert!(lws(b"").is_err());
        assert!(lws(b"rest").is_err());
        // CRLF without a continuation WSP is not folding
        assert!(lws(b"\r\nrest").is_err());
    }

    #[test]
    fn test_lws_folding() {
        let (rem, val) = lws(b"\r\n rest").unwrap();
        assert_eq!(val, b"\r\n ");
        assert_eq!(rem, b"rest");

        let (rem, val) = lws(b" \t\r\n\t rest").unwrap();
        assert_eq!(val, b" \t\r\n\t ");
        assert_eq!(rem, b"rest");
    }

    #[test]
    fn test_sws_always_succeeds() {
        let (rem, val) = sws(b"rest").unwrap();
        assert_eq!(val, b"");
        assert_eq!(rem, b"rest");

        let (rem, val) = sws(b" \t rest").unwrap();
        assert_eq!(val, b" \t ");
        assert_eq!(rem, b"rest");

        let (rem, val) = sws(b"").unwrap();
        assert_eq!(val, b"");
        assert_eq!(rem, b"");
    }

    #[test]
    fn test_trim_wsp() {
        assert_eq!(trim_wsp(b"  value \t"), b"value");
        assert_eq!(trim_wsp(b"value"), b"value");
        assert_eq!(trim_wsp(b" \t "), b"");
        assert_eq!(trim_wsp(b""), b"");
        assert_eq!(trim_wsp(b"two words "), b"two words");
    }
}
