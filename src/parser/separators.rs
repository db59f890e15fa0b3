use nom::{
    character::complete::char as char_p,
    sequence::delimited,
};

use super::whitespace::sws;
use crate::parser::ParseResult;

/// Matches a single separator character exactly, with no surrounding
/// whitespace. Succeeds only if the next scalar equals `ch`.
pub fn sep(ch: char) -> impl FnMut(&[u8]) -> ParseResult<char> {
    move |input| char_p(ch)(input)
}

// SWS-wrapped separators, RFC 3261 Section 25.1. Each allows optional
// linear white space on both sides of the literal.

/// SLASH = SWS "/" SWS
pub fn slash(input: &[u8]) -> ParseResult<char> {
    delimited(sws, char_p('/'), sws)(input)
}

/// EQUAL = SWS "=" SWS
pub fn equal(input: &[u8]) -> ParseResult<char> {
    delimited(sws, char_p('='), sws)(input)
}

/// SEMI = SWS ";" SWS
pub fn semi(input: &[u8]) -> ParseResult<char> {
    delimited(sws, char_p(';'), sws)(input)
}

/// COLON = SWS ":" SWS
pub fn colon(input: &[u8]) -> ParseResult<char> {
    delimited(sws, char_p(':'), sws)(input)
}

/// DQUOTE
pub fn dquote(input: &[u8]) -> ParseResult<char> {
    char_p('"')(input)
}
