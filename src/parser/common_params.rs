//! Generic parameter grammar shared across header types:
//!
//! generic-param = token [ EQUAL gen-value ]
//! gen-value     = token / host / quoted-string
//!
//! The token alternative is extended with `:` so that bare IPv6 text and
//! host:port forms seen in real traffic (e.g. `received=::1`) are
//! accepted even though they are not legal `host` grammar.

use nom::{
    branch::alt,
    combinator::{cut, map, map_res, opt},
    error::{Error as NomError, ErrorKind},
    multi::many1,
    sequence::{pair, preceded},
};

use crate::parser::quoted::unquoting_parse;
use crate::parser::separators::{equal, sep};
use crate::parser::token::{extended_token, token_string};
use crate::parser::whitespace::sws;
use crate::parser::ParseResult;
use crate::types::host::Host;
use crate::types::param::{GenericValue, Param};

// Delegates to the host prefix parser and consumes exactly the bytes it
// reports. Only bracketed IPv6 normally reaches this branch; everything
// else scans as an extended token first.
fn host_value(input: &[u8]) -> ParseResult<GenericValue> {
    match Host::parse_prefix(input) {
        Ok((host, consumed)) => Ok((&input[consumed..], GenericValue::Host(host))),
        Err(_) => Err(nom::Err::Error(NomError::new(input, ErrorKind::Alt))),
    }
}

/// Parses one gen-value. Resolution order: quoted string, extended
/// token, host literal.
pub fn gen_value(input: &[u8]) -> ParseResult<GenericValue> {
    alt((
        map_res(unquoting_parse, |content| {
            String::from_utf8(content.into_owned()).map(GenericValue::Quoted)
        }),
        map_res(extended_token, |b: &[u8]| {
            std::str::from_utf8(b).map(|s| GenericValue::Token(s.to_string()))
        }),
        host_value,
    ))(input)
}

/// Parses one generic parameter: `token ["=" gen-value]`. A present `=`
/// must be followed by a valid gen-value; `name=` with nothing usable
/// after the equals sign is a hard failure, not a flag parameter.
pub fn generic_param(input: &[u8]) -> ParseResult<Param> {
    map(
        pair(token_string, opt(preceded(equal, cut(gen_value)))),
        |(name, value)| Param::Other(name, value),
    )(input)
}

/// Parses one or more generic parameters, each preceded by `sep_char`
/// with optional linear white space around it. The list ends gracefully
/// at the first position where no further separator follows.
pub fn parse_params(sep_char: char) -> impl FnMut(&[u8]) -> ParseResult<Vec<Param>> {
    move |input| {
        many1(preceded(
            preceded(sws, preceded(sep(sep_char), sws)),
            generic_param,
        ))(input)
    }
}
