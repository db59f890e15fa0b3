// Parser for the Via header (RFC 3261 Section 20.42)
// via-parm          = sent-protocol LWS sent-by *( SEMI via-params )
// via-params        = via-ttl / via-maddr / via-received / via-branch / via-extension
// sent-protocol     = protocol-name SLASH protocol-version SLASH transport
// sent-by           = host [ COLON port ]

use std::net::IpAddr;
use std::str::FromStr;

use nom::{
    combinator::{cut, map, opt},
    error::{Error as NomError, ErrorKind},
    multi::many0,
    sequence::{pair, preceded, tuple},
};

use crate::parser::common_params::gen_value;
use crate::parser::separators::{colon, equal, semi, slash};
use crate::parser::token::token_string;
use crate::parser::values::{parse_non_neg_int, parse_pos_int};
use crate::parser::whitespace::{lws, sws};
use crate::parser::ParseResult;

use crate::types::branch::Branch;
use crate::types::host::Host;
use crate::types::param::{GenericValue, Param};
use crate::types::transport::Transport;
use crate::types::via::{SentProtocol, Via};

fn host_prefix(input: &[u8]) -> ParseResult<Host> {
    match Host::parse_prefix(input) {
        Ok((host, consumed)) => Ok((&input[consumed..], host)),
        Err(_) => Err(nom::Err::Error(NomError::new(input, ErrorKind::Verify))),
    }
}

// port = 1*DIGIT, 1..=65535. A leading zero or the value 0 is rejected.
fn port(input: &[u8]) -> ParseResult<u16> {
    let (rem, value) = parse_pos_int(input)?;
    match u16::try_from(value) {
        Ok(p) => Ok((rem, p)),
        Err(_) => Err(nom::Err::Failure(NomError::new(input, ErrorKind::Verify))),
    }
}

/// sent-protocol: two tokens and a transport, slash-separated with
/// optional whitespace around the slashes.
pub fn sent_protocol(input: &[u8]) -> ParseResult<SentProtocol> {
    map(
        tuple((token_string, slash, token_string, slash, token_string)),
        |(name, _, version, _, transport)| SentProtocol {
            name,
            version,
            transport: Transport::from_token(&transport),
        },
    )(input)
}

/// sent-by: host with an optional colon-separated port.
pub fn sent_by(input: &[u8]) -> ParseResult<(Host, Option<u16>)> {
    pair(host_prefix, opt(preceded(colon, cut(port))))(input)
}

fn ttl_from_token(s: &str) -> Option<u8> {
    let (rem, value) = parse_non_neg_int(s.as_bytes()).ok()?;
    if !rem.is_empty() || value > 255 {
        return None;
    }
    Some(value as u8)
}

// One via parameter. Recognized names get typed, validated variants;
// anything else is retained as a generic pair. A recognized name with a
// malformed value is a hard failure for the whole Via.
fn via_param(input: &[u8]) -> ParseResult<Param> {
    let (rest, name) = token_string(input)?;
    let (rest, value) = opt(preceded(equal, cut(gen_value)))(rest)?;

    let fail = || nom::Err::Failure(NomError::new(input, ErrorKind::Verify));

    let param = match name.to_ascii_lowercase().as_str() {
        "branch" => match value {
            Some(GenericValue::Token(s)) => Param::Branch(Branch::new(s)),
            _ => return Err(fail()),
        },
        "ttl" => match value {
            Some(GenericValue::Token(s)) => {
                Param::Ttl(ttl_from_token(&s).ok_or_else(fail)?)
            }
            _ => return Err(fail()),
        },
        "received" => match value {
            Some(GenericValue::Token(s)) => {
                Param::Received(IpAddr::from_str(&s).map_err(|_| fail())?)
            }
            Some(GenericValue::Host(Host::Ipv4(a))) => Param::Received(IpAddr::V4(a)),
            Some(GenericValue::Host(Host::Ipv6(a))) => Param::Received(IpAddr::V6(a)),
            _ => return Err(fail()),
        },
        "maddr" => match value {
            Some(GenericValue::Token(s)) => {
                Param::Maddr(Host::from_str(&s).map_err(|_| fail())?)
            }
            Some(GenericValue::Host(h)) => Param::Maddr(h),
            _ => return Err(fail()),
        },
        _ => Param::Other(name, value),
    };
    Ok((rest, param))
}

/// Parses one complete Via header value. Leading white space is
/// tolerated; the remainder after the last parameter is returned for the
/// caller to check.
pub fn parse_via(input: &[u8]) -> ParseResult<Via> {
    map(
        tuple((
            preceded(sws, sent_protocol),
            preceded(lws, sent_by),
            many0(preceded(semi, via_param)),
        )),
        |(protocol, (host, port), params)| Via {
            sent_protocol: protocol,
            host,
            port,
            params,
        },
    )(input)
}
