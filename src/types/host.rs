//! Host portion of SIP addressing: a domain name or an IP literal.
//!
//! The grammar distinguishes hostnames, IPv4 literals, and bracketed
//! IPv6 literals ([RFC 3261 Section 25.1](https://datatracker.ietf.org/doc/html/rfc3261#section-25.1)).
//! Each alternative is an explicit variant so callers can match
//! exhaustively.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A host: domain name, IPv4 literal, or IPv6 literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Host {
    /// A domain name (e.g. "atlanta.com"). Stored verbatim; comparison
    /// keys lower-case it via [`Host::normalized`].
    Domain(String),
    /// An IPv4 literal.
    Ipv4(Ipv4Addr),
    /// An IPv6 literal. Serialized with surrounding brackets.
    Ipv6(Ipv6Addr),
}

#[inline]
fn is_hostname_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'.' || b == b'_'
}

impl Host {
    /// Convenience constructor for the domain variant.
    pub fn domain(domain: impl Into<String>) -> Self {
        Host::Domain(domain.into())
    }

    /// Parses a host literal from the start of `input` and reports how
    /// many bytes were consumed, leaving anything after the literal
    /// (port, parameters) untouched.
    ///
    /// A bracketed `[...]` prefix must hold a valid IPv6 address. An
    /// unbracketed run of hostname characters that consists solely of
    /// digits and dots must parse as an IPv4 literal; out-of-range
    /// octets are an error, not a domain name.
    pub fn parse_prefix(input: &[u8]) -> Result<(Host, usize)> {
        if input.first() == Some(&b'[') {
            let close = input
                .iter()
                .position(|&b| b == b']')
                .ok_or_else(|| Error::InvalidHost("unclosed '[' in IPv6 literal".into()))?;
            let inner = std::str::from_utf8(&input[1..close])
                .map_err(|_| Error::InvalidHost("non-UTF-8 bytes in IPv6 literal".into()))?;
            let addr = Ipv6Addr::from_str(inner)
                .map_err(|_| Error::InvalidHost(format!("invalid IPv6 literal: [{}]", inner)))?;
            return Ok((Host::Ipv6(addr), close + 1));
        }

        let len = input
            .iter()
            .position(|&b| !is_hostname_byte(b))
            .unwrap_or(input.len());
        if len == 0 {
            return Err(Error::InvalidHost("empty host".into()));
        }
        // Hostname bytes are all ASCII, so this cannot fail
        let text = std::str::from_utf8(&input[..len])
            .map_err(|_| Error::InvalidHost("non-UTF-8 bytes in host".into()))?;

        if text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
            let addr = Ipv4Addr::from_str(text)
                .map_err(|_| Error::InvalidHost(format!("invalid IPv4 literal: {}", text)))?;
            Ok((Host::Ipv4(addr), len))
        } else {
            Ok((Host::Domain(text.to_string()), len))
        }
    }

    /// Returns a copy normalized for comparison: domain names
    /// lower-cased, IP literals already in canonical numeric form.
    ///
    /// Trailing-dot equivalence ("atlanta.com." vs "atlanta.com") is
    /// deliberately not applied here.
    pub fn normalized(&self) -> Host {
        match self {
            Host::Domain(d) => Host::Domain(d.to_ascii_lowercase()),
            other => other.clone(),
        }
    }

    /// Returns `true` for either IP-literal variant.
    pub fn is_ip(&self) -> bool {
        matches!(self, Host::Ipv4(_) | Host::Ipv6(_))
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Domain(domain) => write!(f, "{}", domain),
            Host::Ipv4(addr) => write!(f, "{}", addr),
            Host::Ipv6(addr) => write!(f, "[{}]", addr),
        }
    }
}

impl FromStr for Host {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (host, consumed) = Host::parse_prefix(s.as_bytes())?;
        if consumed != s.len() {
            return Err(Error::InvalidHost(format!(
                "trailing characters after host: {}",
                s
            )));
        }
        Ok(host)
    }
}
