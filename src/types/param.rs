//! # SIP Parameters
//!
//! Types for the `name[=value]` pairs attached to header values in
//! `;`-separated parameter lists ([RFC 3261](https://datatracker.ietf.org/doc/html/rfc3261)).
//!
//! [`Param`] covers the parameters the Via grammar recognizes with typed
//! variants (`branch`, `ttl`, `received`, `maddr`); everything else is
//! retained verbatim as a generic pair. [`GenericValue`] represents the
//! three shapes a generic value can take: token, host literal, or
//! quoted string.
//!
//! Parameter names compare case-insensitively. Values do not, except
//! where the grammar says otherwise (host-valued parameters); that
//! asymmetry is applied by the comparison-key derivation, not here.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::types::branch::Branch;
use crate::types::host::Host;

/// Parsed value of a generic parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenericValue {
    /// A plain token (extended with `:` for bare IPv6 / host:port text).
    Token(String),
    /// A host literal (in practice only bracketed IPv6 reaches this
    /// variant; domains and IPv4 literals scan as tokens).
    Host(Host),
    /// Content of a quoted string, escapes already resolved.
    Quoted(String),
}

impl GenericValue {
    /// The value as a string slice, when it has a textual form.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            GenericValue::Token(s) => Some(s),
            GenericValue::Quoted(s) => Some(s),
            GenericValue::Host(_) => None,
        }
    }

    pub fn as_host(&self) -> Option<&Host> {
        match self {
            GenericValue::Host(h) => Some(h),
            _ => None,
        }
    }
}

impl fmt::Display for GenericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericValue::Token(s) => write!(f, "{}", s),
            GenericValue::Host(h) => write!(f, "{}", h),
            GenericValue::Quoted(s) => {
                write!(f, "\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
            }
        }
    }
}

impl From<&str> for GenericValue {
    fn from(s: &str) -> Self {
        // Anything a token scan would not survive gets quoted
        if s.is_empty() || !s.chars().all(crate::parser::token::is_token_char) {
            GenericValue::Quoted(s.to_string())
        } else {
            GenericValue::Token(s.to_string())
        }
    }
}

/// A Via parameter: a recognized variant or a retained generic pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Param {
    /// The `branch` transaction identifier.
    Branch(Branch),
    /// The `ttl` parameter, 0-255.
    Ttl(u8),
    /// The `received` parameter: source IP recorded by a server.
    Received(IpAddr),
    /// The `maddr` parameter: multicast/override destination host.
    Maddr(Host),
    /// Any other parameter, name and value case-preserved.
    Other(String, Option<GenericValue>),
}

impl Param {
    /// Creates a branch parameter.
    pub fn branch(branch: impl Into<String>) -> Self {
        Param::Branch(Branch::new(branch))
    }

    /// Creates a generic parameter; the value is quoted automatically
    /// when it is not valid token text.
    pub fn new(key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Param::Other(key.into(), value.map(|v| GenericValue::from(v.into().as_str())))
    }

    /// The parameter's name as it serializes.
    pub fn key(&self) -> &str {
        match self {
            Param::Branch(_) => "branch",
            Param::Ttl(_) => "ttl",
            Param::Received(_) => "received",
            Param::Maddr(_) => "maddr",
            Param::Other(name, _) => name,
        }
    }

    /// Case-insensitive name match.
    pub fn is_named(&self, name: &str) -> bool {
        self.key().eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Branch(b) => write!(f, "branch={}", b),
            Param::Ttl(ttl) => write!(f, "ttl={}", ttl),
            Param::Received(addr) => write!(f, "received={}", addr),
            Param::Maddr(host) => write!(f, "maddr={}", host),
            Param::Other(name, Some(value)) => write!(f, "{}={}", name, value),
            Param::Other(name, None) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    #[test]
    fn test_display_recognized() {
        assert_eq!(
            Param::branch("z9hG4bK776asdhds").to_string(),
            "branch=z9hG4bK776asdhds"
        );
        assert_eq!(Param::Ttl(60).to_string(), "ttl=60");
        assert_eq!(
            Param::Received("192.0.2.1".parse().unwrap()).to_string(),
            "received=192.0.2.1"
        );
        assert_eq!(
            Param::Received(IpAddr::V6(Ipv6Addr::LOCALHOST)).to_string(),
            "received=::1"
        );
        assert_eq!(
            Param::Maddr(Host::domain("mcast.example.com")).to_string(),
            "maddr=mcast.example.com"
        );
    }

    #[test]
    fn test_display_generic() {
        assert_eq!(Param::new("flag", None::<&str>).to_string(), "flag");
        assert_eq!(Param::new("x", Some("abc")).to_string(), "x=abc");
        // Values with separators or spaces serialize re-quoted
        assert_eq!(
            Param::new("reason", Some("call waiting")).to_string(),
            "reason=\"call waiting\""
        );
        assert_eq!(
            Param::Other("q".into(), Some(GenericValue::Quoted("say \"hi\"".into()))).to_string(),
            "q=\"say \\\"hi\\\"\""
        );
    }

    #[test]
    fn test_generic_value_from_str() {
        assert!(matches!(GenericValue::from("tcp"), GenericValue::Token(_)));
        assert!(matches!(GenericValue::from("a b"), GenericValue::Quoted(_)));
        assert!(matches!(GenericValue::from(""), GenericValue::Quoted(_)));
        assert!(matches!(GenericValue::from("a;b"), GenericValue::Quoted(_)));
    }

    #[test]
    fn test_key_and_is_named() {
        assert_eq!(Param::Ttl(1).key(), "ttl");
        assert!(Param::Ttl(1).is_named("TTL"));
        let p = Param::Other("X-Custom".into(), None);
        assert_eq!(p.key(), "X-Custom");
        assert!(p.is_named("x-custom"));
    }
}
