//! # SIP Via Header
//!
//! Implementation of the SIP Via header as defined in
//! [RFC 3261 Section 20.42](https://datatracker.ietf.org/doc/html/rfc3261#section-20.42).
//!
//! The Via header traces the path taken by a request so responses can be
//! routed back, and carries the transaction identifier in its `branch`
//! parameter. Each Via occupies one full header field value; a message
//! can carry several such values, one per hop.
//!
//! ## Structure of a Via value
//!
//! ```text
//! Via: SIP/2.0/UDP pc33.atlanta.com:5060;branch=z9hG4bK776asdhds
//! ```
//!
//! - Protocol name/version (SIP/2.0)
//! - Transport protocol (UDP)
//! - Host and optional port (pc33.atlanta.com:5060)
//! - Parameters (branch, ttl, received, maddr, extensions)
//!
//! ## Comparison keys
//!
//! Transaction and branch matching must not depend on the literal
//! spelling of a Via. [`Via::make_key`] derives a [`ViaKey`]: protocol
//! tokens, host, and parameter names lower-cased, the port defaulted to
//! 5060 when absent, and recognized parameter values normalized. Opaque
//! extension parameter values keep their case.
//!
//! ## Examples
//!
//! ```rust
//! use sip_via_core::prelude::*;
//! use std::str::FromStr;
//!
//! let via = Via::from_str("SIP/2.0/UDP pc33.atlanta.com;branch=z9hG4bK776asdhds").unwrap();
//! assert_eq!(via.branch().map(|b| b.as_str()), Some("z9hG4bK776asdhds"));
//!
//! // Spelling differences that the grammar declares insignificant
//! // disappear in the key
//! let other = Via::from_str("sip/2.0/udp PC33.ATLANTA.COM:5060;branch=z9hG4bK776asdhds").unwrap();
//! assert_eq!(via.make_key(), other.make_key());
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::headers::via::parse_via;
use crate::parser::whitespace::trim_wsp;
use crate::types::branch::Branch;
use crate::types::host::Host;
use crate::types::param::{GenericValue, Param};
use crate::types::transport::Transport;

/// Default SIP port, used when a Via names no explicit port.
pub const DEFAULT_SIP_PORT: u16 = 5060;

/// The sent-protocol part of a Via: protocol name, version, transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentProtocol {
    /// Protocol name (usually "SIP").
    pub name: String,
    /// Protocol version (usually "2.0").
    pub version: String,
    /// Transport protocol.
    pub transport: Transport,
}

impl fmt::Display for SentProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.name, self.version, self.transport)
    }
}

/// A parsed Via header value.
///
/// Immutable by convention once parsed; the setters exist for
/// construction of outgoing values. Parameters keep their insertion
/// order and serialize back in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Via {
    /// Protocol information (name, version, transport).
    pub sent_protocol: SentProtocol,
    /// Host part of sent-by.
    pub host: Host,
    /// Port part of sent-by. `None` is distinct from an explicit 5060
    /// in the value itself, but not in the comparison key.
    pub port: Option<u16>,
    /// Parameters in insertion order.
    pub params: Vec<Param>,
}

/// Case-normalized comparison key of a Via value.
///
/// Derived once by [`Via::make_key`]; two Via values match for
/// transaction purposes exactly when their keys are equal. Parameters
/// are keyed by lower-cased name, so comparison is order-independent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViaKey {
    protocol_name: String,
    protocol_version: String,
    transport: String,
    host: Host,
    port: u16,
    params: BTreeMap<String, Option<String>>,
}

impl Via {
    /// Creates a Via value from its parts. Fails if `host` is not a
    /// valid host literal.
    pub fn new(
        protocol_name: impl Into<String>,
        protocol_version: impl Into<String>,
        transport: impl Into<String>,
        host: impl Into<String>,
        port: Option<u16>,
        params: Vec<Param>,
    ) -> Result<Self> {
        Ok(Via {
            sent_protocol: SentProtocol {
                name: protocol_name.into(),
                version: protocol_version.into(),
                transport: Transport::from_token(&transport.into()),
            },
            host: Host::from_str(&host.into())?,
            port,
            params,
        })
    }

    /// Like [`Via::new`], but guarantees a branch parameter: when none
    /// is supplied a fresh RFC 3261 branch is generated.
    pub fn new_simple(
        protocol_name: impl Into<String>,
        protocol_version: impl Into<String>,
        transport: impl Into<String>,
        host: impl Into<String>,
        port: Option<u16>,
        params: Vec<Param>,
    ) -> Result<Self> {
        let mut params = params;
        if !params.iter().any(|p| matches!(p, Param::Branch(_))) {
            params.push(Param::Branch(Branch::random()));
        }
        Self::new(protocol_name, protocol_version, transport, host, port, params)
    }

    /// The branch parameter, if present.
    pub fn branch(&self) -> Option<&Branch> {
        self.params.iter().find_map(|p| match p {
            Param::Branch(b) => Some(b),
            _ => None,
        })
    }

    /// The ttl parameter, if present.
    pub fn ttl(&self) -> Option<u8> {
        self.params.iter().find_map(|p| match p {
            Param::Ttl(ttl) => Some(*ttl),
            _ => None,
        })
    }

    /// The received parameter, if present.
    pub fn received(&self) -> Option<IpAddr> {
        self.params.iter().find_map(|p| match p {
            Param::Received(addr) => Some(*addr),
            _ => None,
        })
    }

    /// The maddr parameter, if present.
    pub fn maddr(&self) -> Option<&Host> {
        self.params.iter().find_map(|p| match p {
            Param::Maddr(host) => Some(host),
            _ => None,
        })
    }

    /// Looks a parameter up by name, case-insensitively.
    ///
    /// Returns `Some(Some(text))` for a parameter with a value,
    /// `Some(None)` for a flag parameter, `None` when absent.
    pub fn param(&self, name: &str) -> Option<Option<String>> {
        self.params.iter().find_map(|p| {
            if !p.is_named(name) {
                return None;
            }
            Some(match p {
                Param::Branch(b) => Some(b.as_str().to_string()),
                Param::Ttl(ttl) => Some(ttl.to_string()),
                Param::Received(addr) => Some(addr.to_string()),
                Param::Maddr(host) => Some(host.to_string()),
                Param::Other(_, value) => value.as_ref().map(|v| v.to_string()),
            })
        })
    }

    /// Whether a parameter with this name is present (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.is_named(name))
    }

    fn upsert(&mut self, param: Param) {
        let name = param.key().to_ascii_lowercase();
        if let Some(pos) = self.params.iter().position(|p| p.is_named(&name)) {
            self.params[pos] = param;
        } else {
            self.params.push(param);
        }
    }

    /// Sets or replaces the branch parameter.
    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.upsert(Param::Branch(Branch::new(branch)));
    }

    /// Sets or replaces the ttl parameter.
    pub fn set_ttl(&mut self, ttl: u8) {
        self.upsert(Param::Ttl(ttl));
    }

    /// Sets or replaces the received parameter.
    pub fn set_received(&mut self, addr: IpAddr) {
        self.upsert(Param::Received(addr));
    }

    /// Sets or replaces the maddr parameter.
    pub fn set_maddr(&mut self, host: Host) {
        self.upsert(Param::Maddr(host));
    }

    /// Sets or replaces an extension parameter. `None` makes it a flag
    /// parameter with no value.
    pub fn set_param(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        self.upsert(Param::Other(
            name.into(),
            value.map(|v| GenericValue::from(v.into().as_str())),
        ));
    }

    /// Removes a parameter by name, case-insensitively.
    pub fn remove_param(&mut self, name: &str) {
        self.params.retain(|p| !p.is_named(name));
    }

    /// Derives the comparison key for this Via (see [`ViaKey`]).
    ///
    /// Pure and deterministic: callers can match transactions on keys
    /// without re-parsing. Recognized parameter values are normalized
    /// (branch and host-valued parameters case-folded, IPs canonical);
    /// opaque extension token values keep their case.
    pub fn make_key(&self) -> ViaKey {
        let mut params = BTreeMap::new();
        for param in &self.params {
            let (name, value) = match param {
                Param::Branch(b) => ("branch".to_string(), Some(b.make_key().as_str().to_string())),
                Param::Ttl(ttl) => ("ttl".to_string(), Some(ttl.to_string())),
                Param::Received(addr) => ("received".to_string(), Some(addr.to_string())),
                Param::Maddr(host) => {
                    ("maddr".to_string(), Some(host.normalized().to_string()))
                }
                Param::Other(name, value) => (
                    name.to_ascii_lowercase(),
                    value.as_ref().map(|v| match v {
                        GenericValue::Token(s) => s.clone(),
                        GenericValue::Quoted(s) => s.clone(),
                        GenericValue::Host(h) => h.normalized().to_string(),
                    }),
                ),
            };
            params.insert(name, value);
        }
        ViaKey {
            protocol_name: self.sent_protocol.name.to_ascii_lowercase(),
            protocol_version: self.sent_protocol.version.to_ascii_lowercase(),
            transport: self.sent_protocol.transport.lowercase_name(),
            host: self.host.normalized(),
            port: self.port.unwrap_or(DEFAULT_SIP_PORT),
            params,
        }
    }
}

impl fmt::Display for Via {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.sent_protocol, self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        for param in &self.params {
            write!(f, ";{}", param)?;
        }
        Ok(())
    }
}

impl FromStr for Via {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_single_via(s.as_bytes())
    }
}

fn parse_single_via(raw: &[u8]) -> Result<Via> {
    match parse_via(raw) {
        Ok((rem, via)) if trim_wsp(rem).is_empty() => Ok(via),
        Ok((rem, _)) => Err(Error::InvalidVia(format!(
            "trailing characters after Via value: {:?}",
            String::from_utf8_lossy(rem)
        ))),
        Err(e) => {
            debug!("Via parse error: {:?}", e);
            Err(Error::InvalidVia(format!("{:?}", e)))
        }
    }
}

/// Parses the topmost (first) value of a Via header collection.
///
/// Each Via occupies one full header field value; subsequent values stay
/// unparsed until requested. An absent or empty first value is a
/// structured error, never a default.
pub fn topmost_via<T: AsRef<[u8]>>(raw_values: &[T]) -> Result<Via> {
    let first = raw_values
        .first()
        .ok_or_else(|| Error::InvalidVia("header has no values".into()))?;
    let raw = first.as_ref();
    if trim_wsp(raw).is_empty() {
        return Err(Error::InvalidVia("empty header value".into()));
    }
    parse_single_via(raw)
}
