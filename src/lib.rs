//! # sip-via-core
//!
//! Lexical and grammar core for SIP header parsing: a reusable
//! parser-combinator toolkit, the RFC 3261 quoted-string codec, and the
//! Via header model with its transaction comparison key.
//!
//! The crate is a pure, stateless text-to-structured-value (and back)
//! transformation engine over already-received byte buffers. There is no
//! I/O and no shared mutable state; every function is safe to call from
//! any number of threads concurrently.
//!
//! ## Layers
//!
//! - [`parser`]: nom-based combinators: token scanning, linear white
//!   space, separators, integers, the quoted-string codec, and the
//!   generic `name[=value]` parameter grammar shared by many headers.
//! - [`types`]: the structured values those grammars produce: [`Host`],
//!   [`Transport`], [`Branch`], [`Param`], and [`Via`] with [`ViaKey`].
//!
//! ## Example
//!
//! ```rust
//! use sip_via_core::prelude::*;
//! use std::str::FromStr;
//!
//! let via = Via::from_str("SIP/2.0/UDP pc33.atlanta.com:5060;branch=z9hG4bK776asdhds")?;
//! assert_eq!(via.sent_protocol.transport, Transport::Udp);
//! assert_eq!(via.port, Some(5060));
//!
//! // Keys abstract away case and the default port
//! let same = Via::from_str("sip/2.0/udp PC33.atlanta.com:5060;branch=z9hG4bK776asdhds")?;
//! assert_eq!(via.make_key(), same.make_key());
//! # Ok::<(), sip_via_core::Error>(())
//! ```

pub mod error;
pub mod parser;
pub mod types;

pub use error::{Error, Result};
pub use types::{Branch, BranchKey, GenericValue, Host, Param, SentProtocol, Transport, Via, ViaKey};

/// Convenience re-exports for callers that want the whole surface.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::parser::quoted::{quote, quoted_string, skip, unquote, unquoting_parse};
    pub use crate::parser::token::is_token_char;
    pub use crate::types::{
        topmost_via, Branch, BranchKey, GenericValue, Host, Param, SentProtocol, Transport, Via,
        ViaKey,
    };
}
