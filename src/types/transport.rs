//! Transport protocol registry for the Via sent-protocol.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Transport protocol named in a Via sent-protocol.
///
/// Known transports map from their token case-insensitively; an
/// unrecognized token is preserved verbatim as an extension transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transport {
    Udp,
    Tcp,
    Tls,
    Sctp,
    Ws,
    Wss,
    /// Extension transport, token preserved as received.
    Other(String),
}

impl Transport {
    /// Resolves a transport token. Never fails: unknown tokens become
    /// [`Transport::Other`].
    pub fn from_token(token: &str) -> Transport {
        match token.to_ascii_lowercase().as_str() {
            "udp" => Transport::Udp,
            "tcp" => Transport::Tcp,
            "tls" => Transport::Tls,
            "sctp" => Transport::Sctp,
            "ws" => Transport::Ws,
            "wss" => Transport::Wss,
            _ => Transport::Other(token.to_string()),
        }
    }

    /// Lower-cased transport name, used when building comparison keys.
    pub fn lowercase_name(&self) -> String {
        match self {
            Transport::Other(t) => t.to_ascii_lowercase(),
            known => known.to_string().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Udp => write!(f, "UDP"),
            Transport::Tcp => write!(f, "TCP"),
            Transport::Tls => write!(f, "TLS"),
            Transport::Sctp => write!(f, "SCTP"),
            Transport::Ws => write!(f, "WS"),
            Transport::Wss => write!(f, "WSS"),
            Transport::Other(t) => write!(f, "{}", t),
        }
    }
}
