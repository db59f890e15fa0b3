//! Structured header-value types produced by the parsers.

pub mod branch;
pub mod host;
pub mod param;
pub mod transport;
pub mod via;

pub use branch::{Branch, BranchKey};
pub use host::Host;
pub use param::{GenericValue, Param};
pub use transport::Transport;
pub use via::{topmost_via, SentProtocol, Via, ViaKey};
