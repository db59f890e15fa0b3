//! Error types for the SIP grammar core.
//!
//! Every parser in this crate reports failure through the [`Error`] enum.
//! Combinators surface the first failure immediately; no partial value is
//! ever returned alongside an error.

use thiserror::Error;

/// Errors produced by the lexical and grammar layers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A token scan matched zero characters where one or more were required.
    #[error("expected a token")]
    NotAToken,

    /// A digit scan failed, overflowed, or produced a value outside the
    /// declared range (for example `ttl` above 255).
    #[error("invalid integer: {0}")]
    InvalidInteger(String),

    /// An expected literal separator character was absent.
    #[error("expected separator '{0}'")]
    NoSeparator(char),

    /// A generic parameter name failed its grammar or validator.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// A generic parameter value failed its grammar or validator.
    #[error("invalid parameter value: {0}")]
    InvalidParamValue(String),

    /// A quoted string was not closed before the end of input.
    #[error("unterminated quoted string")]
    UnterminatedQuotedString,

    /// A quoted string contained a bare CR, LF, or other forbidden
    /// control character.
    #[error("illegal control character in quoted string")]
    IllegalControlInQuotedString,

    /// A host literal failed to parse.
    #[error("invalid host: {0}")]
    InvalidHost(String),

    /// A Via header value failed grammar validation. Wraps a description
    /// of the inner cause for caller diagnostics.
    #[error("invalid Via header: {0}")]
    InvalidVia(String),
}

/// Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
