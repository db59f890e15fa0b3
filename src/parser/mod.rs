//! Parser-combinator toolkit for SIP header grammars.
//!
//! Every rule here is a pure function from a byte span to a
//! [`ParseResult`]: on success the value plus the unparsed remainder, on
//! failure a structured nom error carrying the failing span. Combinators
//! advance the input monotonically or fail; there is no backtracking
//! beyond `alt`, so runtime is linear in input length.

use nom::IResult;

pub mod common_params;
pub mod headers;
pub mod quoted;
pub mod separators;
pub mod token;
pub mod values;
pub mod whitespace;

use crate::error::Result;
use whitespace::trim_wsp;

/// Result type shared by all combinators: remainder first, value second.
pub type ParseResult<'a, O> = IResult<&'a [u8], O>;

/// Applies each parser in `parsers` sequentially, feeding every parser
/// the remainder left by the previous one. Stops at the first failure
/// and propagates it; on full success returns the ordered values and the
/// final remainder.
pub fn parse_all<'a, O>(
    input: &'a [u8],
    parsers: &mut [&mut dyn FnMut(&'a [u8]) -> ParseResult<'a, O>],
) -> ParseResult<'a, Vec<O>> {
    let mut rest = input;
    let mut values = Vec::with_capacity(parsers.len());
    for parser in parsers.iter_mut() {
        let (rem, value) = parser(rest)?;
        rest = rem;
        values.push(value);
    }
    Ok((rest, values))
}

/// Decision returned by a [`parse_kvps`] validator for one key-value pair.
pub enum KvpAction<K, V> {
    /// Keep the pair, transformed to the validator's output types.
    Keep(K, Option<V>),
    /// Drop the pair silently.
    Skip,
}

/// Splits `input` on `sep`, splits each chunk on the first `=`, trims
/// linear white space from key and value, and runs `validator` over each
/// `(key, value-or-absent)` pair.
///
/// The separator split is not quote-aware; callers use this in contexts
/// already known to be unquoted. The first validator error aborts the
/// whole parse and is returned unchanged; no partial result survives a
/// failure.
pub fn parse_kvps<K, V, F>(mut validator: F, sep: u8, input: &[u8]) -> Result<Vec<(K, Option<V>)>>
where
    F: FnMut(&[u8], Option<&[u8]>) -> Result<KvpAction<K, V>>,
{
    let mut pairs = Vec::new();
    for chunk in input.split(|&b| b == sep) {
        let (key, value) = match chunk.iter().position(|&b| b == b'=') {
            Some(pos) => (&chunk[..pos], Some(&chunk[pos + 1..])),
            None => (chunk, None),
        };
        match validator(trim_wsp(key), value.map(trim_wsp))? {
            KvpAction::Keep(k, v) => pairs.push((k, v)),
            KvpAction::Skip => {}
        }
    }
    Ok(pairs)
}
