//! Header-specific grammars built on the combinator toolkit.

pub mod via;
