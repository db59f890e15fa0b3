//! Via branch parameter: the transaction identifier.
//!
//! RFC 3261 branches start with the magic cookie `z9hG4bK` to
//! distinguish them from RFC 2543 implementations. The value itself is
//! opaque; transaction matching goes through [`Branch::make_key`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque branch value from a Via header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Branch(String);

/// Case-normalized branch form used for transaction matching. Two
/// branches with the same key identify the same transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BranchKey(String);

impl Branch {
    /// The RFC 3261 magic cookie.
    pub const MAGIC_COOKIE: &'static str = "z9hG4bK";

    pub fn new(value: impl Into<String>) -> Self {
        Branch(value.into())
    }

    /// Generates a fresh RFC 3261 branch: magic cookie plus a random
    /// unique suffix.
    pub fn random() -> Self {
        Branch(format!(
            "{}{}",
            Self::MAGIC_COOKIE,
            uuid::Uuid::new_v4().simple()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the branch carries the RFC 3261 magic cookie. The cookie
    /// comparison is case-insensitive per RFC 3261 Section 8.1.1.7.
    pub fn is_rfc3261(&self) -> bool {
        self.0.len() >= Self::MAGIC_COOKIE.len()
            && self.0[..Self::MAGIC_COOKIE.len()].eq_ignore_ascii_case(Self::MAGIC_COOKIE)
    }

    /// Derives the comparison key: the branch lower-cased.
    pub fn make_key(&self) -> BranchKey {
        BranchKey(self.0.to_ascii_lowercase())
    }
}

impl BranchKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Branch {
    fn from(s: &str) -> Self {
        Branch::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_cookie_detection() {
        assert!(Branch::new("z9hG4bK776asdhds").is_rfc3261());
        assert!(Branch::new("Z9HG4BK776asdhds").is_rfc3261());
        assert!(!Branch::new("776asdhds").is_rfc3261());
        assert!(!Branch::new("").is_rfc3261());
    }

    #[test]
    fn test_key_is_case_insensitive() {
        let a = Branch::new("z9hG4bKABC");
        let b = Branch::new("Z9HG4BKabc");
        assert_eq!(a.make_key(), b.make_key());
        // The values themselves stay distinct
        assert_ne!(a, b);
    }

    #[test]
    fn test_differing_branches_differ() {
        assert_ne!(
            Branch::new("z9hG4bKabc").make_key(),
            Branch::new("z9hG4bKdef").make_key()
        );
    }

    #[test]
    fn test_random_has_cookie() {
        let b = Branch::random();
        assert!(b.is_rfc3261());
        assert_ne!(Branch::random().as_str(), b.as_str());
    }
}
