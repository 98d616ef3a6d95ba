//! Domain types for certgate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::NOT_CERTIFIED;

/// A certification status as returned to HTTP clients.
///
/// This is either the raw result string of the node-query script, or the
/// literal `"not-certified"` when the key is not certified or the query
/// could not determine certification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CertStatus(String);

impl CertStatus {
    /// The `"not-certified"` status.
    pub fn not_certified() -> Self {
        Self(NOT_CERTIFIED.to_string())
    }

    /// Normalizes raw script output into a status.
    ///
    /// Output is trimmed of surrounding whitespace; an empty result,
    /// `"False"`, or `"null"` all mean the key is not certified. Anything
    /// else is kept verbatim.
    pub fn from_query_output(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "False" || trimmed == "null" {
            Self::not_certified()
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Returns true if this is the `"not-certified"` status.
    pub fn is_not_certified(&self) -> bool {
        self.0 == NOT_CERTIFIED
    }

    /// The status as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CertStatus {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_verbatim() {
        let status = CertStatus::from_query_output("True");
        assert_eq!(status.as_str(), "True");
        assert!(!status.is_not_certified());
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        let status = CertStatus::from_query_output("  certified-level-2 \n");
        assert_eq!(status.as_str(), "certified-level-2");
    }

    #[test]
    fn test_normalize_false_literal() {
        assert!(CertStatus::from_query_output("False").is_not_certified());
    }

    #[test]
    fn test_normalize_null_literal() {
        assert!(CertStatus::from_query_output("null").is_not_certified());
    }

    #[test]
    fn test_normalize_empty() {
        assert!(CertStatus::from_query_output("").is_not_certified());
        assert!(CertStatus::from_query_output("   \n").is_not_certified());
    }

    #[test]
    fn test_serde_transparent() {
        let status = CertStatus::from_query_output("True");
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"True\"");
    }
}
