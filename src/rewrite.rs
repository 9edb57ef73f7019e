//! Path rewrite rules.
//!
//! # Responsibilities
//! - Parse anchored-prefix rewrite patterns (`"^/api"`)
//! - Apply the pattern-to-replacement mapping to request paths
//!
//! # Design Decisions
//! - Patterns are anchored path prefixes only; no regex to guarantee O(n) matching
//! - Identity rewrites are built directly from a prefix and cannot fail
//! - Application never fails; a non-matching path passes through unchanged

use thiserror::Error;

/// Error type for rewrite pattern parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RewriteError {
    /// The pattern did not start with the `^` anchor.
    #[error("rewrite pattern must be anchored with '^': {0:?}")]
    Unanchored(String),

    /// The pattern was the anchor alone, with nothing to match.
    #[error("rewrite pattern has an empty prefix")]
    EmptyPrefix,
}

/// A pattern-to-replacement mapping applied to a request path before forwarding.
///
/// The pattern is an anchored path prefix (e.g. `"^/api"`); when a path starts
/// with that prefix, the prefix is replaced by the replacement string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRewrite {
    prefix: String,
    replacement: String,
}

impl PathRewrite {
    /// Parse a rewrite rule from an anchored pattern and a replacement string.
    pub fn parse(pattern: &str, replacement: impl Into<String>) -> Result<Self, RewriteError> {
        let prefix = pattern
            .strip_prefix('^')
            .ok_or_else(|| RewriteError::Unanchored(pattern.to_string()))?;

        if prefix.is_empty() {
            return Err(RewriteError::EmptyPrefix);
        }

        Ok(Self {
            prefix: prefix.to_string(),
            replacement: replacement.into(),
        })
    }

    /// The identity rewrite for a prefix: the matched prefix is rewritten to itself.
    pub fn identity(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            replacement: prefix.clone(),
            prefix,
        }
    }

    /// The anchored pattern, e.g. `"^/api"`.
    pub fn pattern(&self) -> String {
        format!("^{}", self.prefix)
    }

    /// The replacement string.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Returns true if applying this rewrite never alters a path.
    pub fn is_identity(&self) -> bool {
        self.prefix == self.replacement
    }

    /// Apply the rewrite to a request path.
    ///
    /// Paths that do not start with the pattern's prefix pass through unchanged.
    pub fn apply(&self, path: &str) -> String {
        match path.strip_prefix(&self.prefix) {
            Some(rest) => format!("{}{}", self.replacement, rest),
            None => path.to_string(),
        }
    }
}
