//! Configuration schema definitions.
//!
//! This module defines the proxy rule produced by the resolver and the record
//! shape the development server's forwarding middleware consumes. The consumer
//! types derive Serde traits for serialization to that middleware.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rewrite::PathRewrite;

/// Error type for emitting the consumer configuration object.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A single proxy rule: requests whose path starts with `path_prefix` are
/// forwarded to `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRule {
    /// Path prefix the rule matches (e.g. "/api").
    pub path_prefix: String,

    /// Backend origin (scheme + host + port) to forward to. Passed through
    /// verbatim, no URL validation.
    pub target: String,

    /// Present the target's host in the outbound Host header instead of the
    /// original request's host.
    pub change_origin: bool,

    /// Rewrite applied to the request path before forwarding.
    pub rewrite: PathRewrite,
}

impl ProxyRule {
    /// Build a rule for a path prefix with the identity rewrite.
    ///
    /// The rewrite pattern is derived from the prefix, so the two can never
    /// disagree.
    pub fn for_prefix(path_prefix: impl Into<String>, target: impl Into<String>) -> Self {
        let path_prefix = path_prefix.into();
        Self {
            rewrite: PathRewrite::identity(path_prefix.clone()),
            path_prefix,
            target: target.into(),
            change_origin: true,
        }
    }

    /// Lower the rule to the record shape the forwarding middleware expects.
    pub fn target_entry(&self) -> ProxyTarget {
        let mut path_rewrite = BTreeMap::new();
        path_rewrite.insert(self.rewrite.pattern(), self.rewrite.replacement().to_string());

        ProxyTarget {
            target: self.target.clone(),
            change_origin: self.change_origin,
            path_rewrite,
        }
    }
}

/// The per-prefix forwarding record consumed by the development server
/// middleware, serialized with its camelCase key names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyTarget {
    /// Backend origin to forward matching requests to.
    pub target: String,

    /// Set the outbound Host header to the target's host.
    pub change_origin: bool,

    /// Pattern → replacement mapping applied to the path.
    pub path_rewrite: BTreeMap<String, String>,
}

/// The full proxy object consumed by the development server: path-prefix keys
/// mapping to forwarding records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DevServerProxy(pub BTreeMap<String, ProxyTarget>);

impl DevServerProxy {
    /// Assemble the consumer object from resolved rules, keyed by path prefix.
    pub fn from_rules(rules: impl IntoIterator<Item = ProxyRule>) -> Self {
        Self(
            rules
                .into_iter()
                .map(|rule| (rule.path_prefix.clone(), rule.target_entry()))
                .collect(),
        )
    }

    /// Emit the object as JSON for the consuming middleware.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
