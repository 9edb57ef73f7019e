//! Proxy target resolution from the process environment.

use crate::config::schema::ProxyRule;

/// Environment variable holding the backend origin override.
pub const API_URL_ENV_VAR: &str = "VUE_APP_API_URL";

/// Backend origin used when no override is present.
pub const DEFAULT_TARGET: &str = "http://localhost:5000";

/// Path prefix proxied to the backend.
pub const API_PATH_PREFIX: &str = "/api";

/// Produces the proxy rule consumed by the development server's
/// request-forwarding middleware.
///
/// Runs once at configuration-load time, before the server starts accepting
/// connections; the resolved rule is read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct ProxyConfigResolver {
    env_var: String,
    default_target: String,
    path_prefix: String,
}

impl Default for ProxyConfigResolver {
    fn default() -> Self {
        Self {
            env_var: API_URL_ENV_VAR.to_string(),
            default_target: DEFAULT_TARGET.to_string(),
            path_prefix: API_PATH_PREFIX.to_string(),
        }
    }
}

impl ProxyConfigResolver {
    /// Create a resolver with the standard variable, default, and prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver reading a differently named environment variable.
    pub fn with_env_var(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
            ..Self::default()
        }
    }

    /// Resolve the proxy rule from the process environment.
    ///
    /// Cannot fail: an absent or empty variable is the normal path and falls
    /// back to the default target.
    pub fn resolve(&self) -> ProxyRule {
        self.resolve_from(std::env::var(&self.env_var).ok().as_deref())
    }

    /// Resolution with the environment read factored out.
    ///
    /// The candidate is used verbatim when present and non-empty.
    pub fn resolve_from(&self, candidate: Option<&str>) -> ProxyRule {
        let target = match candidate {
            Some(value) if !value.is_empty() => {
                tracing::debug!(
                    env_var = %self.env_var,
                    target = %value,
                    "Using proxy target from environment"
                );
                value.to_string()
            }
            _ => {
                tracing::debug!(
                    env_var = %self.env_var,
                    target = %self.default_target,
                    "Proxy target not set, using default"
                );
                self.default_target.clone()
            }
        };

        ProxyRule::for_prefix(self.path_prefix.clone(), target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_is_used_verbatim() {
        let rule = ProxyConfigResolver::new().resolve_from(Some("https://api.example.com"));
        assert_eq!(rule.target, "https://api.example.com");
    }

    #[test]
    fn test_absent_candidate_uses_default() {
        let rule = ProxyConfigResolver::new().resolve_from(None);
        assert_eq!(rule.target, DEFAULT_TARGET);
    }

    #[test]
    fn test_empty_candidate_uses_default() {
        let rule = ProxyConfigResolver::new().resolve_from(Some(""));
        assert_eq!(rule.target, DEFAULT_TARGET);
    }

    #[test]
    fn test_change_origin_is_always_set() {
        let resolver = ProxyConfigResolver::new();

        assert!(resolver.resolve_from(None).change_origin);
        assert!(resolver.resolve_from(Some("http://10.0.0.1:8080")).change_origin);
    }

    #[test]
    fn test_rewrite_is_always_the_api_identity() {
        let resolver = ProxyConfigResolver::new();

        for candidate in [None, Some("https://api.example.com")] {
            let rule = resolver.resolve_from(candidate);
            assert_eq!(rule.rewrite.pattern(), "^/api");
            assert_eq!(rule.rewrite.replacement(), "/api");
        }
    }

    #[test]
    fn test_unvalidated_candidate_passes_through() {
        // The contract performs no URL validation.
        let rule = ProxyConfigResolver::new().resolve_from(Some("not a url"));
        assert_eq!(rule.target, "not a url");
    }
}
