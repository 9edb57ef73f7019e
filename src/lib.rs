//! Development-Server Proxy Configuration Library
//!
//! Resolves the reverse-proxy rule a frontend development server uses to
//! forward `/api` requests to a backend origin. The target comes from an
//! optional environment variable with a local default; the resolved rule is
//! lowered to the path-prefix-keyed object the server's forwarding
//! middleware consumes.

pub mod config;
pub mod rewrite;

pub use config::resolver::{ProxyConfigResolver, API_URL_ENV_VAR, DEFAULT_TARGET};
pub use config::schema::{ConfigError, DevServerProxy, ProxyRule, ProxyTarget};
pub use rewrite::{PathRewrite, RewriteError};
