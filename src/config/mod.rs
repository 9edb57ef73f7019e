//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (VUE_APP_API_URL, optional)
//!     → resolver.rs (default substitution)
//!     → ProxyRule (resolved, immutable)
//!     → schema.rs (lower to consumer record shape)
//!     → DevServerProxy (path-prefix keys → forwarding records)
//!     → host development server middleware
//! ```
//!
//! # Design Decisions
//! - The rule is resolved once at startup and immutable for the process lifetime
//! - Resolution cannot fail; an absent or empty variable is the normal path
//! - The target origin is passed through verbatim, no URL validation

pub mod resolver;
pub mod schema;

pub use resolver::ProxyConfigResolver;
pub use schema::DevServerProxy;
pub use schema::ProxyRule;
pub use schema::ProxyTarget;
