//! Shared utilities for integration tests.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a tracing subscriber once for the whole test binary.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "dev_proxy_config=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}
