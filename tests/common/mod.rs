//! Shared test setup

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a tracing subscriber once per test binary; controlled by
/// `RUST_LOG`, silent by default
pub fn init_tracing() {
    INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
        fmt().with_env_filter(filter).with_target(false).init();
    });
}
