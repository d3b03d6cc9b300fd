//! Logging setup for binaries and tests
//!
//! The library only emits `tracing` events. Installing a subscriber is left
//! to the binary (`init`) or the test suite (`init_test`).

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber
///
/// Filter comes from `RUST_LOG`, defaulting to `info`
/// (e.g. `RUST_LOG=garden_planner=debug`).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Debug-level subscriber writing through the test harness; safe to call
/// from every test
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
