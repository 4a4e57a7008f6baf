//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Reads the filter from `RUST_LOG`. Panics if a logger is already installed.
pub fn init() {
    env_logger::init();
}

/// Initialize logging for a test harness
///
/// Output is captured by the test runner, and repeated calls are ignored.
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
