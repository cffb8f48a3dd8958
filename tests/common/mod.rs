//! Utilities shared by the integration tests.
//!
//! Mirrors `src/testing.rs`, which is only compiled for unit tests.

/// Routes `log` output through the test harness.
///
/// Safe to call from every test: only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
