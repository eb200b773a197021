//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system, ignoring repeat initialization
///
/// Useful in tests where several cases may race to install the logger.
pub fn try_init() {
    let _ = env_logger::builder().is_test(true).try_init();
}
