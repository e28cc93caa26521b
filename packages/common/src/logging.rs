//! Logging bootstrap
//!
//! Library code in this workspace emits `tracing` events. With the `log` feature of
//! `tracing` those events are forwarded to the `log` facade whenever no tracing
//! subscriber is installed, so an `env_logger` backend is enough to see them.

use log::info;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging initialization helpers
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging (call once at application startup)
    ///
    /// Levels come from the `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=hashkit_unique=trace` - Trace every rejected candidate
    /// - `RUST_LOG=hashkit_common=debug` - Show secure random warm-up
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; repeated initialization is ignored.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }
}

/// Shorthand for [`LoggingTransformer::init`]
pub fn init() {
    LoggingTransformer::init();
}

/// Shorthand for [`LoggingTransformer::init_test`]
pub fn init_test() {
    LoggingTransformer::init_test();
}
