//! Logging utilities for llm-arena
//!
//! Re-exports tracing macros with log_* naming convention for consistency,
//! and installs the process-wide subscriber for the binary.

use tracing_subscriber::{fmt, EnvFilter};

// Re-export tracing macros with log_* naming
pub use tracing::{
    debug as log_debug,
    error as log_error,
    info as log_info,
    warn as log_warn,
};

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `default_filter`.
/// Calling this twice is harmless: the second install is ignored.
pub fn init_tracing(default_filter: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = fmt().with_env_filter(filter).with_target(false);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        log_debug!("Tracing subscriber already installed");
    }
}
