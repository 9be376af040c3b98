//! Logging setup

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info,native_shell=info,app_ui=info";

/// Install the global fmt subscriber
///
/// Safe to call more than once; later calls (and calls after another
/// subscriber was installed) are ignored. Returns whether this call
/// installed the subscriber.
pub fn init() -> bool {
    init_with(DEFAULT_FILTER)
}

/// Install the global fmt subscriber with a fallback filter directive
pub fn init_with(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init().is_ok()
}
