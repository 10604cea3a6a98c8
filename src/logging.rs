//! Diagnostic logging for the command-line binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary. Logs go to stderr so `--stdout` output stays clean.
//!
//! Priority: `RUST_LOG` > `--debug` > [`DEFAULT_LOG_LEVEL`].

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor `--debug` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Builds the log filter for the given `--debug` flag.
pub fn build_filter(debug_flag: bool) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    }
}

/// Initialise the global subscriber. Call once, at startup.
pub fn init(debug_flag: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(debug_flag))
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();

    tracing::debug!(
        app = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "Logging initialised"
    );
}
