//! Structured logging setup for landform tools.
//!
//! Library crates emit events through the `tracing` macros and stay
//! subscriber-agnostic; binaries call [`init_logging`] once at startup to
//! install a console subscriber with env-filter support.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter applied when neither `RUST_LOG` nor an override is present.
const DEFAULT_FILTER: &str = "info";

/// Install the global tracing subscriber.
///
/// Console output carries timestamps (uptime), module targets, and severity
/// levels. The filter resolves in order: the `RUST_LOG` environment
/// variable, then `filter_override`, then `"info"`. Calling this twice
/// panics (the global subscriber can only be set once), so binaries call it
/// exactly once at startup.
pub fn init_logging(filter_override: Option<&str>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_override.unwrap_or(DEFAULT_FILTER)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// Create an `EnvFilter` with the default filter string.
///
/// Useful for tests and for consistent defaults across binaries.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
