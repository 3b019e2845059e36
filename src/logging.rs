//! Diagnostic logging setup.
//!
//! Library code emits `tracing` events; the binary installs a stderr
//! subscriber filtered by `RUST_LOG`, falling back to
//! [`DEFAULT_LOG_FILTER`](crate::constants::DEFAULT_LOG_FILTER).

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};

/// Build the filter: `RUST_LOG` wins, otherwise the default for `verbose`.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed (e.g. a second
/// call, or a test harness that set its own).
pub fn init(verbose: bool) -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(env_filter(verbose))
        .try_init()
        .is_ok()
}
