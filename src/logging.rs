//! Tracing initialization

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter (`debug`, `simpleargs=trace`, ...)
pub const LOG_ENV: &str = "SIMPLEARGS_LOG";

/// Initialize tracing on stderr
///
/// The filter comes from `SIMPLEARGS_LOG` and defaults to `warn`. Log lines are
/// never styled so they stay distinguishable from styled stdout.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A subscriber may already be installed when embedded in another binary
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
