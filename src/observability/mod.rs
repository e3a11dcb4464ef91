//! Observability: metrics tracking and logging setup.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr with an environment-driven filter.
///
/// Honors `RUST_LOG` when set, otherwise uses `default_level`. Logging goes
/// to stderr only, so a host embedding the library keeps stdout clean.
/// Calling this more than once is a no-op.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
