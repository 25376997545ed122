//! Tracing setup for the binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Installs a stderr fmt subscriber. `RUST_LOG` wins over `verbose`.
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // run() is re-entered by tests in one process; the first subscriber stays
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
