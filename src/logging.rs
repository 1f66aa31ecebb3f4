//! Diagnostic logging setup
//!
//! User-facing progress goes through the reporters in [`crate::output`].
//! This is for internal diagnostics only, written to stderr and silent
//! below `warn` unless `PYINIT_LOG` says otherwise (e.g. `PYINIT_LOG=debug`).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "PYINIT_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Install the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let filter = build_env_filter();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}
