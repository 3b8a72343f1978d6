//! Tracing subscriber setup
//!
//! Logs go to stderr so `routes --output -` can stream the table on stdout.

use tracing_subscriber::EnvFilter;

/// Default log level for the global verbosity flags. `--quiet` wins over `--verbose`.
fn default_level(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Initialise tracing-based logging.
///
/// Uses `RUST_LOG` if set, otherwise a level derived from the verbosity flags.
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
