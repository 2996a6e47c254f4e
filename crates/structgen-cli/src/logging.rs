//! Tracing subscriber setup
//!
//! Logs go to stderr; stdout is reserved for generated code.

use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool, quiet: bool, configured: &str) -> String {
    if quiet {
        "error".to_string()
    } else if verbose {
        "debug".to_string()
    } else {
        configured.to_ascii_lowercase()
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over flags,
/// which take precedence over the settings file.
pub fn init(verbose: bool, quiet: bool, configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet, configured)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
