//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout carries only command output.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Default level when neither `--verbose` nor `RUST_LOG` is given
pub fn default_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

/// Install the global subscriber
///
/// `RUST_LOG` directives take precedence over the default level. Calling this
/// twice is harmless; the second subscriber is discarded.
pub fn init(verbose: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
