//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence; otherwise each `-v` raises the level one step
/// from `warn`. Logs go to stderr so the report on stdout stays clean.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed (tests); keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
