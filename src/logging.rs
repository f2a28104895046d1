//! Logging initialization

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the filter defaults to
/// `dirzip=debug` with `--verbose` and `dirzip=info` without. Records go
/// to stderr so they never mix with anything a caller captures from
/// stdout. Calling this twice is a no-op.
pub fn init(verbose: bool) {
    let default = if verbose {
        "dirzip=debug,warn"
    } else {
        "dirzip=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
