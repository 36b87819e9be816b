//! Diagnostic logging
//!
//! Logs go to stderr so they never mix with the tables on stdout. `RUST_LOG`
//! takes precedence over the `--log-level` flag.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when neither `RUST_LOG` nor `level` parses
pub const DEFAULT_LEVEL: &str = "warn";

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_logging(level: &str) {
    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain_level("debug")]
    #[case::directive("transfer_ledger=trace")]
    #[case::garbage("not a [level")]
    fn test_build_filter_never_panics(#[case] level: &str) {
        let _ = build_filter(level);
    }

    #[test]
    fn test_init_twice() {
        init_logging("info");
        init_logging("debug");
    }
}
