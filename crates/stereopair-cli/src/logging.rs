//! Tracing initialization for the binary and tests
//!
//! Diagnostic events go to stderr so stdout stays clean for the pair results
//! and the `--json` report.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "stereopair=warn,stereopair_audio=warn,stereopair_cli=warn";

/// Filter used with `--verbose` when `RUST_LOG` is not set.
pub const VERBOSE_FILTER: &str = "stereopair=debug,stereopair_audio=debug,stereopair_cli=debug";

/// Builds the env filter: `RUST_LOG` wins, otherwise the default for `verbose`.
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        })
    })
}

/// Initialize tracing for the binary.
///
/// Call this early in main(). Calling it twice is harmless; the second
/// subscriber is ignored.
pub fn init_tracing(verbose: bool) {
    let _ = fmt()
        .with_env_filter(env_filter(verbose))
        .with_target(verbose)
        .with_line_number(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}
