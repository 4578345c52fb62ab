//! Diagnostic logging for cssdts.
//!
//! User-facing progress goes through engine alerts (see [`crate::ui`]).
//! This subscriber only carries `tracing` diagnostics and writes them to
//! stderr so they never interleave with generated output on stdout.
//!
//! ```rust,no_run
//! use cssdts_cli::logger::init_logger;
//!
//! init_logger(false, false);
//! tracing::debug!("resolved import");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "cssdts=debug,cssdts_cli=debug";
const DEFAULT_FILTER: &str = "cssdts=warn,cssdts_cli=warn";

/// Initialize the global tracing subscriber.
///
/// Level selection, first match wins:
/// 1. `--verbose`: debug for cssdts crates
/// 2. `RUST_LOG`: custom filter
/// 3. warnings only
pub fn init_logger(verbose: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose), no_color);
}

/// Initialize the subscriber with an explicit filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
