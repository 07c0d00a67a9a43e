//! Diagnostics for the submarine CLI.
//!
//! stdout belongs to the puzzle: progress lines, the summary, or the JSON
//! report. Everything emitted through `tracing` (resolved input path, record
//! counts, final results) is written to stderr instead, so piping stdout
//! never mixes the two.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset: only warnings and errors.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Call once, at the top of `main`.
///
/// `RUST_LOG=submarine=debug submarine sweep` shows how config and flags
/// resolved; `info` adds the computed result.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact().with_target(false))
        .init();
}
