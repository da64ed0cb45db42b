//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::DEFAULT_LOG_FILTER;

/// Install the global fmt subscriber filtered by `directive`.
///
/// A malformed directive falls back to [`DEFAULT_LOG_FILTER`] and is reported
/// once the subscriber is up.
pub fn init(directive: &str) {
    let (filter, rejected) = env_filter(directive);
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(e) = rejected {
        tracing::warn!(error = %e, directive, fallback = DEFAULT_LOG_FILTER, "invalid RUST_LOG, using default filter");
    }
}

fn env_filter(directive: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e)),
    }
}

#[cfg(test)]
#[path = "telemetry_test.rs"]
mod tests;
