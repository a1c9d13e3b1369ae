//! Tracing subscriber setup.
//!
//! Production runs emit one JSON object per event for the scheduler's log
//! sink. Anything else gets colored, human-readable output with the
//! screener's own debug events (per-ticker snapshots) switched on.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const PRODUCTION_FILTER: &str = "info";
const SANDBOX_FILTER: &str = "info,optiscan=debug";

fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

/// Install the global subscriber for `environment`. `RUST_LOG` takes
/// precedence over the built-in filter.
pub fn init_logging(environment: &str) {
    let production = is_production(environment);
    let default_filter = if production {
        PRODUCTION_FILTER
    } else {
        SANDBOX_FILTER
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if production {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_target(true)
                    .with_writer(std::io::stdout),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
