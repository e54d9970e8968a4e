use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LogFormat;

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
/// CloudWatch stamps each line, so the formatter omits its own timestamp.
pub fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(false)
                .without_time()
                .with_ansi(false);
            registry.with(layer).init();
        }
        LogFormat::Text => {
            let layer = fmt::layer()
                .with_target(false)
                .without_time()
                .with_ansi(false);
            registry.with(layer).init();
        }
    }
}
