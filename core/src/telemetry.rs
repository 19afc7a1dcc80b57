use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::TelemetryConfig;

/// Installs the global subscriber. `RUST_LOG` wins over the configured filter.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_tracing(config: &TelemetryConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(config.with_target);

    if config.with_time {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.without_time())
            .try_init()
            .is_ok()
    }
}
