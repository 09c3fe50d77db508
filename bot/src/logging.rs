//! Tracing subscriber setup

use kv_shared::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Gateway and TLS crates are chatty below `warn`
const QUIET_DEPENDENCIES: &str = "serenity=warn,tungstenite=warn,rustls=warn,hyper=warn,h2=warn";

/// Filter directive for the configured level
pub fn filter_directive(config: &LoggingConfig) -> String {
    format!("{},{}", config.level, QUIET_DEPENDENCIES)
}

/// Install the global subscriber; `RUST_LOG` overrides the configured level
pub fn init_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(config)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_file(config.source_location)
                    .with_line_number(config.source_location),
            )
            .init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).init(),
    }
}
