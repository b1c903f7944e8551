//! Process-wide tracing setup

use binder_config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber from configuration
///
/// `level_override` (from `--log-level`) replaces the configured level.
/// `RUST_LOG` is used only when the configured filter fails to parse.
pub fn init_tracing(config: &LoggingConfig, level_override: Option<&str>) {
    let directive = match level_override {
        Some(level) => std::iter::once(level.to_string())
            .chain(config.directives.iter().cloned())
            .collect::<Vec<_>>()
            .join(","),
        None => config.filter_directive(),
    };

    let env_filter = EnvFilter::try_new(&directive)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    // try_init: a subscriber may already be installed (tests, embedding hosts)
    let result = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    if result.is_err() {
        tracing::debug!("Global tracing subscriber already initialized, skipping");
    }
}
