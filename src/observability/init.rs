//! Tracing subscriber construction.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "info";

/// Builds the filter for `config`.
///
/// `RUST_LOG` wins when it is set and valid. Otherwise `config.trace_level` is
/// used, and an unparsable or missing level falls back to `"info"`.
#[must_use]
pub fn env_filter(config: &Config) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Installs a global subscriber that writes formatted events to stderr.
///
/// # Initialization Behavior
///
/// - Spans are reported when they close, with their timing
/// - Idempotent: safe to call multiple times (only the first call takes
///   effect, later calls are ignored)
///
/// # Example
///
/// ```rust
/// use faceted_collection::observability::init_tracing;
/// use faceted_collection::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(fmt::format::FmtSpan::CLOSE);

    let subscriber = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_uses_configured_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = Config {
            trace_level: Some("debug".to_string()),
            ..Default::default()
        };
        assert_eq!(env_filter(&config).to_string().to_lowercase(), "debug");
    }

    #[test]
    fn test_filter_falls_back_on_garbage() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = Config {
            trace_level: Some("collection=loudest".to_string()),
            ..Default::default()
        };
        assert_eq!(env_filter(&config).to_string().to_lowercase(), "info");
    }
}
