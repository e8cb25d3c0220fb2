use crate::config::log_config::LoggingConfig;
use tracing_subscriber::{
    fmt,
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    Registry,
};

/// Installs the global subscriber. Log lines go to stderr so that reports on
/// stdout can be piped.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TryInitError> {
    Registry::default()
        .with(config.get_log_env())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::NONE),
        )
        .try_init()
}
