use serde::Deserialize;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "INFO";

#[derive(Debug, Deserialize, PartialEq, Clone, serde::Serialize)]
pub struct LoggingConfig {
    pub log_level: String,
}

impl LoggingConfig {
    /// `RUST_LOG` wins over the configured level when it is set.
    pub fn get_log_env(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_level.to_lowercase()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
