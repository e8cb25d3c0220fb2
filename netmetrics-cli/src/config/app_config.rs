use crate::config::{log_config::LoggingConfig, paths_config::PathsConfig};
use config::{Config, ConfigError, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, PartialEq, Clone, Serialize, Default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub paths: PathsConfig,
}

pub struct AppConfigBuilder {
    logging: LoggingConfig,
    paths: PathsConfig,
}

impl From<AppConfig> for AppConfigBuilder {
    fn from(config: AppConfig) -> Self {
        Self {
            logging: config.logging,
            paths: config.paths,
        }
    }
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        AppConfig::default().into()
    }
}

impl AppConfigBuilder {
    pub fn with_log_level(mut self, log_level: String) -> Self {
        self.logging.log_level = log_level;
        self
    }

    pub fn with_dataset_dir(mut self, dataset_dir: PathBuf) -> Self {
        self.paths.dataset_dir = dataset_dir;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.paths.output = output;
        self
    }

    pub fn build(self) -> AppConfig {
        AppConfig {
            logging: self.logging,
            paths: self.paths,
        }
    }
}

// Order of precedence of config loading: config path >> given config >> config default.
// Command line flags are applied on top of the result by the caller.
pub fn load_config(
    app_config: Option<AppConfig>,
    config_path: Option<PathBuf>,
) -> Result<AppConfig, ConfigError> {
    let app_config = app_config.unwrap_or_default();
    let json = serde_json::to_string(&app_config).map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    let mut builder = Config::builder().add_source(config::File::from_str(&json, FileFormat::Json));
    if let Some(config_path) = config_path {
        builder = builder.add_source(config::File::from(config_path));
    }
    builder.build()?.try_deserialize::<AppConfig>()
}
