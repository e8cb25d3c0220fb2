use config::ConfigError;
use netmetrics::prelude::GraphError;
use std::io;
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Dataset error: {0}")]
    GraphError(#[from] GraphError),
    #[error("Failed to write report: {0}")]
    IoError(#[from] io::Error),
    #[error("Failed to set up logging: {0}")]
    LoggingError(#[from] TryInitError),
}
