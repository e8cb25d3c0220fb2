pub mod app_config;
pub mod log_config;
pub mod paths_config;
