mod backend_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod store_config;

#[cfg(test)]
mod tests;

pub use backend_config::BackendConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use store_config::StoreConfig;

pub const CONFIG_DIR_ENV: &str = "DP_CONFIG_DIR";
pub const CONFIG_DIR_NAME: &str = "drops-profile";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 120;
const DEFAULT_STORE_FILE: &str = "profile.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = false;
