mod config;
mod error;
mod livekit_config;
mod log_level;
mod logging_config;
mod server_config;
mod store_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use livekit_config::LiveKitConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use store_config::StoreConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const MIN_PORT: u16 = 1024;

const DEFAULT_TOKEN_TTL_SECS: u64 = 6 * 60 * 60;
const MIN_TOKEN_TTL_SECS: u64 = 60;
const MAX_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

const DEFAULT_STORE_TABLE: &str = "child_profiles";
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;
const MIN_STORE_TIMEOUT_SECS: u64 = 1;
const MAX_STORE_TIMEOUT_SECS: u64 = 120;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const CONFIG_DIR_ENV: &str = "RP_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".rp";
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(test)]
mod tests;
