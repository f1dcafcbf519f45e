use crate::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    LiveKitConfig, LoggingConfig, ServerConfig, StoreConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub livekit: LiveKitConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for RP_CONFIG_DIR env var, else use ./.rp/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply deployment variables (PORT, LIVEKIT_*, SUPABASE_*)
    /// 5. Apply RP_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::io(&config_dir, e))?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_deployment_env();
        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

        toml::from_str(&contents).map_err(|e| ConfigError::toml(path, e))
    }

    /// Get the config directory.
    /// Priority: RP_CONFIG_DIR env var > ./.rp/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.livekit.validate()?;
        self.store.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.contains("..") || Path::new(file).is_absolute())
        {
            return Err(ConfigError::config(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        info!(
            "  livekit: credentials {}, token ttl {}s",
            if self.livekit.has_credentials() {
                "present"
            } else {
                "MISSING"
            },
            self.livekit.token_ttl_secs
        );
        if !self.livekit.has_credentials() {
            warn!("LiveKit credentials missing - token requests will fail");
        }

        info!(
            "  store: {} (table {}, timeout {}s)",
            self.store.url.as_deref().unwrap_or("<unset>"),
            self.store.table,
            self.store.timeout_secs
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    /// Variables the service has always been deployed with
    fn apply_deployment_env(&mut self) {
        Self::apply_env_parse("PORT", &mut self.server.port);
        Self::apply_env_option_string("LIVEKIT_API_KEY", &mut self.livekit.api_key);
        Self::apply_env_option_string("LIVEKIT_API_SECRET", &mut self.livekit.api_secret);
        Self::apply_env_option_string("SUPABASE_URL", &mut self.store.url);
        Self::apply_env_option_string("SUPABASE_KEY", &mut self.store.api_key);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("RP_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("RP_SERVER_PORT", &mut self.server.port);

        // LiveKit
        Self::apply_env_option_string("RP_LIVEKIT_API_KEY", &mut self.livekit.api_key);
        Self::apply_env_option_string("RP_LIVEKIT_API_SECRET", &mut self.livekit.api_secret);
        Self::apply_env_parse(
            "RP_LIVEKIT_TOKEN_TTL_SECS",
            &mut self.livekit.token_ttl_secs,
        );

        // Store
        Self::apply_env_option_string("RP_STORE_URL", &mut self.store.url);
        Self::apply_env_option_string("RP_STORE_API_KEY", &mut self.store.api_key);
        Self::apply_env_string("RP_STORE_TABLE", &mut self.store.table);
        Self::apply_env_parse("RP_STORE_TIMEOUT_SECS", &mut self.store.timeout_secs);

        // Logging
        Self::apply_env_parse("RP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("RP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("RP_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
