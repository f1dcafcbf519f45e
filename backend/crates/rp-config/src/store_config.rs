use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_STORE_TABLE, DEFAULT_STORE_TIMEOUT_SECS,
    MAX_STORE_TIMEOUT_SECS, MIN_STORE_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Connection settings for the profile database
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub table: String,
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            table: String::from(DEFAULT_STORE_TABLE),
            timeout_secs: DEFAULT_STORE_TIMEOUT_SECS,
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.url.as_deref() {
            None | Some("") => return Err(ConfigError::store("store.url is required")),
            Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                return Err(ConfigError::store(format!(
                    "store.url must start with http:// or https://, got {}",
                    url
                )));
            }
            Some(_) => {}
        }

        if self.api_key.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::store("store.api_key is required"));
        }

        if self.table.trim().is_empty() {
            return Err(ConfigError::store("store.table cannot be empty"));
        }

        if !(MIN_STORE_TIMEOUT_SECS..=MAX_STORE_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::store(format!(
                "store.timeout_secs must be {}-{}, got {}",
                MIN_STORE_TIMEOUT_SECS, MAX_STORE_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
