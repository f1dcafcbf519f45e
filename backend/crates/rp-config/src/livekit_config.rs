use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, MIN_TOKEN_TTL_SECS,
};

use serde::Deserialize;

/// Signing credentials for room access tokens
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LiveKitConfig {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub token_ttl_secs: u64,
}

impl Default for LiveKitConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl LiveKitConfig {
    /// Missing credentials are allowed here; token requests fail instead.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_TOKEN_TTL_SECS..=MAX_TOKEN_TTL_SECS).contains(&self.token_ttl_secs) {
            return Err(ConfigError::livekit(format!(
                "livekit.token_ttl_secs must be {}-{}, got {}",
                MIN_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, self.token_ttl_secs
            )));
        }

        Ok(())
    }

    pub fn has_credentials(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.api_key) && present(&self.api_secret)
    }
}
