
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

const CONFIG_ENV_VARS: &[&str] = &[
    "PORT",
    "LIVEKIT_API_KEY",
    "LIVEKIT_API_SECRET",
    "SUPABASE_URL",
    "SUPABASE_KEY",
    "RP_SERVER_HOST",
    "RP_SERVER_PORT",
    "RP_LIVEKIT_API_KEY",
    "RP_LIVEKIT_API_SECRET",
    "RP_LIVEKIT_TOKEN_TTL_SECS",
    "RP_STORE_URL",
    "RP_STORE_API_KEY",
    "RP_STORE_TABLE",
    "RP_STORE_TIMEOUT_SECS",
    "RP_LOG_LEVEL",
    "RP_LOG_COLORED",
    "RP_LOG_FILE",
];

/// Temp config directory with RP_CONFIG_DIR pointing at it and every other
/// config variable cleared for the lifetime of the returned guards
pub(crate) struct ConfigEnv {
    pub(crate) dir: TempDir,
    _guards: Vec<EnvGuard>,
}

pub(crate) fn setup_config_dir() -> ConfigEnv {
    let dir = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = CONFIG_ENV_VARS
        .iter()
        .map(|&key| EnvGuard::remove(key))
        .collect();
    guards.push(EnvGuard::set("RP_CONFIG_DIR", dir.path().to_str().unwrap()));
    ConfigEnv {
        dir,
        _guards: guards,
    }
}

pub(crate) fn write_config(env: &ConfigEnv, contents: &str) {
    std::fs::write(env.dir.path().join("config.toml"), contents).unwrap();
}
