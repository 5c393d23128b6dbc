// src/config/service.rs
//! Service settings: required NewsData.io key, optional port / base url / timeout.
//!
//! Precedence: environment > optional TOML file > built-in defaults. The API key is
//! only ever read from the environment.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::ingest::providers::newsdata::DEFAULT_BASE_URL;

pub const ENV_API_KEY: &str = "NEWSDATA_API_KEY";
pub const ENV_PORT: &str = "PORT";
pub const ENV_BASE_URL: &str = "NEWSDATA_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "HEADLINES_TIMEOUT_SECS";
pub const ENV_CONFIG_PATH: &str = "SERVICE_CONFIG_PATH";

pub const DEFAULT_CONFIG_PATH: &str = "config/service.toml";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    port: Option<u16>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Clone)]
pub struct ServiceConfig {
    pub api_key: String,
    pub port: u16,
    pub base_url: String,
    /// Upper bound the HTTP layer puts on one pipeline run.
    pub request_timeout: Duration,
}

// Keep the key out of logs.
impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("api_key_len", &self.api_key.len())
            .field("port", &self.port)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl ServiceConfig {
    /// Read from the process environment (call `dotenvy::dotenv()` first if wanted).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let file = match lookup(ENV_CONFIG_PATH) {
            Some(p) => load_file(&PathBuf::from(p))?,
            None => {
                let p = Path::new(DEFAULT_CONFIG_PATH);
                if p.exists() {
                    load_file(p)?
                } else {
                    FileConfig::default()
                }
            }
        };

        let port = match non_empty(lookup(ENV_PORT)) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: ENV_PORT,
                value: raw,
                expected: "a TCP port number",
            })?,
            None => file.port.unwrap_or(DEFAULT_PORT),
        };

        let base_url = non_empty(lookup(ENV_BASE_URL))
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match non_empty(lookup(ENV_TIMEOUT_SECS)) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(v) if v > 0 => v,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: ENV_TIMEOUT_SECS,
                        value: raw,
                        expected: "a positive number of seconds",
                    })
                }
            },
            None => file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key,
            port,
            base_url,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
