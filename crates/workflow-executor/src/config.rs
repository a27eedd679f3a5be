/*
[INPUT]:  JSON configuration file (beside the executable or via WORKFLOW_EXECUTOR_CONFIG)
[OUTPUT]: Parsed key/value configuration with typed accessors
[POS]:    Configuration layer - executor setup
[UPDATE]: When adding new configuration keys or changing path resolution
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up next to the running executable
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "WORKFLOW_EXECUTOR_CONFIG";
pub const BACKEND_URL_KEY: &str = "backend_url";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing required config key `{0}`")]
    MissingKey(String),

    #[error("config key `{key}` must be a {expected}")]
    InvalidType { key: String, expected: &'static str },

    #[error("cannot locate executable directory: {0}")]
    ExecutableDir(#[source] std::io::Error),
}

/// Raw executor configuration.
///
/// The loader only checks that the document is a JSON object; required keys
/// are looked up (and reported missing) by the accessor that needs them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ExecutorConfig {
    values: Map<String, Value>,
}

impl ExecutorConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Required string value for `key`
    pub fn require_str(&self, key: &str) -> Result<&str, ConfigError> {
        let value = self
            .get(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))?;
        value.as_str().ok_or_else(|| ConfigError::InvalidType {
            key: key.to_string(),
            expected: "string",
        })
    }

    /// Backend base URL with any trailing `/` removed
    pub fn backend_url(&self) -> Result<&str, ConfigError> {
        Ok(self.require_str(BACKEND_URL_KEY)?.trim_end_matches('/'))
    }
}

impl From<Map<String, Value>> for ExecutorConfig {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

/// `config.json` in the directory holding the current executable
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(ConfigError::ExecutableDir)?;
    let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(dir.join(DEFAULT_CONFIG_FILE))
}

/// Config path from `WORKFLOW_EXECUTOR_CONFIG`, falling back to [`default_config_path`]
pub fn resolve_config_path() -> Result<PathBuf, ConfigError> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => default_config_path(),
    }
}
