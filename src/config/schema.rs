use serde::{Deserialize, Serialize};

use super::env::DEFAULT_API_KEY_VAR;

/// Top-level configuration file.
///
/// Example YAML:
/// ```yaml
/// server:
///   bind: "0.0.0.0:8080"
///   max_body_bytes: 1048576
/// api_key_env: ALPHAGENOME_API_KEY
/// log_format: json
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    /// Name of the environment variable checked for an API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            api_key_env: default_api_key_env(),
            log_format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to listen on, e.g. "127.0.0.1:3000"
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Request bodies larger than this are rejected with the generic error response
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_VAR.to_string()
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024
}
