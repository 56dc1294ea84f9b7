use crate::error::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub server: ServerConfig,
    pub cache: CacheConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub cache_enabled: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CacheConfig {
    pub max_size: u32,
    pub expiration: u32,
}

impl Config {
    /// Parses the embedded `config/config.toml`.
    pub fn load() -> Result<Config, ApiError> {
        let config_str = include_str!("../config/config.toml");
        toml::from_str(config_str).map_err(|e| {
            tracing::error!("Failed to parse config.toml: {}", e);
            ApiError::from(e)
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://pokeapi.co/api/v2".to_string(),
                cache_enabled: true,
            },
            server: ServerConfig {
                bind: "0.0.0.0:3000".to_string(),
            },
            cache: CacheConfig {
                max_size: 1000,
                expiration: 3600,
            },
        }
    }
}
