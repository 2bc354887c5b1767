use serde::{Deserialize, Serialize};
use crate::v_info;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselInfoConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme and host of the vessel-info API, without the /v1.0 prefix
    pub base_url: String,
    /// File holding the bearer token, used when the token env var is unset
    pub token_file: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: crate::API_BASE_URL.to_string(),
            token_file: crate::API_TOKEN_FILE.to_string(),
        }
    }
}

impl VesselInfoConfig {
    /// Load configuration from file, falling back to defaults if it doesn't exist.
    /// Nothing is written to disk.
    pub fn load(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = if Path::new(config_path).exists() {
            v_info!("📋 Loading configuration from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            Self::from_toml(&config_str)
                .map_err(|e| format!("Failed to parse {}: {}", config_path, e))?
        } else {
            v_info!("📋 No {} found, using defaults", config_path);
            Self::default()
        };

        if let Ok(base_url) = std::env::var(crate::BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                v_info!("📋 Base URL overridden by {}", crate::BASE_URL_ENV);
                config.api.base_url = base_url.trim().to_string();
            }
        }

        Ok(config)
    }

    pub fn from_toml(config_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(config_str)
    }
}

/// Resolve the bearer token: env var first, then the configured token file.
pub fn load_api_token(config: &ApiConfig) -> Result<String, Box<dyn std::error::Error>> {
    resolve_token(std::env::var(crate::API_TOKEN_ENV).ok(), &config.token_file)
}

fn resolve_token(env_token: Option<String>, token_file: &str) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(token) = env_token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()) {
        v_info!("🔑 Using API token from {}", crate::API_TOKEN_ENV);
        return Ok(token);
    }

    let token = fs::read_to_string(token_file)
        .map_err(|e| format!("Failed to read {} (or set {}): {}", token_file, crate::API_TOKEN_ENV, e))?
        .trim()
        .to_string();
    if token.is_empty() {
        return Err(format!("{} is empty", token_file).into());
    }
    v_info!("🔑 Using API token from {}", token_file);
    Ok(token)
}
