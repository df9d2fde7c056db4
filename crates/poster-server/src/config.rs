use poster_layout::{PosterConfig, PosterError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the listen address
pub const BIND_ENV: &str = "POSTER_SERVER_BIND";

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Upload limit for the multipart body
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address, e.g. "0.0.0.0:8080"
    pub bind: String,
    pub max_upload_bytes: usize,
    pub poster: PosterConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            poster: PosterConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from JSON file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config: Self = serde_json::from_slice(&bytes)
            .map_err(|e| PosterError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `POSTER_SERVER_BIND` if set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(bind) = std::env::var(BIND_ENV) {
            if !bind.trim().is_empty() {
                self.bind = bind.trim().to_string();
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_upload_bytes == 0 {
            return Err(PosterError::Config(
                "max_upload_bytes must be greater than zero".to_string(),
            ));
        }
        self.poster.validate()
    }
}
