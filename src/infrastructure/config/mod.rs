use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

/// Runtime configuration for the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub host: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Upload size ceiling in bytes; larger files are rejected before parsing
    pub max_upload_bytes: usize,

    /// Number of rows included in file previews
    pub preview_rows: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            max_upload_bytes: 16 * 1024 * 1024,
            preview_rows: 5,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then `datasweep.toml`, then `DATASWEEP_*` env vars
    pub fn load() -> Result<Self> {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("datasweep.toml"))
            .merge(Env::prefixed("DATASWEEP_"))
            .extract()
            .map_err(|e| AppError::ValidationError(format!("Invalid configuration: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.port, 3001);
        assert_eq!(config.preview_rows, 5);
        assert_eq!(config.max_upload_bytes, 16 * 1024 * 1024);
    }
}
