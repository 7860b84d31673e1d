//! Configuration loading and management.
//!
//! Layered lowest to highest: built-in defaults, optional YAML file,
//! environment variables. CLI flags are applied on top by `main`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Default port for the HTTP server.
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment name echoed by the health endpoint.
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            environment: default_environment(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_environment() -> String {
    "development".to_string()
}

impl ServerConfig {
    /// Load configuration from an optional YAML file, then apply environment
    /// variable overrides (`PORT`, `APP_ENV`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                serde_yaml::from_str(&text)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?
            }
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => warn!("Ignoring non-numeric PORT value '{}'", port),
            }
        }
        if let Ok(environment) = std::env::var("APP_ENV")
            && !environment.is_empty()
        {
            self.environment = environment;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config: ServerConfig = serde_yaml::from_str("port: 9000\n").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn full_yaml_roundtrip() {
        let config: ServerConfig =
            serde_yaml::from_str("port: 3000\nenvironment: production\n").unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "production");
    }
}
