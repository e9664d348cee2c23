//! Application configuration.

use config::{Config, Environment, File};
use roster_core::{RosterError, RosterResult};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub security: SecurityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen host.
    pub host: String,
    /// Listen port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Security configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Password hashing cost in MiB of Argon2 memory.
    pub password_hash_cost: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            password_hash_cost: 12,
        }
    }
}

impl AppConfig {
    /// Loads configuration from layered sources.
    ///
    /// Sources are applied in order:
    /// 1. `config/default.toml`
    /// 2. `config/local.toml` (not committed)
    /// 3. Environment variables with a `ROSTER_` prefix
    pub fn load() -> RosterResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let mut builder = Config::builder();

        for name in ["config/default.toml", "config/local.toml"] {
            if Path::new(name).exists() {
                debug!("Loading config from: {}", name);
                builder = builder.add_source(File::with_name(name).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("ROSTER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| RosterError::internal(format!("Failed to load configuration: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| RosterError::internal(format!("Invalid configuration: {e}")))
    }
}
