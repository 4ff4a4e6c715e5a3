//! Server configuration from the environment
//!
//! | variable | default |
//! |---|---|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `5000` |
//! | `MAX_BODY_BYTES` | 16 MiB |
//!
//! A `.env` file is loaded first when present.

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Invalid configuration value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Listener and request limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(value) => parse(&value, "PORT", "port number")?,
            None => defaults.port,
        };
        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(value) => parse(&value, "MAX_BODY_BYTES", "byte count")?,
            None => defaults.max_body_bytes,
        };

        let config = Self {
            host,
            port,
            max_body_bytes,
        };
        config.socket_addr()?;
        Ok(config)
    }

    /// Address to bind
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                name: "HOST",
                expected: "IP address",
                value: self.host.clone(),
            })
    }
}

fn parse<T: std::str::FromStr>(
    value: &str,
    name: &'static str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        expected,
        value: value.to_string(),
    })
}
