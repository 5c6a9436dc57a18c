use std::{net::SocketAddr, str::FromStr};

use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Backend holding cached standings and form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheBackend {
    Redis,
    Memory,
}

impl FromStr for CacheBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "redis" => Ok(Self::Redis),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidEnvValue {
                var: "CACHE_BACKEND".to_string(),
                reason: format!("expected `redis` or `memory`, got `{}`", other),
            }),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub cache_backend: CacheBackend,
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require =
            |var: &str| lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let cache_backend = match lookup("CACHE_BACKEND") {
            Some(value) => value.parse()?,
            None => CacheBackend::Redis,
        };

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            valkey_url: require("VALKEY_URL")?,
            cache_backend,
            bind_address,
        })
    }
}
