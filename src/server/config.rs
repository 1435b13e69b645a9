use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Server configuration read from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Valkey/Redis URL for the session store
    pub valkey_url: String,
    /// Directory holding the object store's buckets
    pub storage_root: String,
    /// Base URL public object URLs are built from, e.g. `https://jobs.example.com`
    pub public_base_url: String,
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            storage_root: required("STORAGE_ROOT")?,
            public_base_url: required("PUBLIC_BASE_URL")?,
            bind_address,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
