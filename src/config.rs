//! Server settings read from the environment (and an optional `.env` file).

use std::{env, net::SocketAddr, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
    #[error("invalid listen address {0:?}")]
    InvalidAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bind address, `HOST`.
    pub host: String,
    /// Listen port, `PORT`.
    pub port: u16,
    /// Directory served at `/`, `STATIC_DIR`.
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self { host: "0.0.0.0".into(), port: 4000, static_dir: PathBuf::from("./public") }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            static_dir: lookup("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
        })
    }

    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddr(raw))
    }
}
