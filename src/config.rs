// src/config.rs
use axum::http::HeaderValue;
use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: Option<String>,
    database_max_connections: u32,
    listen_addr: SocketAddr,
    allowed_origins: Vec<HeaderValue>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const fn default_listen_addr() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080)
}

const fn default_max_connections() -> u32 {
    16
}

fn default_allowed_origins() -> Vec<HeaderValue> {
    vec![HeaderValue::from_static("http://localhost:3000")]
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for everything that is unset. `.env` is loaded by the binary
    /// before this is called.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let listen_addr = match lookup("LISTEN_ADDR")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        {
            Some(raw) => raw.parse::<SocketAddr>().map_err(|err| {
                ConfigError::Invalid(format!("LISTEN_ADDR {raw:?} is not a socket address: {err}"))
            })?,
            None => default_listen_addr(),
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}"
                    )));
                }
            },
            None => default_max_connections(),
        };

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => default_allowed_origins(),
        };

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            allowed_origins,
        })
    }

    /// PostgreSQL connection string. `None` selects the in-memory store.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub const fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub const fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// CORS origins, already checked to be valid header values.
    pub fn allowed_origins(&self) -> &[HeaderValue] {
        &self.allowed_origins
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| {
                ConfigError::Invalid(format!("ALLOWED_ORIGINS entry {origin:?} is not a valid origin"))
            })
        })
        .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            database_max_connections: default_max_connections(),
            listen_addr: default_listen_addr(),
            allowed_origins: default_allowed_origins(),
        }
    }
}
