//! Centralized configuration (environment variables + defaults).

use anyhow::{anyhow, Context};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads every setting, after loading `.env` if one is present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Ok(Self {
            database_url: database_url()?,
            bind_addr: bind_addr()?,
            max_connections: max_connections()?,
            request_timeout: request_timeout()?,
        })
    }
}

/// Database URL must be provided (no default) for safety.
pub fn database_url() -> anyhow::Result<String> {
    std::env::var("DATABASE_URL").context("DATABASE_URL must be set")
}

/// Listen address of the API server.
pub fn bind_addr() -> anyhow::Result<SocketAddr> {
    parse_or_default("BIND_ADDR", env_var("BIND_ADDR").as_deref(), DEFAULT_BIND_ADDR.parse()?)
}

/// Connection-pool size (at least 1).
pub fn max_connections() -> anyhow::Result<u32> {
    let v = parse_or_default(
        "DB_MAX_CONNECTIONS",
        env_var("DB_MAX_CONNECTIONS").as_deref(),
        DEFAULT_MAX_CONNECTIONS,
    )?;
    Ok(v.max(1))
}

/// Per-request timeout applied by the HTTP layer.
pub fn request_timeout() -> anyhow::Result<Duration> {
    let secs = parse_or_default(
        "REQUEST_TIMEOUT_SECS",
        env_var("REQUEST_TIMEOUT_SECS").as_deref(),
        DEFAULT_REQUEST_TIMEOUT_SECS,
    )?;
    Ok(Duration::from_secs(secs))
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or_default<T: FromStr>(name: &str, raw: Option<&str>, default: T) -> anyhow::Result<T> {
    match raw {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse::<T>()
            .map_err(|_| anyhow!("{} has an invalid value: {:?}", name, v)),
    }
}
