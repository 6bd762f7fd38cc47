/// Server configuration.
///
/// Bind address and waiting-room timeout, resolved from environment variables
/// with the defaults below.
use std::time::Duration;

use crate::config::matchmaking::WAITING_SLOT_TIMEOUT_SECS;
use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub waiting_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            waiting_timeout: Duration::from_secs(WAITING_SLOT_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `WAITING_TIMEOUT_SECS` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST").filter(|h| !h.is_empty()) {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: port.clone() })?;
        }
        if let Some(secs) = lookup("WAITING_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| ConfigError::Invalid {
                key: "WAITING_TIMEOUT_SECS",
                value: secs.clone(),
            })?;
            config.waiting_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
