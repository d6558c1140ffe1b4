//! Server configuration.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Default REST API port.
pub const DEFAULT_PORT: u16 = 8082;

/// Runtime configuration for the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            db_path: PathBuf::from("medleave.db"),
        }
    }
}

/// Load configuration from the environment, falling back to defaults:
/// `MEDLEAVE_HOST`, `MEDLEAVE_PORT`, `MEDLEAVE_DB`.
pub fn load_server_config() -> Result<ServerConfig> {
    let defaults = ServerConfig::default();

    let host = env::var("MEDLEAVE_HOST").unwrap_or(defaults.host);
    let port = match env::var("MEDLEAVE_PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("MEDLEAVE_PORT is not a valid port number: {raw}"))?,
        Err(_) => defaults.port,
    };
    let db_path = env::var("MEDLEAVE_DB")
        .map(PathBuf::from)
        .unwrap_or(defaults.db_path);

    Ok(ServerConfig { host, port, db_path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.db_path, PathBuf::from("medleave.db"));
    }
}
