//! Runtime configuration.
//!
//! Command-line flags override environment variables, which override the
//! defaults below.
//!
//! | Variable       | Default        |
//! |----------------|----------------|
//! | `TRIAGE_HOME`  | `~/.triage/`   |
//! | `TRIAGE_BIND`  | `127.0.0.1`    |
//! | `TRIAGE_PORT`  | `8000`         |
//! | `TRIAGE_EPHEMERAL` | unset (tickets kept in memory when `1` or `true`) |

use std::path::PathBuf;
use thiserror::Error;

pub const HOME_ENV: &str = "TRIAGE_HOME";
pub const BIND_ENV: &str = "TRIAGE_BIND";
pub const PORT_ENV: &str = "TRIAGE_PORT";
pub const EPHEMERAL_ENV: &str = "TRIAGE_EPHEMERAL";

pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    Home,
    #[error("Invalid port '{0}': expected a number between 0 and 65535")]
    InvalidPort(String),
}

/// Return the data root.
///
/// Uses `$TRIAGE_HOME` if set, otherwise `~/.triage/`.
pub fn data_root() -> Result<PathBuf, ConfigError> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    let home = dirs::home_dir().ok_or(ConfigError::Home)?;
    Ok(home.join(".triage"))
}

/// Resolve the data root, preferring an explicit override.
pub fn resolve_data_root(flag: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match flag {
        Some(path) => Ok(path),
        None => data_root(),
    }
}

pub fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort(raw.to_owned()))
}

fn is_truthy(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    pub data_root: PathBuf,
    /// Keep tickets in memory only.
    pub ephemeral: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_owned(),
            port: DEFAULT_PORT,
            data_root: PathBuf::from(".triage"),
            ephemeral: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind = std::env::var(BIND_ENV).unwrap_or_else(|_| DEFAULT_BIND.to_owned());
        let port = match std::env::var(PORT_ENV) {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            bind,
            port,
            data_root: data_root()?,
            ephemeral: std::env::var(EPHEMERAL_ENV).is_ok_and(|v| is_truthy(&v)),
        })
    }

    /// `bind:port`, ready for `TcpListener::bind`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("8080"), Ok(8080));
        assert_eq!(parse_port(" 9000 "), Ok(9000));
        assert_eq!(
            parse_port("80a"),
            Err(ConfigError::InvalidPort("80a".to_owned()))
        );
        assert!(parse_port("70000").is_err());
    }

    #[test]
    fn test_truthy_values() {
        assert!(is_truthy("1"));
        assert!(is_truthy("TRUE"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
    }

    #[test]
    fn test_default_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "127.0.0.1:8000");
        assert!(!config.ephemeral);
    }

    #[test]
    fn test_flag_overrides_env() {
        let root = resolve_data_root(Some(PathBuf::from("/tmp/tickets"))).unwrap();
        assert_eq!(root, PathBuf::from("/tmp/tickets"));
    }
}
