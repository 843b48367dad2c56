//! Server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use forecast_facade::{ForecastConfig, GapPolicy, LabelMode};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub forecast: ForecastConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_path: PathBuf::from("hr.db"),
            forecast: ForecastConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read the process environment (call `dotenvy::dotenv()` first).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("HOST") {
            let host = raw.trim();
            if host.is_empty() || host.contains(char::is_whitespace) {
                return Err(invalid("HOST", &raw, "expected a hostname or IP address".to_string()));
            }
            config.host = host.to_string();
        }
        if let Some((key, raw)) = first_set(&lookup, &["PORT", "SERVER_PORT"]) {
            config.port = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                invalid(key, &raw, e.to_string())
            })?;
        }
        if let Some(path) = lookup("DATABASE_PATH") {
            config.database_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup("FORECAST_LABEL_MODE") {
            config.forecast.label_mode = raw
                .parse::<LabelMode>()
                .map_err(|e| invalid("FORECAST_LABEL_MODE", &raw, e.to_string()))?;
        }
        if let Some(raw) = lookup("FORECAST_GAP_POLICY") {
            config.forecast.gap_policy = raw
                .parse::<GapPolicy>()
                .map_err(|e| invalid("FORECAST_GAP_POLICY", &raw, e.to_string()))?;
        }
        if let Some(raw) = lookup("FORECAST_SEED") {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| invalid("FORECAST_SEED", &raw, e.to_string()))?;
            config.forecast.seed = Some(seed);
        }
        if let Some(raw) = lookup("FORECAST_JITTER") {
            config.forecast.jitter = parse_bool(&raw)
                .ok_or_else(|| invalid("FORECAST_JITTER", &raw, "expected true or false".to_string()))?;
        }

        Ok(config)
    }

    /// Host and port to bind; hostnames such as `localhost` resolve at bind time.
    pub fn listen_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

fn first_set<F>(lookup: &F, keys: &[&'static str]) -> Option<(&'static str, String)>
where
    F: Fn(&str) -> Option<String>,
{
    keys.iter().find_map(|&key| lookup(key).map(|value| (key, value)))
}

fn invalid(key: &'static str, value: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.listen_addr(), ("0.0.0.0", 8080));
    }

    #[test]
    fn test_reads_all_keys() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("DATABASE_PATH", "/tmp/payroll.db"),
            ("FORECAST_LABEL_MODE", "fixed-cycle"),
            ("FORECAST_GAP_POLICY", "compress"),
            ("FORECAST_SEED", "42"),
            ("FORECAST_JITTER", "false"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr(), ("127.0.0.1", 9000));
        assert_eq!(config.database_path, PathBuf::from("/tmp/payroll.db"));
        assert_eq!(config.forecast.label_mode, LabelMode::FixedCycle);
        assert_eq!(config.forecast.gap_policy, GapPolicy::Compress);
        assert_eq!(config.forecast.seed, Some(42));
        assert!(!config.forecast.jitter);
    }

    #[test]
    fn test_port_falls_back_to_server_port() {
        let config = ServerConfig::from_lookup(lookup(&[("SERVER_PORT", "5000")])).unwrap();
        assert_eq!(config.port, 5000);

        let config =
            ServerConfig::from_lookup(lookup(&[("PORT", "7000"), ("SERVER_PORT", "5000")])).unwrap();
        assert_eq!(config.port, 7000);
    }

    #[test]
    fn test_invalid_values() {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));

        let err = ServerConfig::from_lookup(lookup(&[("FORECAST_JITTER", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "FORECAST_JITTER", .. }));

        let err = ServerConfig::from_lookup(lookup(&[("FORECAST_LABEL_MODE", "lunar")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "FORECAST_LABEL_MODE", .. }));
    }

    #[test]
    fn test_invalid_host() {
        let err = ServerConfig::from_lookup(lookup(&[("HOST", "not a host")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "HOST", .. }));

        let err = ServerConfig::from_lookup(lookup(&[("HOST", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "HOST", .. }));
    }

    #[test]
    fn test_hostname_is_accepted() {
        let config =
            ServerConfig::from_lookup(lookup(&[("HOST", "localhost"), ("PORT", "0")])).unwrap();
        assert_eq!(config.listen_addr(), ("localhost", 0));
    }

    #[tokio::test]
    async fn test_hostname_binds() {
        let config =
            ServerConfig::from_lookup(lookup(&[("HOST", "localhost"), ("PORT", "0")])).unwrap();
        let listener = tokio::net::TcpListener::bind(config.listen_addr()).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
