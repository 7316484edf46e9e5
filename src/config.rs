//! Server configuration
//!
//! Read from `HOST` / `PORT`, then overridden by `--host=` / `--port=` flags.

use anyhow::{Context, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Build from the process environment and command-line flags
    pub fn load(args: &[String]) -> Result<Self> {
        Self::from_sources(|key| std::env::var(key).ok(), args)
    }

    /// Build from an arbitrary variable lookup and flags
    pub fn from_sources<F>(env: F, args: &[String]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = env("HOST").filter(|h| !h.is_empty()) {
            config.host = host;
        }
        if let Some(port) = env("PORT").filter(|p| !p.is_empty()) {
            config.port = parse_port(&port).context("invalid PORT environment variable")?;
        }

        for arg in args {
            if let Some(host) = arg.strip_prefix("--host=") {
                config.host = host.to_string();
            } else if let Some(port) = arg.strip_prefix("--port=") {
                config.port = parse_port(port).context("invalid --port flag")?;
            }
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(value: &str) -> Result<u16> {
    value
        .trim()
        .parse::<u16>()
        .with_context(|| format!("'{}' is not a valid port", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_sources(env_of(&[]), &[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config =
            ServerConfig::from_sources(env_of(&[("PORT", "10000"), ("HOST", "127.0.0.1")]), &[])
                .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:10000");
    }

    #[test]
    fn test_flags_override_env() {
        let args = vec!["--serve".to_string(), "--port=3100".to_string()];
        let config = ServerConfig::from_sources(env_of(&[("PORT", "10000")]), &args).unwrap();
        assert_eq!(config.port, 3100);
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(ServerConfig::from_sources(env_of(&[("PORT", "eighty")]), &[]).is_err());
        let args = vec!["--port=70000".to_string()];
        assert!(ServerConfig::from_sources(env_of(&[]), &args).is_err());
    }
}
