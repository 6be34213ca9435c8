use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `STATIC_DIR`. Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        self.addr_for_port(self.port)
    }

    /// The next port up, tried when the primary one is taken.
    pub fn fallback_addr(&self) -> anyhow::Result<SocketAddr> {
        let port = self
            .port
            .checked_add(1)
            .context("no fallback port above 65535")?;
        self.addr_for_port(port)
    }

    fn addr_for_port(&self, port: u16) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[("HOST", "0.0.0.0"), ("PORT", "9100"), ("STATIC_DIR", "web")]);
        assert_eq!(config.bind_addr().unwrap(), "0.0.0.0:9100".parse::<SocketAddr>().unwrap());
        assert_eq!(
            config.fallback_addr().unwrap(),
            "0.0.0.0:9101".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.static_dir, PathBuf::from("web"));
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let config = config_from(&[("PORT", "not-a-port")]);
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn bad_host_is_an_error() {
        let config = config_from(&[("HOST", "not a host")]);
        assert!(config.bind_addr().is_err());
    }

    #[test]
    fn no_fallback_above_max_port() {
        let config = config_from(&[("PORT", "65535")]);
        assert!(config.fallback_addr().is_err());
    }
}
