use std::env;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl Config {
    /// Reads HOST, PORT and STATIC_DIR. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.port),
            static_dir: lookup("STATIC_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    pub fn addr(&self) -> io::Result<SocketAddr> {
        parse_addr(&self.host, self.port)
    }

    /// Next port up, tried once when the primary bind fails.
    pub fn fallback_addr(&self) -> io::Result<SocketAddr> {
        let port = self.port.checked_add(1).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "no fallback port above 65535")
        })?;
        parse_addr(&self.host, port)
    }
}

fn parse_addr(host: &str, port: u16) -> io::Result<SocketAddr> {
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{host}:{port}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("STATIC_DIR", "/srv/www"),
        ]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.fallback_addr().unwrap().port(), 8081);
    }

    #[test]
    fn garbage_port_falls_back_to_default() {
        assert_eq!(config_from(&[("PORT", "eighty")]).port, DEFAULT_PORT);
    }

    #[test]
    fn no_fallback_above_max_port() {
        let config = config_from(&[("PORT", "65535")]);
        assert!(config.addr().is_ok());
        assert!(config.fallback_addr().is_err());
    }

    #[test]
    fn unparsable_host_is_an_error() {
        assert!(config_from(&[("HOST", "not a host")]).addr().is_err());
    }
}
