//! Server configuration, read from the environment.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse.
    #[error("invalid value for {name}: {value}")]
    InvalidValue {
        /// Variable name.
        name: String,
        /// Offending value.
        value: String,
    },
}

/// Storefront server configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// Port to bind.
    pub port: u16,
    /// Public base URL, used to decide whether session cookies are
    /// marked secure.
    pub base_url: String,
}

impl StorefrontConfig {
    /// Load configuration from the environment, falling back to local
    /// development defaults. Reads `.env` first if one is present.
    ///
    /// Variables: `STEPUP_HOST`, `STEPUP_PORT`, `STEPUP_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a set variable does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            host: parse_env_or("STEPUP_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST))?,
            port: parse_env_or("STEPUP_PORT", 3000)?,
            base_url: env::var("STEPUP_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_owned()),
        })
    }

    /// The socket address to bind the listener to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS.
    #[must_use]
    pub fn is_https(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

/// Parse an environment variable, using `default` when it is unset.
fn parse_env_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_owned(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            base_url: "http://localhost:3000".to_owned(),
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert!(!config.is_https());
    }

    #[test]
    fn test_https_detection() {
        let config = StorefrontConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 443,
            base_url: "https://stepup.example".to_owned(),
        };
        assert!(config.is_https());
    }
}
