//! Process configuration: command-line flags with environment fallbacks.

use anyhow::{bail, Result};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};

use crate::constants::CITY_API_BASE;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "city-recipes",
    about = "City infos, weather and recipes behind one HTTP API"
)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Key sent to the city data provider
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, env = "CITY_API_BASE_URL", default_value = CITY_API_BASE)]
    pub base_url: String,
}

impl Config {
    /// Reads `.env` if present, then parses flags and environment.
    pub fn load() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Ignoring unreadable .env file: {}", e);
            }
        }

        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            bail!("API_KEY must not be empty");
        }

        match reqwest::Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            Ok(url) => bail!("CITY_API_BASE_URL has unsupported scheme: {}", url.scheme()),
            Err(e) => bail!("CITY_API_BASE_URL is not a valid URL: {}", e),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["city-recipes", "--host", "127.0.0.1"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_explicit_flags() {
        let config = parse(&["--api-key", "k", "--port", "8080", "--base-url", CITY_API_BASE]);

        assert_eq!(config.port, 8080);
        assert_eq!(config.api_key, "k");
        assert!(config.validate().is_ok());
        assert_eq!(config.listen_addr().port(), 8080);
    }

    #[test]
    fn test_rejects_blank_api_key() {
        let config = parse(&["--api-key", "  ", "--base-url", "http://localhost:9000"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let config = parse(&["--api-key", "k", "--base-url", "not a url"]);
        assert!(config.validate().is_err());

        let config = parse(&["--api-key", "k", "--base-url", "ftp://example.com"]);
        assert!(config.validate().is_err());
    }
}
