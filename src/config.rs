use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// User-Agent sent to every scraped page
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; SpindleBot/1.0; +https://spindle.villebiz.com)";

/// Configuration for fetching pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// User-Agent header identifying the scraper
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds, covering connect and body
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Configuration for the HTTP service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_addr")]
    pub addr: String,

    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,

    /// How pages are fetched for `/scrape`
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl ServerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// `addr:port` as accepted by a TCP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            port: default_port(),
            fetch: FetchConfig::default(),
        }
    }
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5020
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:5020");
        assert_eq!(config.fetch.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.fetch.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ServerConfig =
            serde_json::from_str(r#"{"port": 8080, "fetch": {"timeout_secs": 5}}"#).unwrap();
        assert_eq!(config.addr, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.fetch.timeout_secs, 5);
        assert_eq!(config.fetch.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_from_missing_file() {
        assert!(ServerConfig::from_file("/nonexistent/spindle.json").is_err());
    }
}
