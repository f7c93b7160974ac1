use clap::Parser;
use spindle::config::ServerConfig;
use std::error::Error;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: spindle [server|<http(s)://url>]";

#[derive(Parser, Debug)]
#[command(name = "spindle")]
#[command(about = "Lightweight scraper that extracts metadata from web pages")]
#[command(version)]
pub struct Args {
    /// `server` to run the HTTP service, or an absolute http(s) URL to scrape once
    pub target: String,

    /// Bind address for the server
    #[arg(long, env = "ADDR")]
    pub addr: Option<String>,

    /// Port for the server
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Server,
    Scrape(String),
}

impl Args {
    /// Interpret the positional target, `None` on malformed usage
    pub fn mode(&self) -> Option<Mode> {
        let target = self.target.as_str();
        if target == "server" {
            return Some(Mode::Server);
        }
        let is_url = ["http://", "https://"]
            .iter()
            .any(|scheme| target.len() > scheme.len() && target.starts_with(scheme));
        is_url.then(|| Mode::Scrape(target.to_string()))
    }

    /// Defaults, overlaid by the config file, overlaid by flags and environment
    pub fn server_config(&self) -> Result<ServerConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };
        if let Some(addr) = &self.addr {
            config.addr = addr.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(timeout) = self.timeout {
            config.fetch.timeout_secs = timeout;
        }
        Ok(config)
    }
}
