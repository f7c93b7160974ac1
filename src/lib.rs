// Re-export modules
pub mod config;
pub mod error;
pub mod fetch;
pub mod localization;
pub mod parsers;
pub mod results;
pub mod server;
pub mod utils;

// Re-export commonly used types for convenience
pub use error::{Result, ScrapeError};
pub use fetch::Fetcher;
pub use localization::negotiate;
pub use parsers::extract;
pub use results::PageInfo;
pub use utils::resolve_url;

use config::FetchConfig;

/// Fetch `url` with the default configuration and extract its metadata
pub async fn fetch(url: &str, lang: Option<&str>) -> Result<PageInfo> {
    Fetcher::new(&FetchConfig::default())?.fetch(url, lang).await
}
