use thiserror::Error;

/// Result type for scraping operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Everything that can abort a page extraction
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The requested URL could not be turned into a request
    #[error("error creating request: {0}")]
    Request(#[from] url::ParseError),

    /// The HTTP client could not be constructed
    #[error("error building HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, transport or timeout failure
    #[error("error fetching URL: {0}")]
    Network(#[source] reqwest::Error),

    /// The target answered with something other than 200
    #[error("HTTP status code: {0}")]
    Status(u16),

    /// The response body could not be read as HTML
    #[error("error parsing HTML: {0}")]
    Parse(String),
}

impl ScrapeError {
    /// HTTP status returned by the target, for [`ScrapeError::Status`]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ScrapeError::Status(code) => Some(*code),
            _ => None,
        }
    }
}
