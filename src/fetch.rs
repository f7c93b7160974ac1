use crate::config::FetchConfig;
use crate::error::{Result, ScrapeError};
use crate::localization::negotiate;
use crate::parsers;
use crate::results::PageInfo;
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::{Client, StatusCode};
use url::Url;

/// Fetches pages and hands them to the extractor.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a fetcher from configuration
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }

    /// GET `url` and extract its metadata.
    ///
    /// `lang` selects the `Accept-Language` header; `None` or an unknown code
    /// sends English. Anything but a 200 response is an error.
    pub async fn fetch(&self, url: &str, lang: Option<&str>) -> Result<PageInfo> {
        let target = Url::parse(url)?;
        let accept_language = negotiate(lang);
        ::log::debug!("GET {} (Accept-Language: {})", target, accept_language);

        let response = self
            .client
            .get(target.clone())
            .header(ACCEPT_LANGUAGE, accept_language)
            .send()
            .await
            .map_err(ScrapeError::Network)?;

        let status = response.status();
        if status != StatusCode::OK {
            ::log::debug!("{} answered {}", target, status);
            return Err(ScrapeError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::Parse(e.to_string()))?;
        ::log::trace!("Read {} bytes from {}", body.len(), target);

        Ok(parsers::parse(&body, target.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_USER_AGENT;
    use mockito::Server;

    const BLOG_POST: &str = r#"<html><head>
<link rel="icon" href="/favicon.ico">
<meta name="description" content="Hi">
</head><body>
<img src="pic.jpg">
<a href="/a">a</a>
<a href="b">b</a>
</body></html>"#;

    fn fetcher() -> Fetcher {
        Fetcher::new(&FetchConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_blog_post() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/blog/post")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(BLOG_POST)
            .expect(1)
            .create_async()
            .await;

        let base = server.url();
        let info = fetcher()
            .fetch(&format!("{}/blog/post", base), None)
            .await
            .unwrap();

        assert_eq!(info.favicon, format!("{}/favicon.ico", base));
        assert_eq!(info.description, "Hi");
        assert_eq!(info.images, vec![format!("{}/blog/pic.jpg", base)]);
        assert_eq!(info.preview_image, format!("{}/blog/pic.jpg", base));
        assert_eq!(
            info.links,
            vec![format!("{}/a", base), format!("{}/blog/b", base)]
        );

        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_sends_headers() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/")
            .match_header("accept-language", "fr-FR,fr;q=0.9,en;q=0.8")
            .match_header("user-agent", DEFAULT_USER_AGENT)
            .with_status(200)
            .with_body("<title>Bonjour</title>")
            .expect(1)
            .create_async()
            .await;

        let info = fetcher()
            .fetch(&format!("{}/", server.url()), Some("FR"))
            .await
            .unwrap();
        assert_eq!(info.title, "Bonjour");

        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_default_language() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/")
            .match_header("accept-language", "en-US,en;q=0.9")
            .with_status(200)
            .with_body("<p>hi</p>")
            .expect(1)
            .create_async()
            .await;

        fetcher()
            .fetch(&format!("{}/", server.url()), Some("xx"))
            .await
            .unwrap();

        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("<title>Not here</title>")
            .create_async()
            .await;

        let err = fetcher()
            .fetch(&format!("{}/missing", server.url()), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Status(404)));
        assert_eq!(err.status_code(), Some(404));
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        let err = fetcher().fetch("not a url", None).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Request(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = fetcher()
            .fetch(&format!("http://{}/", addr), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Network(_)));
    }
}
