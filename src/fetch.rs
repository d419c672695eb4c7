use crate::CrawlerError;
use reqwest::Client;

#[async_trait::async_trait]
pub trait Fetcher {
    /// GET `url` and return the body as text. The status code is not checked.
    async fn fetch_text(&self, url: &str) -> Result<String, CrawlerError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, CrawlerError> {
        let html = self.client.get(url).send().await?.text().await?;
        Ok(html)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Serves canned bodies; any other url fails like an unreachable host.
    #[derive(Debug, Default)]
    pub(crate) struct StaticFetcher {
        pages: HashMap<String, String>,
    }

    impl StaticFetcher {
        pub(crate) fn with_page(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }
    }

    #[async_trait::async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch_text(&self, url: &str) -> Result<String, CrawlerError> {
            match self.pages.get(url) {
                Some(body) => Ok(body.clone()),
                None => {
                    // An unparsable url gives a transport error without touching the network.
                    let err = reqwest::get("unreachable").await.unwrap_err();
                    Err(CrawlerError::Network(err))
                }
            }
        }
    }

    #[tokio::test]
    async fn static_fetcher_serves_pages() {
        let f = StaticFetcher::default().with_page("https://a", "<p>a</p>");
        assert_eq!(f.fetch_text("https://a").await.unwrap(), "<p>a</p>");
        assert!(matches!(
            f.fetch_text("https://b").await,
            Err(CrawlerError::Network(_))
        ));
    }
}
