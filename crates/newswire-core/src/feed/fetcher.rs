use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use url::Url;

use super::models::Headline;
use super::parser::parse_headlines;
use crate::config::AppConfig;
use crate::{Error, Result};

const MAX_FEED_BYTES: usize = 5 * 1024 * 1024;

const FEED_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP fetcher for RSS sources.
pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.sources.request_timeout_secs))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(Error::Http)?;

        Ok(Self { client })
    }

    fn build_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "application/rss+xml,application/atom+xml,application/xml;q=0.9,text/xml;q=0.8,*/*;q=0.5",
            ),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(FEED_USER_AGENT));
        headers
    }

    /// Fetch one source and parse it into headlines.
    pub async fn fetch_headlines(&self, url: &str) -> Result<Vec<Headline>> {
        // Reject malformed source URLs before going to the network
        Url::parse(url)?;

        tracing::debug!("Fetching feed: {}", url);

        let response = self
            .client
            .get(url)
            .headers(Self::build_headers())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FeedParse(format!("HTTP {} for URL: {}", status, url)));
        }

        let content = response.bytes().await?;
        if content.len() > MAX_FEED_BYTES {
            return Err(Error::FeedParse(format!(
                "Feed too large ({} bytes) for URL: {}",
                content.len(),
                url
            )));
        }

        parse_headlines(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_source_url_is_rejected() {
        let config = AppConfig::default();
        let fetcher = FeedFetcher::new(&config).unwrap();

        let result = fetcher.fetch_headlines("not a url").await;
        assert!(matches!(result, Err(Error::UrlParse(_))));
    }
}
