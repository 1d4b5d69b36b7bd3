// Wikipedia HTTP client.
//
// Downloads the rendered HTML of an article from `{base_url}/wiki/{title}`.
// Requests are paced by a RateLimiter. A 404 becomes FetchError::NotFound;
// any other failure is FetchError::Network.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use super::fetcher::PageFetcher;
use super::rate_limiter::RateLimiter;
use crate::error::FetchError;

/// Default article source.
pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";

/// Unauthenticated client for Wikipedia article pages.
pub struct WikiClient {
    client: reqwest::Client,
    base_url: String,
    limiter: RateLimiter,
}

impl WikiClient {
    /// Create a client for `base_url` that waits `wait_secs` between downloads.
    pub fn new(base_url: &str, wait_secs: f64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                "wikiwords/",
                env!("CARGO_PKG_VERSION"),
                " (word-frequency comparison)"
            ))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            limiter: RateLimiter::new(wait_secs),
        })
    }

    /// The article URL for `title`.
    pub fn page_url(&self, title: &str) -> String {
        format!("{}/wiki/{}", self.base_url, title_to_path(title))
    }
}

#[async_trait]
impl PageFetcher for WikiClient {
    async fn fetch(&self, title: &str) -> Result<String, FetchError> {
        self.limiter.acquire().await;

        let url = self.page_url(title);
        debug!(title, url = %url, "Fetching page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("request for '{title}' failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(title.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Network(format!(
                "'{title}' returned {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("failed to read body of '{title}': {e}")))
    }
}

/// Turn a page title into its URL path segment.
///
/// Wikipedia uses underscores for spaces. Characters that would end the path
/// early are percent-encoded; reqwest encodes the remaining non-ASCII bytes.
pub fn title_to_path(title: &str) -> String {
    let mut path = String::with_capacity(title.len());
    for c in title.trim().chars() {
        match c {
            ' ' => path.push('_'),
            '?' => path.push_str("%3F"),
            '#' => path.push_str("%23"),
            '%' => path.push_str("%25"),
            _ => path.push(c),
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_to_path() {
        assert_eq!(title_to_path("Tree"), "Tree");
        assert_eq!(title_to_path(" Hollywood sign "), "Hollywood_sign");
        assert_eq!(title_to_path("Who? (band)"), "Who%3F_(band)");
        assert_eq!(title_to_path("100% (song)"), "100%25_(song)");
    }

    #[test]
    fn test_page_url_trims_trailing_slash() {
        let client = WikiClient::new("https://en.wikipedia.org/", 0.0).unwrap();
        assert_eq!(
            client.page_url("Plant"),
            "https://en.wikipedia.org/wiki/Plant"
        );
    }
}
