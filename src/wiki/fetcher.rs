// Page fetcher trait — the swap-ready source of article content.
//
// The judge depends only on this interface. Implementations report a missing
// page as FetchError::NotFound so list operations can skip it and move on.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::FetchError;

/// Trait for retrieving the raw content of an article by title.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the raw content (usually HTML) of the page called `title`.
    async fn fetch(&self, title: &str) -> Result<String, FetchError>;
}

/// Fetcher backed by a fixed title → content map.
///
/// Useful for offline runs over pre-downloaded pages and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    pages: HashMap<String, String>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a page. Returns self for chaining.
    pub fn with_page(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.pages.insert(title.into(), content.into());
        self
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[async_trait]
impl PageFetcher for MemoryFetcher {
    async fn fetch(&self, title: &str) -> Result<String, FetchError> {
        self.pages
            .get(title)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(title.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_fetcher_hit_and_miss() {
        let fetcher = MemoryFetcher::new().with_page("Tree", "<p>A tree.</p>");
        assert_eq!(fetcher.len(), 1);
        assert_eq!(fetcher.fetch("Tree").await.unwrap(), "<p>A tree.</p>");
        assert_eq!(
            fetcher.fetch("Shrub").await,
            Err(FetchError::NotFound("Shrub".to_string()))
        );
    }
}
