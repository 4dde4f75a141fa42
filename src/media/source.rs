use super::types::SearchPage;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Human-readable name of the source
    fn name(&self) -> &'static str;

    /// Search for media matching `keywords`, continuing from `cursor`.
    /// An empty cursor starts at the first page.
    async fn search(&self, keywords: &str, cursor: &str) -> Result<SearchPage>;
}
