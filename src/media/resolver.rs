use super::{parse::parse_page, query::build_query, source::MediaSource, types::SearchPage};
use crate::config::SearchConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};

/// Resolves keywords to media through the 9GAG post search endpoint.
pub struct MediaResolver {
    client: reqwest::Client,
    endpoint: String,
}

impl MediaResolver {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        info!(
            "Media resolver initialized - endpoint: {}, timeout: {}s",
            config.endpoint, config.timeout_secs
        );

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('?').to_string(),
        })
    }

    fn request_url(&self, keywords: &str, cursor: &str) -> String {
        format!("{}?{}", self.endpoint, build_query(keywords, cursor))
    }
}

#[async_trait]
impl MediaSource for MediaResolver {
    fn name(&self) -> &'static str {
        "9gag"
    }

    async fn search(&self, keywords: &str, cursor: &str) -> Result<SearchPage> {
        let url = self.request_url(keywords, cursor);
        debug!("Fetching search page: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch search results")?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Search request failed: HTTP {}",
                response.status()
            ));
        }

        let body = response
            .text()
            .await
            .context("Failed to read search response")?;

        let page = parse_page(&body)?;
        debug!(
            "Resolved {} media items, next cursor: {:?}",
            page.descriptors.len(),
            page.next_cursor
        );

        Ok(page)
    }
}
