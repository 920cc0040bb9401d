use crate::text::normalize_spaces;
use dom_smoothie::{Config, Readability};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Retrieves article pages and extracts their main readable text.
///
/// Failures are expected and non-fatal: any unreachable URL, non-success
/// status, or empty extraction makes the URL unusable for this run. There
/// are no retries; a single failure is not treated as transient.
pub struct ArticleFetcher {
    client: Client,
}

impl ArticleFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("lingo-digest/0.1")
            .timeout(Duration::from_secs(30))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch raw content from a URL in a single attempt.
    pub async fn fetch_raw(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("Request failed for {}: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!("HTTP {} for {}", status, url);
            return None;
        }

        response.text().await.ok()
    }

    /// Retrieve a page and return its normalized main text, or `None` when
    /// retrieval fails or extraction yields nothing.
    pub async fn fetch_article(&self, url: &str) -> Option<String> {
        let html = self.fetch_raw(url).await?;
        let text = extract_main_text(&html, url)?;
        let body = normalize_spaces(&text);
        if body.is_empty() {
            None
        } else {
            Some(body)
        }
    }
}

impl Default for ArticleFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Run Readability over raw markup and return the main text, stripped of
/// boilerplate and comment sections.
pub fn extract_main_text(html: &str, url: &str) -> Option<String> {
    let cfg = Config {
        max_elements_to_parse: 9000,
        ..Default::default()
    };

    let mut readability = Readability::new(html, Some(url), Some(cfg)).ok()?;
    let article = readability.parse().ok()?;

    let text = article.text_content.to_string();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
