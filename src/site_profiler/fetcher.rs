// src/site_profiler/fetcher.rs
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::models::Result;
use crate::site_profiler::types::CrawlState;

/// The GET capability the fetcher runs on. Production uses reqwest; tests
/// substitute canned pages.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(user_agent: &str, timeout_seconds: u64) -> Self {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(body)
    }
}

/// Budget-enforcing page fetcher. Every attempt that passes the budget gate
/// is logged in `pages_visited`, whether or not the request succeeds.
pub struct PageFetcher {
    transport: Box<dyn HttpTransport>,
    max_pages: usize,
}

impl PageFetcher {
    pub fn new(transport: Box<dyn HttpTransport>, max_pages: usize) -> Self {
        Self { transport, max_pages }
    }

    pub async fn fetch(&self, url: &str, state: &mut CrawlState) -> Option<String> {
        if state.pages_visited.len() >= self.max_pages {
            state.errors.push(format!(
                "Crawl budget of {} pages exhausted, skipping {}",
                self.max_pages, url
            ));
            return None;
        }

        state.pages_visited.push(url.to_string());
        debug!("Fetching: {}", url);

        match self.transport.get(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Failed to fetch {}: {}", url, e);
                state.errors.push(format!("Failed to fetch {}: {}", url, e));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct StubTransport {
        pages: HashMap<String, String>,
    }

    impl StubTransport {
        fn new(pages: &[(&str, &str)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(url, body)| (url.to_string(), body.to_string()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn get(&self, url: &str) -> Result<String> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| "HTTP error: 404 Not Found".into())
        }
    }

    #[tokio::test]
    async fn successful_fetch_records_the_visit() {
        let fetcher = PageFetcher::new(
            Box::new(StubTransport::new(&[("https://acme.com", "<html></html>")])),
            15,
        );
        let mut state = CrawlState::default();

        let body = fetcher.fetch("https://acme.com", &mut state).await;

        assert_eq!(body.as_deref(), Some("<html></html>"));
        assert_eq!(state.pages_visited, vec!["https://acme.com"]);
        assert!(state.errors.is_empty());
    }

    #[tokio::test]
    async fn failed_fetch_still_counts_as_a_visit() {
        let fetcher = PageFetcher::new(Box::new(StubTransport::new(&[])), 15);
        let mut state = CrawlState::default();

        let body = fetcher.fetch("https://acme.com/missing", &mut state).await;

        assert!(body.is_none());
        assert_eq!(state.pages_visited, vec!["https://acme.com/missing"]);
        assert_eq!(state.errors.len(), 1);
        assert!(state.errors[0].contains("https://acme.com/missing"));
        assert!(state.errors[0].contains("404"));
    }

    #[tokio::test]
    async fn budget_gate_blocks_before_any_network_call() {
        let fetcher = PageFetcher::new(
            Box::new(StubTransport::new(&[
                ("https://acme.com", "<html></html>"),
                ("https://acme.com/about", "<html></html>"),
            ])),
            1,
        );
        let mut state = CrawlState::default();

        assert!(fetcher.fetch("https://acme.com", &mut state).await.is_some());
        assert!(fetcher.fetch("https://acme.com/about", &mut state).await.is_none());

        // The blocked attempt is not logged as a visit.
        assert_eq!(state.pages_visited, vec!["https://acme.com"]);
        assert_eq!(state.errors.len(), 1);
        assert!(state.errors[0].contains("budget"));
    }
}
