// src/site_profiler/profiler.rs
use std::time::Instant;
use tracing::{info, warn};

use crate::config::CrawlConfig;
use crate::site_profiler::assembler::ProfileAssembler;
use crate::site_profiler::classifier::LinkClassifier;
use crate::site_profiler::extractor::PageExtractor;
use crate::site_profiler::fetcher::{HttpTransport, PageFetcher, ReqwestTransport};
use crate::site_profiler::types::{CategorizedLinks, CompanyProfile, ContactSet, CrawlState};

/// Sequences one profiling run: fetch the landing page, classify its links,
/// follow the identity-category page for a business summary, assemble.
pub struct SiteProfiler {
    fetcher: PageFetcher,
    classifier: LinkClassifier,
    extractor: PageExtractor,
}

impl SiteProfiler {
    pub fn new(config: CrawlConfig) -> Self {
        let transport = ReqwestTransport::new(&config.user_agent, config.timeout_seconds);
        Self::with_transport(config, Box::new(transport))
    }

    pub fn with_transport(config: CrawlConfig, transport: Box<dyn HttpTransport>) -> Self {
        Self {
            fetcher: PageFetcher::new(transport, config.max_pages),
            classifier: LinkClassifier::new(config.category_keywords, config.social_domains),
            extractor: PageExtractor::new(),
        }
    }

    /// Profiles one website. Never fails: fetch and parse problems degrade
    /// to absent fields and entries in the error log.
    pub async fn profile(&self, url: &str) -> CompanyProfile {
        let start = Instant::now();
        let website = url.trim_end_matches('/').to_string();
        let mut state = CrawlState::default();

        info!("🔍 Profiling {}", website);

        let mut identity = None;
        let mut links = CategorizedLinks::default();
        let mut contacts = ContactSet::default();
        let mut summary = None;

        if let Some(html) = self.fetcher.fetch(&website, &mut state).await {
            identity = Some(self.extractor.extract_identity(&html));

            let page_links = self.extractor.collect_links(&html);
            let (classified, found) = self.classifier.classify(&page_links, &website);
            links = classified;
            contacts = found;

            if let Some(identity_url) = links.identity.clone() {
                info!("📄 Following identity page: {}", identity_url);
                if let Some(identity_html) = self.fetcher.fetch(&identity_url, &mut state).await {
                    summary = self.extractor.extract_summary(&identity_html);
                }
            }
        } else {
            warn!("Landing page unavailable for {}, emitting metadata-only profile", website);
        }

        let profile = ProfileAssembler::assemble(
            &website,
            identity,
            summary,
            links,
            contacts,
            state,
            start.elapsed().as_millis() as u64,
        );

        info!(
            "🎯 Profile complete for {}: {} pages visited, {} errors",
            website,
            profile.metadata.pages_visited.len(),
            profile.metadata.errors.len()
        );

        profile
    }
}
