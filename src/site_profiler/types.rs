// src/site_profiler/types.rs
use serde::{Deserialize, Serialize};

/// The five semantic buckets a discovered link can land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkCategory {
    Identity,
    Offerings,
    Evidence,
    Hiring,
    Contact,
}

impl LinkCategory {
    pub const ALL: [LinkCategory; 5] = [
        LinkCategory::Identity,
        LinkCategory::Offerings,
        LinkCategory::Evidence,
        LinkCategory::Hiring,
        LinkCategory::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkCategory::Identity => "identity",
            LinkCategory::Offerings => "offerings",
            LinkCategory::Evidence => "evidence",
            LinkCategory::Hiring => "hiring",
            LinkCategory::Contact => "contact",
        }
    }
}

/// One slot per category, filled first-match-wins in page order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizedLinks {
    pub identity: Option<String>,
    pub offerings: Option<String>,
    pub evidence: Option<String>,
    pub hiring: Option<String>,
    pub contact: Option<String>,
}

impl CategorizedLinks {
    pub fn get(&self, category: LinkCategory) -> Option<&str> {
        self.slot(category).as_deref()
    }

    /// Fills the slot only if it is still empty; returns whether it did.
    pub fn fill(&mut self, category: LinkCategory, url: &str) -> bool {
        let slot = self.slot_mut(category);
        if slot.is_none() {
            *slot = Some(url.to_string());
            true
        } else {
            false
        }
    }

    fn slot(&self, category: LinkCategory) -> &Option<String> {
        match category {
            LinkCategory::Identity => &self.identity,
            LinkCategory::Offerings => &self.offerings,
            LinkCategory::Evidence => &self.evidence,
            LinkCategory::Hiring => &self.hiring,
            LinkCategory::Contact => &self.contact,
        }
    }

    fn slot_mut(&mut self, category: LinkCategory) -> &mut Option<String> {
        match category {
            LinkCategory::Identity => &mut self.identity,
            LinkCategory::Offerings => &mut self.offerings,
            LinkCategory::Evidence => &mut self.evidence,
            LinkCategory::Hiring => &mut self.hiring,
            LinkCategory::Contact => &mut self.contact,
        }
    }
}

/// Contact channels found on a page. Emails and phones keep duplicates in
/// encounter order; social links are deduped by exact string equality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSet {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub social_links: Vec<String>,
}

/// Per-run crawl bookkeeping. Both sequences are append-only.
#[derive(Debug, Clone, Default)]
pub struct CrawlState {
    pub pages_visited: Vec<String>,
    pub errors: Vec<String>,
}

/// An outbound anchor as it appears in the DOM.
#[derive(Debug, Clone)]
pub struct PageLink {
    pub href: String,
    pub text: String,
}

/// Raw identity signals pulled from the landing page.
#[derive(Debug, Clone, Default)]
pub struct PageIdentity {
    pub company_name: Option<String>,
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub company_name: Option<String>,
    pub website: String,
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessSummary {
    pub what_they_do: Option<String>,
    pub offerings: Vec<String>,
    pub target_segments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub links: CategorizedLinks,
    pub social_links: Vec<String>,
    pub signals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLocation {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub address: Option<String>,
    pub contact_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hiring {
    pub careers_url: Option<String>,
    pub roles_mentioned: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub run_id: String,
    pub generated_at: String,
    pub website: String,
    pub pages_visited: Vec<String>,
    pub errors: Vec<String>,
    pub duration_ms: u64,
    pub limitations: String,
}

/// The complete structured result of one profiling run. Every field is
/// always present in the serialized document; absent values are null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub identity: Identity,
    pub business_summary: BusinessSummary,
    pub evidence: Evidence,
    pub contact_location: ContactLocation,
    pub hiring: Hiring,
    pub metadata: RunMetadata,
}
