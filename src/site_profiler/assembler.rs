// src/site_profiler/assembler.rs
use chrono::Utc;
use uuid::Uuid;

use crate::site_profiler::types::{
    BusinessSummary, CategorizedLinks, CompanyProfile, ContactLocation, ContactSet, CrawlState,
    Evidence, Hiring, Identity, PageIdentity, RunMetadata,
};

/// Static caveat shipped with every profile, independent of run outcome.
pub const LIMITATIONS: &str =
    "Derived from static HTML only; content rendered client-side by JavaScript was not visible to this crawl.";

/// Folds the classifier and extractor outputs into the final record. The
/// record shape is always complete: a failed crawl produces the same
/// structure with absent values and a populated error log.
pub struct ProfileAssembler;

impl ProfileAssembler {
    pub fn assemble(
        website: &str,
        identity: Option<PageIdentity>,
        summary: Option<String>,
        links: CategorizedLinks,
        contacts: ContactSet,
        state: CrawlState,
        duration_ms: u64,
    ) -> CompanyProfile {
        let identity = identity.unwrap_or_default();
        let contact_url = links.contact.clone();
        let careers_url = links.hiring.clone();

        CompanyProfile {
            identity: Identity {
                company_name: identity.company_name,
                website: website.to_string(),
                tagline: identity.tagline,
            },
            business_summary: BusinessSummary {
                what_they_do: summary,
                offerings: Vec::new(),
                target_segments: Vec::new(),
            },
            evidence: Evidence {
                links,
                social_links: contacts.social_links,
                signals: Vec::new(),
            },
            contact_location: ContactLocation {
                emails: contacts.emails,
                phones: contacts.phones,
                address: None,
                contact_url,
            },
            hiring: Hiring {
                careers_url,
                roles_mentioned: Vec::new(),
            },
            metadata: RunMetadata {
                run_id: Uuid::new_v4().to_string(),
                generated_at: Utc::now().to_rfc3339(),
                website: website.to_string(),
                pages_visited: state.pages_visited,
                errors: state.errors,
                duration_ms,
                limitations: LIMITATIONS.to_string(),
            },
        }
    }
}
