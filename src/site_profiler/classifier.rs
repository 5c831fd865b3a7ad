// src/site_profiler/classifier.rs
use std::collections::HashSet;
use tracing::{debug, info};
use url::Url;

use crate::config::CategoryKeywords;
use crate::site_profiler::types::{CategorizedLinks, ContactSet, LinkCategory, PageLink};

/// Routes each outbound link into semantic categories and pulls contact
/// channels out of mailto:/tel: anchors. The social, mail, phone, and
/// category checks are independent predicates, not a priority chain: one
/// link can hit several of them at once.
pub struct LinkClassifier {
    keywords: CategoryKeywords,
    social_domains: Vec<String>,
}

impl LinkClassifier {
    pub fn new(keywords: CategoryKeywords, social_domains: Vec<String>) -> Self {
        Self {
            keywords,
            social_domains,
        }
    }

    pub fn classify(&self, links: &[PageLink], base_url: &str) -> (CategorizedLinks, ContactSet) {
        let base = Url::parse(base_url).ok();
        let mut categorized = CategorizedLinks::default();
        let mut contacts = ContactSet::default();
        let mut seen_social = HashSet::new();

        for link in links {
            let absolute = match self.resolve_url(&link.href, base.as_ref()) {
                Some(url) => url,
                None => continue,
            };

            if self.social_domains.iter().any(|d| absolute.contains(d.as_str()))
                && seen_social.insert(absolute.clone())
            {
                contacts.social_links.push(absolute.clone());
            }

            if let Some(email) = absolute.strip_prefix("mailto:") {
                contacts.emails.push(email.to_string());
            }

            if let Some(phone) = absolute.strip_prefix("tel:") {
                contacts.phones.push(phone.to_string());
            }

            let url_lower = absolute.to_lowercase();
            let text_lower = link.text.to_lowercase();

            for category in LinkCategory::ALL {
                if categorized.get(category).is_some() {
                    continue;
                }

                let hit = self
                    .keywords
                    .for_category(category)
                    .iter()
                    .any(|k| url_lower.contains(k.as_str()) || text_lower.contains(k.as_str()));

                if hit {
                    categorized.fill(category, &absolute);
                    debug!("Categorized {} as {}", absolute, category.as_str());
                }
            }
        }

        info!(
            "Classified {} links: {} emails, {} phones, {} social profiles",
            links.len(),
            contacts.emails.len(),
            contacts.phones.len(),
            contacts.social_links.len()
        );

        (categorized, contacts)
    }

    fn resolve_url(&self, href: &str, base: Option<&Url>) -> Option<String> {
        match Url::parse(href) {
            Ok(url) => Some(url.to_string()),
            Err(_) => base.and_then(|b| b.join(href).ok()).map(|u| u.to_string()),
        }
    }
}
