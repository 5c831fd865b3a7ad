// src/site_profiler/extractor.rs
use scraper::{Html, Selector};
use tracing::debug;

use crate::site_profiler::types::{PageIdentity, PageLink};

/// Minimum length for a paragraph to count toward the business summary.
/// Filters navigation and boilerplate without layout-specific selectors.
const SUMMARY_PARAGRAPH_FLOOR: usize = 50;

pub struct PageExtractor;

impl PageExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Landing-page identity signals: the document title and the
    /// description meta tag. Missing elements stay absent.
    pub fn extract_identity(&self, html: &str) -> PageIdentity {
        let document = Html::parse_document(html);

        let title_selector = Selector::parse("title").unwrap();
        let company_name = document
            .select(&title_selector)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty());

        let meta_selector = Selector::parse(r#"meta[name="description"]"#).unwrap();
        let tagline = document
            .select(&meta_selector)
            .next()
            .and_then(|m| m.value().attr("content"))
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        PageIdentity {
            company_name,
            tagline,
        }
    }

    /// Joins the first two substantial paragraphs of an about-style page,
    /// in document order.
    pub fn extract_summary(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let paragraph_selector = Selector::parse("p").unwrap();

        let paragraphs: Vec<String> = document
            .select(&paragraph_selector)
            .map(|p| {
                p.text()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .filter(|text| text.len() > SUMMARY_PARAGRAPH_FLOOR)
            .take(2)
            .collect();

        debug!("Found {} summary-worthy paragraphs", paragraphs.len());

        if paragraphs.is_empty() {
            None
        } else {
            Some(paragraphs.join(" "))
        }
    }

    /// All outbound anchors in DOM traversal order.
    pub fn collect_links(&self, html: &str) -> Vec<PageLink> {
        let document = Html::parse_document(html);
        let link_selector = Selector::parse("a[href]").unwrap();

        document
            .select(&link_selector)
            .filter_map(|element| {
                element.value().attr("href").map(|href| PageLink {
                    href: href.to_string(),
                    text: element.text().collect::<String>().trim().to_string(),
                })
            })
            .collect()
    }
}
