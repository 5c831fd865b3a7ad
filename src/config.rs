// src/config.rs
use serde::{Deserialize, Serialize};

use crate::site_profiler::LinkCategory;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub crawl: CrawlConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrawlConfig {
    pub max_pages: usize,
    pub timeout_seconds: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub category_keywords: CategoryKeywords,

    #[serde(default = "default_social_domains")]
    pub social_domains: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: String,
    pub pretty_json: bool,
}

/// Keyword sets that route a link into one of the five categories. Matching
/// is lowercase substring over the absolute URL and the anchor text.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryKeywords {
    pub identity: Vec<String>,
    pub offerings: Vec<String>,
    pub evidence: Vec<String>,
    pub hiring: Vec<String>,
    pub contact: Vec<String>,
}

impl CategoryKeywords {
    pub fn for_category(&self, category: LinkCategory) -> &[String] {
        match category {
            LinkCategory::Identity => &self.identity,
            LinkCategory::Offerings => &self.offerings,
            LinkCategory::Evidence => &self.evidence,
            LinkCategory::Hiring => &self.hiring,
            LinkCategory::Contact => &self.contact,
        }
    }
}

impl Default for CategoryKeywords {
    fn default() -> Self {
        Self {
            identity: string_vec(&["about", "company", "who-we-are", "our-story", "mission", "team"]),
            offerings: string_vec(&["product", "service", "solution", "platform", "pricing", "features"]),
            evidence: string_vec(&["case-stud", "customer", "testimonial", "portfolio", "press", "review"]),
            hiring: string_vec(&["career", "job", "join-us", "hiring", "vacanc", "recruit"]),
            contact: string_vec(&["contact", "get-in-touch", "reach-us", "support"]),
        }
    }
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; SiteProfiler/1.0)".to_string()
}

fn default_social_domains() -> Vec<String> {
    string_vec(&[
        "linkedin.com",
        "twitter.com",
        "x.com",
        "facebook.com",
        "instagram.com",
        "youtube.com",
        "tiktok.com",
    ])
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawl: CrawlConfig {
                max_pages: 15,
                timeout_seconds: 10,
                user_agent: default_user_agent(),
                category_keywords: CategoryKeywords::default(),
                social_domains: default_social_domains(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            output: OutputConfig {
                directory: "out".to_string(),
                pretty_json: true,
            },
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
