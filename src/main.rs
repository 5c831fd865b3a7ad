// src/main.rs
use dialoguer::{theme::ColorfulTheme, Input};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod models;
mod report;
mod site_profiler;

use config::{load_config, Config};
use models::Result;
use site_profiler::SiteProfiler;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.yml: {}. Using defaults.", e);
            Config::default()
        }
    };

    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                format!("site_profiler={}", config.logging.level)
                    .parse()
                    .unwrap(),
            ),
        )
        .init();

    // Website URL from the command line, or prompt for one
    let url = match std::env::args().nth(1) {
        Some(url) => url,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Website URL to profile")
            .interact_text()?,
    };

    if !url.starts_with("http://") && !url.starts_with("https://") {
        println!("❌ URL must be absolute, e.g. https://example.com");
        return Ok(());
    }

    info!("🕷️  Starting profiler with budget of {} pages", config.crawl.max_pages);

    let profiler = SiteProfiler::new(config.crawl.clone());
    let profile = profiler.profile(&url).await;

    let json = report::render_json(&profile, config.output.pretty_json)?;
    report::display_profile(&profile, &json);
    let path = report::export_profile(&profile, &config.output).await?;

    println!("\n✅ Profile saved to {}", path);

    if !profile.metadata.errors.is_empty() {
        warn!("Run finished with {} errors, see metadata.errors", profile.metadata.errors.len());
    }

    Ok(())
}
