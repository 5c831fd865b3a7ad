// src/report.rs
use tracing::info;

use crate::config::OutputConfig;
use crate::models::Result;
use crate::site_profiler::CompanyProfile;

pub const REPORT_FILENAME: &str = "company_profile.json";

/// Serializes the profile and writes it under the configured output
/// directory. Returns the path written.
pub async fn export_profile(profile: &CompanyProfile, output: &OutputConfig) -> Result<String> {
    let json = render_json(profile, output.pretty_json)?;

    tokio::fs::create_dir_all(&output.directory).await?;
    let path = format!("{}/{}", output.directory, REPORT_FILENAME);
    tokio::fs::write(&path, &json).await?;

    info!("Exported profile to {}", path);
    Ok(path)
}

pub fn render_json(profile: &CompanyProfile, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(profile)?
    } else {
        serde_json::to_string(profile)?
    };
    Ok(json)
}

/// Echoes the full document plus a short operator summary.
pub fn display_profile(profile: &CompanyProfile, json: &str) {
    println!("{}", json);

    println!("\n📊 Profile Summary");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "  🏢 Company: {}",
        profile.identity.company_name.as_deref().unwrap_or("(unknown)")
    );
    println!("  📧 Emails: {}", profile.contact_location.emails.len());
    println!("  📞 Phones: {}", profile.contact_location.phones.len());
    println!("  🌐 Social profiles: {}", profile.evidence.social_links.len());
    println!(
        "  💼 Careers page: {}",
        profile.hiring.careers_url.as_deref().unwrap_or("(none)")
    );
    println!(
        "  📄 Pages visited: {} ({} errors)",
        profile.metadata.pages_visited.len(),
        profile.metadata.errors.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site_profiler::assembler::ProfileAssembler;
    use crate::site_profiler::types::{CategorizedLinks, ContactSet, CrawlState};

    fn sample_profile() -> CompanyProfile {
        ProfileAssembler::assemble(
            "https://acme.com",
            None,
            None,
            CategorizedLinks::default(),
            ContactSet::default(),
            CrawlState::default(),
            0,
        )
    }

    #[tokio::test]
    async fn exported_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputConfig {
            directory: dir.path().to_string_lossy().to_string(),
            pretty_json: true,
        };
        let profile = sample_profile();

        let path = export_profile(&profile, &output).await.unwrap();
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        let parsed: CompanyProfile = serde_json::from_str(&written).unwrap();

        assert!(path.ends_with(REPORT_FILENAME));
        assert_eq!(parsed, profile);
    }

    #[test]
    fn absent_fields_render_as_null_keys() {
        let json = render_json(&sample_profile(), true).unwrap();
        assert!(json.contains("\"company_name\": null"));
        assert!(json.contains("\"address\": null"));
        assert!(json.contains("\"what_they_do\": null"));
    }
}
