//! One-shot scrape command.

use console::style;

use crate::config::Settings;
use crate::server::AppState;

/// Run the full pipeline for `slug` and print the result as JSON.
pub async fn cmd_fetch(settings: &Settings, slug: &str) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;

    match state.scraper.fetch_about(slug).await {
        Ok(response) => {
            eprintln!(
                "{} {} via {}",
                style("✓").green(),
                slug,
                state.scraper.resolver().effective_base().await
            );
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}: {}", style("✗").red(), slug, e);
            Err(anyhow::anyhow!("Failed to scrape {}: {}", slug, e.public_message()))
        }
    }
}
