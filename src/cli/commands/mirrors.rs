//! Mirror reachability report.

use console::style;

use crate::config::Settings;
use crate::server::AppState;

pub async fn cmd_mirrors(settings: &Settings) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let resolver = state.scraper.resolver();

    println!(
        "{} Probing {} mirror(s) for {}",
        style("→").cyan(),
        resolver.mirrors().len(),
        settings.site.name
    );

    let results = resolver.probe_all().await;
    for (url, reachable) in &results {
        if *reachable {
            println!("  {} {}", style("✓").green(), url);
        } else {
            println!("  {} {}", style("✗").red(), style(url).dim());
        }
    }

    match results.iter().find(|(_, reachable)| *reachable) {
        Some((url, _)) => println!("{} Selected {}", style("→").cyan(), style(url).bold()),
        None => println!(
            "{} No mirror reachable; requests would go to {}",
            style("!").yellow(),
            resolver.effective_base().await
        ),
    }

    Ok(())
}
