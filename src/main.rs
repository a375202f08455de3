use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;

mod analytics;
mod artifacts;
mod config;
mod fixtures;
mod model;

use artifacts::OutputLayout;
use config::Config;
use fixtures::{CricApi, FixtureProvider};
use model::MatchReport;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    if config.offline {
        info!("🟡 OFFLINE mode – no network calls, documented fallbacks throughout");
    } else {
        info!("🔵 LIVE mode – fetching match data from {}", config.api_url);
    }

    // Build the fixture provider (none in offline mode)
    let provider: Option<CricApi> = if config.offline {
        None
    } else {
        let api_key = config.api_key.as_deref().unwrap_or_default();
        Some(CricApi::new(api_key, &config.api_url, config.request_timeout_secs)?)
    };
    let provider_ref: Option<&dyn FixtureProvider> =
        provider.as_ref().map(|p| p as &dyn FixtureProvider);

    // Gather inputs (best-effort), run the pure engine, assemble the report
    let data = fixtures::gather(provider_ref, &config).await?;
    let fixture = &data.fixture.value;
    info!(
        "Match: {} vs {} at {}",
        fixture.team_a, fixture.team_b, fixture.venue
    );

    let analysis = analytics::analyze(
        &fixture.team_a,
        &fixture.team_b,
        &fixture.venue,
        &config.form_a,
        &config.form_b,
        &data.history,
    );
    info!(
        "Projected {} | win probability {}% / {}%",
        analysis.projected,
        analysis.probability.team_a_pct(),
        analysis.probability.team_b_pct()
    );

    let date = config.date.unwrap_or_else(|| Utc::now().date_naive());
    let report = MatchReport::assemble(
        date,
        fixture,
        &config.form_a,
        &config.form_b,
        data.players.iter().map(|p| p.value.clone()).collect(),
        data.live.clone(),
        &analysis,
    );

    // Write all artifacts; any failure here is fatal
    let layout = OutputLayout::new(&config.out_dir);
    let paths = artifacts::write_all(&layout, &report, &config)
        .with_context(|| format!("Failed writing artifacts under {}", config.out_dir.display()))?;

    info!(
        "🎉 All artifacts generated for {} ({})",
        report.date,
        paths.html.display()
    );
    Ok(())
}
