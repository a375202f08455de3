//! Data acquisition for one pipeline run.
//!
//! Every fetch is best-effort and sequential. A failure is logged at `warn`
//! and replaced by its documented fallback value; the substitution is
//! recorded in the returned `Fetched` wrappers so the caller can observe
//! degraded-mode operation instead of silent exception swallowing.

pub mod cricapi;
pub mod provider;

pub use cricapi::CricApi;
pub use provider::FixtureProvider;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::model::{DataSource, Fetched, HistoricalMatch, LiveScore, MatchFixture, PlayerInsight};

/// Everything gathered (or substituted) for one run.
#[derive(Debug, Clone)]
pub struct MatchData {
    pub fixture: Fetched<MatchFixture>,
    pub players: Vec<Fetched<PlayerInsight>>,
    pub live: Option<LiveScore>,
    pub history: Vec<HistoricalMatch>,
}

impl MatchData {
    /// Number of values that came from fallbacks rather than the API.
    pub fn fallback_count(&self) -> usize {
        let fixture = usize::from(self.fixture.is_fallback());
        let players = self.players.iter().filter(|p| p.is_fallback()).count();
        fixture + players
    }
}

/// The four role placeholders used when player lookups fail.
fn placeholder_players(team_a: &str, team_b: &str) -> Vec<PlayerInsight> {
    vec![
        PlayerInsight::placeholder(format!("{team_a} Key Batter"), "Batsman"),
        PlayerInsight::placeholder(format!("{team_a} Strike Bowler"), "Bowler"),
        PlayerInsight::placeholder(format!("{team_b} Key Batter"), "Batsman"),
        PlayerInsight::placeholder(format!("{team_b} Strike Bowler"), "Bowler"),
    ]
}

async fn gather_fixture(provider: Option<&dyn FixtureProvider>) -> Fetched<MatchFixture> {
    let Some(provider) = provider else {
        return Fetched::fallback(MatchFixture::placeholder());
    };
    match provider.fetch_first_fixture().await {
        Ok(Some(fixture)) => Fetched::api(fixture),
        Ok(None) => {
            warn!("{}: no current or upcoming fixture, using placeholder", provider.name());
            Fetched::fallback(MatchFixture::placeholder())
        }
        Err(e) => {
            warn!("{}: fixture fetch failed ({e:#}), using placeholder", provider.name());
            Fetched::fallback(MatchFixture::placeholder())
        }
    }
}

async fn gather_players(
    provider: Option<&dyn FixtureProvider>,
    team_a: &str,
    team_b: &str,
) -> Vec<Fetched<PlayerInsight>> {
    let mut players = Vec::with_capacity(4);
    for placeholder in placeholder_players(team_a, team_b) {
        let fetched = match provider {
            Some(p) => match p.fetch_player(&placeholder.name).await {
                Ok(Some(player)) => Fetched::api(player),
                Ok(None) => Fetched::fallback(placeholder),
                Err(e) => {
                    warn!("player lookup '{}' failed ({e:#})", placeholder.name);
                    Fetched::fallback(placeholder)
                }
            },
            None => Fetched::fallback(placeholder),
        };
        players.push(fetched);
    }
    players
}

async fn gather_live(
    provider: Option<&dyn FixtureProvider>,
    team_a: &str,
    team_b: &str,
) -> Option<LiveScore> {
    match provider?.fetch_live_score(team_a, team_b).await {
        Ok(live) => live,
        Err(e) => {
            warn!("live score fetch failed ({e:#}), omitting live section");
            None
        }
    }
}

async fn gather_history(
    provider: Option<&dyn FixtureProvider>,
    config: &Config,
    team_a: &str,
    team_b: &str,
) -> Result<Vec<HistoricalMatch>> {
    // A local history file takes precedence over any provider endpoint.
    if let Some(path) = &config.history_file {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read history file {}", path.display()))?;
        let records: Vec<HistoricalMatch> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid history file {}", path.display()))?;
        info!("Loaded {} historical records from {}", records.len(), path.display());
        return Ok(records);
    }

    if let Some(provider) = provider {
        match provider.fetch_head_to_head(team_a, team_b).await {
            Ok(records) => return Ok(records),
            Err(e) => warn!("head-to-head fetch failed ({e:#}), using neutral defaults"),
        }
    }
    Ok(Vec::new())
}

/// Gather all inputs for one run. Network data is optional throughout; only
/// an unreadable `--history-file` (explicitly requested local I/O) is fatal.
pub async fn gather(provider: Option<&dyn FixtureProvider>, config: &Config) -> Result<MatchData> {
    let mut fixture = gather_fixture(provider).await;

    // Explicit overrides win over whatever the API returned.
    if let Some(team_a) = &config.team_a {
        fixture.value.team_a = team_a.clone();
    }
    if let Some(team_b) = &config.team_b {
        fixture.value.team_b = team_b.clone();
    }
    if let Some(venue) = &config.venue {
        fixture.value.venue = venue.clone();
    }
    if config.team_a.is_some() && config.team_b.is_some() && config.venue.is_some() {
        // A fully specified match needs nothing from the fixture endpoint
        fixture.source = DataSource::Api;
    }

    let (team_a, team_b) = (fixture.value.team_a.clone(), fixture.value.team_b.clone());

    let players = gather_players(provider, &team_a, &team_b).await;
    let live = gather_live(provider, &team_a, &team_b).await;
    let history = gather_history(provider, config, &team_a, &team_b).await?;

    let data = MatchData {
        fixture,
        players,
        live,
        history,
    };
    if data.fallback_count() > 0 {
        warn!(
            "Degraded mode: {} of {} fetched values substituted from fallbacks",
            data.fallback_count(),
            1 + data.players.len()
        );
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Provider that fails every call, for exercising the fallback paths.
    struct DownProvider;

    #[async_trait]
    impl FixtureProvider for DownProvider {
        fn name(&self) -> &str {
            "Down"
        }
        async fn fetch_first_fixture(&self) -> Result<Option<MatchFixture>> {
            anyhow::bail!("connection refused")
        }
        async fn fetch_live_score(&self, _: &str, _: &str) -> Result<Option<LiveScore>> {
            anyhow::bail!("connection refused")
        }
        async fn fetch_player(&self, _: &str) -> Result<Option<PlayerInsight>> {
            anyhow::bail!("connection refused")
        }
    }

    fn offline_config() -> Config {
        Config::offline_for_tests()
    }

    #[tokio::test]
    async fn offline_run_uses_every_fallback() {
        let data = gather(None, &offline_config()).await.unwrap();
        assert!(data.fixture.is_fallback());
        assert_eq!(data.fixture.value, MatchFixture::placeholder());
        assert_eq!(data.players.len(), 4);
        assert!(data.players.iter().all(|p| p.is_fallback()));
        assert!(data.live.is_none());
        assert!(data.history.is_empty());
        assert_eq!(data.fallback_count(), 5);
    }

    #[tokio::test]
    async fn failing_provider_degrades_instead_of_erroring() {
        let provider = DownProvider;
        let data = gather(Some(&provider), &offline_config()).await.unwrap();
        assert!(data.fixture.is_fallback());
        assert!(data.players.iter().all(|p| p.is_fallback()));
        assert!(data.live.is_none());
    }

    #[tokio::test]
    async fn overrides_replace_fetched_fields() {
        let mut config = offline_config();
        config.team_a = Some("Mumbai Indians".into());
        config.team_b = Some("Chennai Super Kings".into());
        config.venue = Some("Wankhede Stadium".into());

        let data = gather(None, &config).await.unwrap();
        assert_eq!(data.fixture.value.team_a, "Mumbai Indians");
        assert_eq!(data.fixture.value.venue, "Wankhede Stadium");
        // Fully specified match is not counted as a fallback
        assert!(!data.fixture.is_fallback());
        // Placeholders are named after the overridden teams
        assert!(data.players[0].value.name.starts_with("Mumbai Indians"));
    }

    #[tokio::test]
    async fn history_file_is_loaded_and_bad_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("h2h.json");
        std::fs::write(
            &path,
            r#"[{"team1":"A","team2":"B","winner":"A","first_innings":"180/5"}]"#,
        )
        .unwrap();

        let mut config = offline_config();
        config.history_file = Some(path.clone());
        let data = gather(None, &config).await.unwrap();
        assert_eq!(data.history.len(), 1);
        assert_eq!(data.history[0].winner, "A");

        std::fs::write(&path, "not json").unwrap();
        assert!(gather(None, &config).await.is_err());
    }
}
