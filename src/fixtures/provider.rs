use anyhow::Result;
use async_trait::async_trait;

use crate::model::{HistoricalMatch, LiveScore, MatchFixture, PlayerInsight};

/// Trait that every fixture/score data provider must implement.
///
/// Every method is best-effort: `Ok(None)` / an empty list means "nothing
/// found", which callers resolve with their documented fallbacks. `Err` is
/// reserved for transport or payload failures and is also recovered at the
/// call site — providers never abort the pipeline.
#[async_trait]
pub trait FixtureProvider: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// First live match, falling back to the first upcoming fixture.
    async fn fetch_first_fixture(&self) -> Result<Option<MatchFixture>>;

    /// Current scoreline for the match between these two teams, if any.
    async fn fetch_live_score(&self, team_a: &str, team_b: &str) -> Result<Option<LiveScore>>;

    /// Profile for a single player by search name.
    async fn fetch_player(&self, name: &str) -> Result<Option<PlayerInsight>>;

    /// Historical meetings between the two teams, newest first. The default
    /// is empty: most upstreams offer no such endpoint and history is then
    /// supplied from a local file or the neutral defaults.
    async fn fetch_head_to_head(&self, _team_a: &str, _team_b: &str) -> Result<Vec<HistoricalMatch>> {
        Ok(Vec::new())
    }
}
