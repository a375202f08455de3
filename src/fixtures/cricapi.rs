use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::provider::FixtureProvider;
use crate::model::{LiveScore, MatchFixture, PlayerInsight};

/// Fixture provider backed by the CricAPI JSON API.
/// Docs: <https://cricketdata.org/>
///
/// Every payload field is treated as optional and untrusted; anything
/// missing or malformed degrades to a per-field default instead of failing
/// the request.
pub struct CricApi {
    http: Client,
    api_key: String,
    /// Base URL, overridable for tests.
    base_url: String,
}

impl CricApi {
    pub fn new(api_key: &str, base_url: &str, timeout_secs: u64) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(CricApi {
            http,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<serde_json::Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("Fetching {}", url);

        let mut query: Vec<(&str, &str)> = vec![("apikey", self.api_key.as_str())];
        query.extend_from_slice(extra);

        let resp = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .with_context(|| format!("CricAPI request to {endpoint} failed"))?;

        if !resp.status().is_success() {
            anyhow::bail!("CricAPI error on {}: {}", endpoint, resp.status());
        }

        resp.json()
            .await
            .with_context(|| format!("Failed to parse CricAPI {endpoint} response"))
    }
}

/// Successful payloads carry `"status": "success"`; anything else is treated
/// as an empty result set.
fn data_array(raw: &serde_json::Value) -> &[serde_json::Value] {
    if raw["status"].as_str() != Some("success") {
        return &[];
    }
    raw["data"].as_array().map(Vec::as_slice).unwrap_or(&[])
}

fn parse_fixture(entry: &serde_json::Value) -> Option<MatchFixture> {
    // Prefer the "A vs B" match name; fall back to the teams array.
    let name = entry["name"].as_str().unwrap_or_default();
    let (team_a, team_b) = if let Some((a, b)) = name.split_once(" vs ") {
        (a.trim().to_string(), b.trim().to_string())
    } else {
        let teams = entry["teams"].as_array()?;
        (
            teams.first()?.as_str()?.to_string(),
            teams.get(1)?.as_str()?.to_string(),
        )
    };
    if team_a.is_empty() || team_b.is_empty() {
        return None;
    }

    Some(MatchFixture {
        team_a,
        team_b,
        venue: entry["venue"].as_str().unwrap_or("Cricket Ground").to_string(),
    })
}

fn parse_live_score(
    entries: &[serde_json::Value],
    team_a: &str,
    team_b: &str,
) -> Option<LiveScore> {
    let a = team_a.to_lowercase();
    let b = team_b.to_lowercase();

    for m in entries {
        let t1 = m["t1"].as_str().unwrap_or_default().to_lowercase();
        let t2 = m["t2"].as_str().unwrap_or_default().to_lowercase();

        let straight = t1.contains(&a) && t2.contains(&b);
        let reversed = t1.contains(&b) && t2.contains(&a);
        if !(straight || reversed) {
            continue;
        }

        let (s1, s2) = (
            m["t1s"].as_str().unwrap_or("N/A").to_string(),
            m["t2s"].as_str().unwrap_or("N/A").to_string(),
        );
        let (score_a, score_b) = if straight { (s1, s2) } else { (s2, s1) };

        return Some(LiveScore {
            score_a,
            score_b,
            status: m["status"].as_str().unwrap_or("Match in progress").to_string(),
        });
    }
    None
}

fn parse_player(entry: &serde_json::Value, search_name: &str) -> PlayerInsight {
    PlayerInsight {
        name: entry["name"].as_str().unwrap_or(search_name).to_string(),
        role: entry["role"].as_str().unwrap_or("Player").to_string(),
        batting: entry["battingStyle"].as_str().map(str::to_string),
        bowling: entry["bowlingStyle"].as_str().map(str::to_string),
    }
}

#[async_trait]
impl FixtureProvider for CricApi {
    fn name(&self) -> &str {
        "CricAPI"
    }

    async fn fetch_first_fixture(&self) -> Result<Option<MatchFixture>> {
        // Live matches first, then the upcoming-fixture calendar.
        let current = self.get_json("currentMatches", &[]).await?;
        if let Some(fixture) = data_array(&current).iter().find_map(parse_fixture) {
            return Ok(Some(fixture));
        }

        let calendar = self.get_json("matchCalendar", &[]).await?;
        Ok(data_array(&calendar).iter().find_map(parse_fixture))
    }

    async fn fetch_live_score(&self, team_a: &str, team_b: &str) -> Result<Option<LiveScore>> {
        let raw = self.get_json("cricScore", &[]).await?;
        Ok(parse_live_score(data_array(&raw), team_a, team_b))
    }

    async fn fetch_player(&self, name: &str) -> Result<Option<PlayerInsight>> {
        let raw = self.get_json("players", &[("search", name)]).await?;
        Ok(data_array(&raw).first().map(|p| parse_player(p, name)))
    }
}
