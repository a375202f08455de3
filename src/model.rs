use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::MatchAnalysis;

/// A scheduled or in-progress match as reported by the fixture provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchFixture {
    pub team_a: String,
    pub team_b: String,
    pub venue: String,
}

impl MatchFixture {
    /// Documented fallback used when no fixture could be fetched.
    pub fn placeholder() -> Self {
        MatchFixture {
            team_a: "Team A".to_string(),
            team_b: "Team B".to_string(),
            venue: "Unknown Stadium".to_string(),
        }
    }
}

/// A key player entry for the preview page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerInsight {
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bowling: Option<String>,
}

impl PlayerInsight {
    /// Role placeholder used when the player search fails.
    pub fn placeholder(name: impl Into<String>, role: &str) -> Self {
        PlayerInsight {
            name: name.into(),
            role: role.to_string(),
            batting: None,
            bowling: None,
        }
    }
}

/// Live scoreline for an in-progress match. Absent entirely when the match
/// has not started or the lookup failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveScore {
    pub score_a: String,
    pub score_b: String,
    pub status: String,
}

/// One historical meeting between two teams, newest records first.
/// Innings totals use the scoreboard form "<runs>/<wickets>".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalMatch {
    pub team1: String,
    pub team2: String,
    pub winner: String,
    #[serde(default)]
    pub first_innings: Option<String>,
}

/// Where a fetched value actually came from. Fallback substitution is an
/// expected, observable mode of operation, not a swallowed exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Api,
    Fallback,
}

/// A value together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub value: T,
    pub source: DataSource,
}

impl<T> Fetched<T> {
    pub fn api(value: T) -> Self {
        Fetched {
            value,
            source: DataSource::Api,
        }
    }

    pub fn fallback(value: T) -> Self {
        Fetched {
            value,
            source: DataSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }
}

/// The complete, serialisable output of one pipeline run. Key names are the
/// fixed contract shared by the JSON artifact and its downstream consumers.
/// Contains no wall-clock timestamp: identical inputs serialise to identical
/// bytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub date: String,
    #[serde(rename = "teamA")]
    pub team_a: String,
    #[serde(rename = "teamB")]
    pub team_b: String,
    pub venue: String,
    #[serde(rename = "formA")]
    pub form_a: String,
    #[serde(rename = "formB")]
    pub form_b: String,
    #[serde(rename = "formA_icons")]
    pub form_a_icons: String,
    #[serde(rename = "formB_icons")]
    pub form_b_icons: String,
    pub pitch: String,
    pub projected: String,
    pub players: Vec<PlayerInsight>,
    pub live: Option<LiveScore>,
    pub h2h: crate::analytics::HeadToHeadSummary,
    pub prediction: crate::analytics::WinProbability,
    pub ai_summary: String,
}

impl MatchReport {
    pub fn assemble(
        date: NaiveDate,
        fixture: &MatchFixture,
        form_a: &str,
        form_b: &str,
        players: Vec<PlayerInsight>,
        live: Option<LiveScore>,
        analysis: &MatchAnalysis,
    ) -> Self {
        MatchReport {
            date: date.format("%Y-%m-%d").to_string(),
            team_a: fixture.team_a.clone(),
            team_b: fixture.team_b.clone(),
            venue: fixture.venue.clone(),
            form_a: form_a.to_string(),
            form_b: form_b.to_string(),
            form_a_icons: analysis.form_a.icons(),
            form_b_icons: analysis.form_b.icons(),
            pitch: analysis.venue.pitch_report.to_string(),
            projected: analysis.projected.to_string(),
            players,
            live,
            h2h: analysis.h2h.clone(),
            prediction: analysis.probability.clone(),
            ai_summary: analysis.summary.clone(),
        }
    }
}
