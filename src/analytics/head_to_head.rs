//! Head-to-head aggregation.
//!
//! Summarises historical meetings between two teams. Team names are matched
//! by normalized exact comparison (lowercased alphanumeric words, collapsed
//! whitespace) in either home/away order; substring containment is not used
//! because overlapping franchise names would cross-match. Records are
//! expected newest first; the recent-5 split covers the first five relevant
//! records.

use serde::Serialize;

use crate::model::HistoricalMatch;

/// Aggregate historical results between two specific teams.
///
/// The `Default` values are the documented neutral fallback used when no
/// history is available — an expected state, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadToHeadSummary {
    pub total: u32,
    #[serde(rename = "winsA")]
    pub wins_a: u32,
    #[serde(rename = "winsB")]
    pub wins_b: u32,
    #[serde(rename = "recentWinsA")]
    pub recent_wins_a: u32,
    #[serde(rename = "recentWinsB")]
    pub recent_wins_b: u32,
    #[serde(rename = "avgFirstInnings")]
    pub avg_first_innings: u32,
    #[serde(rename = "highestFirstInnings")]
    pub highest_first_innings: u32,
    #[serde(rename = "lowestFirstInnings")]
    pub lowest_first_innings: u32,
}

impl Default for HeadToHeadSummary {
    fn default() -> Self {
        HeadToHeadSummary {
            total: 10,
            wins_a: 5,
            wins_b: 5,
            recent_wins_a: 2,
            recent_wins_b: 2,
            avg_first_innings: 165,
            highest_first_innings: 205,
            lowest_first_innings: 135,
        }
    }
}

impl HeadToHeadSummary {
    /// Win differential for team A, normalized by total meetings.
    /// Guarded against empty history: the divisor is never below 1.
    pub fn win_differential(&self) -> f64 {
        (self.wins_a as f64 - self.wins_b as f64) / self.total.max(1) as f64
    }
}

/// Lowercase a name into its alphanumeric words joined by single spaces.
fn normalize_name(name: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            cleaned.extend(ch.to_lowercase());
        } else {
            cleaned.push(' ');
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when the record's two teams are exactly these two teams, in either
/// order, after normalization.
fn is_relevant(record: &HistoricalMatch, team_a: &str, team_b: &str) -> bool {
    let (r1, r2) = (normalize_name(&record.team1), normalize_name(&record.team2));
    let (a, b) = (normalize_name(team_a), normalize_name(team_b));
    (r1 == a && r2 == b) || (r1 == b && r2 == a)
}

/// Extract the leading run total from a scoreboard string like "185/6".
/// Malformed entries yield `None` and are skipped by the aggregator.
fn parse_innings_total(raw: &str) -> Option<u32> {
    let digits: String = raw.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Build a summary from historical records, newest first.
/// No relevant records ⇒ the neutral default summary.
pub fn aggregate(team_a: &str, team_b: &str, records: &[HistoricalMatch]) -> HeadToHeadSummary {
    let relevant: Vec<&HistoricalMatch> = records
        .iter()
        .filter(|r| is_relevant(r, team_a, team_b))
        .collect();

    if relevant.is_empty() {
        return HeadToHeadSummary::default();
    }

    let a = normalize_name(team_a);
    let b = normalize_name(team_b);

    let mut wins_a = 0u32;
    let mut wins_b = 0u32;
    let mut recent_wins_a = 0u32;
    let mut recent_wins_b = 0u32;
    let mut totals: Vec<u32> = Vec::new();

    for (i, record) in relevant.iter().enumerate() {
        let winner = normalize_name(&record.winner);
        if winner == a {
            wins_a += 1;
            if i < 5 {
                recent_wins_a += 1;
            }
        } else if winner == b {
            wins_b += 1;
            if i < 5 {
                recent_wins_b += 1;
            }
        }
        // Ties and no-results count toward the total only
        if let Some(total) = record.first_innings.as_deref().and_then(parse_innings_total) {
            totals.push(total);
        }
    }

    let defaults = HeadToHeadSummary::default();
    let (avg, highest, lowest) = if totals.is_empty() {
        (
            defaults.avg_first_innings,
            defaults.highest_first_innings,
            defaults.lowest_first_innings,
        )
    } else {
        let sum: u32 = totals.iter().sum();
        (
            sum / totals.len() as u32,
            *totals.iter().max().unwrap(),
            *totals.iter().min().unwrap(),
        )
    };

    HeadToHeadSummary {
        total: relevant.len() as u32,
        wins_a,
        wins_b,
        recent_wins_a,
        recent_wins_b,
        avg_first_innings: avg,
        highest_first_innings: highest,
        lowest_first_innings: lowest,
    }
}
