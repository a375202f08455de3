//! Templated natural-language match summary.
//!
//! Pure and deterministic: the verdict tier depends only on the
//! win-probability gap (< 5 balanced, 5–12 slight edge, ≥ 12 clear
//! favourite), naming whichever team holds the higher probability.

use super::form::FormRecord;
use super::projection::ProjectedScore;
use super::win_probability::WinProbability;

/// Gap thresholds in percentage points.
const BALANCED_BELOW: f64 = 5.0;
const SLIGHT_EDGE_BELOW: f64 = 12.0;

fn verdict(team_a: &str, team_b: &str, probability: &WinProbability) -> String {
    let favourite = if probability.favours_team_a() {
        team_a
    } else {
        team_b
    };
    let gap = probability.gap();

    if gap < BALANCED_BELOW {
        "a very balanced contest".to_string()
    } else if gap < SLIGHT_EDGE_BELOW {
        format!("a slight edge for {favourite}")
    } else {
        format!("{favourite} entering as clear favourites")
    }
}

/// Build the one-paragraph AI-style prediction shown on every artifact.
pub fn match_summary(
    team_a: &str,
    team_b: &str,
    form_a: &FormRecord,
    form_b: &FormRecord,
    projected: &ProjectedScore,
    probability: &WinProbability,
    pitch: &str,
) -> String {
    let momentum = if form_a.momentum() > form_b.momentum() {
        "slightly stronger"
    } else if form_a.momentum() < form_b.momentum() {
        "under pressure"
    } else {
        "evenly matched"
    };
    let verdict = verdict(team_a, team_b, probability);

    format!(
        "Based on venue conditions, a projected scoring range of {projected}, \
         recent form (with {team_a} appearing {momentum}), and the pitch profile \
         ('{pitch}'), this matchup appears to present {verdict}. Early momentum \
         and top-order execution will likely determine the winner."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::head_to_head::HeadToHeadSummary;
    use crate::analytics::venue::classify_venue;
    use crate::analytics::win_probability::estimate_win_probability;

    fn projected() -> ProjectedScore {
        ProjectedScore { low: 165, high: 205 }
    }

    #[test]
    fn tiny_gap_reads_as_balanced() {
        let form = FormRecord::parse("W L");
        let p = estimate_win_probability(
            &form,
            &form,
            &HeadToHeadSummary::default(),
            &classify_venue("neutral"),
        );
        let text = match_summary("MI", "CSK", &form, &form, &projected(), &p, "flat");
        assert!(text.contains("a very balanced contest"), "got: {text}");
        assert!(text.contains("evenly matched"));
    }

    #[test]
    fn moderate_gap_names_the_edge() {
        // 6-4 head-to-head with equal form: 55.0 vs 45.0, gap 10
        let h2h = HeadToHeadSummary {
            total: 10,
            wins_a: 6,
            wins_b: 4,
            ..HeadToHeadSummary::default()
        };
        let form = FormRecord::parse("W L");
        let p = estimate_win_probability(&form, &form, &h2h, &classify_venue("neutral"));
        let text = match_summary("MI", "CSK", &form, &form, &projected(), &p, "flat");
        assert!(text.contains("a slight edge for MI"), "got: {text}");
    }

    #[test]
    fn big_gap_names_clear_favourites() {
        let p = estimate_win_probability(
            &FormRecord::parse("W W W W W"),
            &FormRecord::parse("L L L L L"),
            &HeadToHeadSummary::default(),
            &classify_venue("Chinnaswamy"),
        );
        assert!(p.gap() >= 12.0);
        let text = match_summary(
            "Mumbai Indians",
            "Chennai Super Kings",
            &FormRecord::parse("W W W W W"),
            &FormRecord::parse("L L L L L"),
            &projected(),
            &p,
            "flat",
        );
        assert!(
            text.contains("Mumbai Indians entering as clear favourites"),
            "got: {text}"
        );
        assert!(text.contains("slightly stronger"));
    }

    #[test]
    fn summary_is_deterministic() {
        let form_a = FormRecord::parse("W W L");
        let form_b = FormRecord::parse("L W L");
        let p = estimate_win_probability(
            &form_a,
            &form_b,
            &HeadToHeadSummary::default(),
            &classify_venue("Eden Gardens"),
        );
        let one = match_summary("A", "B", &form_a, &form_b, &projected(), &p, "flat");
        let two = match_summary("A", "B", &form_a, &form_b, &projected(), &p, "flat");
        assert_eq!(one, two);
    }
}
