//! Static HTML preview page. One fixed template, section by section; the
//! Live Score card is only emitted when a live scoreline was found.

use std::fmt::Write as _;

use crate::model::MatchReport;

pub fn render(report: &MatchReport) -> String {
    let mut html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{team_a} vs {team_b} — Match Preview</title>
<link rel="stylesheet" href="../assets/css/style.css">
</head>
<body>
<main>

<h1>{team_a} vs {team_b}</h1>
<p><strong>Date:</strong> {date}</p>
<p><strong>Venue:</strong> {venue}</p>

<div class="card">
<h2>Form Guide</h2>
<p>{team_a}: {form_a_icons}</p>
<p>{team_b}: {form_b_icons}</p>
</div>

<div class="card">
<h2>Pitch Report</h2>
<p>{pitch}</p>
</div>

<div class="card">
<h2>Projected Score</h2>
<p>{projected}</p>
</div>

<div class="card">
<h2>Key Players</h2>
<ul>
"#,
        team_a = report.team_a,
        team_b = report.team_b,
        date = report.date,
        venue = report.venue,
        form_a_icons = report.form_a_icons,
        form_b_icons = report.form_b_icons,
        pitch = report.pitch,
        projected = report.projected,
    );

    for player in &report.players {
        let _ = writeln!(
            html,
            "<li><strong>{}</strong> — {}</li>",
            player.name, player.role
        );
    }
    html.push_str("</ul>\n</div>\n");

    if let Some(live) = &report.live {
        let _ = write!(
            html,
            r#"
<div class="card">
<h2>Live Score Update</h2>
<p><strong>{team_a}:</strong> {score_a}</p>
<p><strong>{team_b}:</strong> {score_b}</p>
<p>Status: {status}</p>
</div>
"#,
            team_a = report.team_a,
            team_b = report.team_b,
            score_a = live.score_a,
            score_b = live.score_b,
            status = live.status,
        );
    }

    let _ = write!(
        html,
        r#"
<div class="card">
<h2>Win Probability</h2>
<p>{team_a}: {prob_a}%</p>
<p>{team_b}: {prob_b}%</p>
</div>

<div class="card">
<h2>AI Match Prediction</h2>
<p>{summary}</p>
</div>

<img src="../assets/img/cards/{date}.png" alt="Match card" style="width:100%;border-radius:12px;margin-top:20px;">

</main>
</body>
</html>
"#,
        team_a = report.team_a,
        team_b = report.team_b,
        prob_a = report.prediction.team_a_pct(),
        prob_b = report.prediction.team_b_pct(),
        summary = report.ai_summary,
        date = report.date,
    );

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::test_support::sample_report;

    #[test]
    fn contains_every_section() {
        let html = render(&sample_report());
        for section in [
            "<h1>Mumbai Indians vs Chennai Super Kings</h1>",
            "<h2>Form Guide</h2>",
            "<h2>Pitch Report</h2>",
            "<h2>Projected Score</h2>",
            "<h2>Key Players</h2>",
            "<h2>Live Score Update</h2>",
            "<h2>Win Probability</h2>",
            "<h2>AI Match Prediction</h2>",
            "assets/img/cards/2026-04-12.png",
        ] {
            assert!(html.contains(section), "missing: {section}");
        }
    }

    #[test]
    fn live_section_omitted_without_live_score() {
        let mut report = sample_report();
        report.live = None;
        let html = render(&report);
        assert!(!html.contains("Live Score Update"));
    }

    #[test]
    fn lists_all_players() {
        let html = render(&sample_report());
        assert!(html.contains("<strong>Mumbai Indians Key Batter</strong> — Batsman"));
        assert!(html.contains("<strong>Chennai Super Kings Strike Bowler</strong> — Bowler"));
    }
}
