//! Telegram message artifact: the fixed emoji-prefixed plain-text template.

use crate::model::MatchReport;

pub fn render(report: &MatchReport, site_root: &str) -> String {
    format!(
        "🏏 *Match Preview – {team_a} vs {team_b}*\n\
         \n\
         📅 {date}\n\
         🏟 {venue}\n\
         \n\
         🔥 *Team Form*\n\
         • {team_a}: {form_a_icons}\n\
         • {team_b}: {form_b_icons}\n\
         \n\
         💡 *AI Prediction:*\n\
         _{summary}_\n\
         \n\
         📊 *Win Probability*\n\
         • {team_a}: {prob_a}%\n\
         • {team_b}: {prob_b}%\n\
         \n\
         🔥 *Projected Score:* {projected}\n\
         \n\
         📌 Pitch: {pitch}\n\
         \n\
         🔗 Full Preview:\n\
         {site_root}/matches/{date}.html\n",
        team_a = report.team_a,
        team_b = report.team_b,
        date = report.date,
        venue = report.venue,
        form_a_icons = report.form_a_icons,
        form_b_icons = report.form_b_icons,
        summary = report.ai_summary,
        prob_a = report.prediction.team_a_pct(),
        prob_b = report.prediction.team_b_pct(),
        projected = report.projected,
        pitch = report.pitch,
    )
}
