//! The analytics engine: pure, stateless functions turning raw inputs (form
//! strings, venue name, optional head-to-head history) into derived outputs.
//! No I/O happens anywhere in this module tree; nothing here can fail.

pub mod form;
pub mod head_to_head;
pub mod projection;
pub mod summary;
pub mod venue;
pub mod win_probability;

pub use form::FormRecord;
pub use head_to_head::HeadToHeadSummary;
pub use projection::ProjectedScore;
pub use venue::{classify_venue, VenueCategory, VenueProfile};
pub use win_probability::WinProbability;

use crate::model::HistoricalMatch;

/// Everything the engine derives for one match.
#[derive(Debug, Clone)]
pub struct MatchAnalysis {
    pub form_a: FormRecord,
    pub form_b: FormRecord,
    pub venue: VenueProfile,
    pub projected: ProjectedScore,
    pub probability: WinProbability,
    pub h2h: HeadToHeadSummary,
    pub summary: String,
}

/// Run the full engine over one match's raw inputs.
pub fn analyze(
    team_a: &str,
    team_b: &str,
    venue_name: &str,
    form_a: &str,
    form_b: &str,
    history: &[HistoricalMatch],
) -> MatchAnalysis {
    let form_a = FormRecord::parse(form_a);
    let form_b = FormRecord::parse(form_b);
    let venue = classify_venue(venue_name);
    let h2h = head_to_head::aggregate(team_a, team_b, history);
    let projected = projection::project_score(&venue, &form_a, &form_b);
    let probability = win_probability::estimate_win_probability(&form_a, &form_b, &h2h, &venue);
    let summary = summary::match_summary(
        team_a,
        team_b,
        &form_a,
        &form_b,
        &projected,
        &probability,
        venue.pitch_report,
    );

    MatchAnalysis {
        form_a,
        form_b,
        venue,
        projected,
        probability,
        h2h,
        summary,
    }
}
