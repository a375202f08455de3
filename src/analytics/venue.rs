//! Venue classification.
//!
//! A free-text venue name is mapped to one of four scoring-tendency
//! categories by case-insensitive substring match against an ordered keyword
//! list; the first matching keyword wins. Unknown venues get the balanced
//! default. Classification is a pure function of the input string.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VenueCategory {
    HighScoring,
    SpinFriendly,
    Balanced,
    SeamFriendly,
}

/// Heuristic scoring profile for a ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VenueProfile {
    pub category: VenueCategory,
    /// First-innings run-total midpoint before any form adjustment.
    pub base_midpoint: i32,
    /// Half-width of the projected interval.
    pub spread: i32,
    pub pitch_report: &'static str,
    /// Win-probability bias applied to team A at this kind of ground.
    /// Zero for balanced venues so fully symmetric inputs stay at 50/50.
    pub bias: f64,
}

const HIGH_SCORING: VenueProfile = VenueProfile {
    category: VenueCategory::HighScoring,
    base_midpoint: 185,
    spread: 20,
    pitch_report: "Small boundaries and true bounce favour the batters — 180+ likely.",
    bias: 0.12,
};

const SPIN_FRIENDLY: VenueProfile = VenueProfile {
    category: VenueCategory::SpinFriendly,
    base_midpoint: 160,
    spread: 18,
    pitch_report: "Slow turner with grip on offer — spinners control the middle overs.",
    bias: -0.05,
};

const SEAM_FRIENDLY: VenueProfile = VenueProfile {
    category: VenueCategory::SeamFriendly,
    base_midpoint: 165,
    spread: 18,
    pitch_report: "Fresh surface with pace and carry — seamers get early movement.",
    bias: -0.02,
};

const BALANCED: VenueProfile = VenueProfile {
    category: VenueCategory::Balanced,
    base_midpoint: 170,
    spread: 20,
    pitch_report: "Balanced wicket with moderate scoring conditions.",
    bias: 0.0,
};

/// Ordered keyword table; first match wins.
const VENUE_KEYWORDS: &[(&str, &VenueProfile)] = &[
    ("wankhede", &HIGH_SCORING),
    ("chinnaswamy", &HIGH_SCORING),
    ("chepauk", &SPIN_FRIENDLY),
    ("arun", &SPIN_FRIENDLY),
    ("kotla", &SPIN_FRIENDLY),
    ("mohali", &SEAM_FRIENDLY),
    ("dharamsala", &SEAM_FRIENDLY),
    ("eden", &BALANCED),
];

/// Classify a venue name into its scoring profile.
pub fn classify_venue(venue: &str) -> VenueProfile {
    let v = venue.to_lowercase();
    for (keyword, profile) in VENUE_KEYWORDS {
        if v.contains(keyword) {
            return **profile;
        }
    }
    BALANCED
}
