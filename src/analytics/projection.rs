//! Projected first-innings score.
//!
//! The venue's base midpoint is nudged by the average momentum of the two
//! sides, then expanded into an interval of the venue's spread and clamped to
//! the global plausible range:
//!
//!   mid  = base + round(((mA + mB) / 2) × 10)
//!   span = [mid − spread, mid + spread] ∩ [130, 230]

use std::fmt;

use serde::Serialize;

use super::form::FormRecord;
use super::venue::VenueProfile;

/// Hard bounds on any projected total, regardless of inputs.
pub const SCORE_FLOOR: i32 = 130;
pub const SCORE_CEILING: i32 = 230;

/// Runs added per unit of average momentum.
const MOMENTUM_RUNS: f64 = 10.0;

/// A closed run-total interval, low ≤ high, both within [130, 230].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectedScore {
    pub low: i32,
    pub high: i32,
}

impl ProjectedScore {
    pub fn midpoint(&self) -> i32 {
        (self.low + self.high) / 2
    }
}

impl fmt::Display for ProjectedScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{} runs", self.low, self.high)
    }
}

/// Estimate the first-innings scoring range for a match.
pub fn project_score(
    venue: &VenueProfile,
    form_a: &FormRecord,
    form_b: &FormRecord,
) -> ProjectedScore {
    let momentum = (form_a.momentum() + form_b.momentum()) / 2.0;
    let mid = venue.base_midpoint + (momentum * MOMENTUM_RUNS).round() as i32;

    // Clamping each bound preserves low ≤ high since clamp is monotonic.
    ProjectedScore {
        low: (mid - venue.spread).clamp(SCORE_FLOOR, SCORE_CEILING),
        high: (mid + venue.spread).clamp(SCORE_FLOOR, SCORE_CEILING),
    }
}
