//! Heuristic pre-match win probability.
//!
//! Explicitly not a calibrated statistical model. Team A starts from an even
//! 0.50 and picks up three weighted edges:
//!
//!   raw = 0.50 + 0.35·(momentum_A − momentum_B)
//!              + 0.25·(h2h wins_A − wins_B) / max(total, 1)
//!              + 0.15·venue_bias
//!
//! clamped to the [0.15, 0.85] band. Team B is the exact complement.
//!
//! Percentages are stored as integer tenths of a percent so the two sides
//! always sum to exactly 100.0 at one-decimal precision, by construction
//! rather than by float rounding luck.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::form::FormRecord;
use super::head_to_head::HeadToHeadSummary;
use super::venue::VenueProfile;

const FORM_WEIGHT: f64 = 0.35;
const H2H_WEIGHT: f64 = 0.25;
const VENUE_WEIGHT: f64 = 0.15;

/// Clamp band for the raw probability, strictly inside (0, 1).
const PROB_FLOOR: f64 = 0.15;
const PROB_CEILING: f64 = 0.85;

/// Percentage split between two teams, in tenths of a percent.
/// Invariant: `team_a_tenths + team_b_tenths == 1000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinProbability {
    team_a_tenths: u32,
}

impl WinProbability {
    pub fn team_a_pct(&self) -> f64 {
        self.team_a_tenths as f64 / 10.0
    }

    pub fn team_b_pct(&self) -> f64 {
        (1000 - self.team_a_tenths) as f64 / 10.0
    }

    /// Absolute percentage-point gap between the two teams.
    pub fn gap(&self) -> f64 {
        (self.team_a_pct() - self.team_b_pct()).abs()
    }

    pub fn favours_team_a(&self) -> bool {
        self.team_a_tenths > 500
    }

    #[cfg(test)]
    pub(crate) fn tenths(&self) -> (u32, u32) {
        (self.team_a_tenths, 1000 - self.team_a_tenths)
    }
}

impl Serialize for WinProbability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("WinProbability", 2)?;
        s.serialize_field("teamA_prob", &self.team_a_pct())?;
        s.serialize_field("teamB_prob", &self.team_b_pct())?;
        s.end()
    }
}

/// Estimate the win-probability split for team A against team B.
pub fn estimate_win_probability(
    form_a: &FormRecord,
    form_b: &FormRecord,
    h2h: &HeadToHeadSummary,
    venue: &VenueProfile,
) -> WinProbability {
    let form_edge = FORM_WEIGHT * (form_a.momentum() - form_b.momentum());
    let h2h_edge = H2H_WEIGHT * h2h.win_differential();
    let venue_edge = VENUE_WEIGHT * venue.bias;

    let raw = (0.50 + form_edge + h2h_edge + venue_edge).clamp(PROB_FLOOR, PROB_CEILING);

    WinProbability {
        team_a_tenths: (raw * 1000.0).round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::venue::classify_venue;
    use approx::assert_relative_eq;

    fn even_h2h() -> HeadToHeadSummary {
        HeadToHeadSummary::default()
    }

    #[test]
    fn symmetric_inputs_are_exactly_even() {
        let form = FormRecord::parse("W L W L");
        let p = estimate_win_probability(&form, &form, &even_h2h(), &classify_venue("neutral ground"));
        assert_eq!(p.tenths(), (500, 500));
        assert_relative_eq!(p.team_a_pct(), 50.0, epsilon = 1e-9);
        assert_relative_eq!(p.team_b_pct(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn tenths_always_sum_to_one_thousand() {
        let forms = ["", "W W W W W", "L L L L L", "W L D", "W W L L"];
        for fa in forms {
            for fb in forms {
                let p = estimate_win_probability(
                    &FormRecord::parse(fa),
                    &FormRecord::parse(fb),
                    &even_h2h(),
                    &classify_venue("Wankhede"),
                );
                let (a, b) = p.tenths();
                assert_eq!(a + b, 1000, "fa={:?} fb={:?}", fa, fb);
            }
        }
    }

    #[test]
    fn clamp_band_holds_at_the_extremes() {
        let p = estimate_win_probability(
            &FormRecord::parse("W W W W W"),
            &FormRecord::parse("L L L L L"),
            &HeadToHeadSummary {
                total: 10,
                wins_a: 10,
                wins_b: 0,
                ..HeadToHeadSummary::default()
            },
            &classify_venue("Chinnaswamy"),
        );
        assert_relative_eq!(p.team_a_pct(), 85.0, epsilon = 1e-9);
        assert_relative_eq!(p.team_b_pct(), 15.0, epsilon = 1e-9);
    }

    #[test]
    fn every_output_stays_inside_the_band() {
        let forms = ["", "W W W W W", "L L L L L", "W L"];
        let venues = ["Wankhede", "Chepauk", "Mohali", "nowhere"];
        for fa in forms {
            for fb in forms {
                for v in venues {
                    let p = estimate_win_probability(
                        &FormRecord::parse(fa),
                        &FormRecord::parse(fb),
                        &even_h2h(),
                        &classify_venue(v),
                    );
                    assert!(
                        (15.0..=85.0).contains(&p.team_a_pct()),
                        "out of band for fa={:?} fb={:?} v={}: {}",
                        fa, fb, v, p.team_a_pct()
                    );
                }
            }
        }
    }

    #[test]
    fn better_form_raises_the_probability() {
        let strong = estimate_win_probability(
            &FormRecord::parse("W W W L L"),
            &FormRecord::parse("L L L W W"),
            &even_h2h(),
            &classify_venue("neutral"),
        );
        // form diff = 0.2 - (-0.2) = 0.4 → edge 0.14 → 64.0%
        assert_relative_eq!(strong.team_a_pct(), 64.0, epsilon = 1e-9);
        assert!(strong.favours_team_a());
    }

    #[test]
    fn head_to_head_dominance_shifts_the_split() {
        let h2h = HeadToHeadSummary {
            total: 10,
            wins_a: 8,
            wins_b: 2,
            ..HeadToHeadSummary::default()
        };
        let form = FormRecord::parse("W L W L");
        let p = estimate_win_probability(&form, &form, &h2h, &classify_venue("neutral"));
        // h2h diff = 0.6 → edge 0.15 → 65.0%
        assert_relative_eq!(p.team_a_pct(), 65.0, epsilon = 1e-9);
    }

    #[test]
    fn high_scoring_venue_bias_applies() {
        let form = FormRecord::parse("W L");
        let p = estimate_win_probability(&form, &form, &even_h2h(), &classify_venue("Wankhede"));
        // venue edge = 0.15 * 0.12 = 0.018 → 51.8%
        assert_relative_eq!(p.team_a_pct(), 51.8, epsilon = 1e-9);
    }

    #[test]
    fn gap_is_symmetric_difference() {
        let p = WinProbability { team_a_tenths: 583 };
        assert_relative_eq!(p.gap(), 16.6, epsilon = 1e-9);
    }

    #[test]
    fn serializes_with_fixed_key_names() {
        let p = WinProbability { team_a_tenths: 583 };
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["teamA_prob"], 58.3);
        assert_eq!(json["teamB_prob"], 41.7);
    }
}
