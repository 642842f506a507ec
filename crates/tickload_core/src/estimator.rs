//! # Capacity Estimator
//!
//! Evaluates a measured throughput figure against a [`CapacityProfile`]:
//! the event load the player population generates per second, whether the
//! measured throughput covers it, and the largest player count the
//! throughput could support.

use std::fmt;

use serde::Serialize;

use crate::error::{CapacityError, Result};
use crate::profile::CapacityProfile;

/// The structured result of evaluating one throughput sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    /// The throughput sample that was evaluated (operations/second).
    pub ops: f64,
    /// Achievable events per second. Ops are interpreted directly as
    /// events, so this equals `ops`.
    pub events_per_second: f64,
    /// Events the whole player population fires per second.
    pub total_events_required: f64,
    /// Whether the measured throughput meets or exceeds the required load.
    pub is_fast_enough: bool,
    /// Largest player count the measured throughput could support.
    pub max_players: f64,
}

/// Evaluate a throughput sample against a workload profile.
///
/// Pure computation - identical inputs always produce an identical report,
/// and nothing is printed or stored.
///
/// # Arguments
/// * `profile` - Workload assumptions (tick rate, players, event rate)
/// * `ops` - Measured or assumed throughput in operations per second
///
/// # Returns
/// * `Ok(Report)` - The derived capacity figures
/// * `Err(CapacityError::ZeroEventRate)` - If `events_per_player_per_tick *
///   ticks_per_second == 0`, which would make max players a division by
///   zero. Infinity is never produced.
///
/// # Examples
/// ```
/// use tickload_core::{evaluate, CapacityProfile};
///
/// let profile = CapacityProfile::new(20.0, 1000.0, 1.0);
/// let report = evaluate(&profile, 14.76e6).unwrap();
/// assert_eq!(report.total_events_required, 20_000.0);
/// assert!(report.is_fast_enough);
/// assert_eq!(report.max_players, 738_000.0);
/// ```
pub fn evaluate(profile: &CapacityProfile, ops: f64) -> Result<Report> {
    let events_per_second = ops;
    let total_events_required =
        profile.players_online * profile.events_per_player_per_tick * profile.ticks_per_second;
    let is_fast_enough = total_events_required <= events_per_second;

    let event_rate = profile.event_rate_per_player();
    if event_rate == 0.0 {
        return Err(CapacityError::ZeroEventRate {
            ticks_per_second: profile.ticks_per_second,
            events_per_player_per_tick: profile.events_per_player_per_tick,
        });
    }
    let max_players = ops / event_rate;

    Ok(Report {
        ops,
        events_per_second,
        total_events_required,
        is_fast_enough,
        max_players,
    })
}

/// Renders the five labelled report lines, one value per line.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Operations: {}", self.ops)?;
        writeln!(f, "Events/s: {}", self.events_per_second)?;
        writeln!(f, "Total Events Fired/s: {}", self.total_events_required)?;
        writeln!(f, "Fast Enough: {}", self.is_fast_enough)?;
        write!(f, "Max Players: {}", self.max_players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_profile() -> CapacityProfile {
        CapacityProfile::new(20.0, 1000.0, 1.0)
    }

    #[test]
    fn test_benchmark_scenarios() {
        // Measured event-bus throughput samples and the figures they
        // should derive to.
        let cases = [
            (14.76e6, 738_000.0),
            (16.133e6, 806_650.0),
            (13.1e6, 655_000.0),
            (9e6, 450_000.0),
            (6e6, 300_000.0),
        ];
        let profile = reference_profile();
        for (ops, expected_max) in cases {
            let report = evaluate(&profile, ops).unwrap();
            assert_eq!(report.ops, ops);
            assert_eq!(report.events_per_second, ops);
            assert_eq!(report.total_events_required, 20_000.0);
            assert!(report.is_fast_enough, "{} ops should cover 20k events/s", ops);
            assert_eq!(
                report.max_players, expected_max,
                "max players for {} ops",
                ops
            );
        }
    }

    #[test]
    fn test_not_fast_enough_below_required_load() {
        let report = evaluate(&reference_profile(), 19_999.0).unwrap();
        assert!(!report.is_fast_enough);
        assert_eq!(report.total_events_required, 20_000.0);
    }

    #[test]
    fn test_fast_enough_at_exact_boundary() {
        // Required load equal to measured throughput still counts as enough.
        let report = evaluate(&reference_profile(), 20_000.0).unwrap();
        assert!(report.is_fast_enough);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let profile = reference_profile();
        let first = evaluate(&profile, 14.76e6).unwrap();
        let second = evaluate(&profile, 14.76e6).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_tick_rate_is_an_error() {
        let profile = CapacityProfile::new(0.0, 1000.0, 1.0);
        let err = evaluate(&profile, 14.76e6).unwrap_err();
        assert_eq!(
            err,
            CapacityError::ZeroEventRate {
                ticks_per_second: 0.0,
                events_per_player_per_tick: 1.0,
            }
        );
    }

    #[test]
    fn test_zero_event_rate_is_an_error() {
        let profile = CapacityProfile::new(20.0, 1000.0, 0.0);
        assert!(matches!(
            evaluate(&profile, 14.76e6),
            Err(CapacityError::ZeroEventRate { .. })
        ));
    }

    #[test]
    fn test_negative_inputs_compute_through() {
        // No validation beyond the denominator: nonsensical values pass
        // silently through the formulas.
        let profile = CapacityProfile::new(20.0, -50.0, 1.0);
        let report = evaluate(&profile, 1e6).unwrap();
        assert_eq!(report.total_events_required, -1000.0);
        assert!(report.is_fast_enough);
        assert_eq!(report.max_players, 50_000.0);
    }

    #[test]
    fn test_display_renders_labelled_lines() {
        let report = evaluate(&reference_profile(), 14.76e6).unwrap();
        let rendered = report.to_string();
        assert_eq!(
            rendered,
            "Operations: 14760000\n\
             Events/s: 14760000\n\
             Total Events Fired/s: 20000\n\
             Fast Enough: true\n\
             Max Players: 738000"
        );
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = evaluate(&reference_profile(), 9e6).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_events_required"], 20_000.0);
        assert_eq!(value["is_fast_enough"], true);
        assert_eq!(value["max_players"], 450_000.0);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: max players is exactly ops over the per-player
            /// event rate whenever the denominator is nonzero.
            #[test]
            fn prop_max_players_formula(
                ticks in 0.1f64..1000.0,
                players in 0.0f64..1e6,
                rate in 0.1f64..100.0,
                ops in 0.0f64..1e9
            ) {
                let profile = CapacityProfile::new(ticks, players, rate);
                let report = evaluate(&profile, ops).unwrap();
                let expected = ops / (rate * ticks);
                prop_assert!((report.max_players - expected).abs() <= expected.abs() * 1e-12);
            }

            /// Property: required load is the straight product of the
            /// three profile fields.
            #[test]
            fn prop_required_load_formula(
                ticks in 0.1f64..1000.0,
                players in 0.0f64..1e6,
                rate in 0.1f64..100.0,
                ops in 0.0f64..1e9
            ) {
                let profile = CapacityProfile::new(ticks, players, rate);
                let report = evaluate(&profile, ops).unwrap();
                prop_assert_eq!(report.total_events_required, players * rate * ticks);
                prop_assert_eq!(report.is_fast_enough, report.total_events_required <= ops);
            }
        }
    }
}
