//! # Capacity Profile
//!
//! The fixed workload assumptions a capacity estimate is made against: how
//! often the simulation ticks, how many players are online, and how many
//! events each player fires per tick.

use serde::{Deserialize, Serialize};

/// Workload assumptions for a tick-based event simulation.
///
/// Immutable after construction. Nothing is validated here - negative or
/// nonsensical values compute through, and a zero event rate only becomes
/// an error when a max-players figure is requested (see
/// [`evaluate`](crate::evaluate)).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityProfile {
    /// Simulation ticks per second (positive).
    pub ticks_per_second: f64,
    /// Assumed concurrent players (non-negative).
    pub players_online: f64,
    /// Events each player fires per tick (non-negative).
    pub events_per_player_per_tick: f64,
}

impl CapacityProfile {
    pub fn new(
        ticks_per_second: f64,
        players_online: f64,
        events_per_player_per_tick: f64,
    ) -> Self {
        Self {
            ticks_per_second,
            players_online,
            events_per_player_per_tick,
        }
    }

    /// Events a single player fires per second - the denominator of the
    /// max-players calculation.
    pub fn event_rate_per_player(&self) -> f64 {
        self.events_per_player_per_tick * self.ticks_per_second
    }
}
