use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CapacityError {
    /// The max-players denominator (`events_per_player_per_tick *
    /// ticks_per_second`) is zero, so no player count can be derived.
    #[error(
        "max players is undefined: {events_per_player_per_tick} events/player/tick \
         at {ticks_per_second} ticks/s leaves nothing to divide by"
    )]
    ZeroEventRate {
        ticks_per_second: f64,
        events_per_player_per_tick: f64,
    },
}

pub type Result<T> = std::result::Result<T, CapacityError>;
