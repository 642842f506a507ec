//! # tickload_core - Event Bus & Tick-Based Capacity Estimation
//!
//! Two halves that feed each other:
//!
//! - [`bus`] - a synchronous, priority-ordered event bus: typed events,
//!   handler registration/unregistration, cancellation, and propagation
//!   control. Its `fire` throughput (see `benches/fire_event.rs`) is the
//!   ops/s figure capacity planning starts from.
//! - [`estimator`] - given a workload profile (N ticks per second, each
//!   online player firing a fixed number of events per tick) and a measured
//!   throughput figure, answers whether the bus can sustain the event load
//!   and how many players it could support at most.
//!
//! Computation is decoupled from presentation: [`evaluate`] returns a
//! structured [`Report`], and its `Display` impl renders the human-readable
//! output lines.

pub mod bus;
pub mod error;
pub mod estimator;
pub mod profile;

pub use bus::{EventBus, EventPriority};
pub use error::{CapacityError, Result};
pub use estimator::{evaluate, Report};
pub use profile::CapacityProfile;
