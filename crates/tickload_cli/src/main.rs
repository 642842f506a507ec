//! Tickload CLI
//!
//! Capacity estimator for tick-based event workloads: given a workload
//! profile and one or more measured throughput samples, prints whether each
//! sample can sustain the implied event load and how many players it could
//! support at most.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tickload_core::CapacityProfile;

#[derive(Parser)]
#[command(name = "tickload")]
#[command(about = "Estimate event capacity for tick-based workloads", long_about = None)]
struct Cli {
    /// Simulation ticks per second
    #[arg(long, default_value_t = 20.0)]
    ticks_per_second: f64,

    /// Assumed concurrent players
    #[arg(long, default_value_t = 1000.0)]
    players_online: f64,

    /// Events each player fires per tick
    #[arg(long, default_value_t = 1.0)]
    events_per_player_per_tick: f64,

    /// JSON file holding a capacity profile (overrides the three flags above)
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Emit reports as JSON, one object per line
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Measured throughput samples in operations per second
    #[arg(value_name = "OPS", default_values_t = [14.76e6, 16.133e6, 13.1e6, 9e6, 6e6])]
    ops: Vec<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let profile = match &cli.profile {
        Some(path) => tickload_cli::load_profile(path)?,
        None => CapacityProfile::new(
            cli.ticks_per_second,
            cli.players_online,
            cli.events_per_player_per_tick,
        ),
    };
    log::debug!(
        "evaluating {} sample(s) against {} ticks/s, {} players, {} events/player/tick",
        cli.ops.len(),
        profile.ticks_per_second,
        profile.players_online,
        profile.events_per_player_per_tick
    );

    print!(
        "{}",
        tickload_cli::render_reports(&profile, &cli.ops, cli.json)?
    );
    Ok(())
}
