//! lifestream demo: a glider crossing a 25x25 torus.
//!
//! Demonstrates:
//!   1. Seeding a simulation from a built-in pattern
//!   2. Streaming generations from the driver thread
//!   3. Stopping the run with a cancel token
//!   4. Recovering the final grid and metrics
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example glider

use std::time::Duration;

use lifestream_engine::{CancelToken, SimConfig, Simulation};
use lifestream_grid::Pattern;
use tracing_subscriber::EnvFilter;

const SIZE: i32 = 25;
const GENERATIONS: u64 = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = SimConfig {
        tick_interval: Duration::from_millis(100),
        ..SimConfig::new(SIZE, Pattern::Glider.cells(SIZE))
    };
    let token = CancelToken::new();
    let mut stream = Simulation::new(config)?.run(token.clone())?;

    for snapshot in stream.by_ref() {
        println!(
            "generation {:>3}: {} alive at {:?}",
            snapshot.generation.0,
            snapshot.alive_count(),
            snapshot.sorted_positions()
        );
        if snapshot.generation.0 >= GENERATIONS {
            token.cancel();
        }
    }

    let report = stream.join()?;
    println!(
        "stopped ({}) at generation {} with {} alive; {} cells evaluated",
        report.stop_reason,
        report.generation,
        report.grid.alive_count(),
        report.metrics.cells_evaluated
    );
    Ok(())
}
