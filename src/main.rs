//! Headless race runner
//!
//! Runs one race to completion at the fixed timestep and prints the final
//! standings as JSON. Usage:
//!
//! ```text
//! snail-derby [config.json] [seed]
//! ```
//!
//! The optional config file is a partial [`RaceConfig`] override; the seed
//! defaults to the wall clock so unseeded runs differ.

use std::time::{SystemTime, UNIX_EPOCH};

use snail_derby::consts::SIM_DT;
use snail_derby::{RaceConfig, RaceEngine, SnailSetup};

/// Hard cap on simulated frames so a degenerate tuning can't spin forever
const MAX_FRAMES: u32 = 120_000;

/// Frames between progress log lines (5 seconds of race time)
const LOG_INTERVAL: u32 = 300;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(&path)?)?,
        None => RaceConfig::default(),
    };
    let seed = match args.next() {
        Some(raw) => raw.parse::<u64>()?,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64,
    };

    let roster = SnailSetup::default_lineup(5);
    let mut engine = RaceEngine::new(config, &roster, seed);
    log::info!("Seed: {seed}");

    let mut frames = 0;
    while !engine.is_finished() && frames < MAX_FRAMES {
        engine.step_frame(SIM_DT);
        frames += 1;
        if frames % LOG_INTERVAL == 0 {
            if let Some(leader) = engine.leader() {
                log::info!(
                    "t={:.1}s leader {} at {:.1}",
                    engine.race_time(),
                    leader.name,
                    leader.position
                );
            }
        }
    }

    if !engine.is_finished() {
        log::warn!("Frame cap reached before any snail finished");
    }

    let snapshot = engine.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    if let Some(winner) = engine.winner() {
        println!("Winner: {} ({})", winner.name, winner.kind.as_str());
    }
    Ok(())
}
