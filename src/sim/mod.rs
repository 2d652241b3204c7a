//! Deterministic simulation module
//!
//! All race logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - All randomness through the injectable `UnitRand` source
//! - Stable iteration order (roster order)
//! - No rendering or platform dependencies

pub mod boost;
pub mod engine;
pub mod rng;
pub mod seesaw;
pub mod snail;

pub use boost::{BoostEvent, BoostPhase};
pub use engine::{RaceEngine, RacePhase, RaceSnapshot, SnailSnapshot};
pub use rng::{SequenceRand, UnitRand};
pub use seesaw::Seesaw;
pub use snail::Snail;
