//! Snail Derby - a seesaw-tilted snail racing simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (seesaw environment, snail condition
//!   model, boost event, race engine)
//! - `config`: Data-driven race tuning and roster setup
//!
//! Rendering, HUD, and setup forms are external collaborators: they feed
//! a roster and tuning in, and read immutable snapshots out.

pub mod config;
pub mod sim;

pub use config::{RaceConfig, SnailKind, SnailSetup};
pub use sim::{RaceEngine, RaceSnapshot};

/// Engine configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Track defaults
    pub const GOAL_DISTANCE: f32 = 100.0;
    /// Distance from a snail's body center to the tip of its head; the
    /// head is what crosses the goal line
    pub const FINISH_LOOKAHEAD: f32 = 2.5;

    /// Condition model defaults
    pub const BASE_SPEED_MEAN: f32 = 10.0;
    pub const SPEED_VARIANCE: f32 = 3.0;
    pub const CONDITION_INTERVAL: f32 = 2.0;
    pub const CONDITION_SMOOTHING: f32 = 0.05;

    /// Tilt sensitivity per snail kind
    pub const SENSITIVITY_VOLATILE: f32 = 20.0;
    pub const SENSITIVITY_STEADY: f32 = 5.0;

    /// Seesaw environment defaults
    pub const SEESAW_SHIFT_CHANCE: f32 = 0.01;
    pub const SEESAW_SMOOTHING: f32 = 0.03;

    /// Boost event defaults
    pub const TRIGGER_RATIO: f32 = 0.4;
    pub const EVENT_CHANCE: f32 = 0.7;
    pub const BOTTOM_RANK_RATIO: f32 = 0.5;
    pub const SELECTION_RATIO: f32 = 0.5;
    pub const BOOST_MULTIPLIER: f32 = 2.0;
    pub const DESCEND_TIME: f32 = 0.3;
    pub const BOOST_DURATION: f32 = 3.0;
    pub const ASCENT_TIME: f32 = 0.3;
    /// Delay after activation before the speed multiplier kicks in,
    /// aligning the boost with the end of the visual descent
    pub const BOOST_GRACE: f32 = 0.2;

    /// Roster size bounds
    pub const MIN_SNAILS: usize = 1;
    pub const MAX_SNAILS: usize = 8;
}
