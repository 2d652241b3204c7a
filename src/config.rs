//! Race tuning and roster configuration
//!
//! Every tuning value is data, not behavior: prototype builds of this game
//! shipped with drifting constants, so all of them live in [`RaceConfig`]
//! and the defaults in `consts` are just one recognized set.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Snail temperament, fixing how strongly the seesaw tilt moves it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SnailKind {
    /// High tilt sensitivity - big swings both ways
    Volatile,
    /// Low tilt sensitivity - slow and even
    #[default]
    Steady,
}

impl SnailKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnailKind::Volatile => "Volatile",
            SnailKind::Steady => "Steady",
        }
    }
}

/// Default display color palette, cycled over the roster
const DEFAULT_COLORS: [&str; 6] = [
    "#f87171", "#fbbf24", "#34d399", "#60a5fa", "#a78bfa", "#f472b6",
];

/// One roster entry from the setup screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnailSetup {
    pub name: String,
    /// Display-only color, passed through to renderer snapshots
    pub color: String,
    pub kind: SnailKind,
}

impl SnailSetup {
    /// Build a default roster of `count` snails with alternating kinds.
    /// `count` is clamped to the supported roster size.
    pub fn default_lineup(count: usize) -> Vec<SnailSetup> {
        let count = count.clamp(MIN_SNAILS, MAX_SNAILS);
        (0..count)
            .map(|i| SnailSetup {
                name: format!("Snail {}", i + 1),
                color: DEFAULT_COLORS[i % DEFAULT_COLORS.len()].to_string(),
                kind: if i % 2 == 0 {
                    SnailKind::Volatile
                } else {
                    SnailKind::Steady
                },
            })
            .collect()
    }
}

/// Global race tuning
///
/// All fields have serde defaults, so a partial JSON override is enough to
/// change one knob.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceConfig {
    // === Track ===
    /// Distance a snail's head must reach to finish
    pub goal_distance: f32,
    /// Head offset used for the goal-line check
    pub finish_lookahead: f32,
    /// Fixed simulation timestep in seconds
    pub dt: f32,

    // === Condition model ===
    /// Mean of the wandering baseline speed
    pub base_speed_mean: f32,
    /// Half-width of the target-speed resample range
    pub speed_variance: f32,
    /// Mean seconds between target-speed resamples
    pub condition_interval: f32,
    /// Per-tick exponential chase factor toward the target speed
    pub condition_smoothing: f32,

    // === Tilt sensitivity by kind ===
    pub sensitivity_volatile: f32,
    pub sensitivity_steady: f32,

    // === Seesaw environment ===
    /// Per-tick probability of resampling the tilt target
    pub seesaw_shift_chance: f32,
    /// Per-tick exponential chase factor toward the tilt target
    pub seesaw_smoothing: f32,

    // === Boost event ===
    /// Leader progress fraction that arms the one-shot trigger check
    pub trigger_ratio: f32,
    /// Probability the event fires at all once checked
    pub event_chance: f32,
    /// Fraction of the field (from the back) eligible as candidates
    pub bottom_rank_ratio: f32,
    /// Per-candidate probability of becoming a target
    pub selection_ratio: f32,
    /// Speed multiplier applied to targets during the hold phase
    pub boost_multiplier: f32,
    /// Seconds of helper descent before the hold phase
    pub descend_time: f32,
    /// Seconds of the hold phase, during which the multiplier applies
    pub boost_duration: f32,
    /// Seconds of helper ascent after the hold phase
    pub ascent_time: f32,
    /// Seconds after activation before the multiplier kicks in
    pub boost_grace: f32,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            goal_distance: GOAL_DISTANCE,
            finish_lookahead: FINISH_LOOKAHEAD,
            dt: SIM_DT,
            base_speed_mean: BASE_SPEED_MEAN,
            speed_variance: SPEED_VARIANCE,
            condition_interval: CONDITION_INTERVAL,
            condition_smoothing: CONDITION_SMOOTHING,
            sensitivity_volatile: SENSITIVITY_VOLATILE,
            sensitivity_steady: SENSITIVITY_STEADY,
            seesaw_shift_chance: SEESAW_SHIFT_CHANCE,
            seesaw_smoothing: SEESAW_SMOOTHING,
            trigger_ratio: TRIGGER_RATIO,
            event_chance: EVENT_CHANCE,
            bottom_rank_ratio: BOTTOM_RANK_RATIO,
            selection_ratio: SELECTION_RATIO,
            boost_multiplier: BOOST_MULTIPLIER,
            descend_time: DESCEND_TIME,
            boost_duration: BOOST_DURATION,
            ascent_time: ASCENT_TIME,
            boost_grace: BOOST_GRACE,
        }
    }
}

impl RaceConfig {
    /// Tilt sensitivity for a snail kind
    pub fn sensitivity(&self, kind: SnailKind) -> f32 {
        match kind {
            SnailKind::Volatile => self.sensitivity_volatile,
            SnailKind::Steady => self.sensitivity_steady,
        }
    }

    /// Total length of the boost activation window in seconds
    pub fn boost_window(&self) -> f32 {
        self.descend_time + self.boost_duration + self.ascent_time
    }
}
