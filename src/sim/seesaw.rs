//! Seesaw environment model
//!
//! One scalar tilt shared by the whole field. The tilt drifts toward a
//! randomly resampled target instead of jumping, so advantage swings build
//! and fade smoothly.

use serde::{Deserialize, Serialize};

use super::rng::UnitRand;

/// Shared environment tilt, driven toward targets in `[-1, 1]`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Seesaw {
    /// Current tilt read by the velocity model
    pub value: f32,
    /// Target the tilt is chasing, always in `[-1, 1]`
    pub target: f32,
}

impl Seesaw {
    /// Advance the tilt one tick: with probability `shift_chance` resample
    /// the target uniformly in `[-1, 1]`, then chase it exponentially.
    /// The value itself is never clamped; a retarget mid-chase just starts
    /// a new convergence.
    pub fn step(&mut self, shift_chance: f32, smoothing: f32, rng: &mut impl UnitRand) {
        if rng.next_unit() < shift_chance {
            self.target = rng.next_signed();
        }
        self.value += (self.target - self.value) * smoothing;
    }
}
