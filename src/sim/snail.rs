//! Snail actor state and per-tick physics
//!
//! Pure simulation data only. Meshes, trails, and HUD rows live with the
//! renderer, linked back here by roster index.

use serde::{Deserialize, Serialize};

use super::rng::UnitRand;
use crate::config::{RaceConfig, SnailKind, SnailSetup};

/// One racing snail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snail {
    pub name: String,
    /// Display-only color, passed through to snapshots
    pub color: String,
    pub kind: SnailKind,
    /// Tilt multiplier, fixed per kind at race start
    pub sensitivity: f32,
    /// Distance traveled along the track, floored at 0
    pub position: f32,
    /// Wandering baseline speed, chasing `target_speed`
    pub current_speed: f32,
    pub target_speed: f32,
    /// Countdown to the next target-speed resample
    pub condition_timer: f32,
    /// Last composed velocity (tilt and boost applied), renderer-facing
    pub velocity: f32,
    /// Set once the head crosses the goal line
    pub finished: bool,
    /// True while this snail benefits from the active boost event
    pub boost_target: bool,
    /// Set on every non-winner when the race ends (terminal display state)
    pub eliminated: bool,
}

impl Snail {
    pub fn new(setup: &SnailSetup, config: &RaceConfig) -> Self {
        Self {
            name: setup.name.clone(),
            color: setup.color.clone(),
            kind: setup.kind,
            sensitivity: config.sensitivity(setup.kind),
            position: 0.0,
            current_speed: config.base_speed_mean,
            target_speed: config.base_speed_mean,
            condition_timer: 0.0,
            velocity: 0.0,
            finished: false,
            boost_target: false,
            eliminated: false,
        }
    }

    /// Advance the condition model one tick: resample the target speed when
    /// the timer expires, then chase it exponentially.
    pub fn step_condition(&mut self, dt: f32, config: &RaceConfig, rng: &mut impl UnitRand) {
        self.condition_timer -= dt;
        if self.condition_timer <= 0.0 {
            self.target_speed = config.base_speed_mean + rng.next_signed() * config.speed_variance;
            // Randomized interval so the field doesn't resample in lockstep
            self.condition_timer = config.condition_interval * (0.5 + rng.next_unit());
        }
        self.current_speed += (self.target_speed - self.current_speed) * config.condition_smoothing;
    }

    /// Compose this tick's effective velocity: boosted baseline plus tilt
    /// times sensitivity. No clamp here; a sensitive snail under a strong
    /// adverse tilt can transiently move backward.
    pub fn compose_velocity(&self, tilt: f32, boosted: bool, multiplier: f32) -> f32 {
        let mut base = self.current_speed;
        if boosted {
            base *= multiplier;
        }
        base + tilt * self.sensitivity
    }

    /// Integrate position for one tick; only the position is floored at 0
    pub fn integrate(&mut self, velocity: f32, dt: f32) {
        self.velocity = velocity;
        self.position = (self.position + velocity * dt).max(0.0);
    }

    /// Goal-line check against the head of the snail
    pub fn head_reached(&self, goal_distance: f32, lookahead: f32) -> bool {
        self.position + lookahead >= goal_distance
    }

    /// Race progress in `[0, 1]` for HUD display
    pub fn progress(&self, goal_distance: f32) -> f32 {
        if goal_distance <= 0.0 {
            return 0.0;
        }
        (self.position / goal_distance).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::SequenceRand;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup(kind: SnailKind) -> SnailSetup {
        SnailSetup {
            name: "Test".into(),
            color: "#ffffff".into(),
            kind,
        }
    }

    #[test]
    fn test_condition_resample_on_expiry() {
        let config = RaceConfig {
            base_speed_mean: 10.0,
            speed_variance: 4.0,
            condition_interval: 2.0,
            condition_smoothing: 1.0,
            ..Default::default()
        };
        let mut snail = Snail::new(&setup(SnailKind::Steady), &config);

        // Timer starts expired: first tick resamples.
        // Samples: target draw 0.75 -> signed +0.5, interval draw 0.5 -> 2.0s
        let mut rng = SequenceRand::new(vec![0.75, 0.5]);
        snail.step_condition(config.dt, &config, &mut rng);
        assert!((snail.target_speed - 12.0).abs() < 1e-5);
        // Smoothing of 1.0 snaps current to target immediately
        assert!((snail.current_speed - snail.target_speed).abs() < 1e-6);
        assert!(snail.condition_timer > 0.0);

        // Timer not expired: no further draws are consumed
        let timer_before = snail.condition_timer;
        snail.step_condition(config.dt, &config, &mut rng);
        assert!((snail.condition_timer - (timer_before - config.dt)).abs() < 1e-6);
    }

    #[test]
    fn test_current_speed_chases_target_smoothly() {
        let config = RaceConfig {
            speed_variance: 0.0,
            condition_smoothing: 0.1,
            ..Default::default()
        };
        let mut snail = Snail::new(&setup(SnailKind::Steady), &config);
        snail.current_speed = 0.0;
        snail.condition_timer = 100.0;
        snail.target_speed = 10.0;

        let mut rng = SequenceRand::constant(0.5);
        let mut prev = snail.current_speed;
        for _ in 0..50 {
            snail.step_condition(config.dt, &config, &mut rng);
            assert!(snail.current_speed > prev);
            assert!(snail.current_speed <= snail.target_speed);
            prev = snail.current_speed;
        }
    }

    #[test]
    fn test_velocity_composition_with_boost() {
        let config = RaceConfig::default();
        let mut snail = Snail::new(&setup(SnailKind::Volatile), &config);
        snail.current_speed = 10.0;

        let plain = snail.compose_velocity(0.5, false, 2.0);
        assert!((plain - (10.0 + 0.5 * config.sensitivity_volatile)).abs() < 1e-6);

        let boosted = snail.compose_velocity(0.5, true, 2.0);
        assert!((boosted - (20.0 + 0.5 * config.sensitivity_volatile)).abs() < 1e-6);
    }

    #[test]
    fn test_position_floors_at_zero() {
        let config = RaceConfig::default();
        let mut snail = Snail::new(&setup(SnailKind::Volatile), &config);
        snail.integrate(-50.0, 1.0);
        assert_eq!(snail.position, 0.0);
        // Velocity output keeps the real (negative) value
        assert_eq!(snail.velocity, -50.0);
    }

    #[test]
    fn test_head_reaches_before_body() {
        let config = RaceConfig::default();
        let mut snail = Snail::new(&setup(SnailKind::Steady), &config);
        snail.position = 98.0;
        assert!(snail.head_reached(100.0, 2.5));
        assert!(!snail.head_reached(100.0, 0.0));
    }

    proptest! {
        /// Sustained maximally-adverse tilt never drives position negative.
        #[test]
        fn position_never_negative_under_adverse_tilt(seed in any::<u64>()) {
            let config = RaceConfig {
                base_speed_mean: 2.0,
                speed_variance: 2.0,
                ..Default::default()
            };
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut snail = Snail::new(&setup(SnailKind::Volatile), &config);
            for _ in 0..2_000 {
                snail.step_condition(config.dt, &config, &mut rng);
                let v = snail.compose_velocity(-1.0, false, 1.0);
                snail.integrate(v, config.dt);
                prop_assert!(snail.position >= 0.0);
            }
        }
    }
}
