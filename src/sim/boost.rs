//! Rubber-band boost event
//!
//! At most once per race, after the leader has covered a configured share
//! of the track, a boost event may fire: a random subset of the trailing
//! snails gets a temporary speed multiplier while a helper sprite descends,
//! hovers, and ascends over them. Only the trigger logic and the timing
//! state machine live here; the sprite itself belongs to the renderer.

use serde::{Deserialize, Serialize};

use super::rng::UnitRand;
use super::snail::Snail;
use crate::config::RaceConfig;

/// Where the activation window currently is, for renderer animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoostPhase {
    /// No window open (not yet evaluated, declined, or expired)
    #[default]
    Inactive,
    /// Helper dropping toward the targets
    Descending,
    /// Helper hovering; the speed multiplier applies
    Holding,
    /// Helper leaving; the multiplier no longer applies
    Ascending,
}

/// One-shot boost event state
///
/// Lifecycle: Idle, then a single trigger evaluation that either declines
/// (terminal) or opens the activation window, which expires (terminal).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoostEvent {
    /// Latched by the single trigger evaluation, fire or not
    pub triggered: bool,
    /// True while the descend/hold/ascend window is open
    pub active: bool,
    /// Seconds since activation
    pub anim_timer: f32,
    /// Roster indices of the beneficiaries, fixed at activation
    pub targets: Vec<usize>,
}

impl BoostEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate the one-shot trigger. Returns `true` when the event fires.
    ///
    /// The evaluation is latched: once the leader crosses the threshold the
    /// chance roll happens exactly once, and a failed roll stays failed for
    /// the rest of the race.
    pub fn check_trigger(
        &mut self,
        snails: &mut [Snail],
        config: &RaceConfig,
        rng: &mut impl UnitRand,
    ) -> bool {
        if self.triggered || snails.is_empty() {
            return false;
        }

        let lead = snails.iter().map(|s| s.position).fold(0.0_f32, f32::max);
        if lead / config.goal_distance < config.trigger_ratio {
            return false;
        }
        self.triggered = true;

        if rng.next_unit() > config.event_chance {
            return false;
        }

        // Candidate pool: the back of the field by position, at least one
        let mut order: Vec<usize> = (0..snails.len()).collect();
        order.sort_by(|&a, &b| {
            snails[a]
                .position
                .partial_cmp(&snails[b].position)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let bottom = ((snails.len() as f32 * config.bottom_rank_ratio).ceil() as usize)
            .clamp(1, snails.len());

        self.targets = order
            .into_iter()
            .take(bottom)
            .filter(|_| rng.next_unit() < config.selection_ratio)
            .collect();

        // An empty draw counts as a no-fire; the latch still holds
        if self.targets.is_empty() {
            return false;
        }

        self.active = true;
        self.anim_timer = 0.0;
        for &idx in &self.targets {
            snails[idx].boost_target = true;
        }
        true
    }

    /// Advance the activation window one tick; clears targets on expiry
    pub fn advance(&mut self, dt: f32, snails: &mut [Snail], config: &RaceConfig) {
        if !self.active {
            return;
        }
        self.anim_timer += dt;
        if self.anim_timer >= config.boost_window() {
            for &idx in &self.targets {
                if let Some(snail) = snails.get_mut(idx) {
                    snail.boost_target = false;
                }
            }
            self.targets.clear();
            self.active = false;
        }
    }

    /// Whether the speed multiplier applies to a roster index this tick.
    /// The multiplier window is narrower than the visual one: it opens a
    /// grace period after activation and closes when the ascent starts.
    pub fn multiplies(&self, idx: usize, config: &RaceConfig) -> bool {
        self.active
            && self.anim_timer >= config.boost_grace
            && self.anim_timer < config.descend_time + config.boost_duration
            && self.targets.contains(&idx)
    }

    /// Current animation phase for renderers
    pub fn phase(&self, config: &RaceConfig) -> BoostPhase {
        if !self.active {
            BoostPhase::Inactive
        } else if self.anim_timer < config.descend_time {
            BoostPhase::Descending
        } else if self.anim_timer < config.descend_time + config.boost_duration {
            BoostPhase::Holding
        } else {
            BoostPhase::Ascending
        }
    }
}
