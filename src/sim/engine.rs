//! Race engine: fixed-step scheduler, per-tick update, termination
//!
//! Owns all simulation state for one race. Each fixed step runs in a set
//! order: seesaw environment, boost state machine, then every snail's
//! condition/velocity/integration, then the goal-line check. All snails
//! therefore observe the same tilt and boost snapshot within a step.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boost::{BoostEvent, BoostPhase};
use super::rng::UnitRand;
use super::seesaw::Seesaw;
use super::snail::Snail;
use crate::config::{RaceConfig, SnailSetup};
use crate::consts::{MAX_SNAILS, MAX_SUBSTEPS};

/// Race lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RacePhase {
    Racing,
    Finished,
}

/// The simulation engine for one race
///
/// Constructed per race from the roster and tuning; a new race means a new
/// engine. Generic over the random source so tests can script every draw;
/// production races use a seeded PCG stream.
pub struct RaceEngine<R: UnitRand = Pcg32> {
    config: RaceConfig,
    snails: Vec<Snail>,
    seesaw: Seesaw,
    boost: BoostEvent,
    rng: R,
    phase: RacePhase,
    /// Simulated race time in seconds
    race_time: f32,
    /// Leftover frame time carried between frames
    accumulator: f32,
    /// Roster indices in goal-crossing order; first entry is the winner
    finish_order: Vec<usize>,
}

impl RaceEngine<Pcg32> {
    /// Start a race with a seeded PCG random stream
    pub fn new(config: RaceConfig, roster: &[SnailSetup], seed: u64) -> Self {
        Self::with_rng(config, roster, Pcg32::seed_from_u64(seed))
    }
}

impl<R: UnitRand> RaceEngine<R> {
    /// Start a race with an injected random source
    pub fn with_rng(config: RaceConfig, roster: &[SnailSetup], rng: R) -> Self {
        let snails: Vec<Snail> = roster
            .iter()
            .take(MAX_SNAILS)
            .map(|setup| Snail::new(setup, &config))
            .collect();

        log::info!(
            "Race start: {} snails, goal {:.0}",
            snails.len(),
            config.goal_distance
        );

        Self {
            config,
            snails,
            seesaw: Seesaw::default(),
            boost: BoostEvent::new(),
            rng,
            phase: RacePhase::Racing,
            race_time: 0.0,
            accumulator: 0.0,
            finish_order: Vec::new(),
        }
    }

    /// Feed one rendered frame's elapsed wall time. Runs zero or more whole
    /// fixed steps; leftover time stays accumulated for the next frame.
    /// A no-op once the race is finished or the roster is empty.
    pub fn step_frame(&mut self, elapsed: f32) {
        if self.phase == RacePhase::Finished || self.snails.is_empty() {
            return;
        }

        self.accumulator += elapsed.max(0.0);
        let mut substeps = 0;
        while self.accumulator >= self.config.dt && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= self.config.dt;
            substeps += 1;
            if self.phase == RacePhase::Finished {
                break;
            }
        }
    }

    /// One fixed step: environment, boost machine, snail physics, goal check
    fn step(&mut self) {
        let dt = self.config.dt;
        self.race_time += dt;

        self.seesaw.step(
            self.config.seesaw_shift_chance,
            self.config.seesaw_smoothing,
            &mut self.rng,
        );

        if self
            .boost
            .check_trigger(&mut self.snails, &self.config, &mut self.rng)
        {
            log::info!(
                "Boost event fired for {} trailing snail(s)",
                self.boost.targets.len()
            );
        }
        self.boost.advance(dt, &mut self.snails, &self.config);

        let tilt = self.seesaw.value;
        for idx in 0..self.snails.len() {
            let boosted = self.boost.multiplies(idx, &self.config);
            let snail = &mut self.snails[idx];
            snail.step_condition(dt, &self.config, &mut self.rng);
            let velocity = snail.compose_velocity(tilt, boosted, self.config.boost_multiplier);
            snail.integrate(velocity, dt);
        }

        // Goal check in roster order; same-tick crossers tie-break by index
        for idx in 0..self.snails.len() {
            let snail = &mut self.snails[idx];
            if !snail.finished
                && snail.head_reached(self.config.goal_distance, self.config.finish_lookahead)
            {
                snail.finished = true;
                self.finish_order.push(idx);
                log::info!(
                    "{} crossed the line in place {} at {:.2}s",
                    snail.name,
                    self.finish_order.len(),
                    self.race_time
                );
            }
        }

        if self.phase == RacePhase::Racing && !self.finish_order.is_empty() {
            self.phase = RacePhase::Finished;
            let winner_idx = self.finish_order[0];
            for (idx, snail) in self.snails.iter_mut().enumerate() {
                if idx != winner_idx {
                    snail.eliminated = true;
                }
            }
            log::info!("Race finished: {} wins", self.snails[winner_idx].name);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == RacePhase::Finished
    }

    pub fn phase(&self) -> RacePhase {
        self.phase
    }

    /// The winner, once the race has finished
    pub fn winner(&self) -> Option<&Snail> {
        self.finish_order.first().map(|&idx| &self.snails[idx])
    }

    /// Current leader by position
    pub fn leader(&self) -> Option<&Snail> {
        self.snails.iter().max_by(|a, b| {
            a.position
                .partial_cmp(&b.position)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    pub fn snails(&self) -> &[Snail] {
        &self.snails
    }

    pub fn race_time(&self) -> f32 {
        self.race_time
    }

    pub fn seesaw(&self) -> &Seesaw {
        &self.seesaw
    }

    pub fn boost(&self) -> &BoostEvent {
        &self.boost
    }

    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    /// Compact read-only view for renderer/HUD collaborators
    pub fn snapshot(&self) -> RaceSnapshot {
        RaceSnapshot {
            phase: self.phase,
            race_time: self.race_time,
            seesaw_value: self.seesaw.value,
            boost_active: self.boost.active,
            boost_phase: self.boost.phase(&self.config),
            snails: self
                .snails
                .iter()
                .map(|snail| SnailSnapshot {
                    name: snail.name.clone(),
                    color: snail.color.clone(),
                    position: snail.position,
                    progress: snail.progress(self.config.goal_distance),
                    velocity: snail.velocity,
                    finished: snail.finished,
                    boost_target: snail.boost_target,
                    eliminated: snail.eliminated,
                })
                .collect(),
            finish_order: self.finish_order.clone(),
        }
    }
}

/// Read-only per-snail view for rendering and HUD
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnailSnapshot {
    pub name: String,
    pub color: String,
    pub position: f32,
    /// Fraction of the track covered, clamped to `[0, 1]`
    pub progress: f32,
    pub velocity: f32,
    pub finished: bool,
    pub boost_target: bool,
    pub eliminated: bool,
}

/// Read-only race-level view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceSnapshot {
    pub phase: RacePhase,
    pub race_time: f32,
    pub seesaw_value: f32,
    pub boost_active: bool,
    pub boost_phase: BoostPhase,
    pub snails: Vec<SnailSnapshot>,
    /// Roster indices in crossing order; first entry is the winner
    pub finish_order: Vec<usize>,
}
