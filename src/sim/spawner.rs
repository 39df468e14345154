//! Spawn cadence and launch policy
//!
//! A wall-clock accumulator fires once per `SPAWN_INTERVAL_MS`. Each firing
//! launches either a single projectile or, occasionally, a burst.

use glam::Vec2;
use rand::Rng;

use super::body::{FruitVariant, Projectile, ProjectileKind};
use super::state::GameState;
use crate::consts::*;

/// Shortest allowed spawn interval
pub const MIN_SPAWN_INTERVAL_MS: f64 = 1.0;

/// Spawn timer
#[derive(Debug, Clone)]
pub struct Spawner {
    interval_ms: f64,
    accumulated_ms: f64,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(SPAWN_INTERVAL_MS)
    }
}

impl Spawner {
    /// Intervals below 1ms are clamped to 1ms
    pub fn new(interval_ms: f64) -> Self {
        debug_assert!(interval_ms > 0.0, "spawn interval must be positive");
        Self {
            interval_ms: interval_ms.max(MIN_SPAWN_INTERVAL_MS),
            accumulated_ms: 0.0,
        }
    }

    /// Add elapsed time; returns how many spawn waves are now due
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        self.accumulated_ms += dt_ms;
        let mut due = 0;
        while self.accumulated_ms >= self.interval_ms {
            self.accumulated_ms -= self.interval_ms;
            due += 1;
        }
        due
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0.0;
    }
}

/// How many projectiles one spawn wave launches
pub fn roll_wave_size<R: Rng>(rng: &mut R) -> u32 {
    if rng.random_bool(BURST_CHANCE) {
        rng.random_range(BURST_MIN..=BURST_MAX)
    } else {
        1
    }
}

/// Independent kind roll for each projectile
pub fn roll_kind<R: Rng>(rng: &mut R) -> ProjectileKind {
    if rng.random_bool(HAZARD_CHANCE) {
        ProjectileKind::Hazard
    } else {
        let idx = rng.random_range(0..FruitVariant::ALL.len());
        ProjectileKind::Normal(FruitVariant::ALL[idx])
    }
}

/// Launch one wave into the session. Does nothing once the game is over.
///
/// Returns the number of projectiles added.
pub fn spawn_wave(state: &mut GameState) -> u32 {
    if state.is_over() {
        return 0;
    }

    let count = roll_wave_size(&mut state.rng);
    if count > 1 {
        log::debug!("Burst of {} at {:.0}ms", count, state.time_ms);
    }

    let width = state.viewport.width as i32;
    let height = state.viewport.height;
    let x_max = (width - SPAWN_INSET).max(SPAWN_INSET);

    for _ in 0..count {
        let kind = roll_kind(&mut state.rng);
        let x = state.rng.random_range(SPAWN_INSET..=x_max) as f32;
        let vel = Vec2::new(
            state.rng.random_range(LAUNCH_VX.0..=LAUNCH_VX.1),
            state.rng.random_range(LAUNCH_VY.0..=LAUNCH_VY.1),
        );
        let spin = state.rng.random_range(SPIN_RANGE.0..=SPIN_RANGE.1);
        let id = state.next_entity_id();
        state.projectiles.push(Projectile::new(
            id,
            kind,
            Vec2::new(x, height + SPAWN_DEPTH),
            vel,
            spin,
        ));
    }
    count
}
