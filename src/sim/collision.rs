//! Blade-vs-projectile overlap and slice resolution
//!
//! The blade is the pointer trail: every stored sample is a disc of
//! `SLICE_RADIUS`, and a projectile is a disc of `HALF_EXTENT` around its
//! sprite center. Any one overlapping sample counts as a slice.

use glam::Vec2;

use super::body::{ProjectileKind, SplashEffect, SplitFragment};
use super::state::{GameEvent, GameOverCause, GameState};
use super::trail::TrailBuffer;
use crate::consts::*;

/// Distance under which a trail sample cuts a projectile
pub const SLICE_DISTANCE: f32 = SLICE_RADIUS + HALF_EXTENT;

/// First trail sample (newest first) overlapping a disc at `center`
pub fn trail_hit(center: Vec2, trail: &TrailBuffer) -> Option<Vec2> {
    trail
        .as_sequence()
        .find(|p| p.distance(center) < SLICE_DISTANCE)
        .copied()
}

/// Outcome of one resolution pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliceReport {
    /// Timestamps of Normal slices, for the combo window
    pub slices: Vec<f64>,
    /// A hazard was cut and the session is over
    pub hazard_hit: bool,
}

/// Test every live projectile against the trail and apply the results.
///
/// A projectile is killed the moment it is hit, so it can never be counted
/// twice. Cutting a hazard ends the session and stops the pass.
pub fn resolve_slices(state: &mut GameState) -> SliceReport {
    let mut report = SliceReport::default();
    if state.is_over() || state.trail.is_empty() {
        return report;
    }

    let now = state.time_ms;
    for projectile in state.projectiles.iter_mut() {
        if !projectile.alive || trail_hit(projectile.center(), &state.trail).is_none() {
            continue;
        }
        projectile.alive = false;

        match projectile.kind {
            ProjectileKind::Hazard => {
                report.hazard_hit = true;
                break;
            }
            ProjectileKind::Normal(variant) => {
                state.score += 1;
                report.slices.push(now);
                state.events.push(GameEvent::Sliced { id: projectile.id });
                state
                    .fragments
                    .extend(SplitFragment::pair(variant, projectile.body.pos));
                state
                    .splashes
                    .push(SplashEffect::new(projectile.center(), variant.juice_color()));
            }
        }
    }

    if report.hazard_hit {
        state.end_game(GameOverCause::HazardSliced);
    }
    report
}
