//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::collision::resolve_slices;
use super::spawner::spawn_wave;
use super::state::{GameEvent, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer position, if it has moved since the last tick
    pub pointer: Option<Vec2>,
    /// Restart request (only honoured after game over)
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.is_over() {
        if input.restart {
            restart(state);
        }
        return;
    }

    if let Some(pointer) = input.pointer {
        state.pointer = Some(pointer);
    }

    let dt_ms = dt as f64 * 1000.0;
    state.time_ticks += 1;
    state.time_ms += dt_ms;
    let now = state.time_ms;

    // Spawn on the wall-clock cadence
    let due = state.spawner.advance(dt_ms);
    for _ in 0..due {
        spawn_wave(state);
    }

    // The blade samples the pointer every tick, moving or not
    if let Some(pointer) = state.pointer {
        state.trail.record(pointer);
    }

    let report = resolve_slices(state);
    if report.hazard_hit {
        state.projectiles.retain(|p| p.alive);
        return;
    }

    let banner_pos = state.pointer.unwrap_or(Vec2::ZERO);
    if let Some(banner) = state.combo.update(now, &report.slices, banner_pos) {
        log::debug!("Combo x{} +{}", banner.count, banner.bonus);
        state.score += banner.bonus;
        state.events.push(GameEvent::Combo {
            count: banner.count,
            bonus: banner.bonus,
        });
        state.banners.push(banner);
    }

    for projectile in state.projectiles.iter_mut().filter(|p| p.alive) {
        projectile.body.integrate();
    }

    // Drop sliced and fallen projectiles in place; only fallen fruit costs a life
    let floor = state.viewport.height;
    let mut missed = 0u32;
    state.projectiles.retain(|p| {
        if !p.alive {
            return false;
        }
        if p.is_off_screen(floor) {
            if !p.is_hazard() {
                missed += 1;
            }
            return false;
        }
        true
    });
    for _ in 0..missed {
        state.lose_life();
    }

    state.fragments.retain_mut(|f| f.update());
    state.splashes.retain_mut(|s| s.update());
    state.banners.retain(|b| !b.is_expired(now));
}

/// Start a fresh run from `GameOver`, keeping the best score.
/// Does nothing mid-run.
pub fn restart(state: &mut GameState) {
    if !state.is_over() {
        return;
    }
    state.reset();
    log::info!("Restarted (best score {})", state.best_score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::body::{FruitVariant, Projectile, ProjectileKind};
    use crate::sim::state::{GameOverCause, GamePhase, Viewport};
    use proptest::prelude::*;

    fn add(state: &mut GameState, kind: ProjectileKind, pos: Vec2, vel: Vec2) {
        let id = state.next_entity_id();
        state.projectiles.push(Projectile::new(id, kind, pos, vel, 1.0));
    }

    fn apple() -> ProjectileKind {
        ProjectileKind::Normal(FruitVariant::Apple)
    }

    fn point_at(pos: Vec2) -> TickInput {
        TickInput {
            pointer: Some(pos),
            ..Default::default()
        }
    }

    #[test]
    fn test_three_quick_slices_award_combo() {
        let mut state = GameState::new(1, Viewport::default(), 0);
        add(&mut state, apple(), Vec2::new(100.0, 100.0), Vec2::ZERO);
        add(&mut state, apple(), Vec2::new(350.0, 100.0), Vec2::ZERO);
        add(&mut state, apple(), Vec2::new(600.0, 100.0), Vec2::ZERO);

        // Slice one fruit every 10 ticks (~167ms apart)
        for target in 0..3 {
            let center = state.projectiles[0].center();
            assert_eq!(state.projectiles.len(), 3 - target);
            tick(&mut state, &point_at(center), SIM_DT);
            for _ in 0..9 {
                tick(&mut state, &TickInput::default(), SIM_DT);
            }
        }

        assert_eq!(state.score, 13);
        assert_eq!(state.banners.len(), 1);
        assert_eq!(state.banners[0].count, 3);
        assert_eq!(state.banners[0].bonus, 10);
        assert!(state.combo.is_empty());
    }

    #[test]
    fn test_missed_fruit_costs_a_life() {
        let mut state = GameState::new(1, Viewport::default(), 0);
        add(&mut state, apple(), Vec2::new(100.0, 663.9), Vec2::new(0.0, 1.0));
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.lives, 2);
        assert!(state.projectiles.is_empty());
        assert!(state.events.contains(&GameEvent::LifeLost { remaining: 2 }));
    }

    #[test]
    fn test_fallen_hazard_is_free() {
        let mut state = GameState::new(1, Viewport::default(), 0);
        add(&mut state, ProjectileKind::Hazard, Vec2::new(100.0, 663.9), Vec2::new(0.0, 1.0));
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.lives, 3);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_losing_all_lives_without_scoring_keeps_best() {
        let mut state = GameState::new(1, Viewport::default(), 0);
        for x in [100.0, 300.0, 500.0] {
            add(&mut state, apple(), Vec2::new(x, 663.9), Vec2::new(0.0, 1.0));
        }
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.best_score, 0);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::GameOver {
            cause: GameOverCause::OutOfLives,
            score: 0
        }));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::NewBest { .. })));
    }

    #[test]
    fn test_hazard_slice_sets_new_best() {
        let mut state = GameState::new(1, Viewport::default(), 50);
        state.score = 51;
        add(&mut state, ProjectileKind::Hazard, Vec2::new(300.0, 300.0), Vec2::ZERO);
        tick(&mut state, &point_at(Vec2::new(332.0, 332.0)), SIM_DT);
        assert!(state.is_over());
        assert_eq!(state.best_score, 51);
        assert!(state.events.contains(&GameEvent::NewBest { score: 51 }));
    }

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut state = GameState::new(1, Viewport::default(), 0);
        add(&mut state, apple(), Vec2::new(100.0, 100.0), Vec2::new(1.0, -5.0));
        state.phase = GamePhase::GameOver;
        let before = state.projectiles[0].body;
        for _ in 0..200 {
            tick(&mut state, &point_at(Vec2::new(10.0, 10.0)), SIM_DT);
        }
        assert_eq!(state.projectiles[0].body, before);
        assert_eq!(state.time_ticks, 0);
        assert!(state.trail.is_empty());
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_restart_only_from_game_over() {
        let mut state = GameState::new(1, Viewport::default(), 9);
        state.score = 4;
        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!(state.score, 4);

        state.lives = 1;
        add(&mut state, apple(), Vec2::new(100.0, 100.0), Vec2::ZERO);
        state.trail.record(Vec2::new(500.0, 500.0));
        state.end_game(GameOverCause::HazardSliced);
        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.best_score, 9);
        assert!(state.projectiles.is_empty());
        assert!(state.trail.is_empty());
        assert!(state.combo.is_empty());
    }

    #[test]
    fn test_restart_mid_run_is_ignored() {
        let mut state = GameState::new(1, Viewport::default(), 0);
        state.score = 7;
        state.lives = 2;
        add(&mut state, apple(), Vec2::new(100.0, 100.0), Vec2::ZERO);
        restart(&mut state);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 7);
        assert_eq!(state.lives, 2);
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_effects_expire() {
        let mut state = GameState::new(1, Viewport::default(), 0);
        // Three fruit under one pointer: sliced together, combo fires on tick 1
        for x in [100.0, 110.0, 120.0] {
            add(&mut state, apple(), Vec2::new(x, 100.0), Vec2::ZERO);
        }
        tick(&mut state, &point_at(Vec2::new(142.0, 132.0)), SIM_DT);
        assert_eq!(state.score, 13);
        assert_eq!(state.banners.len(), 1);
        assert_eq!(state.fragments.len(), 6);
        assert_eq!(state.splashes.len(), 3);
        assert_eq!(state.banners[0].time_ms, state.time_ms);

        // Move the pointer off the field so nothing else is cut
        let away = point_at(Vec2::new(-500.0, -500.0));
        for _ in 0..59 {
            tick(&mut state, &away, SIM_DT);
            assert_eq!(state.banners.len(), 1);
        }
        // 60 ticks (1000ms) after the combo
        tick(&mut state, &away, SIM_DT);
        assert!(state.banners.is_empty());
        assert_eq!(state.lives, 3);

        // Splashes last 15 ticks and fragments 30, both long gone
        assert!(state.splashes.is_empty());
        assert!(state.fragments.is_empty());
    }

    #[test]
    fn test_spawns_once_per_second() {
        let mut state = GameState::new(3, Viewport::default(), 0);
        for _ in 0..59 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.projectiles.is_empty());
        // 60 ticks of f32 dt add up to slightly over one second
        tick(&mut state, &TickInput::default(), SIM_DT);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(!state.projectiles.is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999, Viewport::default(), 0);
        let mut state2 = GameState::new(99999, Viewport::default(), 0);
        for i in 0..600 {
            let input = point_at(Vec2::new((i * 7 % 800) as f32, (i * 3 % 600) as f32));
            tick(&mut state1, &input, SIM_DT);
            tick(&mut state2, &input, SIM_DT);
        }
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.lives, state2.lives);
        assert_eq!(state1.projectiles.len(), state2.projectiles.len());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn lives_and_score_are_monotonic(
            seed in any::<u64>(),
            path in prop::collection::vec((0.0f32..800.0, 0.0f32..600.0), 1..40),
        ) {
            let mut state = GameState::new(seed, Viewport::default(), 0);
            let mut lives = state.lives;
            let mut score = state.score;
            for i in 0..900usize {
                let (x, y) = path[i % path.len()];
                tick(&mut state, &point_at(Vec2::new(x, y)), SIM_DT);

                prop_assert!(state.lives <= lives);
                prop_assert!(state.score >= score);
                prop_assert!(state.trail.len() <= TRAIL_CAPACITY);
                if state.lives == 0 {
                    prop_assert_eq!(state.phase, GamePhase::GameOver);
                }
                if state.is_over() {
                    let frozen = (state.score, state.lives, state.projectiles.len());
                    tick(&mut state, &point_at(Vec2::new(x, y)), SIM_DT);
                    prop_assert_eq!(frozen, (state.score, state.lives, state.projectiles.len()));
                    prop_assert!(state.is_over());
                    break;
                }
                lives = state.lives;
                score = state.score;
            }
        }
    }
}
