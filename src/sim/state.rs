//! Game state and core simulation types
//!
//! One `GameState` is the whole session: every collection the tick touches
//! lives here and is passed explicitly.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Projectile, SplashEffect, SplitFragment};
use super::combo::{ComboBanner, ComboTracker};
use super::spawner::Spawner;
use super::trail::TrailBuffer;
use crate::consts::*;
use crate::highscores::BestScore;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; frozen until restart
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    HazardSliced,
    OutOfLives,
}

/// Notable things that happened during a tick, drained by the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Sliced { id: u32 },
    LifeLost { remaining: u8 },
    Combo { count: usize, bonus: u64 },
    GameOver { cause: GameOverCause, score: u64 },
    /// Best score raised at a game-over transition; must be persisted
    NewBest { score: u64 },
}

/// Playfield size in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session RNG (seeded)
    pub rng: Pcg32,
    pub viewport: Viewport,
    pub score: u64,
    pub lives: u8,
    /// Survives restarts; loaded from storage at startup
    pub best_score: u64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulation clock in milliseconds (advanced only while playing)
    pub time_ms: f64,
    /// Latest known pointer position
    pub pointer: Option<glam::Vec2>,
    pub spawner: Spawner,
    pub projectiles: Vec<Projectile>,
    pub fragments: Vec<SplitFragment>,
    pub splashes: Vec<SplashEffect>,
    pub combo: ComboTracker,
    pub banners: Vec<ComboBanner>,
    pub trail: TrailBuffer,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed and persisted best score
    pub fn new(seed: u64, viewport: Viewport, best_score: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            score: 0,
            lives: START_LIVES,
            best_score,
            phase: GamePhase::Playing,
            time_ticks: 0,
            time_ms: 0.0,
            pointer: None,
            spawner: Spawner::default(),
            projectiles: Vec::new(),
            fragments: Vec::new(),
            splashes: Vec::new(),
            combo: ComboTracker::default(),
            banners: Vec::new(),
            trail: TrailBuffer::default(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Enter `GameOver`, raising the best score if beaten (strictly)
    pub fn end_game(&mut self, cause: GameOverCause) {
        if self.is_over() {
            return;
        }
        self.phase = GamePhase::GameOver;
        log::info!("Game over ({:?}) with score {}", cause, self.score);
        self.events.push(GameEvent::GameOver {
            cause,
            score: self.score,
        });
        if BestScore::new(self.best_score).qualifies(self.score) {
            self.best_score = self.score;
            self.events.push(GameEvent::NewBest { score: self.score });
        }
    }

    /// Take one life; exhausting lives ends the game
    pub fn lose_life(&mut self) {
        if self.is_over() {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::LifeLost {
            remaining: self.lives,
        });
        if self.lives == 0 {
            self.end_game(GameOverCause::OutOfLives);
        }
    }

    /// Back to a fresh `Playing` session; best score and RNG stream carry over
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = START_LIVES;
        self.phase = GamePhase::Playing;
        self.spawner.reset();
        self.projectiles.clear();
        self.fragments.clear();
        self.splashes.clear();
        self.combo.clear();
        self.banners.clear();
        self.trail.clear();
        self.events.clear();
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
