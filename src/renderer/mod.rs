//! Render surface
//!
//! The core never draws. Each frame it hands a `FrameView` to whatever
//! `Renderer` the host provides.

use glam::Vec2;

use crate::sim::{ComboBanner, GameState, Projectile, SplashEffect, SplitFragment};

/// Read-only snapshot of everything drawable this frame
#[derive(Debug, Clone)]
pub struct FrameView<'a> {
    pub projectiles: &'a [Projectile],
    pub fragments: &'a [SplitFragment],
    pub splashes: &'a [SplashEffect],
    pub banners: &'a [ComboBanner],
    /// Trail segments, newest first, with fading alpha
    pub trail: Vec<(Vec2, Vec2, u8)>,
    pub score: u64,
    pub best_score: u64,
    pub lives: u8,
    pub is_over: bool,
    pub time_ms: f64,
}

impl<'a> FrameView<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self {
            projectiles: &state.projectiles,
            fragments: &state.fragments,
            splashes: &state.splashes,
            banners: &state.banners,
            trail: state.trail.segments(),
            score: state.score,
            best_score: state.best_score,
            lives: state.lives,
            is_over: state.is_over(),
            time_ms: state.time_ms,
        }
    }

    /// HUD text, or the game-over screen text
    pub fn hud_lines(&self) -> Vec<String> {
        if self.is_over {
            vec![
                "Game Over".to_string(),
                format!("Score: {}", self.score),
                format!("Best Score: {}", self.best_score),
                "Press R to Restart".to_string(),
            ]
        } else {
            vec![
                format!("Score: {}", self.score),
                format!("Best: {}", self.best_score),
                format!("Lives: {}", self.lives),
            ]
        }
    }

    /// Visible combo popups with their current opacity
    pub fn banner_texts(&self) -> Vec<(String, Vec2, u8)> {
        self.banners
            .iter()
            .map(|b| (format!("Combo x{}! +{}", b.count, b.bonus), b.pos, b.alpha(self.time_ms)))
            .filter(|(_, _, alpha)| *alpha > 0)
            .collect()
    }
}

/// Host-provided drawing backend
pub trait Renderer {
    fn render(&mut self, view: &FrameView<'_>);
}

/// Headless renderer: logs the HUD once per simulated second and the
/// game-over screen once per run
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_logged_second: Option<u64>,
    shown_game_over: bool,
}

impl Renderer for LogRenderer {
    fn render(&mut self, view: &FrameView<'_>) {
        if view.is_over {
            if !self.shown_game_over {
                log::info!("{}", view.hud_lines().join(" | "));
                self.shown_game_over = true;
            }
            return;
        }
        self.shown_game_over = false;

        for (text, _, _) in view.banner_texts() {
            log::debug!("{}", text);
        }

        let second = (view.time_ms / 1000.0) as u64;
        if self.last_logged_second != Some(second) {
            self.last_logged_second = Some(second);
            log::info!(
                "{} | in flight: {}",
                view.hud_lines().join(" | "),
                view.projectiles.len()
            );
        }
    }
}
