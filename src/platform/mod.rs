//! Platform abstraction layer
//!
//! The windowing/event substrate sits behind `EventSource`. Each frame the
//! loop drains every pending event before the simulation advances.

use glam::Vec2;

use crate::sim::Viewport;

/// Input surface consumed by the frame loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerMoved(Vec2),
    /// Restart key (ignored unless the game is over)
    Restart,
    Quit,
}

/// Non-blocking source of input events
pub trait EventSource {
    /// Take all events pending at time `now_secs`
    fn poll(&mut self, now_secs: f64, game_over: bool) -> Vec<InputEvent>;
}

/// Headless pointer: sweeps a Lissajous figure across the playfield and
/// quits after a fixed duration
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    viewport: Viewport,
    /// Quit after this many seconds (None = never)
    duration: Option<f64>,
    /// Press restart whenever the game is over
    auto_restart: bool,
    /// Quit the first time the game ends (when not auto-restarting)
    quit_on_game_over: bool,
}

impl ScriptedInput {
    pub fn new(viewport: Viewport, duration_secs: u32, auto_restart: bool) -> Self {
        Self {
            viewport,
            duration: (duration_secs > 0).then_some(duration_secs as f64),
            auto_restart,
            quit_on_game_over: duration_secs == 0 && !auto_restart,
        }
    }

    /// Pointer position at a point in time
    pub fn pointer_at(&self, t: f64) -> Vec2 {
        let w = self.viewport.width as f64;
        let h = self.viewport.height as f64;
        let x = w * 0.5 + w * 0.4 * (t * 2.3).sin();
        let y = h * 0.5 + h * 0.35 * (t * 3.1).cos();
        Vec2::new(x as f32, y as f32)
    }
}

impl EventSource for ScriptedInput {
    fn poll(&mut self, now_secs: f64, game_over: bool) -> Vec<InputEvent> {
        if self.duration.is_some_and(|d| now_secs >= d) || (game_over && self.quit_on_game_over) {
            return vec![InputEvent::Quit];
        }
        let mut events = vec![InputEvent::PointerMoved(self.pointer_at(now_secs))];
        if game_over && self.auto_restart {
            events.push(InputEvent::Restart);
        }
        events
    }
}
