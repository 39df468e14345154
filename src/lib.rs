//! Slice Rush - A fruit-slicing arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, trail, spawning, slicing, combos)
//! - `game`: Real-time frame loop driving the simulation
//! - `platform`: Input event sources
//! - `renderer`: Read-only frame view for an external renderer
//! - `persistence`: Best-score storage
//! - `settings`: Runtime configuration

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::BestScore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default viewport
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Projectile sprite size and half extent (collision radius)
    pub const SPRITE_SIZE: f32 = 64.0;
    pub const HALF_EXTENT: f32 = SPRITE_SIZE / 2.0;
    /// Projectiles are removed once they fall this far below the viewport
    pub const OFFSCREEN_MARGIN: f32 = 64.0;
    /// Projectiles spawn this far below the viewport bottom
    pub const SPAWN_DEPTH: f32 = 50.0;
    /// Horizontal inset for spawn x
    pub const SPAWN_INSET: i32 = 100;

    /// Projectile gravity (units/tick²)
    pub const GRAVITY: f32 = 0.3;
    /// Launch velocity ranges (units/tick)
    pub const LAUNCH_VX: (f32, f32) = (-3.0, 3.0);
    pub const LAUNCH_VY: (f32, f32) = (-20.0, -15.0);
    /// Spin range (degrees/tick)
    pub const SPIN_RANGE: (f32, f32) = (-3.0, 3.0);

    /// Spawn cadence
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;
    pub const BURST_CHANCE: f64 = 0.2;
    pub const BURST_MIN: u32 = 4;
    pub const BURST_MAX: u32 = 7;
    pub const HAZARD_CHANCE: f64 = 0.1;

    /// Blade radius around each trail point
    pub const SLICE_RADIUS: f32 = 20.0;
    /// Pointer history length
    pub const TRAIL_CAPACITY: usize = 15;

    /// Fragments thrown off a sliced fruit
    pub const FRAGMENT_SIZE: f32 = 32.0;
    pub const FRAGMENT_SPEED_X: f32 = 5.0;
    pub const FRAGMENT_SPEED_Y: f32 = -5.0;
    pub const FRAGMENT_GRAVITY: f32 = 0.2;
    pub const FRAGMENT_LIFETIME: u32 = 30;

    /// Juice splash
    pub const SPLASH_RADIUS: f32 = 10.0;
    pub const SPLASH_GROWTH: f32 = 2.0;
    pub const SPLASH_LIFETIME: u32 = 15;

    /// Combo rules
    pub const COMBO_WINDOW_MS: f64 = 1000.0;
    pub const COMBO_THRESHOLD: usize = 3;
    pub const COMBO_BONUS: u64 = 10;
    pub const BANNER_LIFETIME_MS: f64 = 1000.0;

    /// Lives at the start of a session
    pub const START_LIVES: u8 = 3;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
